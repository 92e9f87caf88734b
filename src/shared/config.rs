//! Environment-driven configuration
//!
//! Values come from the process environment; `init()` loads a `.env` file first
//! so local overrides work the same way as the rest of the app.

use crate::modules::season::application::RelationLabelStyle;
use crate::shared::errors::{AppError, AppResult};
use log::LevelFilter;
use std::env;

pub const LOG_LEVEL_VAR: &str = "MIRU_SEASONS_LOG_LEVEL";
pub const RELATION_LABEL_VAR: &str = "MIRU_SEASONS_RELATION_LABEL";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeasonsConfig {
    /// Log level for this crate's modules
    pub log_level: LevelFilter,

    /// How the relation type is printed on each card
    pub label_style: RelationLabelStyle,
}

impl Default for SeasonsConfig {
    fn default() -> Self {
        Self {
            log_level: LevelFilter::Info,
            label_style: RelationLabelStyle::Tag,
        }
    }
}

impl SeasonsConfig {
    /// Read configuration from the environment, falling back to defaults for unset keys
    pub fn from_env() -> AppResult<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup(LOG_LEVEL_VAR) {
            config.log_level = raw.trim().parse::<LevelFilter>().map_err(|_| {
                AppError::ConfigurationError(format!(
                    "{} must be one of off, error, warn, info, debug, trace (got '{}')",
                    LOG_LEVEL_VAR, raw
                ))
            })?;
        }

        if let Some(raw) = lookup(RELATION_LABEL_VAR) {
            config.label_style = match raw.trim().to_lowercase().as_str() {
                "tag" => RelationLabelStyle::Tag,
                "display" => RelationLabelStyle::Display,
                _ => {
                    return Err(AppError::ConfigurationError(format!(
                        "{} must be 'tag' or 'display' (got '{}')",
                        RELATION_LABEL_VAR, raw
                    )))
                }
            };
        }

        Ok(config)
    }
}
