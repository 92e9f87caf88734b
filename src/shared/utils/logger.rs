use log::{debug, info, warn, LevelFilter};
use std::sync::Once;

static INIT: Once = Once::new();

/// Initialize the logging system
/// This should be called once at application startup; later calls are ignored
pub fn init_logger(level: LevelFilter) {
    INIT.call_once(|| {
        let result = env_logger::Builder::from_default_env()
            .filter_level(LevelFilter::Warn) // Default level for dependencies
            .filter_module("miru_seasons_lib", level)
            .filter_module("tokio", LevelFilter::Warn) // Reduce tokio noise
            .format_timestamp_secs()
            .format_target(false)
            .format_module_path(false)
            .try_init();

        match result {
            Ok(()) => info!("Logging system initialized at {}", level),
            // Host application already installed its own logger
            Err(e) => debug!("Logger already set, keeping existing one: {}", e),
        }
    });
}

/// Structured logging helpers for common patterns
pub struct LogContext;

impl LogContext {
    /// Log a render pass of the seasons strip
    pub fn render_pass(relations: usize, prequels: usize) {
        debug!(
            "Render: {} season cards ({} prequels first)",
            relations, prequels
        );
    }

    /// Log a navigation request leaving the view
    pub fn navigation(path: &str) {
        info!("Navigate: {}", path);
    }

    /// Log a navigation request that never reached the router
    pub fn navigation_dropped(path: &str, reason: &str) {
        warn!("Navigate: dropped {} ({})", path, reason);
    }

    /// Log errors with context
    pub fn error_with_context(error: &dyn std::error::Error, context: &str) {
        log::error!("{}: {}", context, error);
    }
}
