use crate::shared::errors::{AppError, AppResult};
use std::str::FromStr;

pub const WATCH_ROUTE_PREFIX: &str = "/watch/";

/// Detail route of a single anime, `/watch/{id}`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WatchRoute(pub u32);

impl WatchRoute {
    pub fn new(anime_id: u32) -> Self {
        Self(anime_id)
    }

    pub fn anime_id(&self) -> u32 {
        self.0
    }

    pub fn path(&self) -> String {
        self.to_string()
    }
}

impl std::fmt::Display for WatchRoute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", WATCH_ROUTE_PREFIX, self.0)
    }
}

impl FromStr for WatchRoute {
    type Err = AppError;

    fn from_str(path: &str) -> AppResult<Self> {
        let id = path
            .strip_prefix(WATCH_ROUTE_PREFIX)
            .ok_or_else(|| AppError::InvalidInput(format!("Not a watch route: '{}'", path)))?;

        // u32::from_str would accept a leading '+'
        if id.is_empty() || !id.bytes().all(|b| b.is_ascii_digit()) {
            return Err(AppError::InvalidInput(format!(
                "Watch route has no numeric id: '{}'",
                path
            )));
        }

        Ok(Self(id.parse()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_renders_watch_path() {
        assert_eq!(WatchRoute::new(21).to_string(), "/watch/21");
        assert_eq!(WatchRoute::new(0).path(), "/watch/0");
    }

    #[test]
    fn test_parses_back() {
        let route: WatchRoute = "/watch/20920".parse().unwrap();
        assert_eq!(route.anime_id(), 20920);
    }

    #[test]
    fn test_rejects_other_paths() {
        for path in ["/anime/1", "/watch/", "/watch/+1", "/watch/12/episodes", "watch/1"] {
            let result = path.parse::<WatchRoute>();
            assert!(
                matches!(result, Err(AppError::InvalidInput(_))),
                "{} should be rejected",
                path
            );
        }
    }

    #[test]
    fn test_overflowing_id_is_invalid_input() {
        let result = "/watch/99999999999".parse::<WatchRoute>();
        assert!(matches!(result, Err(AppError::InvalidInput(_))));
    }
}
