use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug, Serialize)]
#[serde(tag = "type", content = "message")]
pub enum AppError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Configuration error: {0}")]
    ConfigurationError(String),
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::SerializationError(err.to_string())
    }
}

impl From<std::num::ParseIntError> for AppError {
    fn from(err: std::num::ParseIntError) -> Self {
        AppError::InvalidInput(format!("Invalid number: {}", err))
    }
}

// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_as_tagged_message() {
        let err = AppError::ConfigurationError("bad label style".to_string());
        let json = serde_json::to_value(&err).unwrap();

        assert_eq!(json["type"], "ConfigurationError");
        assert_eq!(json["message"], "bad label style");
    }

    #[test]
    fn test_parse_int_maps_to_invalid_input() {
        let err: AppError = "abc".parse::<u32>().unwrap_err().into();
        assert!(matches!(err, AppError::InvalidInput(_)));
        assert!(err.to_string().starts_with("Invalid input: Invalid number"));
    }
}
