use actix_web::http::StatusCode;
use actix_web::ResponseError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CspError {
    #[error("Invalid state: {0}")]
    InvalidState(String),

    #[error("Invalid directive name: {0}")]
    InvalidDirectiveName(String),

    #[error("Invalid header name: {0}")]
    InvalidHeaderName(String),

    #[error("Header processing error: {0}")]
    HeaderError(String),

    #[error("Config error: {0}")]
    ConfigError(String),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl ResponseError for CspError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidDirectiveName(_) | Self::ConfigError(_) => StatusCode::BAD_REQUEST,

            Self::InvalidState(_)
            | Self::InvalidHeaderName(_)
            | Self::HeaderError(_)
            | Self::SerializationError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_status_codes() {
        assert_eq!(
            CspError::ConfigError("bad".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            CspError::InvalidState("none".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_error_display() {
        let err = CspError::InvalidDirectiveName(String::new());
        assert_eq!(err.to_string(), "Invalid directive name: ");
    }
}
