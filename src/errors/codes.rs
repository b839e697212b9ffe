use serde::{Deserialize, Serialize};
use std::fmt;

/// Classification of every error the API can answer with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorKind {
    /// Concurrent update lost the race
    #[serde(rename = "EDIT_CONFLICT")]
    EditConflict,

    /// Input validation failed
    #[serde(rename = "FAILED_VALIDATION")]
    FailedValidation,

    /// Route exists but not for this HTTP method
    #[serde(rename = "METHOD_NOT_ALLOWED")]
    MethodNotAllowed,

    /// Route or record not found
    #[serde(rename = "NOT_FOUND")]
    NotFound,

    /// Too many requests / rate limit exceeded
    #[serde(rename = "RATE_LIMIT_EXCEEDED")]
    RateLimitExceeded,

    /// Internal server error
    #[serde(rename = "SERVER_ERROR")]
    ServerError,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EditConflict => write!(f, "EDIT_CONFLICT"),
            Self::FailedValidation => write!(f, "FAILED_VALIDATION"),
            Self::MethodNotAllowed => write!(f, "METHOD_NOT_ALLOWED"),
            Self::NotFound => write!(f, "NOT_FOUND"),
            Self::RateLimitExceeded => write!(f, "RATE_LIMIT_EXCEEDED"),
            Self::ServerError => write!(f, "SERVER_ERROR"),
        }
    }
}

impl ErrorKind {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> u16 {
        match self {
            Self::EditConflict => 409,
            Self::FailedValidation => 422,
            Self::MethodNotAllowed => 405,
            Self::NotFound => 404,
            Self::RateLimitExceeded => 429,
            Self::ServerError => 500,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(ErrorKind::EditConflict.status_code(), 409);
        assert_eq!(ErrorKind::FailedValidation.status_code(), 422);
        assert_eq!(ErrorKind::MethodNotAllowed.status_code(), 405);
        assert_eq!(ErrorKind::NotFound.status_code(), 404);
        assert_eq!(ErrorKind::RateLimitExceeded.status_code(), 429);
        assert_eq!(ErrorKind::ServerError.status_code(), 500);
    }

    #[test]
    fn test_display_matches_serde_name() {
        let json = serde_json::to_string(&ErrorKind::RateLimitExceeded).unwrap();
        assert_eq!(json, format!("\"{}\"", ErrorKind::RateLimitExceeded));
    }
}
