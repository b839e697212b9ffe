use thiserror::Error;

use super::codes::ErrorKind;
use super::response::FieldErrors;

/// Failure classification returned by handlers and middleware.
///
/// Nothing below the top-level handler writes a response body; it returns one
/// of these and `ErrorResponder::respond` turns it into the single error write.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("edit conflict")]
    EditConflict,

    #[error("failed validation: {0:?}")]
    FailedValidation(FieldErrors),

    #[error("method not allowed")]
    MethodNotAllowed,

    #[error("not found")]
    NotFound,

    #[error("rate limit exceeded")]
    RateLimitExceeded,

    #[error("internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl ApiError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::EditConflict => ErrorKind::EditConflict,
            Self::FailedValidation(_) => ErrorKind::FailedValidation,
            Self::MethodNotAllowed => ErrorKind::MethodNotAllowed,
            Self::NotFound => ErrorKind::NotFound,
            Self::RateLimitExceeded => ErrorKind::RateLimitExceeded,
            Self::Internal(_) => ErrorKind::ServerError,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;

    #[test]
    fn test_kind_mapping() {
        assert_eq!(ApiError::EditConflict.kind(), ErrorKind::EditConflict);
        assert_eq!(
            ApiError::FailedValidation(FieldErrors::new()).kind(),
            ErrorKind::FailedValidation
        );
        assert_eq!(ApiError::MethodNotAllowed.kind(), ErrorKind::MethodNotAllowed);
        assert_eq!(ApiError::NotFound.kind(), ErrorKind::NotFound);
        assert_eq!(ApiError::RateLimitExceeded.kind(), ErrorKind::RateLimitExceeded);
        assert_eq!(ApiError::from(anyhow!("boom")).kind(), ErrorKind::ServerError);
    }
}
