use axum::http::StatusCode;

pub type Result<T> = std::result::Result<T, ApiError>;

/// Everything a request can fail with. Missing markup is not in here: the
/// extractors fall back to empty values instead.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// A required request parameter was absent or empty.
    #[error("{0}")]
    Validation(String),

    /// The upstream site was unreachable or answered with a non-2xx status.
    #[error("{message}")]
    Transport { status: Option<u16>, message: String },

    #[error("{0}")]
    Unexpected(String),
}

impl ApiError {
    pub fn validation(msg: impl Into<String>) -> Self {
        ApiError::Validation(msg.into())
    }

    pub fn transport(status: Option<u16>, msg: impl Into<String>) -> Self {
        ApiError::Transport {
            status,
            message: msg.into(),
        }
    }

    /// HTTP status the router answers with for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Transport { .. } | ApiError::Unexpected(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Validation failures are the caller's problem and are not logged.
    pub fn is_loggable(&self) -> bool {
        !matches!(self, ApiError::Validation(_))
    }
}

/* Conversions so `?` works smoothly */
impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        ApiError::Unexpected(e.to_string())
    }
}
impl From<url::ParseError> for ApiError {
    fn from(e: url::ParseError) -> Self {
        ApiError::Unexpected(format!("invalid url: {e}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_maps_to_bad_request() {
        let err = ApiError::validation("Query parameter required");
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.to_string(), "Query parameter required");
        assert!(!err.is_loggable());
    }

    #[test]
    fn transport_maps_to_server_error() {
        let err = ApiError::transport(Some(503), "upstream responded with status 503");
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.to_string(), "upstream responded with status 503");
        assert!(err.is_loggable());
    }
}
