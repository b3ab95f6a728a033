use thiserror::Error;

/// Client-side error taxonomy: validation failures never reach the network,
/// server errors carry the message normalized from the response body, and
/// connection errors carry an operation-specific fallback string.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Server(String),

    #[error("{0}")]
    Connection(String),
}

impl ApiError {
    /// The user-facing message, regardless of kind.
    pub fn message(&self) -> &str {
        match self {
            ApiError::Validation(msg) | ApiError::Server(msg) | ApiError::Connection(msg) => msg,
        }
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
