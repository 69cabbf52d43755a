use thiserror::Error;

/// Application-level errors
#[derive(Error, Debug)]
pub enum AppError {
    #[error("API error: {0}")]
    Api(#[from] ApiError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors from the remote HTTP endpoints
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Request failed: {0}")]
    Request(String),

    #[error("Unexpected status code: {0}")]
    Status(u16),

    #[error("Rate limit exceeded - set GITHUB_TOKEN for higher limits")]
    RateLimited,

    #[error("Failed to decode response: {0}")]
    Decode(String),

    #[error("Operation cancelled")]
    Cancelled,
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            ApiError::Decode(e.to_string())
        } else if let Some(status) = e.status() {
            ApiError::Status(status.as_u16())
        } else {
            ApiError::Request(e.to_string())
        }
    }
}

/// Result type alias for app operations
pub type AppResult<T> = Result<T, AppError>;
