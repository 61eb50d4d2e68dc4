use thiserror::Error;

/// Unified error type for app-bump operations
#[derive(Error, Debug)]
pub enum BumpError {
    #[error("Usage error: {0}")]
    Usage(String),

    #[error("Manifest error: {0}")]
    Manifest(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in app-bump
pub type Result<T> = std::result::Result<T, BumpError>;

impl BumpError {
    /// Create a usage error with context
    pub fn usage(msg: impl Into<String>) -> Self {
        BumpError::Usage(msg.into())
    }

    /// Create a manifest error with context
    pub fn manifest(msg: impl Into<String>) -> Self {
        BumpError::Manifest(msg.into())
    }
}
