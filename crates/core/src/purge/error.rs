use thiserror::Error;

/// Errors that can occur while purging cached pages.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PurgeError {
    /// The store could not be reached (refused, dropped, timed out).
    #[error("Store connection failed: {0}")]
    Connection(String),
    /// The store answered with an error for the command.
    #[error("Store command failed: {0}")]
    Command(String),
    /// Nothing was stored under the key or pattern.
    #[error("Cache not found: {0}")]
    NotFound(String),
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

impl PurgeError {
    /// Short machine-readable name of the error kind.
    pub fn kind(&self) -> &'static str {
        match self {
            PurgeError::Connection(_) => "connection_error",
            PurgeError::Command(_) => "command_error",
            PurgeError::NotFound(_) => "not_found",
            PurgeError::InvalidUrl(_) => "invalid_url",
        }
    }

    /// Returns true for failures of the backend itself, as opposed to
    /// "nothing to purge" or bad input.
    pub fn is_backend(&self) -> bool {
        matches!(self, PurgeError::Connection(_) | PurgeError::Command(_))
    }
}

/// Result type for purge operations.
pub type Result<T> = std::result::Result<T, PurgeError>;
