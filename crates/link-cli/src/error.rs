//! Error types for link-cli

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that can occur in CLI operations
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error(transparent)]
    Scanner(#[from] link_scanner::Error),

    #[error(transparent)]
    Manifest(#[from] link_manifest::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("failed to encode JSON output: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to initialise logging: {0}")]
    Logging(#[from] tracing_subscriber::util::TryInitError),

    /// User-facing error with a message
    #[error("{message}")]
    User { message: String },
}

impl CliError {
    /// Create a new user error with the given message
    pub fn user(message: impl Into<String>) -> Self {
        Self::User {
            message: message.into(),
        }
    }
}
