//! Error types for feedpost

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for feedpost
#[derive(Debug, Error)]
pub enum FeedError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML error: {0}")]
    Toml(String),

    /// Post file could not be found
    #[error("Post not found: {0}")]
    PostNotFound(PathBuf),

    /// Comment not found
    #[error("Comment not found: {0}")]
    CommentNotFound(String),

    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Generic error with context
    #[error("{context}: {source}")]
    WithContext {
        context: String,
        #[source]
        source: Box<FeedError>,
    },
}

impl FeedError {
    /// Add context to an error
    pub fn with_context(self, context: impl Into<String>) -> Self {
        FeedError::WithContext {
            context: context.into(),
            source: Box::new(self),
        }
    }
}

impl From<toml::de::Error> for FeedError {
    fn from(err: toml::de::Error) -> Self {
        FeedError::Toml(err.to_string())
    }
}

impl From<toml::ser::Error> for FeedError {
    fn from(err: toml::ser::Error) -> Self {
        FeedError::Toml(err.to_string())
    }
}

/// Result type alias for feedpost
pub type Result<T> = std::result::Result<T, FeedError>;
