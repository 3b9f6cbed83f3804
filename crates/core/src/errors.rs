//! Error types for improv-prompts
//!
//! Store and configuration failures are raised as `PromptError`. The HTTP
//! layer is the only place these are turned into status codes (see
//! `server::error`).

use thiserror::Error;

/// Result type alias for improv-prompts operations
pub type Result<T> = std::result::Result<T, PromptError>;

/// Main error type for improv-prompts
#[derive(Debug, Error)]
pub enum PromptError {
    /// Category string outside the enumerated set
    #[error("Invalid category: {0}")]
    InvalidCategory(String),

    /// Random selection had nothing to choose from
    #[error("No prompts found for category '{0}'")]
    EmptyCandidateSet(String),

    /// Backing store could not be read or written
    #[error("Store error: {0}")]
    Store(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// Generic error (catch-all)
    #[error("{0}")]
    Other(String),
}

impl From<anyhow::Error> for PromptError {
    fn from(err: anyhow::Error) -> Self {
        PromptError::Other(err.to_string())
    }
}

impl From<String> for PromptError {
    fn from(err: String) -> Self {
        PromptError::Other(err)
    }
}

impl From<&str> for PromptError {
    fn from(err: &str) -> Self {
        PromptError::Other(err.to_string())
    }
}

impl PromptError {
    /// Get error category for logging
    pub fn category(&self) -> &'static str {
        match self {
            PromptError::InvalidCategory(_) => "invalid_category",
            PromptError::EmptyCandidateSet(_) => "empty_candidate_set",
            PromptError::Store(_) => "store",
            PromptError::Config(_) => "config",
            PromptError::Io(_) => "io",
            PromptError::Serde(_) => "serialization",
            PromptError::Other(_) => "other",
        }
    }

    /// Whether the caller can fix this by changing its input
    pub fn is_client_error(&self) -> bool {
        matches!(self, PromptError::InvalidCategory(_))
    }
}
