//! Error types

use thiserror::Error;

/// Failure of a single rule, at construction or evaluation time.
///
/// Neither kind ever aborts a turn: the resolver treats a failing rule as
/// "does not match".
#[derive(Debug, Error)]
pub enum RuleError {
    #[error("invalid pattern for {label}: {source}")]
    InvalidPattern {
        label: String,
        #[source]
        source: regex::Error,
    },

    #[error("rule {label} failed to evaluate: {reason}")]
    Evaluation { label: String, reason: String },
}

/// Crate-wide error type
#[derive(Debug, Error)]
pub enum AssistantError {
    #[error("Rule error: {0}")]
    Rule(#[from] RuleError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, AssistantError>;
