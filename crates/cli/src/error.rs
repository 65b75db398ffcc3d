//! Error types for CLI operations.

use thiserror::Error;

/// CLI-specific error types
#[derive(Error, Debug)]
pub enum CliError {
    /// File given on the command line does not exist
    #[error("File not found: {path}")]
    NotFound { path: String },

    /// A script step failed and `--keep-going` was not set
    #[error("Step {index} ('{op}') failed: {message}")]
    ScriptStep {
        index: usize,
        op: &'static str,
        message: String,
    },
}

impl CliError {
    pub fn not_found(path: impl Into<String>) -> Self {
        Self::NotFound { path: path.into() }
    }

    pub fn script_step(index: usize, op: &'static str, message: impl Into<String>) -> Self {
        Self::ScriptStep {
            index,
            op,
            message: message.into(),
        }
    }
}

/// Result type alias for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;
