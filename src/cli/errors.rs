//! CLI-specific error types
//!
//! All CLI errors are fatal: main prints them and exits non-zero.

use thiserror::Error;

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;

/// CLI error
#[derive(Debug, Error)]
pub enum CliError {
    /// Server failed to boot or exited with an error
    #[error("Boot failed: {0}")]
    BootFailed(String),
}

impl CliError {
    /// Boot failure
    pub fn boot_failed(msg: impl Into<String>) -> Self {
        CliError::BootFailed(msg.into())
    }
}
