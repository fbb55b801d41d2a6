//! CLI-specific error types and exit codes.

use marquee_core::SearchError;
use thiserror::Error;

/// CLI-specific error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// The search criteria were rejected.
    #[error("Invalid search: {0}")]
    InvalidCriteria(#[from] SearchError),

    /// No movie has the requested id.
    #[error("Movie with ID {0} not found")]
    NotFound(i64),
}

impl CliError {
    /// Map error to appropriate exit code.
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::InvalidCriteria(_) => 2, // EX_USAGE
            Self::NotFound(_) => 1,
        }
    }
}
