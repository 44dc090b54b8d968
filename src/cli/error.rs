//! CLI-level errors (wraps library errors)

use thiserror::Error;

use crate::errors::PatternError;

/// CLI errors are the top-level error type.
/// These are what get displayed to the user.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Pattern(#[from] PatternError),

    #[error("invalid arguments: {0}")]
    InvalidArgs(String),
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::InvalidArgs(_) => crate::exitcode::USAGE,
            CliError::Pattern(e) => match e {
                PatternError::Config { .. } => crate::exitcode::CONFIG,
                PatternError::InvalidArgument(_) | PatternError::UnknownSystem(_) => {
                    crate::exitcode::DATAERR
                }
                _ => crate::exitcode::SOFTWARE,
            },
        }
    }
}
