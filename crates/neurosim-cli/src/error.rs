//! CLI-specific error types and exit codes.

use neurosim_core::SetupError;
use thiserror::Error;

/// `EX_UNAVAILABLE` from sysexits.h.
const EXIT_UNAVAILABLE: i32 = 69;
/// `EX_IOERR` from sysexits.h.
const EXIT_IO_ERROR: i32 = 74;

/// CLI-specific error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// A setup step failed.
    #[error(transparent)]
    Setup(#[from] SetupError),

    /// `check-deps` found required tools missing.
    #[error("Missing required dependencies: {0}")]
    MissingDependencies(String),

    /// IO error (writing output, reading the working directory).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Anything else.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CliError {
    /// Map error to the process exit code.
    ///
    /// A failed external command exits with that command's own code.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Setup(err) => err.exit_code(),
            Self::MissingDependencies(_) => EXIT_UNAVAILABLE,
            Self::Io(_) => EXIT_IO_ERROR,
            Self::Other(_) => 1,
        }
    }

    /// Whether a diagnostic was already printed when the error happened.
    pub fn already_reported(&self) -> bool {
        matches!(self, Self::Setup(err) if err.already_reported())
    }
}
