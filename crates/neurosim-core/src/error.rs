//! Top-level error type for a setup run.

use thiserror::Error;

use crate::paths::PathError;
use crate::ports::CommandError;

/// Exit code for a program that could not be started or located.
pub const EXIT_NOT_FOUND: i32 = 127;
/// `EX_OSERR` from sysexits.h.
pub const EXIT_OS_ERROR: i32 = 71;
/// `EX_IOERR` from sysexits.h.
pub const EXIT_IO_ERROR: i32 = 74;
/// `EX_CONFIG` from sysexits.h.
pub const EXIT_CONFIG_ERROR: i32 = 78;

/// Errors that stop a setup run.
#[derive(Debug, Error)]
pub enum SetupError {
    /// An external command exited with a nonzero status.
    #[error("Command failed with exit code {code}: {command}")]
    CommandFailed { command: String, code: i32 },

    /// An external command could not be run at all.
    #[error(transparent)]
    Command(#[from] CommandError),

    /// No interpreter was available to create the virtual environment.
    #[error("Python interpreter not found in PATH (tried: {0})")]
    PythonNotFound(String),

    /// Directory preparation failed.
    #[error(transparent)]
    Path(#[from] PathError),

    /// Invalid configuration.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl SetupError {
    /// Exit code the process should terminate with.
    ///
    /// A failed command propagates its own code unchanged.
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::CommandFailed { code, .. } => *code,
            Self::Command(CommandError::Spawn { .. }) | Self::PythonNotFound(_) => EXIT_NOT_FOUND,
            Self::Command(CommandError::Wait { .. }) => EXIT_OS_ERROR,
            Self::Path(_) => EXIT_IO_ERROR,
            Self::Config(_) => EXIT_CONFIG_ERROR,
        }
    }

    /// Whether the diagnostic has already been printed by the command runner.
    pub const fn already_reported(&self) -> bool {
        matches!(self, Self::CommandFailed { .. })
    }
}

/// Result type alias for setup operations.
pub type SetupResult<T> = Result<T, SetupError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_command_failed_keeps_child_code() {
        let err = SetupError::CommandFailed {
            command: "cmake ..".to_string(),
            code: 3,
        };
        assert_eq!(err.exit_code(), 3);
        assert!(err.already_reported());
        assert_eq!(err.to_string(), "Command failed with exit code 3: cmake ..");
    }

    #[test]
    fn test_other_errors_use_fixed_codes() {
        let spawn = SetupError::from(CommandError::Spawn {
            command: "cmake ..".to_string(),
            reason: "No such file or directory".to_string(),
        });
        assert_eq!(spawn.exit_code(), EXIT_NOT_FOUND);
        assert!(!spawn.already_reported());

        let path = SetupError::from(PathError::NotADirectory(PathBuf::from("build")));
        assert_eq!(path.exit_code(), EXIT_IO_ERROR);

        let python = SetupError::PythonNotFound("python3, python".to_string());
        assert_eq!(python.exit_code(), EXIT_NOT_FOUND);
        assert!(python.to_string().contains("python3, python"));
    }
}
