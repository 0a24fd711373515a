//! Process executor port.
//!
//! Core describes commands; adapters (e.g. `neurosim-runtime`) spawn them.
//! Keeping the seam here lets the build and provisioning steps be tested
//! with executors that only record what they were asked to run.

use thiserror::Error;

use crate::command::ExternalCommand;

/// Exit code reported for a child that ended without one and without a
/// known signal number.
pub const SIGNALED_EXIT_CODE: i32 = 1;

/// Offset added to a terminating signal number, as shells report it.
pub const SIGNAL_EXIT_BASE: i32 = 128;

/// Result of running a command to completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandOutcome {
    /// Exit code, or `None` when the child was terminated by a signal.
    pub code: Option<i32>,
    /// Terminating signal, when the platform reports one.
    pub signal: Option<i32>,
}

impl CommandOutcome {
    pub const fn success() -> Self {
        Self::exited(0)
    }

    pub const fn exited(code: i32) -> Self {
        Self {
            code: Some(code),
            signal: None,
        }
    }

    pub const fn signaled(signal: Option<i32>) -> Self {
        Self { code: None, signal }
    }

    pub const fn is_success(self) -> bool {
        matches!(self.code, Some(0))
    }

    /// Exit code to propagate to our own caller: the child's code, or
    /// `128 + signal` for a child killed by a signal.
    pub const fn exit_code(self) -> i32 {
        match (self.code, self.signal) {
            (Some(code), _) => code,
            (None, Some(signal)) => SIGNAL_EXIT_BASE + signal,
            (None, None) => SIGNALED_EXIT_CODE,
        }
    }
}

/// Errors raised before a command could produce an exit status.
#[derive(Debug, Error)]
pub enum CommandError {
    /// The program could not be started (missing, not executable, bad cwd).
    #[error("Failed to run `{command}`: {reason}")]
    Spawn { command: String, reason: String },

    /// The program started but waiting on it failed.
    #[error("Failed to wait for `{command}`: {reason}")]
    Wait { command: String, reason: String },
}

/// Port for executing external commands synchronously.
pub trait ProcessExecutor: Send + Sync {
    /// Run `command` to completion and report how it exited.
    fn execute(&self, command: &ExternalCommand) -> Result<CommandOutcome, CommandError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    mockall::mock! {
        Executor {}
        impl ProcessExecutor for Executor {
            fn execute(&self, command: &ExternalCommand) -> Result<CommandOutcome, CommandError>;
        }
    }

    #[test]
    fn test_outcome_exit_codes() {
        assert!(CommandOutcome::success().is_success());
        assert!(!CommandOutcome::exited(2).is_success());
        assert_eq!(CommandOutcome::exited(2).exit_code(), 2);
        assert_eq!(CommandOutcome::signaled(None).exit_code(), SIGNALED_EXIT_CODE);
        assert!(!CommandOutcome::signaled(None).is_success());
    }

    #[test]
    fn test_signal_maps_to_shell_convention() {
        // SIGKILL
        assert_eq!(CommandOutcome::signaled(Some(9)).exit_code(), 137);
        assert_eq!(CommandOutcome::signaled(Some(15)).exit_code(), 143);
    }

    #[test]
    fn test_executor_is_object_safe() {
        let mut mock = MockExecutor::new();
        mock.expect_execute()
            .withf(|cmd| cmd.echo() == "cmake --build .")
            .times(1)
            .returning(|_| Ok(CommandOutcome::exited(4)));

        let executor: &dyn ProcessExecutor = &mock;
        let outcome = executor
            .execute(&ExternalCommand::new("cmake").args(["--build", "."]))
            .unwrap();
        assert_eq!(outcome.exit_code(), 4);
    }
}
