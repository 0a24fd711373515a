//! Echo-run-check wrapper around a [`ProcessExecutor`].

use neurosim_core::{ExternalCommand, ProcessExecutor, SetupError, SetupResult};
use tracing::{debug, warn};

use crate::report::Reporter;

/// Runs must-succeed commands.
///
/// Every command is echoed as `> <command>` before it runs. A nonzero exit
/// is reported as `Command failed with exit code <code>: <command>` and
/// returned as [`SetupError::CommandFailed`] carrying the child's code, so
/// nothing after it runs. There are no retries.
pub struct CommandRunner<'a> {
    executor: &'a dyn ProcessExecutor,
    reporter: &'a dyn Reporter,
    dry_run: bool,
}

impl<'a> CommandRunner<'a> {
    pub fn new(executor: &'a dyn ProcessExecutor, reporter: &'a dyn Reporter) -> Self {
        Self {
            executor,
            reporter,
            dry_run: false,
        }
    }

    /// Echo commands without executing them.
    #[must_use]
    pub const fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub const fn is_dry_run(&self) -> bool {
        self.dry_run
    }

    pub fn reporter(&self) -> &'a dyn Reporter {
        self.reporter
    }

    /// Echo, execute and wait for `command`; fail on a nonzero exit code.
    pub fn run(&self, command: &ExternalCommand) -> SetupResult<()> {
        let echo = command.echo();
        self.reporter.message(&format!("> {echo}"));

        if self.dry_run {
            warn!(command = %echo, "dry run: not executing");
            return Ok(());
        }

        debug!(command = %echo, cwd = ?command.working_dir(), shell = command.is_shell(), "spawning");
        let outcome = self.executor.execute(command)?;
        debug!(command = %echo, code = ?outcome.code, signal = ?outcome.signal, "command finished");

        if outcome.is_success() {
            return Ok(());
        }

        let code = outcome.exit_code();
        self.reporter
            .message(&format!("Command failed with exit code {code}: {echo}"));
        Err(SetupError::CommandFailed {
            command: echo,
            code,
        })
    }
}
