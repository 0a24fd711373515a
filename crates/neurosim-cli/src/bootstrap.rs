//! CLI bootstrap - the composition root.
//!
//! Turns parsed arguments into a `SetupConfig` and owns the concrete
//! executor and reporter the handlers run with.

use neurosim_core::{Os, SetupConfig};
use neurosim_runtime::{CommandRunner, OutputMode, SetupSession, StdoutReporter, SystemExecutor};
use tracing::debug;

use crate::error::CliError;
use crate::parser::Cli;

/// Options that shape a run, extracted from the command line.
#[derive(Debug, Clone)]
pub struct CliConfig {
    pub setup: SetupConfig,
    pub dry_run: bool,
    pub output: OutputMode,
}

impl CliConfig {
    /// Layer command-line (and environment) overrides on the defaults.
    pub fn from_cli(cli: &Cli) -> Self {
        let mut setup = SetupConfig::with_defaults();

        if let Some(root) = &cli.root {
            setup.project_root.clone_from(root);
        }
        if let Some(build_dir) = &cli.build_dir {
            setup.build_dir.clone_from(build_dir);
        }
        if let Some(venv_dir) = &cli.venv_dir {
            setup.venv_dir.clone_from(venv_dir);
        }
        if let Some(cmake) = &cli.cmake {
            setup.cmake_program.clone_from(cmake);
        }
        if !cli.packages.is_empty() {
            setup.packages.clone_from(&cli.packages);
        }
        setup.python.clone_from(&cli.python);
        setup.generator.clone_from(&cli.generator);

        Self {
            setup,
            dry_run: cli.dry_run,
            output: if cli.quiet {
                OutputMode::Quiet
            } else {
                OutputMode::Inherit
            },
        }
    }
}

/// Fully composed context for CLI commands.
pub struct CliContext {
    pub config: CliConfig,
    pub os: Os,
    executor: SystemExecutor,
    reporter: StdoutReporter,
}

impl CliContext {
    pub fn setup_config(&self) -> &SetupConfig {
        &self.config.setup
    }

    pub fn reporter(&self) -> &StdoutReporter {
        &self.reporter
    }

    /// A session over the real executor and stdout.
    pub fn session(&self) -> SetupSession<'_> {
        let runner =
            CommandRunner::new(&self.executor, &self.reporter).with_dry_run(self.config.dry_run);
        SetupSession::new(&self.config.setup, self.os, runner)
    }
}

/// Validate the configuration and wire the CLI context from it.
pub fn bootstrap(config: CliConfig) -> Result<CliContext, CliError> {
    config.setup.validate()?;

    let os = Os::detect();
    debug!(%os, config = ?config.setup, dry_run = config.dry_run, "bootstrapped");
    Ok(CliContext {
        executor: SystemExecutor::new(config.output),
        reporter: StdoutReporter,
        config,
        os,
    })
}
