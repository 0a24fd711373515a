//! Shared state for the steps of one setup run.

use neurosim_core::{Os, ProjectPaths, SetupConfig};

use crate::process::CommandRunner;
use crate::report::Reporter;

/// Everything a setup step needs: configuration, detected platform,
/// resolved paths and the command runner.
pub struct SetupSession<'a> {
    pub config: &'a SetupConfig,
    pub os: Os,
    pub paths: ProjectPaths,
    pub runner: CommandRunner<'a>,
}

impl<'a> SetupSession<'a> {
    pub fn new(config: &'a SetupConfig, os: Os, runner: CommandRunner<'a>) -> Self {
        Self {
            config,
            os,
            paths: ProjectPaths::resolve(config, os),
            runner,
        }
    }

    pub fn reporter(&self) -> &'a dyn Reporter {
        self.runner.reporter()
    }

    /// Print a status line.
    pub fn say(&self, msg: &str) {
        self.reporter().message(msg);
    }
}
