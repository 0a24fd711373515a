//! The full setup sequence.
//!
//! Build, then environment, then activation hint. The first failing step
//! ends the run; its error carries the exit code to terminate with.

use neurosim_core::{DirectoryState, SetupResult};
use tracing::info;

use crate::activation::print_activation_hint;
use crate::build::build_project;
use crate::session::SetupSession;
use crate::venv::provision_environment;

/// Printed after everything succeeded.
pub const COMPLETION_MESSAGE: &str = "Build and setup complete! You can now run your project.";

/// What a completed run did to the filesystem.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SetupReport {
    pub build_dir: DirectoryState,
    pub venv_dir: DirectoryState,
}

/// Print the detected platform.
pub fn announce_platform(session: &SetupSession<'_>) {
    session.say(&format!("Detected OS: {}", session.os));
}

/// Run every stage in order.
pub fn run_setup(session: &SetupSession<'_>) -> SetupResult<SetupReport> {
    announce_platform(session);

    let build_dir = build_project(session)?;
    let venv_dir = provision_environment(session)?;
    print_activation_hint(session.reporter(), &session.paths.venv);

    session.say(&format!("\n{COMPLETION_MESSAGE}"));
    info!(?build_dir, ?venv_dir, "setup complete");

    Ok(SetupReport {
        build_dir,
        venv_dir,
    })
}
