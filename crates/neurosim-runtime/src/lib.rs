//! Process execution and OS-level setup steps for `neurosim-setup`.
//!
//! Implements the ports from `neurosim-core` and the stages of a setup run:
//!
//! - [`process`]: spawning commands and the echo-run-check runner
//! - [`build`]: CMake configure and build
//! - [`venv`]: virtual environment creation and package installation
//! - [`activation`]: activation instructions
//! - [`pipeline`]: the stages in order
//! - [`system`]: dependency probing for `check-deps`

#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

// Only the unix process tests use tempfile
#[cfg(test)]
use tempfile as _;

pub mod activation;
pub mod build;
pub mod pipeline;
pub mod process;
pub mod report;
mod session;
pub mod system;
pub mod venv;

pub use pipeline::{COMPLETION_MESSAGE, SetupReport, run_setup};
pub use process::{CommandRunner, OutputMode, SystemExecutor};
pub use report::{MemoryReporter, Reporter, StdoutReporter};
pub use session::SetupSession;
pub use system::DefaultSystemProbe;
