//! External process execution.
//!
//! - [`SystemExecutor`]: spawns real processes (`std::process`)
//! - [`CommandRunner`]: the echo-run-check policy every setup step uses

mod executor;
pub mod progress;
mod runner;

pub use executor::{OutputMode, SystemExecutor};
pub use runner::CommandRunner;
