//! Port definitions (trait abstractions) for external systems.
//!
//! Ports contain no process or terminal implementation details and use
//! only domain types.

pub mod process_executor;
pub mod system_probe;

pub use process_executor::{
    CommandError, CommandOutcome, ProcessExecutor, SIGNAL_EXIT_BASE, SIGNALED_EXIT_CODE,
};
pub use system_probe::SystemProbePort;
