//! System probe port for dependency detection.
//!
//! Core owns the trait and types; `neurosim-runtime` owns the
//! implementation that actually runs `--version` commands.

use crate::system::Dependency;

/// Port for probing the external tools a setup run needs.
pub trait SystemProbePort: Send + Sync {
    /// Check all dependencies and return their status.
    fn check_all_dependencies(&self) -> Vec<Dependency>;
}
