//! Core domain types and port definitions for `neurosim-setup`.
//!
//! This crate is pure: it describes commands, paths and configuration, and
//! defines the ports ([`ports::ProcessExecutor`], [`ports::SystemProbePort`])
//! that `neurosim-runtime` implements. Nothing here spawns a process.

#![deny(unused_crate_dependencies)]

pub mod command;
pub mod config;
pub mod error;
pub mod paths;
pub mod platform;
pub mod ports;
pub mod system;

pub use command::{CommandLine, ExternalCommand};
pub use config::{
    DEFAULT_BUILD_DIR, DEFAULT_CMAKE_PROGRAM, DEFAULT_PACKAGES, DEFAULT_VENV_DIR, SetupConfig,
    WINDOWS_CMAKE_GENERATOR,
};
pub use error::{SetupError, SetupResult};
pub use paths::{DirectoryState, PathError, ProjectPaths, VenvLayout, ensure_directory};
pub use platform::Os;
pub use ports::{CommandError, CommandOutcome, ProcessExecutor, SystemProbePort};
pub use system::{Dependency, DependencyStatus};
