//! Command-line adapter for `neurosim-setup`.
//!
//! `main.rs` parses arguments, calls [`bootstrap`], and dispatches to
//! [`handlers`]. Failures surface as [`CliError`], whose exit code is the
//! failing external command's own code when there is one.

#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

// Used by the binary in main.rs
use dotenvy as _;
use tracing_subscriber as _;

// Used by the binary tests in tests/
#[cfg(test)]
use tempfile as _;

pub mod bootstrap;
pub mod commands;
pub mod error;
pub mod handlers;
pub mod parser;

pub use bootstrap::{CliConfig, CliContext, bootstrap};
pub use commands::Commands;
pub use error::CliError;
pub use parser::Cli;
