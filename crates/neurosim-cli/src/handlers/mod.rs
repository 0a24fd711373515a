//! Command handlers.

pub mod activate;
pub mod build;
pub mod check_deps;
pub mod paths;
pub mod setup;
pub mod venv;
