//! Available subcommands.

use clap::Subcommand;

/// Subcommands of `neurosim-setup`. Omitting the subcommand runs `setup`.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Build the project and provision the Python environment (default)
    Setup,

    /// Configure and build the project with CMake
    Build,

    /// Create the virtual environment and install packages
    Venv,

    /// Print how to activate the virtual environment
    Activate,

    /// Check the external tools setup depends on
    CheckDeps,

    /// Show resolved build and environment paths
    Paths {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
}
