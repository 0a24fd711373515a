//! Main CLI parser and global options.

use std::path::PathBuf;

use clap::Parser;

use crate::commands::Commands;

/// Build the NeuroSim simulator and provision its Python environment.
///
/// Running without a subcommand performs the full setup: CMake configure and
/// build, virtual environment creation, package installation, and the
/// activation hint.
#[derive(Parser, Debug)]
#[command(name = "neurosim-setup")]
#[command(about = "Build NeuroSim and set up its Python environment")]
#[command(version)]
pub struct Cli {
    /// Project root containing CMakeLists.txt
    #[arg(long, global = true, env = "NEUROSIM_ROOT", value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Build directory, relative to the project root
    #[arg(long, global = true, env = "NEUROSIM_BUILD_DIR", value_name = "DIR")]
    pub build_dir: Option<PathBuf>,

    /// Virtual environment directory, relative to the project root
    #[arg(long, global = true, env = "NEUROSIM_VENV_DIR", value_name = "DIR")]
    pub venv_dir: Option<PathBuf>,

    /// Python interpreter used to create the environment
    #[arg(long, global = true, env = "NEUROSIM_PYTHON", value_name = "PATH")]
    pub python: Option<PathBuf>,

    /// CMake executable
    #[arg(long, global = true, env = "NEUROSIM_CMAKE", value_name = "PATH")]
    pub cmake: Option<PathBuf>,

    /// CMake generator (defaults to Visual Studio 17 2022 on Windows only)
    #[arg(long, global = true, env = "NEUROSIM_CMAKE_GENERATOR", value_name = "NAME")]
    pub generator: Option<String>,

    /// Package to install (repeatable; replaces the default list)
    #[arg(long = "package", global = true, value_name = "NAME")]
    pub packages: Vec<String>,

    /// Print commands without running them
    #[arg(long, global = true)]
    pub dry_run: bool,

    /// Hide tool output behind a progress indicator
    #[arg(short = 'q', long, global = true)]
    pub quiet: bool,

    /// Enable verbose/debug output
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
