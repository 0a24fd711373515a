//! Setup configuration.
//!
//! Defaults reproduce the fixed behavior of the setup script; the CLI layers
//! flag and environment overrides on top of [`SetupConfig::with_defaults`].

use std::path::PathBuf;

use serde::Serialize;

use crate::error::{SetupError, SetupResult};
use crate::platform::Os;

/// Build directory, relative to the project root.
pub const DEFAULT_BUILD_DIR: &str = "build";

/// Virtual environment directory, relative to the project root.
pub const DEFAULT_VENV_DIR: &str = "neurosim-venv";

/// CMake executable looked up on `PATH`.
pub const DEFAULT_CMAKE_PROGRAM: &str = "cmake";

/// Generator selected on Windows when none is configured.
pub const WINDOWS_CMAKE_GENERATOR: &str = "Visual Studio 17 2022";

/// Packages installed into the environment, in install order.
pub const DEFAULT_PACKAGES: &[&str] = &["matplotlib", "numpy", "jupyter", "pandas"];

/// Everything a setup run needs to know.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SetupConfig {
    /// Directory containing the top-level `CMakeLists.txt`.
    pub project_root: PathBuf,
    /// Out-of-source build directory.
    pub build_dir: PathBuf,
    /// Virtual environment directory.
    pub venv_dir: PathBuf,
    /// Packages passed to a single `pip install`.
    pub packages: Vec<String>,
    /// CMake executable.
    pub cmake_program: PathBuf,
    /// Explicit `-G` value. `None` means the platform default.
    pub generator: Option<String>,
    /// Interpreter used for `-m venv`. `None` means search `PATH`.
    pub python: Option<PathBuf>,
}

impl SetupConfig {
    /// Create config with the script's fixed defaults.
    pub fn with_defaults() -> Self {
        Self {
            project_root: PathBuf::from("."),
            build_dir: PathBuf::from(DEFAULT_BUILD_DIR),
            venv_dir: PathBuf::from(DEFAULT_VENV_DIR),
            packages: DEFAULT_PACKAGES.iter().copied().map(String::from).collect(),
            cmake_program: PathBuf::from(DEFAULT_CMAKE_PROGRAM),
            generator: None,
            python: None,
        }
    }

    /// Generator to pass with `-G`, if any, for `os`.
    ///
    /// An explicit generator applies on every platform; otherwise only
    /// Windows selects one.
    pub fn generator_for(&self, os: Os) -> Option<&str> {
        match &self.generator {
            Some(generator) => Some(generator.as_str()),
            None if os.is_windows() => Some(WINDOWS_CMAKE_GENERATOR),
            None => None,
        }
    }

    /// Reject values that would make a step misbehave rather than fail.
    pub fn validate(&self) -> SetupResult<()> {
        if self.build_dir.as_os_str().is_empty() {
            return Err(SetupError::Config("build directory must not be empty".into()));
        }
        if self.venv_dir.as_os_str().is_empty() {
            return Err(SetupError::Config(
                "virtual environment directory must not be empty".into(),
            ));
        }
        if self.build_dir == self.venv_dir {
            return Err(SetupError::Config(format!(
                "build and virtual environment directories are both '{}'",
                self.build_dir.display()
            )));
        }
        if self.cmake_program.as_os_str().is_empty() {
            return Err(SetupError::Config("cmake program must not be empty".into()));
        }
        if self.generator.as_deref().is_some_and(|g| g.trim().is_empty()) {
            return Err(SetupError::Config("generator must not be empty".into()));
        }
        if let Some(package) = self.packages.iter().find(|p| p.trim().is_empty()) {
            return Err(SetupError::Config(format!("invalid package name '{package}'")));
        }
        Ok(())
    }
}

impl Default for SetupConfig {
    fn default() -> Self {
        Self::with_defaults()
    }
}
