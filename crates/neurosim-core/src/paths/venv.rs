//! Virtual environment layout.
//!
//! `python -m venv` lays out executables under `Scripts\` on Windows and
//! `bin/` everywhere else. All lookups take the [`Os`] explicitly.

use std::path::{Path, PathBuf};

use serde::ser::{Serialize, SerializeStruct, Serializer};

use crate::platform::Os;

/// Paths inside a virtual environment for a given platform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VenvLayout {
    root: PathBuf,
    os: Os,
}

impl VenvLayout {
    pub fn new(root: impl Into<PathBuf>, os: Os) -> Self {
        Self {
            root: root.into(),
            os,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub const fn os(&self) -> Os {
        self.os
    }

    /// Directory holding the environment's executables.
    pub fn bin_dir(&self) -> PathBuf {
        if self.os.is_windows() {
            self.root.join("Scripts")
        } else {
            self.root.join("bin")
        }
    }

    /// The package installer inside the environment.
    pub fn pip_executable(&self) -> PathBuf {
        if self.os.is_windows() {
            self.bin_dir().join("pip.exe")
        } else {
            self.bin_dir().join("pip")
        }
    }

    /// The interpreter inside the environment.
    pub fn python_executable(&self) -> PathBuf {
        if self.os.is_windows() {
            self.bin_dir().join("python.exe")
        } else {
            self.bin_dir().join("python")
        }
    }

    /// The activation script: `Activate.ps1` for PowerShell on Windows,
    /// `activate` for sourcing elsewhere.
    pub fn activate_script(&self) -> PathBuf {
        if self.os.is_windows() {
            self.bin_dir().join("Activate.ps1")
        } else {
            self.bin_dir().join("activate")
        }
    }

    /// The two-line instruction printed after provisioning.
    pub fn activation_hint(&self) -> String {
        let script = self.activate_script();
        if self.os.is_windows() {
            format!(
                "To activate the virtual environment, run in PowerShell:\n  {}",
                script.display()
            )
        } else {
            format!(
                "To activate the virtual environment, run:\n  source {}",
                script.display()
            )
        }
    }
}

/// Serialized with the derived executable and script paths, which is what
/// `paths --json` consumers need.
impl Serialize for VenvLayout {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("VenvLayout", 6)?;
        state.serialize_field("root", &self.root)?;
        state.serialize_field("os", &self.os)?;
        state.serialize_field("bin_dir", &self.bin_dir())?;
        state.serialize_field("pip", &self.pip_executable())?;
        state.serialize_field("python", &self.python_executable())?;
        state.serialize_field("activate", &self.activate_script())?;
        state.end()
    }
}
