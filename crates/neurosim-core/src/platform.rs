//! Host platform detection.
//!
//! Detection is compile-time (`cfg!`), so every function here is pure and
//! the OS-dependent decisions elsewhere take an [`Os`] value instead of
//! probing the host themselves. Tests pass explicit values to cover the
//! platforms they are not running on.

use std::fmt;

use serde::Serialize;

/// Operating system detection result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Os {
    Windows,
    MacOS,
    Linux,
    /// Any other target, carrying `std::env::consts::OS`.
    Other(&'static str),
}

impl Os {
    /// Detect the operating system this binary was compiled for.
    pub fn detect() -> Self {
        if cfg!(target_os = "windows") {
            Self::Windows
        } else if cfg!(target_os = "macos") {
            Self::MacOS
        } else if cfg!(target_os = "linux") {
            Self::Linux
        } else {
            Self::Other(std::env::consts::OS)
        }
    }

    /// Whether this is the Windows family, which uses `Scripts\` venv layout
    /// and the Visual Studio generator.
    pub const fn is_windows(self) -> bool {
        matches!(self, Self::Windows)
    }

    /// Platform name as reported by the host identification facility
    /// (`Windows`, `Darwin`, `Linux`).
    pub const fn system_name(self) -> &'static str {
        match self {
            Self::Windows => "Windows",
            Self::MacOS => "Darwin",
            Self::Linux => "Linux",
            Self::Other(name) => name,
        }
    }
}

impl fmt::Display for Os {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.system_name())
    }
}
