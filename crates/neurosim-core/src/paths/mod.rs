//! Filesystem paths used by a setup run.
//!
//! - [`ensure_directory`]: idempotent directory creation
//! - [`VenvLayout`]: platform-specific locations inside a virtual environment
//! - [`ProjectPaths`]: the resolved build and venv directories for one run

mod ensure;
mod error;
mod venv;

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::config::SetupConfig;
use crate::platform::Os;

pub use ensure::{DirectoryState, ensure_directory};
pub use error::PathError;
pub use venv::VenvLayout;

/// Directories a setup run touches, resolved against the project root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectPaths {
    pub project_root: PathBuf,
    pub build_dir: PathBuf,
    pub venv: VenvLayout,
}

impl ProjectPaths {
    /// Resolve the configured directories for `os`.
    ///
    /// Relative build/venv directories are joined onto the project root;
    /// absolute ones are used as given.
    pub fn resolve(config: &SetupConfig, os: Os) -> Self {
        let root = &config.project_root;
        Self {
            project_root: root.clone(),
            build_dir: join_relative(root, &config.build_dir),
            venv: VenvLayout::new(join_relative(root, &config.venv_dir), os),
        }
    }
}

impl fmt::Display for ProjectPaths {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "project_root = {}", self.project_root.display())?;
        writeln!(f, "build_dir = {}", self.build_dir.display())?;
        writeln!(f, "venv_dir = {}", self.venv.root().display())?;
        writeln!(f, "pip = {}", self.venv.pip_executable().display())?;
        write!(f, "activate = {}", self.venv.activate_script().display())
    }
}

fn join_relative(root: &Path, path: &Path) -> PathBuf {
    if root.as_os_str().is_empty() || root == Path::new(".") || path.is_absolute() {
        path.to_path_buf()
    } else {
        root.join(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_resolve_relative_to_cwd() {
        let paths = ProjectPaths::resolve(&SetupConfig::with_defaults(), Os::Linux);
        assert_eq!(paths.build_dir, PathBuf::from("build"));
        assert_eq!(paths.venv.root(), Path::new("neurosim-venv"));
    }

    #[test]
    fn custom_root_is_joined() {
        let config = SetupConfig {
            project_root: PathBuf::from("/work/neurosim"),
            ..SetupConfig::with_defaults()
        };
        let paths = ProjectPaths::resolve(&config, Os::Linux);
        assert_eq!(paths.build_dir, PathBuf::from("/work/neurosim/build"));
        assert_eq!(
            paths.venv.root(),
            Path::new("/work/neurosim/neurosim-venv")
        );
    }

    #[test]
    fn display_lists_every_path() {
        let paths = ProjectPaths::resolve(&SetupConfig::with_defaults(), Os::Linux);
        let text = paths.to_string();
        for key in ["project_root", "build_dir", "venv_dir", "pip", "activate"] {
            assert!(text.contains(&format!("{key} = ")), "missing {key}");
        }
    }

    #[test]
    #[cfg(unix)]
    fn json_includes_pip_and_activate() {
        let paths = ProjectPaths::resolve(&SetupConfig::with_defaults(), Os::Linux);
        let json = serde_json::to_value(&paths).unwrap();
        assert_eq!(json["build_dir"], "build");
        assert_eq!(json["venv"]["pip"], "neurosim-venv/bin/pip");
        assert_eq!(json["venv"]["activate"], "neurosim-venv/bin/activate");
    }
}
