//! Python virtual environment provisioning.
//!
//! Creates the environment with `<python> -m venv` when its directory is
//! absent, then upgrades pip and installs the package list with the pip
//! that lives inside the environment.

use std::path::PathBuf;

use neurosim_core::{
    DirectoryState, ExternalCommand, PathError, SetupConfig, SetupError, SetupResult, VenvLayout,
};
use tracing::{debug, info, warn};

use crate::session::SetupSession;

#[cfg(target_os = "windows")]
pub const PYTHON_CANDIDATES: &[&str] = &["python"];

#[cfg(not(target_os = "windows"))]
pub const PYTHON_CANDIDATES: &[&str] = &["python3", "python"];

/// Run the environment stage: create if needed, then install packages.
pub fn provision_environment(session: &SetupSession<'_>) -> SetupResult<DirectoryState> {
    let layout = &session.paths.venv;
    info!(venv = %layout.root().display(), "environment stage");

    let state = ensure_venv(session, layout)?;
    install_packages(session, layout, &session.config.packages)?;
    Ok(state)
}

/// Create the environment unless its directory already exists.
pub fn ensure_venv(session: &SetupSession<'_>, layout: &VenvLayout) -> SetupResult<DirectoryState> {
    let root = layout.root();

    if root.exists() {
        if !root.is_dir() {
            return Err(PathError::NotADirectory(root.to_path_buf()).into());
        }
        session.say(&format!(
            "Virtual environment already exists at {}.",
            root.display()
        ));
        return Ok(DirectoryState::AlreadyExisted);
    }

    session.say(&format!(
        "Creating virtual environment at {}...",
        root.display()
    ));
    let python = resolve_python(session.config, session.runner.is_dry_run(), which_lookup)?;
    debug!(python = %python.display(), "bootstrap interpreter");
    session.runner.run(&create_venv_command(&python, layout))?;
    Ok(DirectoryState::Created)
}

/// Upgrade pip, then install every package with a single `pip install`.
pub fn install_packages(
    session: &SetupSession<'_>,
    layout: &VenvLayout,
    packages: &[String],
) -> SetupResult<()> {
    session.say("Installing Python packages...");

    session.runner.run(&pip_upgrade_command(layout))?;

    if packages.is_empty() {
        session.say("No packages to install.");
        return Ok(());
    }
    session.runner.run(&pip_install_command(layout, packages))
}

/// Interpreter used to create the environment: the configured one, or the
/// first candidate found on `PATH`.
pub fn find_bootstrap_python(config: &SetupConfig) -> SetupResult<PathBuf> {
    resolve_python(config, false, which_lookup)
}

fn which_lookup(candidate: &str) -> Option<PathBuf> {
    which::which(candidate).ok()
}

/// A dry run never executes the interpreter, so a missing one falls back
/// to the first candidate name for the echo.
fn resolve_python(
    config: &SetupConfig,
    dry_run: bool,
    lookup: impl Fn(&str) -> Option<PathBuf>,
) -> SetupResult<PathBuf> {
    if let Some(python) = &config.python {
        return Ok(python.clone());
    }

    if let Some(found) = PYTHON_CANDIDATES.iter().find_map(|candidate| lookup(candidate)) {
        return Ok(found);
    }

    match PYTHON_CANDIDATES.first() {
        Some(first) if dry_run => {
            warn!(python = *first, "dry run: no interpreter on PATH");
            Ok(PathBuf::from(*first))
        }
        _ => Err(SetupError::PythonNotFound(PYTHON_CANDIDATES.join(", "))),
    }
}

pub fn create_venv_command(python: &std::path::Path, layout: &VenvLayout) -> ExternalCommand {
    ExternalCommand::new(python.as_os_str())
        .args(["-m", "venv"])
        .arg(layout.root().as_os_str())
}

pub fn pip_upgrade_command(layout: &VenvLayout) -> ExternalCommand {
    ExternalCommand::new(layout.pip_executable()).args(["install", "--upgrade", "pip"])
}

pub fn pip_install_command(layout: &VenvLayout, packages: &[String]) -> ExternalCommand {
    ExternalCommand::new(layout.pip_executable())
        .arg("install")
        .args(packages)
}

#[cfg(test)]
mod tests {
    use super::*;
    use neurosim_core::Os;
    use std::path::Path;

    #[test]
    #[cfg(unix)]
    fn pip_commands_use_the_environment_pip() {
        let layout = VenvLayout::new("neurosim-venv", Os::Linux);
        assert_eq!(
            pip_upgrade_command(&layout).echo(),
            "neurosim-venv/bin/pip install --upgrade pip"
        );

        let packages: Vec<String> = ["matplotlib", "numpy", "jupyter", "pandas"]
            .into_iter()
            .map(String::from)
            .collect();
        assert_eq!(
            pip_install_command(&layout, &packages).echo(),
            "neurosim-venv/bin/pip install matplotlib numpy jupyter pandas"
        );
    }

    #[test]
    fn windows_pip_is_scripts_exe() {
        let layout = VenvLayout::new("neurosim-venv", Os::Windows);
        let argv = pip_upgrade_command(&layout).argv_lossy();
        assert_eq!(
            Path::new(&argv[0]),
            Path::new("neurosim-venv").join("Scripts").join("pip.exe")
        );
    }

    #[test]
    #[cfg(unix)]
    fn venv_creation_uses_module_invocation() {
        let layout = VenvLayout::new("neurosim-venv", Os::Linux);
        let cmd = create_venv_command(Path::new("/usr/bin/python3"), &layout);
        assert_eq!(cmd.echo(), "/usr/bin/python3 -m venv neurosim-venv");
        assert_eq!(cmd.working_dir(), None);
    }

    #[test]
    fn configured_python_skips_path_search() {
        let config = SetupConfig {
            python: Some(PathBuf::from("/opt/python/bin/python3.12")),
            ..SetupConfig::with_defaults()
        };
        assert_eq!(
            find_bootstrap_python(&config).unwrap(),
            PathBuf::from("/opt/python/bin/python3.12")
        );
    }

    #[test]
    fn missing_python_is_an_error_outside_dry_run() {
        let err = resolve_python(&SetupConfig::with_defaults(), false, |_| None).unwrap_err();
        assert!(matches!(err, SetupError::PythonNotFound(_)));
    }

    #[test]
    fn dry_run_falls_back_to_first_candidate() {
        let python = resolve_python(&SetupConfig::with_defaults(), true, |_| None).unwrap();
        assert_eq!(python, PathBuf::from(PYTHON_CANDIDATES[0]));
    }

    #[test]
    fn path_lookup_follows_candidate_order() {
        let python = resolve_python(&SetupConfig::with_defaults(), false, |candidate| {
            (candidate == "python").then(|| PathBuf::from("/usr/bin/python"))
        })
        .unwrap();
        assert_eq!(python, PathBuf::from("/usr/bin/python"));
    }
}
