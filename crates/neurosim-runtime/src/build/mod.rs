//! CMake configure and build of the project.
//!
//! Both steps run with the build directory as the child's working
//! directory. The process working directory is never changed, so it is
//! the same after the build whether the steps succeed or fail.

use std::path::{Component, Path, PathBuf};

use neurosim_core::{
    DirectoryState, ExternalCommand, Os, PathError, SetupConfig, SetupResult, ensure_directory,
};
use tracing::info;

use crate::session::SetupSession;

/// Run the build stage: prepare the build directory, configure, build.
pub fn build_project(session: &SetupSession<'_>) -> SetupResult<DirectoryState> {
    info!(build_dir = %session.paths.build_dir.display(), "build stage");

    let state = prepare_build_dir(session)?;

    let configure = configure_command(session.config, &session.paths.build_dir, session.os)?;
    let build = build_command(session.config, &session.paths.build_dir);

    session.say("Configuring project with CMake...");
    session.runner.run(&configure)?;

    session.say("Building project with CMake...");
    session.runner.run(&build)?;

    Ok(state)
}

fn prepare_build_dir(session: &SetupSession<'_>) -> SetupResult<DirectoryState> {
    let dir = &session.paths.build_dir;

    let state = if session.runner.is_dry_run() {
        if dir.is_dir() {
            DirectoryState::AlreadyExisted
        } else {
            DirectoryState::Created
        }
    } else {
        ensure_directory(dir)?
    };

    match state {
        DirectoryState::Created => {
            session.say(&format!("Creating build directory: {}", dir.display()));
        }
        DirectoryState::AlreadyExisted => {
            session.say(&format!(
                "Build directory '{}' already exists.",
                dir.display()
            ));
        }
    }
    Ok(state)
}

/// `cmake <source>` run inside the build directory, plus `-G <generator>`
/// when one applies to `os`.
pub fn configure_command(
    config: &SetupConfig,
    build_dir: &Path,
    os: Os,
) -> SetupResult<ExternalCommand> {
    let source = source_dir_from_build_dir(config)?;

    let mut cmd = ExternalCommand::new(config.cmake_program.as_os_str())
        .arg(source.as_os_str())
        .current_dir(build_dir);

    if let Some(generator) = config.generator_for(os) {
        cmd = cmd.args(["-G", generator]);
    }
    Ok(cmd)
}

/// `cmake --build .` run inside the build directory.
pub fn build_command(config: &SetupConfig, build_dir: &Path) -> ExternalCommand {
    ExternalCommand::new(config.cmake_program.as_os_str())
        .args(["--build", "."])
        .current_dir(build_dir)
}

/// Path of the project root as seen from inside the build directory.
///
/// A build directory nested below the root is reached with `..` segments
/// (`build` -> `..`); anything else falls back to the absolute root.
fn source_dir_from_build_dir(config: &SetupConfig) -> SetupResult<PathBuf> {
    let build_dir = &config.build_dir;
    let nested = !build_dir.as_os_str().is_empty()
        && build_dir
            .components()
            .all(|c| matches!(c, Component::Normal(_) | Component::CurDir));

    if nested {
        let depth = build_dir
            .components()
            .filter(|c| matches!(c, Component::Normal(_)))
            .count();
        if depth > 0 {
            return Ok(std::iter::repeat_n("..", depth).collect());
        }
    }

    std::path::absolute(&config.project_root)
        .map_err(|e| PathError::CurrentDirError(e.to_string()).into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use neurosim_core::WINDOWS_CMAKE_GENERATOR;

    fn argv(cmd: &ExternalCommand) -> Vec<String> {
        cmd.argv_lossy()
    }

    #[test]
    fn windows_configure_selects_visual_studio() {
        let config = SetupConfig::with_defaults();
        let cmd = configure_command(&config, Path::new("build"), Os::Windows).unwrap();
        assert_eq!(argv(&cmd), vec!["cmake", "..", "-G", WINDOWS_CMAKE_GENERATOR]);
        assert_eq!(cmd.working_dir(), Some(Path::new("build")));
    }

    #[test]
    fn other_platforms_have_no_generator_flag() {
        let config = SetupConfig::with_defaults();
        for os in [Os::Linux, Os::MacOS, Os::Other("freebsd")] {
            let cmd = configure_command(&config, Path::new("build"), os).unwrap();
            assert_eq!(argv(&cmd), vec!["cmake", ".."], "{os}");
            assert!(!cmd.echo().contains("-G"));
        }
    }

    #[test]
    fn build_command_builds_current_dir() {
        let cmd = build_command(&SetupConfig::with_defaults(), Path::new("build"));
        assert_eq!(cmd.echo(), "cmake --build .");
        assert_eq!(cmd.working_dir(), Some(Path::new("build")));
    }

    #[test]
    fn nested_build_dir_walks_back_up() {
        let config = SetupConfig {
            build_dir: PathBuf::from("out/release"),
            ..SetupConfig::with_defaults()
        };
        let cmd = configure_command(&config, Path::new("out/release"), Os::Linux).unwrap();
        assert_eq!(argv(&cmd)[1], Path::new("..").join("..").to_string_lossy());
    }

    #[test]
    fn external_build_dir_uses_absolute_source() {
        let config = SetupConfig {
            project_root: PathBuf::from("/work/neurosim"),
            build_dir: PathBuf::from("/tmp/neurosim-build"),
            ..SetupConfig::with_defaults()
        };
        let source = source_dir_from_build_dir(&config).unwrap();
        assert!(source.is_absolute());
        assert!(source.ends_with("neurosim"));
    }
}
