//! External command description.
//!
//! An [`ExternalCommand`] is an intent: what to run and where. Executing it
//! is the job of a [`ProcessExecutor`](crate::ports::ProcessExecutor)
//! implementation.

use std::ffi::OsString;
use std::fmt;
use std::path::{Path, PathBuf};

/// How the command line is expressed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandLine {
    /// Program followed by its arguments, passed to the OS verbatim.
    Argv(Vec<OsString>),
    /// A string interpreted by the platform shell (`sh -c` / `cmd /C`).
    Shell(String),
}

/// A command to execute, with an optional working directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExternalCommand {
    line: CommandLine,
    current_dir: Option<PathBuf>,
}

impl ExternalCommand {
    /// Start an argument-list command for `program`.
    pub fn new(program: impl Into<OsString>) -> Self {
        Self {
            line: CommandLine::Argv(vec![program.into()]),
            current_dir: None,
        }
    }

    /// A command interpreted by the platform shell.
    pub fn shell(script: impl Into<String>) -> Self {
        Self {
            line: CommandLine::Shell(script.into()),
            current_dir: None,
        }
    }

    /// Append one argument. Ignored for shell commands.
    #[must_use]
    pub fn arg(mut self, arg: impl Into<OsString>) -> Self {
        if let CommandLine::Argv(argv) = &mut self.line {
            argv.push(arg.into());
        }
        self
    }

    /// Append several arguments. Ignored for shell commands.
    #[must_use]
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        if let CommandLine::Argv(argv) = &mut self.line {
            argv.extend(args.into_iter().map(Into::into));
        }
        self
    }

    /// Run the command in `dir` instead of the caller's working directory.
    #[must_use]
    pub fn current_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.current_dir = Some(dir.into());
        self
    }

    pub const fn line(&self) -> &CommandLine {
        &self.line
    }

    pub fn working_dir(&self) -> Option<&Path> {
        self.current_dir.as_deref()
    }

    pub const fn is_shell(&self) -> bool {
        matches!(self.line, CommandLine::Shell(_))
    }

    /// Program and arguments as strings (lossy), empty for shell commands.
    pub fn argv_lossy(&self) -> Vec<String> {
        match &self.line {
            CommandLine::Argv(argv) => argv
                .iter()
                .map(|a| a.to_string_lossy().into_owned())
                .collect(),
            CommandLine::Shell(_) => Vec::new(),
        }
    }

    /// Human-readable echo: arguments joined by single spaces, no quoting,
    /// or the shell string verbatim.
    pub fn echo(&self) -> String {
        match &self.line {
            CommandLine::Argv(_) => self.argv_lossy().join(" "),
            CommandLine::Shell(script) => script.clone(),
        }
    }
}

impl fmt::Display for ExternalCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.echo())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_argv_echo_joins_with_spaces() {
        let cmd = ExternalCommand::new("cmake")
            .arg("..")
            .args(["-G", "Visual Studio 17 2022"]);
        assert_eq!(cmd.echo(), "cmake .. -G Visual Studio 17 2022");
        assert_eq!(cmd.argv_lossy().len(), 4);
    }

    #[test]
    fn test_shell_echo_is_verbatim() {
        let cmd = ExternalCommand::shell("echo hi && exit 3");
        assert!(cmd.is_shell());
        assert_eq!(cmd.to_string(), "echo hi && exit 3");
        assert!(cmd.argv_lossy().is_empty());
    }

    #[test]
    fn test_args_ignored_for_shell() {
        let cmd = ExternalCommand::shell("true").arg("ignored");
        assert_eq!(cmd.line(), &CommandLine::Shell("true".to_string()));
    }

    #[test]
    fn test_working_dir() {
        let cmd = ExternalCommand::new("cmake").current_dir("build");
        assert_eq!(cmd.working_dir(), Some(Path::new("build")));
        assert_eq!(ExternalCommand::new("cmake").working_dir(), None);
    }
}
