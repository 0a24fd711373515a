//! `std::process` implementation of [`ProcessExecutor`].

use std::collections::VecDeque;
use std::io::{BufRead, BufReader, Read};
use std::process::{Child, Command, ExitStatus, Stdio};
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use neurosim_core::{CommandError, CommandLine, CommandOutcome, ExternalCommand, ProcessExecutor};

use super::progress::{is_notable_line, parse_build_progress};

/// Lines of hidden output replayed when a quiet command fails.
const FAILURE_TAIL_LINES: usize = 20;

/// How child stdout/stderr are handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Child writes straight to our terminal.
    #[default]
    Inherit,
    /// Child output is captured behind a progress bar; errors and warnings
    /// are still shown, and the tail is replayed on failure.
    Quiet,
}

/// Executes commands with `std::process::Command`, blocking until they exit.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemExecutor {
    output: OutputMode,
}

impl SystemExecutor {
    pub const fn new(output: OutputMode) -> Self {
        Self { output }
    }
}

impl ProcessExecutor for SystemExecutor {
    fn execute(&self, command: &ExternalCommand) -> Result<CommandOutcome, CommandError> {
        let mut cmd = to_std_command(command)?;
        let status = match self.output {
            OutputMode::Inherit => cmd.status().map_err(|e| spawn_error(command, &e))?,
            OutputMode::Quiet => run_quiet(command, &mut cmd)?,
        };
        Ok(outcome_from_status(status))
    }
}

fn outcome_from_status(status: ExitStatus) -> CommandOutcome {
    status.code().map_or_else(
        || CommandOutcome::signaled(terminating_signal(status)),
        CommandOutcome::exited,
    )
}

#[cfg(unix)]
fn terminating_signal(status: ExitStatus) -> Option<i32> {
    use std::os::unix::process::ExitStatusExt;
    status.signal()
}

#[cfg(not(unix))]
const fn terminating_signal(_status: ExitStatus) -> Option<i32> {
    None
}

/// Translate an [`ExternalCommand`] into a `std::process::Command`.
fn to_std_command(command: &ExternalCommand) -> Result<Command, CommandError> {
    let mut cmd = match command.line() {
        CommandLine::Argv(argv) => {
            let (program, args) = argv.split_first().ok_or_else(|| CommandError::Spawn {
                command: String::new(),
                reason: "empty command line".to_string(),
            })?;
            let mut cmd = Command::new(program);
            cmd.args(args);
            cmd
        }
        CommandLine::Shell(script) => shell_command(script),
    };

    if let Some(dir) = command.working_dir() {
        cmd.current_dir(dir);
    }
    Ok(cmd)
}

#[cfg(windows)]
fn shell_command(script: &str) -> Command {
    let mut cmd = Command::new("cmd");
    cmd.arg("/C").arg(script);
    cmd
}

#[cfg(not(windows))]
fn shell_command(script: &str) -> Command {
    let mut cmd = Command::new("sh");
    cmd.arg("-c").arg(script);
    cmd
}

fn spawn_error(command: &ExternalCommand, err: &std::io::Error) -> CommandError {
    CommandError::Spawn {
        command: command.echo(),
        reason: err.to_string(),
    }
}

/// Forward every line of `stream` into `tx` from a background thread.
///
/// Lines are decoded lossily and the stream is drained to EOF even when
/// the bytes are not UTF-8; closing the pipe early would kill the child
/// with SIGPIPE.
fn forward_lines<R: Read + Send + 'static>(stream: R, tx: mpsc::Sender<String>) {
    thread::spawn(move || {
        let mut reader = BufReader::new(stream);
        let mut buf = Vec::new();
        loop {
            buf.clear();
            match reader.read_until(b'\n', &mut buf) {
                Ok(0) | Err(_) => break,
                Ok(_) => {
                    let line = String::from_utf8_lossy(&buf);
                    let line = line.trim_end_matches(['\n', '\r']).to_string();
                    // Keep draining even if the receiver is gone.
                    let _ = tx.send(line);
                }
            }
        }
    });
}

fn quiet_progress_bar(command: &ExternalCommand) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} [{elapsed_precise}] {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message(command.echo());
    pb
}

fn switch_to_bar(pb: &ProgressBar) {
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-"),
    );
}

fn run_quiet(command: &ExternalCommand, cmd: &mut Command) -> Result<ExitStatus, CommandError> {
    let mut child: Child = cmd
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|e| spawn_error(command, &e))?;

    let (tx, rx) = mpsc::channel();
    if let Some(stdout) = child.stdout.take() {
        forward_lines(stdout, tx.clone());
    }
    if let Some(stderr) = child.stderr.take() {
        forward_lines(stderr, tx);
    }

    let pb = quiet_progress_bar(command);
    let mut tail: VecDeque<String> = VecDeque::with_capacity(FAILURE_TAIL_LINES);
    let mut has_bar = false;
    let mut last_position = 0;

    // The channel disconnects once both reader threads hit EOF.
    loop {
        match rx.recv_timeout(Duration::from_millis(100)) {
            Ok(line) => {
                if let Some(progress) = parse_build_progress(&line) {
                    if !has_bar {
                        switch_to_bar(&pb);
                        has_bar = true;
                    }
                    if progress.current >= last_position {
                        pb.set_length(progress.total);
                        pb.set_position(progress.current);
                        last_position = progress.current;
                    }
                }
                if is_notable_line(&line) {
                    pb.println(&line);
                }
                if tail.len() == FAILURE_TAIL_LINES {
                    tail.pop_front();
                }
                tail.push_back(line);
            }
            Err(mpsc::RecvTimeoutError::Timeout) => pb.tick(),
            Err(mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    let status = child.wait().map_err(|e| CommandError::Wait {
        command: command.echo(),
        reason: e.to_string(),
    })?;
    pb.finish_and_clear();

    if !status.success() {
        for line in &tail {
            eprintln!("{line}");
        }
    }

    Ok(status)
}
