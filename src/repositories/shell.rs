//! Child process execution - the only place that spawns external programs.
//!
//! Commands are described by [`ShellCommand`] and executed through a
//! [`CommandRunner`], either captured (`run`) or with the terminal handed over
//! to the child (`pass_through`). PowerShell scripts are built with the
//! [`ps!`](crate::ps) macro, which quotes every interpolated value.

use crate::domain::{AppError, Result};
use std::fmt;
use std::process::{Command, Stdio};
use tracing::debug;

/// Quote `value` as a PowerShell single-quoted string literal.
pub fn ps_quote(value: impl AsRef<str>) -> String {
    format!("'{}'", value.as_ref().replace('\'', "''"))
}

/// `format!` for PowerShell: every argument is passed through [`ps_quote`].
///
/// ```
/// let script = win_tools::ps!("Remove-Item -Path {} -Recurse", r"C:\it's here");
/// assert_eq!(script, r"Remove-Item -Path 'C:\it''s here' -Recurse");
/// ```
#[macro_export]
macro_rules! ps {
    ($template:literal $(, $arg:expr)* $(,)?) => {
        format!($template $(, $crate::repositories::shell::ps_quote(&$arg))*)
    };
}

/// PowerShell executable used for scripts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PowerShellHost(String);

impl PowerShellHost {
    pub const CORE: &'static str = "pwsh";
    pub const DESKTOP: &'static str = "powershell";

    pub fn new(program: impl Into<String>) -> Self {
        Self(program.into())
    }

    /// Prefer PowerShell 7 when it is installed.
    pub fn detect() -> Self {
        if which::which(Self::CORE).is_ok() {
            Self::new(Self::CORE)
        } else {
            Self::new(Self::DESKTOP)
        }
    }

    pub fn program(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    /// A program with literal arguments, no shell involved.
    Program { program: String, args: Vec<String> },
    /// A PowerShell script passed to `-Command`.
    PowerShell { host: String, script: String },
    /// A raw command line for `cmd /C` (`sh -c` outside Windows).
    CommandLine(String),
}

impl ShellCommand {
    pub fn program<I, S>(program: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Program {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    pub fn powershell(host: &PowerShellHost, script: impl Into<String>) -> Self {
        Self::PowerShell {
            host: host.program().to_string(),
            script: script.into(),
        }
    }

    pub fn command_line(line: impl Into<String>) -> Self {
        Self::CommandLine(line.into())
    }

    fn build(&self) -> Command {
        match self {
            Self::Program { program, args } => {
                let mut cmd = Command::new(program);
                cmd.args(args);
                cmd
            }
            Self::PowerShell { host, script } => {
                let mut cmd = Command::new(host);
                cmd.args([
                    "-NoProfile",
                    "-NonInteractive",
                    "-ExecutionPolicy",
                    "Bypass",
                    "-Command",
                    script,
                ]);
                cmd
            }
            Self::CommandLine(line) => command_line(line),
        }
    }

    fn program_name(&self) -> &str {
        match self {
            Self::Program { program, .. } => program,
            Self::PowerShell { host, .. } => host,
            Self::CommandLine(_) if cfg!(windows) => "cmd",
            Self::CommandLine(_) => "sh",
        }
    }
}

#[cfg(windows)]
fn command_line(line: &str) -> Command {
    use std::os::windows::process::CommandExt;

    // cmd.exe does its own parsing; Rust's argument quoting would break it.
    let mut cmd = Command::new("cmd");
    cmd.arg("/C").raw_arg(line);
    cmd
}

#[cfg(not(windows))]
fn command_line(line: &str) -> Command {
    let mut cmd = Command::new("sh");
    cmd.arg("-c").arg(line);
    cmd
}

impl fmt::Display for ShellCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Program { program, args } if args.is_empty() => write!(f, "{program}"),
            Self::Program { program, args } => write!(f, "{program} {}", args.join(" ")),
            Self::PowerShell { script, .. } => write!(f, "{script}"),
            Self::CommandLine(line) => write!(f, "{line}"),
        }
    }
}

pub trait CommandRunner {
    /// Run to completion and return stdout. Non-zero exit is an error.
    fn run(&self, command: &ShellCommand) -> Result<String>;

    /// Run with inherited stdio. Non-zero exit is an error.
    fn pass_through(&self, command: &ShellCommand) -> Result<()>;

    /// Whether `program` can be found on `PATH`.
    fn is_available(&self, program: &str) -> bool;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

fn spawn_error(command: &ShellCommand, e: std::io::Error) -> AppError {
    AppError::Spawn {
        program: command.program_name().to_string(),
        reason: e.to_string(),
    }
}

impl CommandRunner for SystemRunner {
    fn run(&self, command: &ShellCommand) -> Result<String> {
        debug!(%command, "running captured");
        let output = command
            .build()
            .stdin(Stdio::null())
            .output()
            .map_err(|e| spawn_error(command, e))?;

        if !output.status.success() {
            return Err(AppError::CommandFailed {
                command: command.to_string(),
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    fn pass_through(&self, command: &ShellCommand) -> Result<()> {
        debug!(%command, "running with inherited stdio");
        let status = command
            .build()
            .status()
            .map_err(|e| spawn_error(command, e))?;

        if status.success() {
            Ok(())
        } else {
            Err(AppError::CommandFailed {
                command: command.to_string(),
                status: status.to_string(),
                stderr: String::new(),
            })
        }
    }

    fn is_available(&self, program: &str) -> bool {
        which::which(program).is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quotes_are_doubled() {
        assert_eq!(ps_quote("O'Brien"), "'O''Brien'");
        assert_eq!(ps_quote(""), "''");
    }

    #[test]
    fn macro_quotes_each_argument() {
        let key = "JAVA_HOME";
        let value = String::from(r"C:\Program Files\Java");
        let script = crate::ps!(
            "[Environment]::SetEnvironmentVariable({}, {}, {})",
            key,
            value,
            "User"
        );
        assert_eq!(
            script,
            r"[Environment]::SetEnvironmentVariable('JAVA_HOME', 'C:\Program Files\Java', 'User')"
        );
    }

    #[test]
    fn display_shows_what_runs() {
        let cmd = ShellCommand::program("choco", ["install", "firefox", "-y"]);
        assert_eq!(cmd.to_string(), "choco install firefox -y");

        let host = PowerShellHost::new("pwsh");
        let ps = ShellCommand::powershell(&host, "Get-ExecutionPolicy");
        assert_eq!(ps.to_string(), "Get-ExecutionPolicy");
        assert_eq!(ps.program_name(), "pwsh");
    }

    #[cfg(unix)]
    #[test]
    fn system_runner_reports_exit_status() {
        let runner = SystemRunner;
        let out = runner
            .run(&ShellCommand::command_line("printf hello"))
            .expect("printf succeeds");
        assert_eq!(out, "hello");

        let err = runner
            .run(&ShellCommand::command_line("echo oops >&2; exit 3"))
            .expect_err("exit 3 fails");
        match err {
            AppError::CommandFailed { stderr, .. } => assert_eq!(stderr, "oops"),
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn missing_program_is_a_spawn_error() {
        let err = SystemRunner
            .run(&ShellCommand::program("win-tools-no-such-program", Vec::<String>::new()))
            .expect_err("program does not exist");
        assert!(matches!(err, AppError::Spawn { .. }));
    }
}
