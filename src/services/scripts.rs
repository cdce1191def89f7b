//! Batch execution of the commands listed in a text file.

use super::Ctx;
use crate::console::{hl, Log};
use crate::domain::{lists, AppError, BatchReport, Result};
use crate::repositories::file_system;
use crate::repositories::shell::ShellCommand;
use std::path::PathBuf;

const POWERSHELL_PREFIX: &str = "@powershell";

/// `@powershell <script>` lines run in PowerShell, everything else in the
/// platform command interpreter.
pub fn script_command(ctx: &Ctx<'_>, line: &str) -> ShellCommand {
    let trimmed = line.trim();
    match trimmed.get(..POWERSHELL_PREFIX.len()) {
        Some(prefix) if prefix.eq_ignore_ascii_case(POWERSHELL_PREFIX) => ShellCommand::powershell(
            &ctx.settings.powershell,
            trimmed[POWERSHELL_PREFIX.len()..].trim(),
        ),
        _ => ShellCommand::command_line(trimmed),
    }
}

pub fn run_scripts(
    ctx: &mut Ctx<'_>,
    path: Option<PathBuf>,
    exit_on_error: bool,
) -> Result<BatchReport> {
    let path = ctx.path_or_ask(path, "Enter the path of the scripts text file:")?;

    Log::info("Reading the text file...\n");
    if !path.is_file() {
        return Err(AppError::not_found("text file", path));
    }
    let scripts = lists::parse_scripts(&file_system::read_text(&path, "text file")?);
    Log::info(format!("Found \"{}\" scripts in the text file.", hl(scripts.len())));

    let mut report = BatchReport::default();
    for script in scripts {
        Log::info(format!("\nRunning script {}", hl(&script)));

        match ctx.runner.pass_through(&script_command(ctx, &script)) {
            Ok(()) => report.success(),
            Err(e) if exit_on_error => {
                Log::error("\nAn error occurred while running the script.\n");
                return Err(AppError::ScriptFailed(format!("{script}: {e}")));
            }
            Err(e) => {
                tracing::debug!(error = %e, "script failed");
                Log::warn("\nAn error occurred while running the script. Continuing...\n");
                report.failure(script);
            }
        }
    }
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::testing::*;
    use std::fs;
    use tempfile::TempDir;

    fn script_file(dir: &std::path::Path, text: &str) -> PathBuf {
        let path = dir.join("scripts.txt");
        fs::write(&path, text).expect("write");
        path
    }

    #[test]
    fn powershell_prefix_is_case_insensitive() {
        let tmp = TempDir::new().expect("temp dir");
        let settings = settings(tmp.path());
        let runner = FakeRunner::default();
        let registry = MemoryRegistry::default();
        let mut prompt = answers("");
        let ctx = ctx(&settings, &runner, &registry, &mut prompt, false);

        match script_command(&ctx, "@PowerShell winget install 7zip") {
            ShellCommand::PowerShell { host, script } => {
                assert_eq!(host, "powershell");
                assert_eq!(script, "winget install 7zip");
            }
            other => panic!("unexpected command {other:?}"),
        }
        assert_eq!(
            script_command(&ctx, "git config --global user.name \"Me\""),
            ShellCommand::command_line("git config --global user.name \"Me\"")
        );
        assert_eq!(script_command(&ctx, "@p"), ShellCommand::command_line("@p"));
    }

    #[test]
    fn runs_every_script_and_continues_on_failure() {
        let tmp = TempDir::new().expect("temp dir");
        let file = script_file(
            tmp.path(),
            "npm i -g ts-node\n# comment\nfalse\n@powershell Write-Host 'a';\nWrite-Host 'b'\n",
        );

        let settings = settings(tmp.path());
        let runner = FakeRunner::default().fail_on("false");
        let registry = MemoryRegistry::default();
        let mut prompt = answers("");
        let mut ctx = ctx(&settings, &runner, &registry, &mut prompt, false);

        let report = run_scripts(&mut ctx, Some(file), false).expect("runs");
        assert_eq!(report.succeeded, 2);
        assert_eq!(report.failed, vec!["false".to_string()]);
        assert_eq!(
            runner.commands(),
            vec![
                "npm i -g ts-node",
                "false",
                "Write-Host 'a'; Write-Host 'b'",
            ]
        );
    }

    #[test]
    fn exit_on_error_stops_at_the_first_failure() {
        let tmp = TempDir::new().expect("temp dir");
        let file = script_file(tmp.path(), "first\nboom\nthird\n");

        let settings = settings(tmp.path());
        let runner = FakeRunner::default().fail_on("boom");
        let registry = MemoryRegistry::default();
        let mut prompt = answers("");
        let mut ctx = ctx(&settings, &runner, &registry, &mut prompt, false);

        let err = run_scripts(&mut ctx, Some(file), true).expect_err("stops");
        assert!(matches!(err, AppError::ScriptFailed(_)));
        assert_eq!(runner.commands(), vec!["first", "boom"]);
    }

    #[test]
    fn missing_file_fails() {
        let tmp = TempDir::new().expect("temp dir");
        let settings = settings(tmp.path());
        let runner = FakeRunner::default();
        let registry = MemoryRegistry::default();
        let mut prompt = answers("");
        let mut ctx = ctx(&settings, &runner, &registry, &mut prompt, false);

        let err = run_scripts(&mut ctx, Some(tmp.path().join("nope.txt")), false)
            .expect_err("missing");
        assert!(matches!(err, AppError::NotFound { .. }));
    }
}
