//! Chocolatey package list backup and restore.

use super::Ctx;
use crate::console::{hl, Log, Spinner};
use crate::domain::{lists, AppError, BatchReport, Result};
use crate::repositories::{choco, file_system};
use std::fs;
use std::path::PathBuf;

/// Make sure `choco` is available, offering to install it.
///
/// Returns `false` when the user declines the installation.
fn ensure_choco(ctx: &mut Ctx<'_>, spinner: &mut Spinner) -> Result<bool> {
    if choco::is_installed(ctx.runner) {
        return Ok(true);
    }

    spinner.error("Choco is not installed. Please install it first.");
    if !ctx.prompt.confirm("Do you want to install choco?", true)? {
        return Ok(false);
    }

    choco::install(ctx.runner, &ctx.settings.powershell)?;
    Log::success("\nChocolatey installed.\n");
    Ok(true)
}

/// Text written to the backup file.
pub fn render_backup(packages: &[String], now: chrono::DateTime<chrono::Local>) -> String {
    let mut content = format!(
        "# Chocolatey packages exported by win-tools on {}\n",
        now.format("%Y-%m-%d %H:%M")
    );
    for package in packages {
        content.push_str(package);
        content.push('\n');
    }
    content
}

pub fn backup(ctx: &mut Ctx<'_>, path: Option<PathBuf>, overwrite: bool) -> Result<()> {
    let mut spinner = Spinner::start("Checking if choco is installed...");
    if !ensure_choco(ctx, &mut spinner)? {
        return Ok(());
    }

    spinner.restart("Getting packages...");
    let packages = choco::installed_packages(ctx.runner)?;
    spinner.stop();
    Log::info(format!("Found \"{}\" packages.\n", hl(packages.len())));

    let path = ctx.path_or_ask(path, "Enter the path to save the backup text file:")?;

    if path.exists()
        && !overwrite
        && !ctx
            .prompt
            .confirm("The file already exists. Do you want to overwrite it?", false)?
    {
        Log::warn("File already exists. Aborted.");
        return Ok(());
    }

    fs::write(&path, render_backup(&packages, chrono::Local::now()))?;
    Log::success(format!("\nFile \"{}\" created successfully.", hl(path.display())));
    Ok(())
}

pub fn restore(ctx: &mut Ctx<'_>, path: Option<PathBuf>) -> Result<BatchReport> {
    let mut spinner = Spinner::start("Checking if choco is installed...");
    if !ensure_choco(ctx, &mut spinner)? {
        return Ok(BatchReport::default());
    }
    spinner.stop();

    let path = ctx.path_or_ask(path, "Enter the path of the backup text file:")?;

    spinner.restart("Reading backup text file...");
    if !path.is_file() {
        spinner.stop();
        return Err(AppError::not_found("backup text file", path));
    }
    let packages = lists::parse_lines(&file_system::read_text(&path, "backup text file")?);
    spinner.stop();
    Log::info(format!(
        "Found \"{}\" packages in the backup text file.",
        hl(packages.len())
    ));

    let mut report = BatchReport::default();
    for package in packages {
        Log::info(format!("\nInstalling package: {}\n", hl(&package)));
        match choco::install_package(ctx.runner, &package) {
            Ok(()) => report.success(),
            Err(e) => {
                Log::error(format!("Failed to install {}: {e}", hl(&package)));
                report.failure(package);
            }
        }
    }
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::testing::*;
    use chrono::TimeZone;
    use tempfile::TempDir;

    #[test]
    fn backup_file_has_a_comment_header() {
        let now = chrono::Local
            .with_ymd_and_hms(2024, 5, 1, 9, 30, 0)
            .single()
            .expect("valid time");
        let text = render_backup(&["firefox".into(), "7zip".into()], now);
        assert_eq!(
            text,
            "# Chocolatey packages exported by win-tools on 2024-05-01 09:30\nfirefox\n7zip\n"
        );
        assert_eq!(lists::parse_lines(&text), vec!["firefox", "7zip"]);
    }

    #[test]
    fn backup_writes_installed_packages() {
        let tmp = TempDir::new().expect("temp dir");
        let out = tmp.path().join("packages.txt");

        let settings = settings(tmp.path());
        let runner = FakeRunner::with_available(&["choco"])
            .output_for("choco list", "firefox|121.0\nspotify|1.2\n");
        let registry = MemoryRegistry::default();
        let mut prompt = answers("");
        let mut ctx = ctx(&settings, &runner, &registry, &mut prompt, false);

        backup(&mut ctx, Some(out.clone()), false).expect("backup");
        let written = fs::read_to_string(&out).expect("read");
        assert_eq!(lists::parse_lines(&written), vec!["firefox", "spotify"]);
        assert_eq!(runner.commands(), vec!["choco list --limit-output"]);
    }

    #[test]
    fn existing_file_is_kept_when_user_declines() {
        let tmp = TempDir::new().expect("temp dir");
        let out = tmp.path().join("packages.txt");
        fs::write(&out, "keep me").expect("write");

        let settings = settings(tmp.path());
        let runner = FakeRunner::with_available(&["choco"]);
        let registry = MemoryRegistry::default();
        let mut prompt = answers("n\n");
        let mut ctx = ctx(&settings, &runner, &registry, &mut prompt, false);

        backup(&mut ctx, Some(out.clone()), false).expect("aborts cleanly");
        assert_eq!(fs::read_to_string(&out).expect("read"), "keep me");
    }

    #[test]
    fn declining_choco_install_stops_early() {
        let tmp = TempDir::new().expect("temp dir");
        let settings = settings(tmp.path());
        let runner = FakeRunner::default();
        let registry = MemoryRegistry::default();
        let mut prompt = answers("n\n");
        let mut ctx = ctx(&settings, &runner, &registry, &mut prompt, false);

        backup(&mut ctx, None, false).expect("no error");
        assert!(runner.commands().is_empty());
    }

    #[test]
    fn accepting_choco_install_runs_the_installer() {
        let tmp = TempDir::new().expect("temp dir");
        let list = tmp.path().join("packages.txt");
        fs::write(&list, "git\n").expect("write");

        let settings = settings(tmp.path());
        let runner = FakeRunner::default();
        let registry = MemoryRegistry::default();
        let mut prompt = answers("y\n");
        let mut ctx = ctx(&settings, &runner, &registry, &mut prompt, false);

        restore(&mut ctx, Some(list)).expect("restore");
        let commands = runner.commands();
        assert!(commands[0].contains("community.chocolatey.org/install.ps1"));
        assert_eq!(commands[1], "choco install git -y");
    }

    #[test]
    fn restore_installs_each_package_and_survives_failures() {
        let tmp = TempDir::new().expect("temp dir");
        let list = tmp.path().join("packages.txt");
        fs::write(&list, "firefox\n# comment\n\nbroken-pkg\nspotify\n").expect("write");

        let settings = settings(tmp.path());
        let runner = FakeRunner::with_available(&["choco"]).fail_on("broken-pkg");
        let registry = MemoryRegistry::default();
        let mut prompt = answers("");
        let mut ctx = ctx(&settings, &runner, &registry, &mut prompt, false);

        let report = restore(&mut ctx, Some(list)).expect("restore");
        assert_eq!(report.succeeded, 2);
        assert_eq!(report.failed, vec!["broken-pkg".to_string()]);
        assert_eq!(
            runner.commands(),
            vec![
                "choco install firefox -y",
                "choco install broken-pkg -y",
                "choco install spotify -y",
            ]
        );
    }

    #[test]
    fn restore_with_missing_file_fails() {
        let tmp = TempDir::new().expect("temp dir");
        let settings = settings(tmp.path());
        let runner = FakeRunner::with_available(&["choco"]);
        let registry = MemoryRegistry::default();
        let mut prompt = answers("");
        let mut ctx = ctx(&settings, &runner, &registry, &mut prompt, false);

        let err = restore(&mut ctx, Some(tmp.path().join("none.txt"))).expect_err("missing");
        assert!(matches!(err, AppError::NotFound { .. }));
    }
}
