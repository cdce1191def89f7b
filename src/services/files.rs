//! Backup and restore of the files and folders listed in a text file.

use super::Ctx;
use crate::console::{hl, Log};
use crate::domain::{lists, AppError, BatchReport, Result};
use crate::repositories::file_system;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Read a path list, reject duplicate basenames and expand `%VAR%` references.
fn load_paths(text_path: &Path) -> Result<Vec<String>> {
    let text = file_system::read_text(text_path, "text file")?;
    let paths = lists::parse_lines(&text);
    Log::info(format!("Found \"{}\" paths in the text file.\n", hl(paths.len())));

    lists::ensure_unique_basenames(&paths)?;

    Ok(paths
        .iter()
        .map(|p| lists::expand_env_refs(p, |name| std::env::var(name).ok()))
        .collect())
}

pub fn backup_files(
    ctx: &mut Ctx<'_>,
    text_path: Option<PathBuf>,
    backup_path: Option<PathBuf>,
) -> Result<BatchReport> {
    let text_path = ctx.path_or_ask(text_path, "Enter the path of the text file:")?;
    let backup_path = ctx.path_or_ask(backup_path, "Enter the path to save the backup files:")?;

    Log::info("\nReading the text file...\n");
    if !text_path.is_file() {
        return Err(AppError::not_found("text file", text_path));
    }
    let paths = load_paths(&text_path)?;

    if !backup_path.exists() {
        debug!(path = %backup_path.display(), "creating backup folder");
        fs::create_dir_all(&backup_path)?;
    }

    let mut report = BatchReport::default();
    for path in paths {
        let dest = backup_path.join(lists::basename(&path));
        Log::info(format!("Copying {} to {}\n", hl(&path), hl(backup_path.display())));

        match file_system::copy_recursive(Path::new(&path), &dest) {
            Ok(files) => {
                debug!(%path, files, "copied");
                report.success();
            }
            Err(e) => {
                Log::error(format!(
                    "Failed to copy {} to {}: {e}\n",
                    hl(&path),
                    hl(backup_path.display())
                ));
                report.failure(path);
            }
        }
    }
    Ok(report)
}

pub fn restore_files(
    ctx: &mut Ctx<'_>,
    text_path: Option<PathBuf>,
    backup_path: Option<PathBuf>,
) -> Result<BatchReport> {
    let text_path = ctx.path_or_ask(text_path, "Enter the path of the text file:")?;
    let backup_path = ctx.path_or_ask(backup_path, "Enter the path of the backup folder:")?;

    Log::info("Reading the text file...\n");
    if !text_path.is_file() {
        return Err(AppError::not_found("text file", text_path));
    }
    if !backup_path.is_dir() {
        return Err(AppError::not_found("backup path", backup_path));
    }
    let paths = load_paths(&text_path)?;
    let backups = file_system::list_dir(&backup_path)?;

    let mut report = BatchReport::default();
    for path in paths {
        let wanted = lists::basename(&path);
        let Some(source) = backups.iter().find(|b| {
            b.file_name()
                .and_then(|n| n.to_str())
                .is_some_and(|n| n.eq_ignore_ascii_case(wanted))
        }) else {
            Log::error(format!("Failed to find {} in the backup path.\n", hl(&path)));
            report.failure(path);
            continue;
        };

        Log::info(format!("Copying {} to {}\n", hl(source.display()), hl(&path)));
        match file_system::copy_recursive(source, Path::new(&path)) {
            Ok(_) => report.success(),
            Err(e) => {
                Log::error(format!(
                    "Failed to copy {} to {}: {e}\n",
                    hl(source.display()),
                    hl(&path)
                ));
                report.failure(path);
            }
        }
    }
    Ok(report)
}
