//! Environment variables from a `KEY=VALUE` text file.

use super::Ctx;
use crate::console::{hl, Log};
use crate::domain::{environment, AppError, BatchReport, EnvEntry, Hive, Result, Scope};
use crate::repositories::file_system;
use crate::repositories::shell::ShellCommand;
use colored::Colorize;
use std::path::PathBuf;

const USER_ENV_KEY: &str = "Environment";
const MACHINE_ENV_KEY: &str = r"SYSTEM\CurrentControlSet\Control\Session Manager\Environment";

fn location(scope: Scope) -> (Hive, &'static str) {
    match scope {
        Scope::User => (Hive::CurrentUser, USER_ENV_KEY),
        Scope::Machine => (Hive::LocalMachine, MACHINE_ENV_KEY),
    }
}

/// Persist one variable; goes through .NET so running programs are notified.
fn set_variable(ctx: &Ctx<'_>, key: &str, value: &str, scope: Scope) -> Result<()> {
    let script = crate::ps!(
        "[Environment]::SetEnvironmentVariable({}, {}, {})",
        key,
        value,
        scope.as_str()
    );
    ctx.runner
        .run(&ShellCommand::powershell(&ctx.settings.powershell, script))
        .map(|_| ())
}

fn apply(ctx: &Ctx<'_>, entry: &EnvEntry, scope: Scope) -> Result<()> {
    if !entry.is_path() {
        return set_variable(ctx, &entry.key, &entry.value, scope);
    }

    let (hive, key) = location(scope);
    let current = ctx.registry.read_string(hive, key, "Path")?.unwrap_or_default();
    match environment::append_path_entry(&current, &entry.value) {
        Some(updated) => set_variable(ctx, "Path", &updated, scope),
        None => {
            Log::info(format!("{} is already in PATH.", hl(&entry.value)));
            Ok(())
        }
    }
}

pub fn set_environment_variables(
    ctx: &mut Ctx<'_>,
    path: Option<PathBuf>,
    scope: Scope,
) -> Result<BatchReport> {
    let path = ctx.path_or_ask(path, "Enter the path of the environment variables text file:")?;
    if scope == Scope::Machine {
        ctx.require_admin()?;
    }

    Log::info("Reading text file...\n");
    if !path.is_file() {
        return Err(AppError::not_found("environment variables text file", path));
    }
    let list = environment::parse_env_entries(&file_system::read_text(&path, "text file")?);

    for line in &list.rejected {
        Log::warn(format!("Skipping {}: missing variable name.", hl(line)));
    }
    Log::info(format!(
        "Found \"{}\" environment variables.\n",
        hl(list.entries.len())
    ));

    let mut report = BatchReport::default();
    for entry in list.entries {
        Log::info(format!(
            "Setting: {} = {} for {} profile",
            hl(&entry.key),
            entry.value.as_str().green(),
            scope.as_str().red().bold()
        ));
        match apply(ctx, &entry, scope) {
            Ok(()) => report.success(),
            Err(e) => {
                Log::error(format!("Failed to set {}: {e}", hl(&entry.key)));
                report.failure(entry.key);
            }
        }
    }
    Ok(report)
}
