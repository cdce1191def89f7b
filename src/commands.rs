//! Command handler layer.
//!
//! Matches parsed CLI input to a service call and prints the batch summary.
//! Business logic lives in `services/*`.

use crate::cli::Commands;
use crate::console::{hl, Log};
use crate::domain::{BatchReport, Result, Scope};
use crate::services::auto_logon::{self, AutoLogonOptions};
use crate::services::bloat::{self, Selection};
use crate::services::{choco, environment, files, firewall, scripts, start_menu, tweaks, Ctx};

/// One-line summary after a batch; failed items are listed again.
pub fn summary_line(report: &BatchReport) -> String {
    let mut line = format!("{} succeeded", report.succeeded);
    if report.skipped > 0 {
        line.push_str(&format!(", {} skipped", report.skipped));
    }
    if !report.failed.is_empty() {
        line.push_str(&format!(", {} failed", report.failed.len()));
    }
    line
}

fn print_summary(report: &BatchReport) {
    if report.total() == 0 {
        return;
    }
    let line = summary_line(report);
    if report.is_clean() {
        Log::success(format!("\n{line}"));
        return;
    }
    Log::warn(format!("\n{line}"));
    for item in &report.failed {
        Log::log(format!("  {}", hl(item)));
    }
}

pub fn run(command: Commands, ctx: &mut Ctx<'_>) -> Result<()> {
    let report = match command {
        Commands::ChocoBackup { path, overwrite } => return choco::backup(ctx, path, overwrite),
        Commands::ChocoRestore { path } => choco::restore(ctx, path)?,
        Commands::BackupFiles(args) => files::backup_files(ctx, args.text_path, args.backup_path)?,
        Commands::RestoreFiles(args) => {
            files::restore_files(ctx, args.text_path, args.backup_path)?
        }
        Commands::SetEnv { path, machine } => {
            environment::set_environment_variables(ctx, path, Scope::from_machine_flag(machine))?
        }
        Commands::SetReg {
            tweaks: ids,
            list,
            files: reg_files,
        } => return tweaks::set_registry(ctx, &ids, &reg_files, list),
        Commands::EnableOldMenu => return tweaks::enable_old_menu(ctx),
        Commands::DisableOldMenu => return tweaks::disable_old_menu(ctx),
        Commands::EnableLongPath => return tweaks::enable_long_path(ctx),
        Commands::DisableSuggestions => return tweaks::disable_suggestions(ctx),
        Commands::UninstallBloat { packages, all, yes } => {
            bloat::uninstall_bloat(ctx, &Selection { packages, all, yes })?
        }
        Commands::RunScripts {
            path,
            exit_on_error,
        } => scripts::run_scripts(ctx, path, exit_on_error)?,
        Commands::AutoLogon {
            username,
            domain,
            auto_logon_count,
            remove_legal_prompt,
            backup_file,
        } => {
            let options = AutoLogonOptions {
                username,
                domain,
                auto_logon_count,
                remove_legal_prompt,
                backup_file,
            };
            return auto_logon::enable_auto_logon(ctx, options);
        }
        Commands::DisableFirewall => return firewall::disable_firewall(ctx),
        Commands::CleanStartMenu { template } => return start_menu::clean_start_menu(ctx, template),
    };

    print_summary(&report);
    Ok(())
}
