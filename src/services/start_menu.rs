//! Start menu reset from a pinned-layout template.

use super::Ctx;
use crate::console::{hl, Log};
use crate::domain::{AppError, Result};
use crate::repositories::file_system;
use crate::repositories::shell::ShellCommand;
use std::path::{Path, PathBuf};

pub const TEMPLATE: &str = "start2.bin";
const START_MENU_PACKAGE: &str = r"Packages\Microsoft.Windows.StartMenuExperienceHost_cw5n1h2txyewy\LocalState";

/// `LocalState` folder of the start menu host under `local_app_data`.
pub fn state_dir(local_app_data: &Path) -> PathBuf {
    START_MENU_PACKAGE
        .split('\\')
        .fold(local_app_data.to_path_buf(), |dir, part| dir.join(part))
}

/// Copy `template` into `target_dir` as `start2.bin` and restart Explorer so it is picked up.
pub fn install_template(ctx: &Ctx<'_>, template: &Path, target_dir: &Path) -> Result<()> {
    file_system::copy_recursive(template, &target_dir.join(TEMPLATE))?;

    ctx.runner.run(&ShellCommand::powershell(
        &ctx.settings.powershell,
        "Stop-Process -Name explorer -Force",
    ))?;
    Ok(())
}

pub fn clean_start_menu(ctx: &Ctx<'_>, template: Option<PathBuf>) -> Result<()> {
    let template = template.unwrap_or_else(|| ctx.settings.asset(TEMPLATE));
    if !template.is_file() {
        return Err(AppError::not_found("start menu template", template));
    }
    let local_app_data = std::env::var("LOCALAPPDATA")?;
    let target = state_dir(Path::new(&local_app_data));

    Log::info("\nCleaning start menu...\n");
    install_template(ctx, &template, &target).inspect_err(|_| {
        Log::error(format!(
            "\nFailed to copy {} to {}.\n",
            hl(template.display()),
            hl(target.display())
        ));
    })?;

    Log::success("\nCleaned start menu.\n");
    Ok(())
}
