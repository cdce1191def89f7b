//! Removal of bundled Windows applications.

use super::Ctx;
use crate::console::{hl, Log};
use crate::domain::bloat::{self, EDGE, ONEDRIVE, PACKAGES};
use crate::domain::{AppError, BatchReport, Result};
use crate::repositories::shell::ShellCommand;

pub const EDGE_REMOVER: &str = "RemoveEdgeOnly.exe";

const UNINSTALL_ONEDRIVE: &str = r#"
Stop-Process -Name OneDrive -Force -ErrorAction SilentlyContinue
$setup = @("$env:SystemRoot\System32\OneDriveSetup.exe", "$env:SystemRoot\SysWOW64\OneDriveSetup.exe") |
    Where-Object { Test-Path $_ } | Select-Object -First 1
if (-not $setup) { throw 'OneDriveSetup.exe was not found' }
Start-Process -FilePath $setup -ArgumentList '/uninstall' -NoNewWindow -Wait
"#;

#[derive(Debug, Default, Clone)]
pub struct Selection {
    pub packages: Vec<String>,
    pub all: bool,
    /// Skip the Edge confirmation.
    pub yes: bool,
}

fn remove_appx_script(package: &str) -> String {
    crate::ps!(
        "$ErrorActionPreference = 'Stop'; \
         Get-AppxPackage -AllUsers -Name {} | Remove-AppxPackage -AllUsers; \
         Get-AppxProvisionedPackage -Online | Where-Object DisplayName -EQ {} | \
         Remove-AppxProvisionedPackage -Online -AllUsers | Out-Null",
        package,
        package
    )
}

fn choose(ctx: &mut Ctx<'_>, selection: &Selection) -> Result<Vec<String>> {
    if selection.all {
        return Ok(PACKAGES.iter().map(|p| p.to_string()).collect());
    }
    if !selection.packages.is_empty() {
        let named = selection
            .packages
            .iter()
            .map(|package| match bloat::canonical(package) {
                Some(known) => known.to_string(),
                None => {
                    Log::warn(format!("{} is not in the built-in list.", hl(package)));
                    package.clone()
                }
            })
            .collect();
        return Ok(named);
    }

    let choices: Vec<String> = PACKAGES.iter().map(|p| p.to_string()).collect();
    let picked = ctx
        .prompt
        .select_many("Which package do you want to uninstall?", &choices)?;
    Ok(picked.into_iter().map(|i| choices[i].clone()).collect())
}

/// Returns `Ok(false)` when the user backs out.
fn remove_edge(ctx: &mut Ctx<'_>, yes: bool) -> Result<bool> {
    Log::warn("\nUninstalling Microsoft Edge will uninstall the browser and keep the web view.");
    Log::warn("Some Microsoft apps like copilot will not work.");

    if !yes
        && !ctx
            .prompt
            .confirm("Are you sure you want to uninstall Microsoft Edge?", false)?
    {
        return Ok(false);
    }

    let remover = ctx.settings.asset(EDGE_REMOVER);
    if !remover.is_file() {
        return Err(AppError::not_found("Edge remover", remover));
    }
    ctx.runner.pass_through(&ShellCommand::program(
        remover.display().to_string(),
        ["/e"],
    ))?;
    Ok(true)
}

fn remove(ctx: &mut Ctx<'_>, package: &str, yes: bool) -> Result<bool> {
    let script = match package {
        EDGE => return remove_edge(ctx, yes),
        ONEDRIVE => UNINSTALL_ONEDRIVE.to_string(),
        _ => remove_appx_script(package),
    };
    ctx.runner
        .pass_through(&ShellCommand::powershell(&ctx.settings.powershell, script))?;
    Ok(true)
}

pub fn uninstall_bloat(ctx: &mut Ctx<'_>, selection: &Selection) -> Result<BatchReport> {
    if !ctx.elevated {
        Log::error("\nPermission denied.\n");
    }
    ctx.require_admin()?;

    let packages = choose(ctx, selection)?;
    println!();

    let mut report = BatchReport::default();
    for package in packages {
        Log::info(format!("\nUninstalling {}...", hl(&package)));
        match remove(ctx, &package, selection.yes) {
            Ok(true) => report.success(),
            Ok(false) => report.skip(),
            Err(e) => {
                Log::error(format!("Failed to uninstall {}: {e}", hl(&package)));
                report.failure(package);
            }
        }
    }

    Log::success("\nDone!");
    Ok(report)
}
