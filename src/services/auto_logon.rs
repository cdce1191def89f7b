//! Automatic sign-in through the Winlogon registry values.

use super::Ctx;
use crate::console::{hl, Log};
use crate::domain::{AppError, Hive, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

const WINLOGON: &str = r"SOFTWARE\Microsoft\Windows NT\CurrentVersion\Winlogon";
const POLICIES_SYSTEM: &str = r"SOFTWARE\Microsoft\Windows\CurrentVersion\Policies\System";

#[derive(Debug, Clone, Default)]
pub struct AutoLogonOptions {
    pub username: Option<String>,
    pub domain: Option<String>,
    pub auto_logon_count: Option<u32>,
    pub remove_legal_prompt: bool,
    pub backup_file: Option<PathBuf>,
}

/// Values overwritten by `auto-logon`, as saved to `--backup-file`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct WinlogonSnapshot {
    pub auto_admin_logon: Option<String>,
    pub default_user_name: Option<String>,
    pub default_domain_name: Option<String>,
    pub auto_logon_count: Option<u32>,
    pub legal_notice_caption: Option<String>,
    pub legal_notice_text: Option<String>,
}

impl WinlogonSnapshot {
    pub fn capture(ctx: &Ctx<'_>) -> Result<Self> {
        let read = |key: &str, value: &str| ctx.registry.read_string(Hive::LocalMachine, key, value);
        Ok(Self {
            auto_admin_logon: read(WINLOGON, "AutoAdminLogon")?,
            default_user_name: read(WINLOGON, "DefaultUserName")?,
            default_domain_name: read(WINLOGON, "DefaultDomainName")?,
            auto_logon_count: ctx
                .registry
                .read_dword(Hive::LocalMachine, WINLOGON, "AutoLogonCount")?,
            legal_notice_caption: read(POLICIES_SYSTEM, "LegalNoticeCaption")?,
            legal_notice_text: read(POLICIES_SYSTEM, "LegalNoticeText")?,
        })
    }
}

fn write_backup(ctx: &Ctx<'_>, path: &Path) -> Result<()> {
    let snapshot = WinlogonSnapshot::capture(ctx)?;
    let json = serde_json::to_string_pretty(&snapshot)
        .map_err(|e| AppError::Other(format!("Failed to serialize backup: {e}")))?;
    fs::write(path, json)?;
    Log::info(format!("Saved current settings to {}", hl(path.display())));
    Ok(())
}

pub fn enable_auto_logon(ctx: &mut Ctx<'_>, options: AutoLogonOptions) -> Result<()> {
    ctx.require_admin()?;

    let username = match options.username {
        Some(name) => name,
        None => ctx.prompt.input("Enter the username:")?,
    };
    let password = ctx.prompt.password("Enter the password:")?;

    if let Some(path) = &options.backup_file {
        write_backup(ctx, path)?;
    }

    let registry = ctx.registry;
    registry.set_string(Hive::LocalMachine, WINLOGON, "AutoAdminLogon", "1")?;
    registry.set_string(Hive::LocalMachine, WINLOGON, "DefaultUserName", &username)?;
    registry.set_string(Hive::LocalMachine, WINLOGON, "DefaultPassword", &password)?;
    if let Some(domain) = &options.domain {
        registry.set_string(Hive::LocalMachine, WINLOGON, "DefaultDomainName", domain)?;
    }
    match options.auto_logon_count {
        Some(count) => registry.set_dword(Hive::LocalMachine, WINLOGON, "AutoLogonCount", count)?,
        None => registry.delete_value(Hive::LocalMachine, WINLOGON, "AutoLogonCount")?,
    }
    if options.remove_legal_prompt {
        debug!("clearing legal notice");
        registry.set_string(Hive::LocalMachine, POLICIES_SYSTEM, "LegalNoticeCaption", "")?;
        registry.set_string(Hive::LocalMachine, POLICIES_SYSTEM, "LegalNoticeText", "")?;
    }

    Log::success(format!("\nEnabled auto logon for {}.\n", hl(&username)));
    Ok(())
}
