//! Windows Firewall and Defender switches.

use super::Ctx;
use crate::console::Spinner;
use crate::domain::Result;
use crate::repositories::shell::ShellCommand;

const DISABLE_PROTECTION: &str = "$ErrorActionPreference = 'Stop'; \
Set-NetFirewallProfile -Profile Domain,Public,Private -Enabled False; \
Set-MpPreference -DisableRealtimeMonitoring $true; \
Set-MpPreference -MAPSReporting Disabled; \
Set-MpPreference -SubmitSamplesConsent NeverSend";

pub fn disable_firewall(ctx: &Ctx<'_>) -> Result<()> {
    ctx.require_admin()?;

    let mut spinner = Spinner::start("Disabling firewall and Defender...");
    let command = ShellCommand::powershell(&ctx.settings.powershell, DISABLE_PROTECTION);
    match ctx.runner.run(&command) {
        Ok(_) => {
            spinner.success("\nDisabled Windows firewall, Windows Defender, and Windows Defender Cloud.");
            Ok(())
        }
        Err(e) => {
            spinner.error("\nAn error occurred while running the command.");
            Err(e)
        }
    }
}
