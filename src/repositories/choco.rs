//! Chocolatey helpers.

use crate::domain::{lists, Result};
use crate::repositories::shell::{CommandRunner, PowerShellHost, ShellCommand};

const CHOCO: &str = "choco";

const INSTALL_SCRIPT: &str = "Set-ExecutionPolicy Bypass -Scope Process -Force; \
[System.Net.ServicePointManager]::SecurityProtocol = [System.Net.ServicePointManager]::SecurityProtocol -bor 3072; \
iex ((New-Object System.Net.WebClient).DownloadString('https://community.chocolatey.org/install.ps1'))";

pub fn is_installed(runner: &dyn CommandRunner) -> bool {
    runner.is_available(CHOCO)
}

pub fn install(runner: &dyn CommandRunner, host: &PowerShellHost) -> Result<()> {
    runner.pass_through(&ShellCommand::powershell(host, INSTALL_SCRIPT))
}

pub fn installed_packages(runner: &dyn CommandRunner) -> Result<Vec<String>> {
    let output = runner.run(&ShellCommand::program(CHOCO, ["list", "--limit-output"]))?;
    Ok(lists::parse_choco_list(&output))
}

pub fn install_package(runner: &dyn CommandRunner, name: &str) -> Result<()> {
    runner.pass_through(&ShellCommand::program(CHOCO, ["install", name, "-y"]))
}
