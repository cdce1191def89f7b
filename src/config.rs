//! Runtime settings resolved from global options and environment variables.

use crate::repositories::shell::PowerShellHost;
use clap::ValueEnum;
use std::path::{Path, PathBuf};

pub const ASSETS_ENV: &str = "WIN_TOOLS_ASSETS";
pub const SHELL_ENV: &str = "WIN_TOOLS_SHELL";
pub const LOG_ENV: &str = "WIN_TOOLS_LOG";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ShellPreference {
    /// `pwsh` when installed, otherwise Windows PowerShell
    #[default]
    Auto,
    Pwsh,
    Powershell,
}

#[derive(Debug, Clone)]
pub struct Settings {
    pub assets_dir: PathBuf,
    pub powershell: PowerShellHost,
}

impl Settings {
    pub fn resolve(assets_dir: Option<PathBuf>, shell: ShellPreference) -> Self {
        let powershell = match shell {
            ShellPreference::Auto => PowerShellHost::detect(),
            ShellPreference::Pwsh => PowerShellHost::new(PowerShellHost::CORE),
            ShellPreference::Powershell => PowerShellHost::new(PowerShellHost::DESKTOP),
        };

        Self {
            assets_dir: assets_dir.unwrap_or_else(default_assets_dir),
            powershell,
        }
    }

    /// Path of a bundled asset such as `start2.bin`.
    pub fn asset(&self, name: impl AsRef<Path>) -> PathBuf {
        self.assets_dir.join(name)
    }
}

/// `assets/` next to the executable, falling back to the working directory.
fn default_assets_dir() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join("assets")))
        .unwrap_or_else(|| PathBuf::from("assets"))
}
