//! Command implementations - one module per area, business logic only.
//!
//! Every service receives a [`Ctx`] carrying the seams to the outside world
//! (child processes, registry, prompts) so it can run against fakes in tests.

pub mod auto_logon;
pub mod bloat;
pub mod choco;
pub mod environment;
pub mod files;
pub mod firewall;
pub mod scripts;
pub mod start_menu;
pub mod tweaks;

use crate::config::Settings;
use crate::console::{Log, Prompter};
use crate::domain::{AppError, Result};
use crate::repositories::registry::RegistryStore;
use crate::repositories::shell::CommandRunner;
use std::path::PathBuf;

pub struct Ctx<'a> {
    pub settings: &'a Settings,
    pub runner: &'a dyn CommandRunner,
    pub registry: &'a dyn RegistryStore,
    pub prompt: &'a mut dyn Prompter,
    pub elevated: bool,
}

impl Ctx<'_> {
    pub fn require_admin(&self) -> Result<()> {
        if self.elevated {
            return Ok(());
        }
        Log::info("Please run in an elevated PowerShell session, or pass --elevate.");
        Err(AppError::PermissionDenied(
            "administrator privileges are required".to_string(),
        ))
    }

    /// Use the given path or ask for one.
    pub fn path_or_ask(&mut self, given: Option<PathBuf>, question: &str) -> Result<PathBuf> {
        match given {
            Some(path) => Ok(path),
            None => self.prompt.input(question).map(PathBuf::from),
        }
    }
}
