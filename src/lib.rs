//! Windows setup and maintenance toolbox.
//!
//! `cli` declares the command line, `commands` dispatches it to `services`,
//! which talk to the system only through the seams in `repositories`.

pub mod cli;
pub mod commands;
pub mod config;
pub mod console;
pub mod domain;
pub mod logging;
pub mod repositories;
pub mod services;

pub use crate::domain::{AppError, Result};

pub mod prelude {
    pub use crate::config::Settings;
    pub use crate::domain::{AppError, BatchReport, Result, Scope};
    pub use crate::repositories::registry::{RegistryStore, SystemRegistry};
    pub use crate::repositories::shell::{CommandRunner, ShellCommand, SystemRunner};
    pub use crate::services::Ctx;
}
