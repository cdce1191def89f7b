//! Error types for the application.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum AppError {
    #[error("Registry error: {0}")]
    Registry(String),

    #[error("File system error: {0}")]
    FileSystem(String),

    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    #[error("The {what} does not exist: {}", .path.display())]
    NotFound { what: &'static str, path: PathBuf },

    #[error("The path {first} and {second} have the same basename.")]
    DuplicateBasename { first: String, second: String },

    #[error("Failed to start `{program}`: {reason}")]
    Spawn { program: String, reason: String },

    #[error("`{command}` exited with {status}{}", stderr_suffix(.stderr))]
    CommandFailed {
        command: String,
        status: String,
        stderr: String,
    },

    #[error("An error occurred while running the script: {0}")]
    ScriptFailed(String),

    #[error("Input closed before an answer was given")]
    PromptClosed,

    #[error("Unknown registry tweak: {0} (see `set-reg --list`)")]
    UnknownTweak(String),

    #[error("{0} is only available on Windows")]
    Unsupported(&'static str),

    #[error("{0}")]
    Other(String),
}

fn stderr_suffix(stderr: &str) -> String {
    if stderr.is_empty() {
        String::new()
    } else {
        format!(": {stderr}")
    }
}

impl AppError {
    pub fn not_found(what: &'static str, path: impl Into<PathBuf>) -> Self {
        Self::NotFound {
            what,
            path: path.into(),
        }
    }
}

impl From<std::io::Error> for AppError {
    fn from(e: std::io::Error) -> Self {
        AppError::FileSystem(e.to_string())
    }
}

impl From<std::env::VarError> for AppError {
    fn from(e: std::env::VarError) -> Self {
        AppError::Other(e.to_string())
    }
}

impl From<walkdir::Error> for AppError {
    fn from(e: walkdir::Error) -> Self {
        AppError::FileSystem(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
