#![allow(dead_code)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub struct TestEnv {
    tmp: TempDir,
    pub assets: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let assets = tmp.path().join("assets");
        fs::create_dir_all(&assets).expect("create assets dir");
        Self { tmp, assets }
    }

    pub fn root(&self) -> &Path {
        self.tmp.path()
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.tmp.path().join(relative)
    }

    /// Write `contents` to `relative`, creating parent folders.
    pub fn write(&self, relative: &str, contents: &str) -> PathBuf {
        let path = self.path(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create parent dir");
        }
        fs::write(&path, contents).expect("write file");
        path
    }

    /// The binary with colors, banner and user configuration switched off.
    pub fn cmd(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("win-tools");
        cmd.env("NO_COLOR", "1")
            .env_remove("WIN_TOOLS_LOG")
            .env_remove("WIN_TOOLS_SHELL")
            .env("WIN_TOOLS_ASSETS", &self.assets)
            .current_dir(self.tmp.path())
            .arg("--no-banner");
        cmd
    }
}
