//! Shared testing utilities for buildspace CLI tests.

use assert_cmd::Command;
use assert_fs::TempDir;
use std::fs;
use std::path::{Path, PathBuf};

/// Workspace name used by every CLI test.
pub const WORKSPACE: &str = "testws";

/// Testing harness providing an isolated `$HOME` for CLI exercises.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        fs::create_dir_all(root.path().join("home")).expect("Failed to create test home");
        Self { root }
    }

    /// Absolute path to the emulated `$HOME` directory.
    pub fn home(&self) -> PathBuf {
        self.root.path().join("home")
    }

    /// Scratch area outside `$HOME`.
    pub fn root(&self) -> &Path {
        self.root.path()
    }

    /// Build a command for invoking the compiled `buildspace` binary.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("buildspace").expect("Failed to locate buildspace binary");
        cmd.env("HOME", self.home())
            .env("BUILDSPACE_NAME", WORKSPACE)
            .env_remove("BUILDSPACE_CONFIG_DIR")
            .env_remove("BUILDSPACE_CONFIG_FILE")
            .env_remove("BUILDSPACE_DATA_ROOT")
            .env_remove("BUILDSPACE_BUILDER")
            .env_remove("BUILDSPACE_LOG")
            .env_remove("RUST_LOG");
        cmd
    }

    /// `$HOME/.testws/workspace.conf`
    pub fn config_file(&self) -> PathBuf {
        self.home().join(format!(".{WORKSPACE}")).join("workspace.conf")
    }

    /// `$HOME/testws_ws`
    pub fn base_dir(&self) -> PathBuf {
        self.home().join(format!("{WORKSPACE}_ws"))
    }

    /// Run `init` through the first-run review step so the workspace is usable.
    pub fn bootstrap(&self) {
        self.cli().arg("init").assert().code(2);
        self.cli().arg("init").assert().success();
    }

    /// Assert that all six workspace subdirectories exist.
    pub fn assert_structure_exists(&self) {
        for dir in ["download", "scratch", "build", "install", "src", "run"] {
            assert!(self.base_dir().join(dir).is_dir(), "{dir} directory should exist");
        }
    }
}
