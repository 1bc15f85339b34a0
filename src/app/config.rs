//! Caller-side settings: where a workspace's config and data live.

use std::path::PathBuf;

use crate::domain::{AppError, WorkspaceConfig, WorkspaceName};

/// Workspace name used when none is given.
pub const DEFAULT_WORKSPACE_NAME: &str = "buildspace";

/// Explicit locations for one workspace.
///
/// The library never consults the environment; the home-directory default is
/// applied once, by whoever builds the settings (see [`Settings::from_home`]).
#[derive(Debug, Clone)]
pub struct Settings {
    pub name: WorkspaceName,
    /// Directory holding `.{name}/workspace.conf`.
    pub config_dir: PathBuf,
    /// Directory under which `{name}_ws` is created on first run.
    pub data_root: PathBuf,
    /// Use this config file instead of `{config_dir}/.{name}/workspace.conf`.
    pub config_file: Option<PathBuf>,
}

impl Settings {
    pub fn new(name: WorkspaceName, config_dir: PathBuf, data_root: PathBuf) -> Self {
        Self { name, config_dir, data_root, config_file: None }
    }

    /// Settings rooted at `$HOME` for both the config and the data.
    pub fn from_home(name: WorkspaceName) -> Result<Self, AppError> {
        let home = home_dir()?;
        Ok(Self::new(name, home.clone(), home))
    }

    pub fn with_config_file(mut self, config_file: Option<PathBuf>) -> Self {
        self.config_file = config_file;
        self
    }

    pub fn workspace_config(&self) -> WorkspaceConfig {
        let config =
            WorkspaceConfig::new(self.name.clone(), self.config_dir.clone(), self.data_root.clone());
        match &self.config_file {
            Some(path) => config.with_config_file(path.clone()),
            None => config,
        }
    }
}

/// The user's home directory, from `$HOME`.
pub fn home_dir() -> Result<PathBuf, AppError> {
    match std::env::var_os("HOME") {
        Some(home) if !home.is_empty() => Ok(PathBuf::from(home)),
        _ => Err(AppError::config_error("HOME environment variable not set")),
    }
}
