use std::path::{Path, PathBuf};

use crate::domain::WorkspaceName;

use super::layout::WorkspaceLayout;

/// File name of the workspace config inside `.{name}/`.
pub const CONFIG_FILE_NAME: &str = "workspace.conf";

/// Where a workspace's config lives and where its data goes.
///
/// The caller supplies every location explicitly: `config_dir` holds the
/// `.{name}/workspace.conf` file and `default_root` is the directory under
/// which `{name}_ws` is created when no base directory is known yet.
#[derive(Debug, Clone)]
pub struct WorkspaceConfig {
    pub name: WorkspaceName,
    pub config_dir: PathBuf,
    pub default_root: PathBuf,
    /// Explicit config file path; derived from `config_dir` when unset.
    pub config_file: Option<PathBuf>,
    /// Root of all workspace data; read from the config file when unset.
    pub base_dir: Option<PathBuf>,
}

impl WorkspaceConfig {
    pub fn new(name: WorkspaceName, config_dir: PathBuf, default_root: PathBuf) -> Self {
        Self { name, config_dir, default_root, config_file: None, base_dir: None }
    }

    pub fn with_base_dir(mut self, base_dir: impl Into<PathBuf>) -> Self {
        self.base_dir = Some(base_dir.into());
        self
    }

    pub fn with_config_file(mut self, config_file: impl Into<PathBuf>) -> Self {
        self.config_file = Some(config_file.into());
        self
    }

    /// `{config_dir}/.{name}`
    pub fn config_subdir(&self) -> PathBuf {
        self.config_dir.join(self.name.config_dir_name())
    }

    /// `{config_dir}/.{name}/workspace.conf`
    pub fn default_config_file(&self) -> PathBuf {
        self.config_subdir().join(CONFIG_FILE_NAME)
    }

    /// `{default_root}/{name}_ws`
    pub fn default_base_dir(&self) -> PathBuf {
        self.default_root.join(self.name.default_base_dir_name())
    }

    /// The base directory, treating an empty path as unset.
    pub fn base_dir(&self) -> Option<&Path> {
        self.base_dir.as_deref().filter(|path| !path.as_os_str().is_empty())
    }

    /// Derived paths for the current base directory, recomputed on every call.
    pub fn layout(&self) -> Option<WorkspaceLayout> {
        self.base_dir().map(WorkspaceLayout::derive)
    }
}
