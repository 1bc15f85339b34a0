//! API Facade for the application.
//!
//! Each function builds a [`Workspace`] from explicit [`Settings`], loads it,
//! and runs one operation. Loading a workspace for the first time yields
//! [`AppError::ConfigCreated`].

use std::path::PathBuf;

use serde::Serialize;
use url::Url;

use crate::app::config::Settings;
use crate::app::workspace::Workspace;
use crate::domain::{AppError, SoftwareName, WorkspaceLayout};
use crate::ports::BuilderPort;

/// Resolved locations of a loaded workspace.
#[derive(Debug, Clone, Serialize)]
pub struct WorkspaceSummary {
    pub name: String,
    pub config_file: PathBuf,
    pub base_dir: PathBuf,
    pub layout: WorkspaceLayout,
}

impl WorkspaceSummary {
    fn from_workspace(workspace: &Workspace) -> Result<Self, AppError> {
        let (Some(config_file), Some(base_dir), Some(layout)) =
            (workspace.config_file(), workspace.base_dir(), workspace.layout())
        else {
            return Err(AppError::config_error("workspace is not loaded"));
        };

        Ok(Self {
            name: workspace.name().to_string(),
            config_file: config_file.to_path_buf(),
            base_dir: base_dir.to_path_buf(),
            layout,
        })
    }
}

/// Load (or bootstrap) the workspace described by `settings`.
pub fn load_workspace(settings: &Settings) -> Result<Workspace, AppError> {
    let mut workspace = Workspace::new(settings.workspace_config());
    workspace.load()?;
    Ok(workspace)
}

/// Load the workspace and create any workspace directory that is missing.
pub fn init_workspace(settings: &Settings) -> Result<Workspace, AppError> {
    let workspace = load_workspace(settings)?;
    workspace.init()?;
    Ok(workspace)
}

/// Load the workspace and report where everything lives.
pub fn show(settings: &Settings) -> Result<WorkspaceSummary, AppError> {
    let workspace = load_workspace(settings)?;
    WorkspaceSummary::from_workspace(&workspace)
}

/// Load the workspace and verify the directories installs depend on.
pub fn check_workspace(settings: &Settings) -> Result<WorkspaceSummary, AppError> {
    let workspace = load_workspace(settings)?;
    workspace.check_structure()?;
    WorkspaceSummary::from_workspace(&workspace)
}

/// Install `name` from `url` through `builder`.
///
/// Returns the install prefix the builder reported, falling back to the
/// software's install directory.
pub fn install_software<B: BuilderPort + ?Sized>(
    settings: &Settings,
    builder: &mut B,
    name: &SoftwareName,
    url: &Url,
    configure_args: &[String],
) -> Result<PathBuf, AppError> {
    let workspace = load_workspace(settings)?;
    workspace.install_software(builder, name, url, configure_args)
}

/// Install directory of `name` inside the workspace.
pub fn software_install_dir(settings: &Settings, name: &SoftwareName) -> Result<PathBuf, AppError> {
    let workspace = load_workspace(settings)?;
    workspace
        .software_install_dir(name)
        .ok_or_else(|| AppError::config_error("the workspace's base directory is undefined"))
}
