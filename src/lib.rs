//! buildspace: bootstrap build workspaces and delegate software installs to an external builder.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use adapters::CommandBuilder;
pub use app::api::{
    WorkspaceSummary, check_workspace, init_workspace, install_software, load_workspace, show,
    software_install_dir,
};
pub use app::{Settings, Workspace};
pub use domain::{
    AppError, BuildRequest, DerivedDir, InstallReport, SoftwareName, WorkspaceConfig,
    WorkspaceLayout, WorkspaceName,
};
pub use ports::BuilderPort;
