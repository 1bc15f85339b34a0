//! Parameters handed to the external builder and the result it reports back.

use std::path::PathBuf;

use url::Url;

use super::{AppError, SoftwareName, WorkspaceLayout};

/// Everything a builder needs to fetch, configure and install one package.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildRequest {
    pub name: SoftwareName,
    pub url: Url,
    pub scratch_dir: PathBuf,
    pub install_dir: PathBuf,
    /// `build/<name>`
    pub build_dir: PathBuf,
    /// `download/<name>`
    pub src_path: PathBuf,
    pub configure_args: Vec<String>,
}

impl BuildRequest {
    pub fn new(
        layout: &WorkspaceLayout,
        name: SoftwareName,
        url: Url,
        configure_args: Vec<String>,
    ) -> Self {
        Self {
            scratch_dir: layout.scratch.clone(),
            install_dir: layout.install.clone(),
            build_dir: layout.software_build_dir(&name),
            src_path: layout.software_src_path(&name),
            configure_args,
            name,
            url,
        }
    }

    /// `install/<name>`, where the builder is expected to install.
    pub fn install_prefix(&self) -> PathBuf {
        self.install_dir.join(self.name.as_str())
    }
}

/// Outcome of [`BuilderPort::install`](crate::ports::BuilderPort::install).
#[derive(Debug, Default)]
pub struct InstallReport {
    /// Install prefix the builder used, when it reports one.
    pub prefix: Option<PathBuf>,
    pub error: Option<AppError>,
}

impl InstallReport {
    pub fn success(prefix: impl Into<PathBuf>) -> Self {
        Self { prefix: Some(prefix.into()), error: None }
    }

    pub fn failure(error: AppError) -> Self {
        Self { prefix: None, error: Some(error) }
    }

    /// The reported prefix on success, the builder's error otherwise.
    pub fn into_result(self) -> Result<Option<PathBuf>, AppError> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(self.prefix),
        }
    }
}
