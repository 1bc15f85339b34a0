//! Workspace lifecycle: config bootstrap, directory materialization, and
//! delegation of software installs to a builder.

use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};
use url::Url;

use crate::adapters::filesystem;
use crate::domain::{
    AppError, BuildRequest, DerivedDir, DirPurpose, SoftwareName, WorkspaceConfig, WorkspaceLayout,
    WorkspaceName, config::render_config_content, parse_config_content,
};
use crate::ports::BuilderPort;

/// A named workspace and the config file that records its base directory.
#[derive(Debug, Clone)]
pub struct Workspace {
    config: WorkspaceConfig,
}

impl Workspace {
    pub fn new(config: WorkspaceConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &WorkspaceConfig {
        &self.config
    }

    pub fn name(&self) -> &WorkspaceName {
        &self.config.name
    }

    pub fn base_dir(&self) -> Option<&Path> {
        self.config.base_dir()
    }

    pub fn config_file(&self) -> Option<&Path> {
        self.config.config_file.as_deref()
    }

    /// Derived paths for the current base directory.
    pub fn layout(&self) -> Option<WorkspaceLayout> {
        self.config.layout()
    }

    /// Load the workspace configuration, bootstrapping it on first use.
    ///
    /// When no config file exists yet, a default one is written, the
    /// directory tree is materialized, and [`AppError::ConfigCreated`] is
    /// returned so the caller can ask the user to review it before retrying.
    /// Otherwise the file is parsed and the tree is materialized only when the
    /// base directory is missing; gaps in an existing tree are left for
    /// [`Workspace::check_structure`] to report.
    pub fn load(&mut self) -> Result<(), AppError> {
        let config_file = self
            .config
            .config_file
            .clone()
            .unwrap_or_else(|| self.config.default_config_file());
        self.config.config_file = Some(config_file.clone());

        if !config_file.is_file() {
            self.create_default_config_file(&config_file)?;
            self.init()?;
            warn!(
                path = %config_file.display(),
                "new configuration created, please review and customize before re-running the same command"
            );
            return Err(AppError::ConfigCreated { path: config_file });
        }

        self.parse_cfg()?;
        match self.base_dir() {
            Some(base_dir) if base_dir.is_dir() => Ok(()),
            _ => self.init(),
        }
    }

    /// Read the config file and apply its `dir` entry.
    pub fn parse_cfg(&mut self) -> Result<(), AppError> {
        let path = self
            .config
            .config_file
            .as_deref()
            .ok_or_else(|| AppError::config_error("configuration file is undefined"))?;

        let content = filesystem::read_to_string(path)?;
        let parsed = parse_config_content(&content)?;

        if let Some(base_dir) = parsed.base_dir {
            debug!(base_dir = %base_dir.display(), "read workspace base directory");
            self.config.base_dir = Some(base_dir);
        }
        Ok(())
    }

    /// Materialize the base directory and every derived directory that is missing.
    pub fn init(&self) -> Result<(), AppError> {
        let base_dir = self
            .base_dir()
            .ok_or_else(|| AppError::config_error("the workspace's base directory is undefined"))?;

        if !base_dir.is_dir() {
            filesystem::create_dir_all(base_dir).map_err(|source| AppError::DirectoryCreation {
                purpose: DirPurpose::Base,
                path: base_dir.to_path_buf(),
                source,
            })?;
            debug!(path = %base_dir.display(), "created workspace base directory");
        }

        let layout = WorkspaceLayout::derive(base_dir);
        for (purpose, path) in layout.entries() {
            if path.exists() {
                continue;
            }
            filesystem::create_dir(path).map_err(|source| AppError::DirectoryCreation {
                purpose: purpose.into(),
                path: path.to_path_buf(),
                source,
            })?;
            debug!(purpose = %purpose, path = %path.display(), "created workspace directory");
        }

        Ok(())
    }

    /// Verify the directories an install relies on are defined and present.
    pub fn check_structure(&self) -> Result<(), AppError> {
        self.checked_layout().map(|_| ())
    }

    fn checked_layout(&self) -> Result<WorkspaceLayout, AppError> {
        let Some(layout) = self.layout() else {
            return Err(AppError::UndefinedDirectory {
                purpose: DerivedDir::REQUIRED_FOR_INSTALL[0],
            });
        };

        for purpose in DerivedDir::REQUIRED_FOR_INSTALL {
            let path = layout.path(purpose);
            if !path.is_dir() {
                return Err(AppError::MissingDirectory { purpose, path: path.to_path_buf() });
            }
        }

        Ok(layout)
    }

    /// Hand `name` over to `builder` for fetching, building and installing.
    ///
    /// Fails before the builder is touched when the workspace structure is
    /// incomplete; builder errors are returned unchanged. On success returns
    /// the prefix the builder reported, or `install/<name>` when it reported
    /// none.
    pub fn install_software<B: BuilderPort + ?Sized>(
        &self,
        builder: &mut B,
        name: &SoftwareName,
        url: &Url,
        configure_args: &[String],
    ) -> Result<PathBuf, AppError> {
        let layout = self.checked_layout()?;
        let request =
            BuildRequest::new(&layout, name.clone(), url.clone(), configure_args.to_vec());

        info!(software = %name, url = %url, "delegating install to builder");
        builder.load(&request, true)?;
        let prefix = builder.install().into_result()?;
        Ok(prefix.unwrap_or_else(|| request.install_prefix()))
    }

    /// `install/<name>`, or `None` while the base directory is unknown.
    pub fn software_install_dir(&self, name: &SoftwareName) -> Option<PathBuf> {
        self.layout().map(|layout| layout.software_install_dir(name))
    }

    fn create_default_config_file(&mut self, config_file: &Path) -> Result<(), AppError> {
        if self.config.config_dir.as_os_str().is_empty() {
            return Err(AppError::config_error("configuration directory is undefined"));
        }

        if let Some(parent) = config_file.parent()
            && !parent.is_dir()
        {
            filesystem::create_dir_all(parent).map_err(|source| AppError::DirectoryCreation {
                purpose: DirPurpose::Config,
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let base_dir = std::path::absolute(match self.base_dir() {
            Some(path) => path.to_path_buf(),
            None => self.config.default_base_dir(),
        })?;
        if !base_dir.is_dir() {
            filesystem::create_dir_all(&base_dir).map_err(|source| {
                AppError::DirectoryCreation {
                    purpose: DirPurpose::Base,
                    path: base_dir.clone(),
                    source,
                }
            })?;
        }

        filesystem::write_synced(config_file, &render_config_content(&base_dir))?;
        info!(path = %config_file.display(), base_dir = %base_dir.display(), "created workspace configuration");

        self.config.base_dir = Some(base_dir);
        Ok(())
    }
}
