//! Derived directory structure of a workspace.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::domain::SoftwareName;

/// One of the fixed subdirectories under a workspace's base directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DerivedDir {
    Download,
    Scratch,
    Install,
    Build,
    Src,
    Run,
}

impl DerivedDir {
    /// Creation order used when materializing a workspace.
    pub const ALL: [DerivedDir; 6] = [
        DerivedDir::Download,
        DerivedDir::Scratch,
        DerivedDir::Install,
        DerivedDir::Build,
        DerivedDir::Src,
        DerivedDir::Run,
    ];

    /// Directories that must exist before an install is delegated, in check order.
    pub const REQUIRED_FOR_INSTALL: [DerivedDir; 5] = [
        DerivedDir::Scratch,
        DerivedDir::Install,
        DerivedDir::Build,
        DerivedDir::Run,
        DerivedDir::Download,
    ];

    /// Directory name under the base directory.
    pub fn dir_name(&self) -> &'static str {
        match self {
            DerivedDir::Download => "download",
            DerivedDir::Scratch => "scratch",
            DerivedDir::Install => "install",
            DerivedDir::Build => "build",
            DerivedDir::Src => "src",
            DerivedDir::Run => "run",
        }
    }
}

impl fmt::Display for DerivedDir {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.dir_name())
    }
}

/// What a directory is for, used to label creation failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirPurpose {
    Config,
    Base,
    Derived(DerivedDir),
}

impl From<DerivedDir> for DirPurpose {
    fn from(dir: DerivedDir) -> Self {
        DirPurpose::Derived(dir)
    }
}

impl fmt::Display for DirPurpose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DirPurpose::Config => f.write_str("configuration"),
            DirPurpose::Base => f.write_str("base"),
            DirPurpose::Derived(dir) => dir.fmt(f),
        }
    }
}

/// The six derived paths of a workspace.
///
/// Always computed from a base directory via [`WorkspaceLayout::derive`] and
/// never stored on its own, so it cannot outlive a change of base directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WorkspaceLayout {
    pub download: PathBuf,
    pub scratch: PathBuf,
    pub build: PathBuf,
    pub install: PathBuf,
    pub src: PathBuf,
    pub run: PathBuf,
}

impl WorkspaceLayout {
    pub fn derive(base_dir: &Path) -> Self {
        Self {
            download: base_dir.join(DerivedDir::Download.dir_name()),
            scratch: base_dir.join(DerivedDir::Scratch.dir_name()),
            build: base_dir.join(DerivedDir::Build.dir_name()),
            install: base_dir.join(DerivedDir::Install.dir_name()),
            src: base_dir.join(DerivedDir::Src.dir_name()),
            run: base_dir.join(DerivedDir::Run.dir_name()),
        }
    }

    pub fn path(&self, dir: DerivedDir) -> &Path {
        match dir {
            DerivedDir::Download => &self.download,
            DerivedDir::Scratch => &self.scratch,
            DerivedDir::Install => &self.install,
            DerivedDir::Build => &self.build,
            DerivedDir::Src => &self.src,
            DerivedDir::Run => &self.run,
        }
    }

    /// `(purpose, path)` pairs in creation order.
    pub fn entries(&self) -> impl Iterator<Item = (DerivedDir, &Path)> {
        DerivedDir::ALL.into_iter().map(move |dir| (dir, self.path(dir)))
    }

    /// `install/<name>`
    pub fn software_install_dir(&self, name: &SoftwareName) -> PathBuf {
        self.install.join(name.as_str())
    }

    /// `build/<name>`
    pub fn software_build_dir(&self, name: &SoftwareName) -> PathBuf {
        self.build.join(name.as_str())
    }

    /// `download/<name>`
    pub fn software_src_path(&self, name: &SoftwareName) -> PathBuf {
        self.download.join(name.as_str())
    }
}
