use std::io;
use std::path::PathBuf;

use thiserror::Error;

use super::workspace::{DerivedDir, DirPurpose};

/// Library-wide error type for buildspace operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue (unset config file, unset config dir, ...).
    #[error("{0}")]
    Configuration(String),

    /// Workspace name is not usable as a directory name.
    #[error("Invalid workspace name '{0}': must be alphanumeric with hyphens or underscores")]
    InvalidWorkspaceName(String),

    /// Software name is not usable as a single path component.
    #[error(
        "Invalid software name '{0}': must be alphanumeric with hyphens, underscores, or periods"
    )]
    InvalidSoftwareName(String),

    /// A workspace directory could not be created.
    #[error("unable to create the workspace's {purpose} directory {}: {source}", .path.display())]
    DirectoryCreation {
        purpose: DirPurpose,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The config file holds a key other than `dir`.
    #[error("invalid key ({0})")]
    InvalidKey(String),

    /// The key-value loader could not read a line.
    #[error("malformed configuration line {line}: '{content}'")]
    MalformedConfigLine { line: usize, content: String },

    /// First-run bootstrap: a default config was just written and needs review.
    #[error("new configuration file created ({}), it needs review", .path.display())]
    ConfigCreated { path: PathBuf },

    /// A workspace directory is not defined because the base directory is unset.
    #[error("{purpose} directory is undefined")]
    UndefinedDirectory { purpose: DerivedDir },

    /// A workspace directory does not exist on disk.
    #[error("{purpose} directory {} does not exist", .path.display())]
    MissingDirectory { purpose: DerivedDir, path: PathBuf },

    /// The external builder failed.
    #[error("Builder failed for '{software}': {details}")]
    Build { software: String, details: String },

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    /// True for the first-run "config created, review it" result of `load`.
    pub fn is_bootstrap_signal(&self) -> bool {
        matches!(self, AppError::ConfigCreated { .. })
    }
}
