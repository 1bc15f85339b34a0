pub mod build;
pub mod config;
pub mod error;
pub mod identifiers;
pub mod workspace;

pub use build::{BuildRequest, InstallReport};
pub use config::{ConfigFileContent, DIR_KEY, KeyValue, parse_config_content};
pub use error::AppError;
pub use identifiers::{SoftwareName, WorkspaceName};
pub use workspace::{CONFIG_FILE_NAME, DerivedDir, DirPurpose, WorkspaceConfig, WorkspaceLayout};
