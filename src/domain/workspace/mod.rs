pub mod config;
pub mod layout;

pub use config::{CONFIG_FILE_NAME, WorkspaceConfig};
pub use layout::{DerivedDir, DirPurpose, WorkspaceLayout};
