pub mod api;
pub mod cli;
pub mod config;
pub mod observability;
pub mod workspace;

pub use config::Settings;
pub use workspace::Workspace;
