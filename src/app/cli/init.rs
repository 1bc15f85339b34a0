//! Init command implementation.

use crate::app::config::Settings;
use crate::domain::AppError;

pub fn run_init(settings: &Settings) -> Result<(), AppError> {
    let workspace = crate::app::api::init_workspace(settings)?;
    if let Some(base_dir) = workspace.base_dir() {
        println!("✅ Workspace '{}' ready at {}", workspace.name(), base_dir.display());
    }
    Ok(())
}
