use crate::app::api::WorkspaceSummary;
use crate::app::config::Settings;
use crate::domain::AppError;

pub fn run_show(settings: &Settings, json: bool) -> Result<(), AppError> {
    let summary = crate::app::api::show(settings)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        print_summary(&summary);
    }
    Ok(())
}

pub fn run_check(settings: &Settings) -> Result<(), AppError> {
    let summary = crate::app::api::check_workspace(settings)?;
    println!("✅ Workspace '{}' structure is complete", summary.name);
    Ok(())
}

fn print_summary(summary: &WorkspaceSummary) {
    println!("workspace: {}", summary.name);
    println!("config:    {}", summary.config_file.display());
    println!("base:      {}", summary.base_dir.display());
    for (purpose, path) in summary.layout.entries() {
        println!("  {:<9}{}", purpose.dir_name(), path.display());
    }
}
