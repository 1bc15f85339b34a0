use std::path::PathBuf;

use url::Url;

use crate::adapters::CommandBuilder;
use crate::app::config::Settings;
use crate::domain::{AppError, SoftwareName};

pub struct InstallArgs {
    pub software: SoftwareName,
    pub url: Url,
    pub builder: PathBuf,
    pub builder_args: Vec<String>,
    pub configure_args: Vec<String>,
}

pub fn run_install(settings: &Settings, args: InstallArgs) -> Result<(), AppError> {
    let mut builder = CommandBuilder::new(args.builder).with_leading_args(args.builder_args);
    let prefix = crate::app::api::install_software(
        settings,
        &mut builder,
        &args.software,
        &args.url,
        &args.configure_args,
    )?;
    println!("✅ Installed {} into {}", args.software, prefix.display());
    Ok(())
}

pub fn run_prefix(settings: &Settings, software: &SoftwareName) -> Result<(), AppError> {
    let dir = crate::app::api::software_install_dir(settings, software)?;
    println!("{}", dir.display());
    Ok(())
}
