//! CLI Adapter.

mod init;
mod install;
mod show;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::app::config::{DEFAULT_WORKSPACE_NAME, Settings, home_dir};
use crate::app::observability;
use crate::domain::{AppError, SoftwareName, WorkspaceName};

/// Exit status used when a config file was just created and needs review.
pub const EXIT_NEEDS_REVIEW: i32 = 2;

#[derive(Parser)]
#[command(name = "buildspace")]
#[command(version)]
#[command(
    about = "Bootstrap build workspaces and delegate software installs to a builder",
    long_about = None
)]
struct Cli {
    #[command(flatten)]
    workspace: WorkspaceArgs,
    /// Show debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct WorkspaceArgs {
    /// Workspace name
    #[arg(
        short,
        long,
        global = true,
        env = "BUILDSPACE_NAME",
        default_value = DEFAULT_WORKSPACE_NAME
    )]
    name: WorkspaceName,
    /// Directory holding `.<name>/workspace.conf` [default: $HOME]
    #[arg(long, global = true, env = "BUILDSPACE_CONFIG_DIR")]
    config_dir: Option<PathBuf>,
    /// Use this config file instead of `<config-dir>/.<name>/workspace.conf`
    #[arg(long, global = true, env = "BUILDSPACE_CONFIG_FILE")]
    config_file: Option<PathBuf>,
    /// Directory under which `<name>_ws` is created on first run [default: $HOME]
    #[arg(long, global = true, env = "BUILDSPACE_DATA_ROOT")]
    data_root: Option<PathBuf>,
}

impl WorkspaceArgs {
    /// Apply the `$HOME` default to whatever was not given explicitly.
    fn into_settings(self) -> Result<Settings, AppError> {
        let home = match (&self.config_dir, &self.data_root) {
            (Some(_), Some(_)) => None,
            _ => Some(home_dir()?),
        };
        let config_dir = self.config_dir.or_else(|| home.clone()).unwrap_or_default();
        let data_root = self.data_root.or(home).unwrap_or_default();

        Ok(Settings::new(self.name, config_dir, data_root).with_config_file(self.config_file))
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Create or load the workspace configuration and directory tree
    #[clap(visible_alias = "i")]
    Init,
    /// Print the workspace's config file, base directory and subdirectories
    #[clap(visible_alias = "s")]
    Show {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Verify the directories installs depend on
    Check,
    /// Install software through an external builder
    Install {
        /// Software name (becomes `install/<name>`)
        software: SoftwareName,
        /// Source archive URL
        url: url::Url,
        /// Builder program to run
        #[arg(long, env = "BUILDSPACE_BUILDER")]
        builder: PathBuf,
        /// Argument passed to the builder before the configure arguments (repeatable)
        #[arg(long = "builder-arg", allow_hyphen_values = true)]
        builder_args: Vec<String>,
        /// Extra configure arguments
        #[arg(last = true)]
        configure_args: Vec<String>,
    },
    /// Print the install directory of a piece of software
    Prefix {
        /// Software name
        software: SoftwareName,
    },
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    observability::init_tracing(cli.verbose);

    let result = cli.workspace.into_settings().and_then(|settings| match cli.command {
        Commands::Init => init::run_init(&settings),
        Commands::Show { json } => show::run_show(&settings, json),
        Commands::Check => show::run_check(&settings),
        Commands::Install { software, url, builder, builder_args, configure_args } => {
            install::run_install(
                &settings,
                install::InstallArgs { software, url, builder, builder_args, configure_args },
            )
        }
        Commands::Prefix { software } => install::run_prefix(&settings, &software),
    });

    match result {
        Ok(()) => {}
        Err(AppError::ConfigCreated { path }) => {
            eprintln!(
                "⚠️  New configuration created ({}), please review and customize before re-running the same command",
                path.display()
            );
            std::process::exit(EXIT_NEEDS_REVIEW);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
