use std::fs;
use std::path::PathBuf;
use std::process::Command;

use tracing::{debug, warn};

use crate::adapters::filesystem;
use crate::domain::{AppError, BuildRequest, InstallReport};
use crate::ports::BuilderPort;

pub const ENV_SOFTWARE_NAME: &str = "BUILDSPACE_SOFTWARE_NAME";
pub const ENV_SOFTWARE_URL: &str = "BUILDSPACE_SOFTWARE_URL";
pub const ENV_SCRATCH_DIR: &str = "BUILDSPACE_SCRATCH_DIR";
pub const ENV_INSTALL_DIR: &str = "BUILDSPACE_INSTALL_DIR";
pub const ENV_BUILD_DIR: &str = "BUILDSPACE_BUILD_DIR";
pub const ENV_SRC_DIR: &str = "BUILDSPACE_SRC_DIR";

/// Delegates installs to an external builder program.
///
/// The request is exported through `BUILDSPACE_*` environment variables and
/// the configure arguments are passed after any fixed leading arguments.
#[derive(Debug, Clone)]
pub struct CommandBuilder {
    program: PathBuf,
    leading_args: Vec<String>,
    request: Option<BuildRequest>,
    persistent: bool,
}

impl CommandBuilder {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self { program: program.into(), leading_args: Vec::new(), request: None, persistent: true }
    }

    /// Arguments placed before the configure arguments on every run.
    pub fn with_leading_args(mut self, args: Vec<String>) -> Self {
        self.leading_args = args;
        self
    }

    fn run(&self, request: &BuildRequest) -> Result<(), AppError> {
        let build_error = |details: String| AppError::Build {
            software: request.name.to_string(),
            details,
        };

        let mut command = Command::new(&self.program);
        command
            .args(&self.leading_args)
            .args(&request.configure_args)
            .current_dir(&request.build_dir)
            .env(ENV_SOFTWARE_NAME, request.name.as_str())
            .env(ENV_SOFTWARE_URL, request.url.as_str())
            .env(ENV_SCRATCH_DIR, &request.scratch_dir)
            .env(ENV_INSTALL_DIR, &request.install_dir)
            .env(ENV_BUILD_DIR, &request.build_dir)
            .env(ENV_SRC_DIR, &request.src_path);

        debug!(program = %self.program.display(), software = %request.name, "running builder");
        let output = command.output().map_err(|e| {
            build_error(format!("failed to run {}: {}", self.program.display(), e))
        })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            return Err(build_error(if stderr.is_empty() {
                format!("{} exited with {}", self.program.display(), output.status)
            } else {
                stderr
            }));
        }

        Ok(())
    }
}

impl BuilderPort for CommandBuilder {
    fn load(&mut self, request: &BuildRequest, persistent: bool) -> Result<(), AppError> {
        filesystem::create_dir_all(&request.build_dir)?;
        self.request = Some(request.clone());
        self.persistent = persistent;
        Ok(())
    }

    fn install(&mut self) -> InstallReport {
        let Some(request) = self.request.as_ref() else {
            return InstallReport::failure(AppError::config_error(
                "builder was not loaded before install",
            ));
        };

        let result = self.run(request);

        if !self.persistent
            && let Err(err) = fs::remove_dir_all(&request.build_dir)
        {
            warn!(path = %request.build_dir.display(), error = %err, "failed to remove build directory");
        }

        match result {
            Ok(()) => InstallReport::success(request.install_prefix()),
            Err(err) => InstallReport::failure(err),
        }
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use crate::domain::{SoftwareName, WorkspaceLayout};
    use std::path::Path;
    use tempfile::TempDir;
    use url::Url;

    fn shell_builder(script: &str) -> CommandBuilder {
        CommandBuilder::new("sh").with_leading_args(vec![
            "-c".to_string(),
            script.to_string(),
            "builder".to_string(),
        ])
    }

    fn request(base: &Path) -> BuildRequest {
        let layout = WorkspaceLayout::derive(base);
        BuildRequest::new(
            &layout,
            SoftwareName::new("hwloc").unwrap(),
            Url::parse("https://example.org/hwloc.tar.gz").unwrap(),
            vec!["--enable-debug".to_string()],
        )
    }

    #[test]
    fn install_before_load_fails() {
        let mut builder = shell_builder("exit 0");
        let report = builder.install();
        assert!(matches!(report.error, Some(AppError::Configuration(_))));
    }

    #[test]
    fn exports_request_to_program() {
        let dir = TempDir::new().expect("failed to create temp dir");
        let out = dir.path().join("seen.txt");
        let request = request(&dir.path().join("ws"));
        let mut builder = shell_builder(&format!(
            "echo \"$BUILDSPACE_SOFTWARE_NAME $BUILDSPACE_SOFTWARE_URL $BUILDSPACE_SRC_DIR $1\" > '{}'",
            out.display()
        ));

        builder.load(&request, true).unwrap();
        let report = builder.install();

        assert!(report.error.is_none(), "unexpected error: {:?}", report.error);
        assert_eq!(report.prefix, Some(request.install_dir.join("hwloc")));
        let seen = fs::read_to_string(&out).unwrap();
        assert_eq!(
            seen.trim(),
            format!(
                "hwloc https://example.org/hwloc.tar.gz {} --enable-debug",
                request.src_path.display()
            )
        );
        assert!(request.build_dir.is_dir());
    }

    #[test]
    fn runs_inside_build_dir() {
        let dir = TempDir::new().expect("failed to create temp dir");
        let request = request(&dir.path().join("ws"));
        let mut builder = shell_builder("touch configured");

        builder.load(&request, true).unwrap();
        assert!(builder.install().error.is_none());
        assert!(request.build_dir.join("configured").is_file());
    }

    #[test]
    fn failing_program_reports_stderr() {
        let dir = TempDir::new().expect("failed to create temp dir");
        let request = request(&dir.path().join("ws"));
        let mut builder = shell_builder("echo 'configure: error: no compiler' >&2; exit 3");

        builder.load(&request, true).unwrap();

        match builder.install().error {
            Some(AppError::Build { software, details }) => {
                assert_eq!(software, "hwloc");
                assert_eq!(details, "configure: error: no compiler");
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn missing_program_is_a_build_error() {
        let dir = TempDir::new().expect("failed to create temp dir");
        let request = request(&dir.path().join("ws"));
        let mut builder = CommandBuilder::new(dir.path().join("no-such-builder"));

        builder.load(&request, true).unwrap();
        assert!(matches!(builder.install().error, Some(AppError::Build { .. })));
    }

    #[test]
    fn non_persistent_load_removes_build_dir() {
        let dir = TempDir::new().expect("failed to create temp dir");
        let request = request(&dir.path().join("ws"));
        let mut builder = shell_builder("exit 0");

        builder.load(&request, false).unwrap();
        assert!(builder.install().error.is_none());
        assert!(!request.build_dir.exists());
    }
}
