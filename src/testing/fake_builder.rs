use std::path::PathBuf;

use crate::domain::{AppError, BuildRequest, InstallReport};
use crate::ports::BuilderPort;

/// Records every call and returns a scripted result.
#[derive(Default)]
pub struct FakeBuilder {
    pub loads: Vec<(BuildRequest, bool)>,
    pub installs: usize,
    pub load_error: Option<AppError>,
    pub install_error: Option<AppError>,
    /// Prefix reported on success instead of the request's `install/<name>`.
    pub reported_prefix: Option<PathBuf>,
}

impl FakeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_install(error: AppError) -> Self {
        Self { install_error: Some(error), ..Self::default() }
    }

    pub fn failing_load(error: AppError) -> Self {
        Self { load_error: Some(error), ..Self::default() }
    }

    pub fn reporting_prefix(prefix: impl Into<PathBuf>) -> Self {
        Self { reported_prefix: Some(prefix.into()), ..Self::default() }
    }

    pub fn was_invoked(&self) -> bool {
        !self.loads.is_empty() || self.installs > 0
    }

    pub fn last_request(&self) -> Option<&BuildRequest> {
        self.loads.last().map(|(request, _)| request)
    }
}

impl BuilderPort for FakeBuilder {
    fn load(&mut self, request: &BuildRequest, persistent: bool) -> Result<(), AppError> {
        self.loads.push((request.clone(), persistent));
        match self.load_error.take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    fn install(&mut self) -> InstallReport {
        self.installs += 1;
        if let Some(err) = self.install_error.take() {
            return InstallReport::failure(err);
        }
        let prefix = self
            .reported_prefix
            .clone()
            .or_else(|| self.last_request().map(BuildRequest::install_prefix));
        InstallReport { prefix, error: None }
    }
}
