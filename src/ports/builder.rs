use crate::domain::{AppError, BuildRequest, InstallReport};

/// External collaborator that fetches, configures, compiles and installs a package.
///
/// The workspace only assembles a [`BuildRequest`] and hands it over; any
/// error a builder reports is passed back to the caller unchanged.
pub trait BuilderPort {
    /// Prepare the builder for `request`.
    ///
    /// `persistent` keeps the per-software build directory after install.
    fn load(&mut self, request: &BuildRequest, persistent: bool) -> Result<(), AppError>;

    /// Run the install for the loaded request.
    fn install(&mut self) -> InstallReport;
}
