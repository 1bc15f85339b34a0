use crate::domain::AppError;
use crate::impl_validated_id;

/// A validated workspace name.
///
/// The name becomes the `.{name}` config directory and the `{name}_ws`
/// default base directory, so it may not contain dots or separators.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WorkspaceName(String);

impl_validated_id!(WorkspaceName, false, AppError::InvalidWorkspaceName);

impl WorkspaceName {
    /// `.{name}`
    pub fn config_dir_name(&self) -> String {
        format!(".{}", self.0)
    }

    /// `{name}_ws`
    pub fn default_base_dir_name(&self) -> String {
        format!("{}_ws", self.0)
    }
}
