use crate::domain::AppError;
use crate::impl_validated_id;

/// A validated software package name, joined onto workspace paths as a
/// single component (`install/<name>`, `build/<name>`, `download/<name>`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SoftwareName(String);

impl_validated_id!(SoftwareName, true, AppError::InvalidSoftwareName);
