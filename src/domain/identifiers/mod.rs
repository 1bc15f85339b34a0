pub mod software_name;
pub mod validation;
pub mod workspace_name;

pub use software_name::SoftwareName;
pub use workspace_name::WorkspaceName;
