//! Pure parse/validate for `workspace.conf`.

use std::path::PathBuf;

use super::kv::{KeyValue, parse_key_values, render_key_values};
use crate::domain::AppError;

/// The only key `workspace.conf` may hold.
pub const DIR_KEY: &str = "dir";

/// Contents of a parsed `workspace.conf`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigFileContent {
    /// Last `dir` value in the file, if any.
    pub base_dir: Option<PathBuf>,
}

/// Parse `workspace.conf` content, rejecting any key other than `dir`.
///
/// A non-empty `dir` must be absolute; an empty one leaves the base
/// directory unset.
pub fn parse_config_content(content: &str) -> Result<ConfigFileContent, AppError> {
    let mut parsed = ConfigFileContent::default();

    for kv in parse_key_values(content)? {
        if kv.key != DIR_KEY {
            return Err(AppError::InvalidKey(kv.key));
        }
        let base_dir = PathBuf::from(kv.value);
        if !base_dir.as_os_str().is_empty() && !base_dir.is_absolute() {
            return Err(AppError::config_error(format!(
                "{DIR_KEY} must be an absolute path, got '{}'",
                base_dir.display()
            )));
        }
        parsed.base_dir = Some(base_dir);
    }

    Ok(parsed)
}

/// The single-line content written on first run.
pub fn render_config_content(base_dir: &std::path::Path) -> String {
    render_key_values(&[KeyValue::new(DIR_KEY, base_dir.to_string_lossy())])
}
