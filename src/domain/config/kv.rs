//! Line-oriented `key=value` format used by `workspace.conf`.

use crate::domain::AppError;

/// One `key=value` pair, in file order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyValue {
    pub key: String,
    pub value: String,
}

impl KeyValue {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self { key: key.into(), value: value.into() }
    }
}

/// Parse `key=value` lines.
///
/// Blank lines and `#` comments are skipped. Keys are trimmed and must be
/// non-empty; values are trimmed and split at the first `=` only.
pub fn parse_key_values(content: &str) -> Result<Vec<KeyValue>, AppError> {
    let mut pairs = Vec::new();

    for (index, raw) in content.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let malformed =
            || AppError::MalformedConfigLine { line: index + 1, content: raw.to_string() };

        let (key, value) = line.split_once('=').ok_or_else(malformed)?;
        let key = key.trim();
        if key.is_empty() {
            return Err(malformed());
        }

        pairs.push(KeyValue::new(key, value.trim()));
    }

    Ok(pairs)
}

/// Render pairs as `key=value` lines, each newline-terminated.
pub fn render_key_values(pairs: &[KeyValue]) -> String {
    pairs.iter().map(|kv| format!("{}={}\n", kv.key, kv.value)).collect()
}
