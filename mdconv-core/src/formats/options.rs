//! Helpers for reading `--extra-*` style string options.

use crate::error::FormatError;
use std::collections::HashMap;

/// Read a boolean option, falling back to `default` when absent.
///
/// A present but empty value counts as `true`, matching bare flags.
pub fn parse_bool_flag(
    options: &HashMap<String, String>,
    key: &str,
    default: bool,
) -> Result<bool, FormatError> {
    match options.get(key) {
        None => Ok(default),
        Some(value) if value.is_empty() => Ok(true),
        Some(value) => match value.to_lowercase().as_str() {
            "true" | "1" | "yes" | "y" => Ok(true),
            "false" | "0" | "no" | "n" => Ok(false),
            _ => Err(FormatError::InvalidOption {
                key: key.to_string(),
                value: value.clone(),
            }),
        },
    }
}

/// Fail on the first option key the format does not understand.
pub fn reject_unknown(
    options: &HashMap<String, String>,
    format: &str,
    known: &[&str],
) -> Result<(), FormatError> {
    let mut keys: Vec<_> = options.keys().collect();
    keys.sort();
    match keys.into_iter().find(|key| !known.contains(&key.as_str())) {
        Some(key) => Err(FormatError::NotSupported(format!(
            "Format '{format}' does not accept option '{key}'"
        ))),
        None => Ok(()),
    }
}
