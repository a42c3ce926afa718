//! Pattern formatting helpers
//!
//! Renders boolean patterns as `[T,F,T]` and parses that notation back.

use crate::error::{HopfieldError, Result};

/// Render a pattern in the form `[T,T,F,F]`
pub fn format_pattern(pattern: &[bool]) -> String {
    let cells: Vec<&str> = pattern
        .iter()
        .map(|&b| if b { "T" } else { "F" })
        .collect();
    format!("[{}]", cells.join(","))
}

/// Parse a comma-separated pattern such as `T,T,F,F` or `[1,0,1]`
///
/// Accepts `T`/`F`, `1`/`0` and `true`/`false` (case-insensitive), with
/// optional surrounding brackets and whitespace.
pub fn parse_pattern(text: &str) -> Result<Vec<bool>> {
    let trimmed = text.trim();
    let inner = trimmed
        .strip_prefix('[')
        .and_then(|s| s.strip_suffix(']'))
        .unwrap_or(trimmed);

    if inner.trim().is_empty() {
        return Err(HopfieldError::InvalidPattern("empty pattern".to_string()));
    }

    inner
        .split(',')
        .map(|cell| match cell.trim().to_ascii_lowercase().as_str() {
            "t" | "1" | "true" => Ok(true),
            "f" | "0" | "false" => Ok(false),
            other => Err(HopfieldError::InvalidPattern(format!(
                "unrecognised value '{}' in '{}'",
                other, text
            ))),
        })
        .collect()
}
