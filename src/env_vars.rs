//! `KEY=VALUE` environment block codec.
//!
//! Dokploy stores application and compose environment variables as a single
//! newline-delimited text block. Comments and blank lines do not survive a
//! parse/format round trip.

use std::collections::BTreeMap;

/// Parsed environment block. Keys are unique; formatting emits them sorted.
pub type EnvVars = BTreeMap<String, String>;

/// Parse a newline-delimited `KEY=VALUE` block.
///
/// Lines are trimmed; blank lines, `#` comments and lines without `=` are
/// dropped. Only the first `=` separates key from value.
pub fn parse_env(text: &str) -> EnvVars {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| line.split_once('='))
        .map(|(key, value)| (key.trim().to_string(), value.trim().to_string()))
        .collect()
}

/// Render variables back into a `KEY=VALUE` block, one per line.
pub fn format_env(vars: &EnvVars) -> String {
    vars.iter()
        .map(|(key, value)| format!("{}={}", key, value))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Parse then re-format, dropping comments, blanks and malformed lines.
pub fn normalize_env(text: &str) -> String {
    format_env(&parse_env(text))
}
