//! Bundle parsing and rendering.
//!
//! Turns the secret store's output into the text of the shell files we
//! write. Keys matching the reserved prefix never make it into a script.

use serde_json::Value;
use tracing::debug;

use crate::core::domain::RawBundle;
use crate::error::ParseError;

/// Whether `key` is store-internal metadata under `prefix`.
pub fn is_reserved(key: &str, prefix: &str) -> bool {
    key.to_lowercase().starts_with(&prefix.to_lowercase())
}

/// Parse a flat JSON object into a bundle.
///
/// Blank input is an empty bundle. String values are kept as-is, other
/// scalars use their JSON text and `null` becomes an empty string.
///
/// # Errors
///
/// Returns `ParseError` for malformed JSON, a non-object document, or a
/// nested array/object value.
pub fn parse_bundle(raw: &str) -> Result<RawBundle, ParseError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(RawBundle::new());
    }

    let map = match serde_json::from_str::<Value>(raw)? {
        Value::Object(map) => map,
        other => return Err(ParseError::NotAnObject(json_kind(&other))),
    };

    let mut bundle = RawBundle::new();
    for (key, value) in map {
        let value = match value {
            Value::String(s) => s,
            Value::Null => String::new(),
            Value::Bool(b) => b.to_string(),
            Value::Number(n) => n.to_string(),
            Value::Array(_) | Value::Object(_) => return Err(ParseError::NestedValue { key }),
        };
        bundle.push(key, value);
    }

    debug!(entries = bundle.len(), "bundle parsed");
    Ok(bundle)
}

/// Render alias statements, one `alias name='value'` line per key.
///
/// Alias names are lower-cased.
pub fn render_aliases(bundle: &RawBundle, reserved_prefix: &str, starter: Option<&str>) -> String {
    let lines = bundle
        .iter()
        .filter(|(key, _)| !is_reserved(key, reserved_prefix))
        .map(|(key, value)| format!("alias {}={}", key.to_lowercase(), quote(value)))
        .collect();

    finish(starter, lines)
}

/// Render shell assignments, one `KEY='value'` line per key.
pub fn render_variables(
    bundle: &RawBundle,
    reserved_prefix: &str,
    starter: Option<&str>,
) -> String {
    let lines = bundle
        .iter()
        .filter(|(key, _)| !is_reserved(key, reserved_prefix))
        .map(|(key, value)| format!("{}={}", key, quote(value)))
        .collect();

    finish(starter, lines)
}

/// Pass env-formatted text through, dropping reserved assignments.
///
/// Every other line (comments and blanks included) is kept verbatim.
pub fn filter_env(raw: &str, reserved_prefix: &str) -> String {
    let lines = raw
        .lines()
        .filter(|line| match env_key(line) {
            Some(key) => !is_reserved(key, reserved_prefix),
            None => true,
        })
        .map(String::from)
        .collect::<Vec<_>>();

    // Trailing blank lines would otherwise pile up across syncs
    let end = lines
        .iter()
        .rposition(|l| !l.trim().is_empty())
        .map_or(0, |i| i + 1);

    finish(None, lines[..end].to_vec())
}

/// Key of an `[export ]KEY=value` line, if it is one.
fn env_key(line: &str) -> Option<&str> {
    let line = line.trim_start();
    if line.starts_with('#') {
        return None;
    }
    let line = line.strip_prefix("export ").unwrap_or(line);
    line.split_once('=').map(|(key, _)| key.trim())
}

/// Single-quote a value for POSIX shells.
fn quote(value: &str) -> String {
    format!("'{}'", value.replace('\'', r"'\''"))
}

fn finish(starter: Option<&str>, lines: Vec<String>) -> String {
    let mut out = String::from(starter.unwrap_or_default());
    out.push_str(&lines.join("\n"));
    out.push('\n');
    out
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
