//! Output rendering for command results.

use anyhow::Result;
use serde_json::Value;

/// Renders a JSON payload pretty-printed, the way the command results are
/// shown on stdout.
pub fn render_json(value: &Value) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Pretty-prints a JSON payload to stdout.
pub fn print_json(value: &Value) -> Result<()> {
    println!("{}", render_json(value)?);
    Ok(())
}
