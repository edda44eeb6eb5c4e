//! Common utilities for formatters.
//!
//! Responsibilities:
//! - Standardized missing/null value handling.
//! - Writing formatted output to stdout.

use anyhow::Result;
use std::io::Write;

/// String shown for missing/null values in table and CSV output.
pub const DEFAULT_MISSING_VALUE: &str = "N/A";

/// The contained string, or [`DEFAULT_MISSING_VALUE`].
pub fn format_missing(opt: Option<&str>) -> &str {
    opt.unwrap_or(DEFAULT_MISSING_VALUE)
}

/// The value's `Display`, or [`DEFAULT_MISSING_VALUE`].
pub fn format_missing_display<T: std::fmt::Display>(opt: Option<T>) -> String {
    opt.map(|v| v.to_string())
        .unwrap_or_else(|| DEFAULT_MISSING_VALUE.to_string())
}

/// Truncate `value` to `width` characters, marking the cut with `...`.
pub fn truncate(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        return value.to_string();
    }
    let keep = width.saturating_sub(3);
    let mut out: String = value.chars().take(keep).collect();
    out.push_str("...");
    out
}

/// Print formatted output to stdout.
pub fn output_result(output: &str) -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(output.as_bytes())?;
    if !output.ends_with('\n') {
        stdout.write_all(b"\n")?;
    }
    stdout.flush()?;
    Ok(())
}
