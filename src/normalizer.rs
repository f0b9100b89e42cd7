//! Input normalizer.
//!
//! Turns raw pasted text (typically the output of `adb shell pm list
//! packages`) into an ordered sequence of clean package identifiers.
//!
//! # Design
//!
//! - **Pure logic**: No I/O, no side effects - only string cleanup
//! - **Order-preserving**: First line first; deduplication is the
//!   classifier's job, not ours
//! - **Never fails**: An empty result is the caller's validation problem

/// The literal line prefix emitted by `pm list packages`.
const PACKAGE_PREFIX: &str = "package:";

/// Normalize raw pasted text into an ordered list of package identifiers.
///
/// Per line: trim whitespace, drop empty lines, strip exactly one leading
/// `package:` prefix, drop lines that become empty after stripping.
pub fn normalize_input(raw: &str) -> Vec<String> {
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| line.strip_prefix(PACKAGE_PREFIX).unwrap_or(line))
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
