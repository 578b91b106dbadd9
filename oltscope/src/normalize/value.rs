//! Token coercion helpers.

use std::sync::LazyLock;

use regex::Regex;

/// Placeholder devices print for an empty column.
pub const NOT_AVAILABLE: &str = "N/A";

static DECIMAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[+-]?\d+(?:\.\d+)?").expect("static regex"));

static INTEGER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d+").expect("static regex"));

/// Check whether a token is the `N/A` placeholder (case-insensitive).
pub fn is_not_available(value: &str) -> bool {
    value.trim().eq_ignore_ascii_case(NOT_AVAILABLE)
}

/// Trimmed owned value, or `None` for blank, `N/A`, or Huawei's bare `-`.
pub fn present(value: &str) -> Option<String> {
    let value = value.trim();
    if value.is_empty() || value == "-" || is_not_available(value) {
        None
    } else {
        Some(value.to_string())
    }
}

/// First signed decimal number in `value`, e.g. `-21.234(dbm)` → `-21.234`.
pub fn parse_decimal(value: &str) -> Option<f64> {
    DECIMAL.find(value)?.as_str().parse().ok()
}

/// First unsigned integer in `value`, e.g. `1180m` → `1180`.
pub fn parse_meters(value: &str) -> Option<u32> {
    INTEGER.find(value)?.as_str().parse().ok()
}

/// Join tokens with single spaces; `None` when there are none.
pub fn join_tokens(tokens: &[&str]) -> Option<String> {
    if tokens.is_empty() {
        None
    } else {
        Some(tokens.join(" "))
    }
}

/// Bounded copy of `raw` for diagnostics, cut on a character boundary.
pub fn snippet(raw: &str, limit: usize) -> String {
    raw.trim().chars().take(limit).collect()
}
