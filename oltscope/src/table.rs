//! Line scanning for whitespace-tabular CLI output.
//!
//! OLT tables are meant for humans: a header, a dashed separator, then rows
//! that may wrap onto a second physical line when the terminal is narrow.
//!
//! ```text
//! IntfName   VendorID  ModelID    MAC Address    Description
//! ---------- --------- ---------- -------------- -----------
//! EPON0/8:15 PICO      E910       70a5.6add.7e1d N/A
//!     static   deregistered     power-off           <- continuation
//! ```

use std::sync::LazyLock;

use indexmap::IndexMap;
use regex::Regex;

static SEPARATOR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"-{3,}").expect("static regex"));

static DATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}[./-]\d{1,2}[./-]\d{1,2}$").expect("static regex"));

static TIME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{1,2}:\d{2}:\d{2}").expect("static regex"));

/// Check whether a line is a table separator (a run of dashes).
pub fn is_separator(line: &str) -> bool {
    SEPARATOR.is_match(line)
}

/// Case-insensitive `starts_with` on trimmed text.
pub fn starts_with_ci(line: &str, prefix: &str) -> bool {
    let line = line.trim_start();
    line.len() >= prefix.len()
        && line.is_char_boundary(prefix.len())
        && line[..prefix.len()].eq_ignore_ascii_case(prefix)
}

/// A data row found below a table separator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableRecord<'a> {
    /// The trimmed primary data line.
    pub primary: &'a str,

    /// The trimmed wrapped remainder, if the row spans two lines.
    pub continuation: Option<&'a str>,
}

impl<'a> TableRecord<'a> {
    /// Whitespace tokens of the primary line.
    pub fn primary_tokens(&self) -> Vec<&'a str> {
        self.primary.split_whitespace().collect()
    }

    /// Whitespace tokens of the continuation line (empty if none).
    pub fn continuation_tokens(&self) -> Vec<&'a str> {
        self.continuation
            .map(|line| line.split_whitespace().collect())
            .unwrap_or_default()
    }

    /// Tokens of the logical row: primary followed by continuation.
    pub fn merged_tokens(&self) -> Vec<&'a str> {
        let mut tokens = self.primary_tokens();
        tokens.extend(self.continuation_tokens());
        tokens
    }
}

/// Locate the first data row after a separator.
///
/// Blank lines are ignored. Every separator restarts the search, so rows
/// are only taken from below the last header seen. The line after the
/// primary row is its continuation when it is non-blank, not a separator,
/// and not itself a data row.
pub fn locate_record<'a, F>(raw: &'a str, is_data_line: F) -> Option<TableRecord<'a>>
where
    F: Fn(&str) -> bool,
{
    let lines: Vec<&str> = raw.lines().collect();
    let mut after_separator = false;

    for (i, line) in lines.iter().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if after_separator && is_data_line(line) {
            let continuation = lines
                .get(i + 1)
                .map(|next| next.trim())
                .filter(|next| !next.is_empty() && !is_separator(next) && !is_data_line(next));
            return Some(TableRecord {
                primary: line,
                continuation,
            });
        }
        if is_separator(line) {
            after_separator = true;
        }
    }

    None
}

/// Locate the first row whose line starts with `prefix` (case-insensitive).
pub fn locate_prefixed<'a>(raw: &'a str, prefix: &str) -> Option<TableRecord<'a>> {
    locate_record(raw, |line| starts_with_ci(line, prefix))
}

/// Lines below the last separator, or every line when there is none.
pub fn body_lines(raw: &str) -> Vec<&str> {
    let lines: Vec<&str> = raw.lines().collect();
    match lines.iter().rposition(|line| is_separator(line)) {
        Some(pos) => lines[pos + 1..].to_vec(),
        None => lines,
    }
}

/// Parse `key : value` lines into an ordered map.
///
/// Keys are lowercased with internal whitespace collapsed; the value is
/// everything after the first colon, trimmed. The first occurrence of a key
/// wins.
pub fn key_values(raw: &str) -> IndexMap<String, String> {
    let mut map = IndexMap::new();
    for line in raw.lines() {
        let Some((key, value)) = line.split_once(':') else {
            continue;
        };
        let key = key
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
            .to_ascii_lowercase();
        if key.is_empty() {
            continue;
        }
        map.entry(key).or_insert_with(|| value.trim().to_string());
    }
    map
}

/// Rejoin `date time` token pairs split by whitespace tokenization.
///
/// `["2024.03.11", "10:12:01", "N/A"]` becomes `["2024.03.11 10:12:01", "N/A"]`.
pub fn join_timestamps(tokens: &[&str]) -> Vec<String> {
    let mut joined = Vec::with_capacity(tokens.len());
    let mut i = 0;
    while i < tokens.len() {
        match tokens.get(i + 1) {
            Some(next) if DATE.is_match(tokens[i]) && TIME.is_match(next) => {
                joined.push(format!("{} {}", tokens[i], next));
                i += 2;
            }
            _ => {
                joined.push(tokens[i].to_string());
                i += 1;
            }
        }
    }
    joined
}
