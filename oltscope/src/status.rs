//! Status classification table.
//!
//! Maps raw vendor status tokens to one of three canonical states. The raw
//! token is always kept separately on the record for audit.
//!
//! ```text
//! online   auto-configured, registered, online, working, up, active, authenticated
//! offline  deregistered, offline, off-line, down, inactive, los, dyinggasp,
//!          dying-gasp, power-off, lost
//! unknown  anything else (syncmib, logging, authfailed, garbage, ...)
//! ```

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Tokens classified as online.
pub const ONLINE_TOKENS: &[&str] = &[
    "auto-configured",
    "registered",
    "online",
    "working",
    "up",
    "active",
    "authenticated",
];

/// Tokens classified as offline.
pub const OFFLINE_TOKENS: &[&str] = &[
    "deregistered",
    "offline",
    "off-line",
    "down",
    "inactive",
    "los",
    "dyinggasp",
    "dying-gasp",
    "power-off",
    "lost",
];

/// Canonical ONU state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OnuState {
    Online,
    Offline,
    #[default]
    Unknown,
}

impl OnuState {
    /// Classify a raw vendor token. Total and case-insensitive.
    pub fn classify(token: &str) -> Self {
        let token = token.trim().to_ascii_lowercase();
        if ONLINE_TOKENS.contains(&token.as_str()) {
            OnuState::Online
        } else if OFFLINE_TOKENS.contains(&token.as_str()) {
            OnuState::Offline
        } else {
            OnuState::Unknown
        }
    }

    /// Lowercase name as used on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            OnuState::Online => "online",
            OnuState::Offline => "offline",
            OnuState::Unknown => "unknown",
        }
    }

    pub fn is_online(&self) -> bool {
        matches!(self, OnuState::Online)
    }

    pub fn is_offline(&self) -> bool {
        matches!(self, OnuState::Offline)
    }
}

impl fmt::Display for OnuState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify a token, logging a warning when it is not in the table.
pub fn classify_logged(token: &str) -> OnuState {
    let state = OnuState::classify(token);
    if state == OnuState::Unknown {
        log::warn!("unrecognized ONU status token {:?}, classified as unknown", token);
    }
    state
}

/// Whole-word keyword matcher built from the classification table.
///
/// Longest alternatives come first so `auto-configured` wins over `up`-like
/// fragments, and word boundaries keep `registered` out of `deregistered`.
static KEYWORDS: LazyLock<Regex> = LazyLock::new(|| {
    let mut tokens: Vec<&str> = ONLINE_TOKENS
        .iter()
        .chain(OFFLINE_TOKENS.iter())
        .copied()
        .collect();
    tokens.sort_by_key(|t| std::cmp::Reverse(t.len()));
    let alternation = tokens
        .iter()
        .map(|t| regex::escape(t))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!(r"(?i)(?:^|[^\w-])({alternation})(?:$|[^\w-])")).expect("static regex")
});

/// Find the first status keyword anywhere in `text`.
///
/// Returns the matched token as written and its classification.
pub fn find_status_keyword(text: &str) -> Option<(String, OnuState)> {
    let token = KEYWORDS.captures(text)?.get(1)?.as_str();
    Some((token.to_string(), OnuState::classify(token)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_case_insensitive() {
        assert_eq!(OnuState::classify("AUTO-CONFIGURED"), OnuState::Online);
        assert_eq!(OnuState::classify("auto-configured"), OnuState::Online);
        assert_eq!(OnuState::classify("deregistered"), OnuState::Offline);
        assert_eq!(OnuState::classify("DyingGasp"), OnuState::Offline);
        assert_eq!(OnuState::classify("working"), OnuState::Online);
    }

    #[test]
    fn test_classify_total() {
        assert_eq!(OnuState::classify("garbage"), OnuState::Unknown);
        assert_eq!(OnuState::classify(""), OnuState::Unknown);
        assert_eq!(OnuState::classify("syncMib"), OnuState::Unknown);
    }

    #[test]
    fn test_keyword_word_boundaries() {
        let (token, state) = find_status_keyword("onu is deregistered now").unwrap();
        assert_eq!(token, "deregistered");
        assert_eq!(state, OnuState::Offline);

        let (token, state) = find_status_keyword("state: Auto-Configured").unwrap();
        assert_eq!(token, "Auto-Configured");
        assert_eq!(state, OnuState::Online);

        // "power-off" must not be read as "off"/"power" fragments
        let (token, _) = find_status_keyword("reason power-off").unwrap();
        assert_eq!(token, "power-off");

        assert!(find_status_keyword("nothing useful here").is_none());
        assert!(find_status_keyword("upstream").is_none());
    }

    #[test]
    fn test_serde_lowercase() {
        assert_eq!(
            serde_json::to_string(&OnuState::Offline).unwrap(),
            "\"offline\""
        );
        assert_eq!(OnuState::Online.to_string(), "online");
    }
}
