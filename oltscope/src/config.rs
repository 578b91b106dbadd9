//! Parser and registry configuration.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Default vendor key used when callers ask for `auto`.
pub const DEFAULT_VENDOR: &str = "bdcom";

/// Default cap on the raw-text snippet kept in records for diagnostics.
pub const DEFAULT_RAW_SNIPPET_LIMIT: usize = 500;

/// Settings shared by the registry and every vendor parser.
///
/// Deserializable so it can be embedded in the caller's own config file:
///
/// ```toml
/// [olt]
/// default_vendor = "huawei"
/// raw_snippet_limit = 300
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// Vendor key that `auto` resolves to.
    pub default_vendor: String,

    /// Maximum number of characters of raw output stored in `raw_data`.
    pub raw_snippet_limit: usize,
}

impl ParserConfig {
    /// Create a configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the vendor key used for `auto`.
    pub fn with_default_vendor(mut self, vendor: impl Into<String>) -> Self {
        self.default_vendor = vendor.into();
        self
    }

    /// Set the raw snippet limit.
    pub fn with_raw_snippet_limit(mut self, limit: usize) -> Self {
        self.raw_snippet_limit = limit;
        self
    }

    /// Check the configuration for values no parser can work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.default_vendor.trim().is_empty() {
            return Err(ConfigError::EmptyDefaultVendor);
        }
        if self.raw_snippet_limit == 0 {
            return Err(ConfigError::InvalidSnippetLimit);
        }
        Ok(())
    }
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            default_vendor: DEFAULT_VENDOR.to_string(),
            raw_snippet_limit: DEFAULT_RAW_SNIPPET_LIMIT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ParserConfig::default();
        assert_eq!(config.default_vendor, "bdcom");
        assert_eq!(config.raw_snippet_limit, 500);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_deserialize_fills_defaults() {
        let config: ParserConfig = serde_json::from_str(r#"{"default_vendor":"zte"}"#).unwrap();
        assert_eq!(config.default_vendor, "zte");
        assert_eq!(config.raw_snippet_limit, DEFAULT_RAW_SNIPPET_LIMIT);
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let config = ParserConfig::new().with_raw_snippet_limit(0);
        assert_eq!(config.validate(), Err(ConfigError::InvalidSnippetLimit));

        let config = ParserConfig::new().with_default_vendor("  ");
        assert_eq!(config.validate(), Err(ConfigError::EmptyDefaultVendor));
    }
}
