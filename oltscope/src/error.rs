//! Error types for oltscope.
//!
//! Parsers never return these. They surface only from vendor resolution,
//! configuration validation, or the caller's [`Session`](crate::session::Session).

use thiserror::Error;

/// Main error type for oltscope operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Vendor resolution or capability errors
    #[error("Vendor error: {0}")]
    Vendor(#[from] VendorError),

    /// Errors reported by the session transport
    #[error("Session error: {0}")]
    Session(#[from] SessionError),

    /// Invalid parser or registry configuration
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}

/// Vendor registry errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VendorError {
    /// No vendor is registered under the requested key
    #[error("Unsupported OLT vendor '{key}' (supported: {})", supported.join(", "))]
    Unsupported { key: String, supported: Vec<String> },

    /// The vendor exists but does not implement an optional query
    #[error("Vendor '{vendor}' does not support {capability} queries")]
    CapabilityUnavailable {
        vendor: String,
        capability: &'static str,
    },
}

/// Errors raised by a session implementation while executing commands.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// The device rejected or failed a command
    #[error("Command '{command}' failed: {message}")]
    CommandFailed { command: String, message: String },

    /// The underlying connection failed
    #[error("Transport failure: {message}")]
    Transport { message: String },
}

/// Configuration errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// `raw_snippet_limit` must keep at least one character
    #[error("raw_snippet_limit must be greater than zero")]
    InvalidSnippetLimit,

    /// The default vendor key was blank
    #[error("default_vendor must not be empty")]
    EmptyDefaultVendor,
}

/// Result type alias using oltscope's Error.
pub type Result<T> = std::result::Result<T, Error>;
