//! Error types for the shelf-summary library.
//!
//! The normaliser itself never fails: every `&str` is a valid input and each
//! stage falls through unchanged on text it does not recognise. Errors only
//! come from the edges of the crate:
//!
//! * configuration: builder validation and JSON config files
//! * publication dates that match neither the full nor the year-only form
//! * numeric packet fields (ratings, page counts) that do not parse
//!
//! All of them are reported through [`SummaryError`].

use std::path::PathBuf;
use thiserror::Error;

/// All errors returned by the shelf-summary library.
#[derive(Debug, Error)]
pub enum SummaryError {
    // ── Config errors ─────────────────────────────────────────────────────
    /// Builder validation failed.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// A config file could not be read from disk.
    #[error("Failed to read config file '{path}': {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A config document was read but is not valid JSON for [`crate::NormalizerConfig`].
    #[error("Malformed config in {origin}: {detail}")]
    ConfigParse { origin: String, detail: String },

    // ── Packet errors ─────────────────────────────────────────────────────
    /// Neither `Month D, YYYY` nor a trailing four-digit year could be parsed.
    #[error("Unparseable publication date: '{input}'")]
    UnparseableDate { input: String },

    /// A numeric book field holds something other than a number.
    #[error("Field '{field}' is not a number: '{value}'")]
    InvalidNumber { field: &'static str, value: String },
}
