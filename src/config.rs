//! Configuration types for summary normalisation.
//!
//! Everything the pipeline treats as data rather than logic lives in
//! [`NormalizerConfig`]: the literal boilerplate phrases the source site
//! injects into summaries, and the truncation limits of the destination
//! field. New phrases are added to a config file, not to the code.
//!
//! Built via [`NormalizerConfig::builder()`] or loaded from JSON with
//! [`NormalizerConfig::from_json_file`].

use crate::error::SummaryError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// Configuration for a [`crate::SummaryNormalizer`].
///
/// # Example
/// ```rust
/// use shelf_summary::NormalizerConfig;
///
/// let config = NormalizerConfig::builder()
///     .phrase("kindle-edition", "Kindle Edition.")
///     .max_chars(1000)
///     .keep_chars(995)
///     .build()
///     .unwrap();
/// assert_eq!(config.boilerplate.len(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NormalizerConfig {
    /// Literal phrases removed from every summary, applied in list order.
    ///
    /// Matching is exact substring matching; phrases are never treated as
    /// patterns.
    pub boilerplate: Vec<BoilerplatePhrase>,

    /// Length limits applied as the final stage.
    pub truncation: TruncationLimits,
}

impl Default for NormalizerConfig {
    fn default() -> Self {
        Self {
            boilerplate: default_boilerplate(),
            truncation: TruncationLimits::default(),
        }
    }
}

impl NormalizerConfig {
    /// Create a new builder seeded with the default phrases and limits.
    pub fn builder() -> NormalizerConfigBuilder {
        NormalizerConfigBuilder {
            config: Self::default(),
        }
    }

    /// Parse and validate a JSON config document.
    ///
    /// Missing keys fall back to their defaults, so `{}` yields the default
    /// configuration and `{"boilerplate": []}` disables phrase removal.
    pub fn from_json_str(json: &str) -> Result<Self, SummaryError> {
        Self::parse(json, "inline JSON")
    }

    /// Read, parse and validate a JSON config file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, SummaryError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| SummaryError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&json, &format!("'{}'", path.display()))
    }

    fn parse(json: &str, origin: &str) -> Result<Self, SummaryError> {
        let config: Self = serde_json::from_str(json).map_err(|e| SummaryError::ConfigParse {
            origin: origin.to_string(),
            detail: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Check the invariants the pipeline relies on.
    pub fn validate(&self) -> Result<(), SummaryError> {
        let mut seen = HashSet::new();
        for phrase in &self.boilerplate {
            if phrase.id.trim().is_empty() {
                return Err(SummaryError::InvalidConfig(
                    "boilerplate phrase id must not be empty".into(),
                ));
            }
            if phrase.text.is_empty() {
                return Err(SummaryError::InvalidConfig(format!(
                    "boilerplate phrase '{}' has empty text",
                    phrase.id
                )));
            }
            if !seen.insert(phrase.id.as_str()) {
                return Err(SummaryError::InvalidConfig(format!(
                    "duplicate boilerplate phrase id '{}'",
                    phrase.id
                )));
            }
        }

        let t = &self.truncation;
        let marker_len = t.marker.chars().count();
        if t.keep_chars + marker_len > t.max_chars {
            return Err(SummaryError::InvalidConfig(format!(
                "keep_chars ({}) + marker length ({}) exceeds max_chars ({})",
                t.keep_chars, marker_len, t.max_chars
            )));
        }
        Ok(())
    }
}

/// Builder for [`NormalizerConfig`].
#[derive(Debug)]
pub struct NormalizerConfigBuilder {
    config: NormalizerConfig,
}

impl NormalizerConfigBuilder {
    /// Append a phrase to remove. Later phrases run after earlier ones.
    pub fn phrase(mut self, id: impl Into<String>, text: impl Into<String>) -> Self {
        self.config.boilerplate.push(BoilerplatePhrase::new(id, text));
        self
    }

    /// Drop every phrase, including the defaults.
    pub fn clear_phrases(mut self) -> Self {
        self.config.boilerplate.clear();
        self
    }

    pub fn max_chars(mut self, n: usize) -> Self {
        self.config.truncation.max_chars = n;
        self
    }

    pub fn keep_chars(mut self, n: usize) -> Self {
        self.config.truncation.keep_chars = n;
        self
    }

    pub fn truncation_marker(mut self, marker: impl Into<String>) -> Self {
        self.config.truncation.marker = marker.into();
        self
    }

    /// Build the configuration, validating constraints.
    pub fn build(self) -> Result<NormalizerConfig, SummaryError> {
        self.config.validate()?;
        Ok(self.config)
    }
}

// ── Phrases ──────────────────────────────────────────────────────────────

/// A literal phrase the source site inserts into summaries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoilerplatePhrase {
    /// Stable identifier, used in logs and for de-duplication.
    pub id: String,
    /// Exact text to remove.
    pub text: String,
}

impl BoilerplatePhrase {
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
        }
    }
}

/// The phrases known to appear in scraped summaries.
///
/// The second entry names one specific edition; it is kept verbatim and not
/// generalised to other ISBNs.
pub fn default_boilerplate() -> Vec<BoilerplatePhrase> {
    vec![
        BoilerplatePhrase::new(
            "alternate-cover-link",
            "An alternate cover for this ISBN can be found here",
        ),
        BoilerplatePhrase::new(
            "alternate-cover-edition-9780451529305",
            "This is an alternate cover edition of ISBN 9780451529305.\n",
        ),
    ]
}

// ── Truncation ───────────────────────────────────────────────────────────

/// Length limits for the final truncation stage, in characters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TruncationLimits {
    /// Texts longer than this are truncated. Default: 2000 (the rich-text
    /// limit of the destination page property).
    pub max_chars: usize,
    /// Characters kept from the start of a truncated text. Default: 1995.
    pub keep_chars: usize,
    /// Appended after the kept prefix. Default: `" ..."`.
    pub marker: String,
}

impl Default for TruncationLimits {
    fn default() -> Self {
        Self {
            max_chars: 2000,
            keep_chars: 1995,
            marker: " ...".to_string(),
        }
    }
}
