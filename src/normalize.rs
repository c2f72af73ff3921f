//! Summary normalisation entry points.
//!
//! [`process_summary`] is the primary entry point: it runs the default
//! [`SummaryNormalizer`] over one raw summary. Build a normaliser from a
//! custom [`NormalizerConfig`] to change the boilerplate phrases or the
//! truncation limits.
//!
//! ## Stage Order
//!
//! The eleven stages in [`Stage::ORDER`] must run in exactly that order. The
//! sentence breaks of stage 1 feed the newline rules of stages 9 and 10, the
//! period appended by stage 4 is what stage 8 splits the final sentence on,
//! and stage 6 only finds a dangling `\n.` once stage 5 has removed the
//! phrase in front of it.

use crate::config::NormalizerConfig;
use crate::pipeline::{boilerplate, breaks, identifiers, quotes, truncate};
use serde::Serialize;
use std::fmt;
use tracing::debug;

/// Normalise one raw summary with the default configuration.
///
/// Never fails: text a stage does not recognise passes through it unchanged.
///
/// ```rust
/// use shelf_summary::process_summary;
///
/// assert_eq!(
///     process_summary("He said \"Hello\"world"),
///     "He said \"Hello\"\nworld"
/// );
/// ```
pub fn process_summary(raw: &str) -> String {
    SummaryNormalizer::default().process(raw)
}

// ── Stages ───────────────────────────────────────────────────────────────

/// One pure text-to-text transform of the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    /// `end.Next` → `end.\nNext`
    SentenceBreaks,
    /// `" Hello "` → `"Hello"`
    QuoteSpacing,
    /// Leading `ASIN <code>` / `ISBN <code>` before the first sentence.
    IdentifierPrefix,
    /// Period after a final alphanumeric character.
    TrailingPeriod,
    /// Configured literal phrases.
    Boilerplate,
    /// `\n.` at the very end.
    DanglingPeriod,
    /// `"Hello"world` → `"Hello"\nworld`
    ClosingQuoteBreaks,
    /// First/last sentences mentioning an ASIN or ISBN.
    IdentifierSentences,
    /// Spaces before a newline.
    TrailingSpaces,
    /// Spaces after a newline become a tab.
    IndentContinuations,
    /// Length limit.
    Truncate,
}

impl Stage {
    /// Every stage, in the order [`SummaryNormalizer::process`] runs them.
    pub const ORDER: [Stage; 11] = [
        Stage::SentenceBreaks,
        Stage::QuoteSpacing,
        Stage::IdentifierPrefix,
        Stage::TrailingPeriod,
        Stage::Boilerplate,
        Stage::DanglingPeriod,
        Stage::ClosingQuoteBreaks,
        Stage::IdentifierSentences,
        Stage::TrailingSpaces,
        Stage::IndentContinuations,
        Stage::Truncate,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Stage::SentenceBreaks => "sentence_breaks",
            Stage::QuoteSpacing => "quote_spacing",
            Stage::IdentifierPrefix => "identifier_prefix",
            Stage::TrailingPeriod => "trailing_period",
            Stage::Boilerplate => "boilerplate",
            Stage::DanglingPeriod => "dangling_period",
            Stage::ClosingQuoteBreaks => "closing_quote_breaks",
            Stage::IdentifierSentences => "identifier_sentences",
            Stage::TrailingSpaces => "trailing_spaces",
            Stage::IndentContinuations => "indent_continuations",
            Stage::Truncate => "truncate",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// What one stage did to the text, as reported by
/// [`SummaryNormalizer::process_traced`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StageOutcome {
    pub stage: Stage,
    pub changed: bool,
    pub chars_before: usize,
    pub chars_after: usize,
}

// ── Normaliser ───────────────────────────────────────────────────────────

/// Runs the summary pipeline with a fixed configuration.
///
/// Holds no state beyond its configuration; one instance can be shared
/// across threads and reused for any number of summaries.
#[derive(Debug, Clone, Default)]
pub struct SummaryNormalizer {
    config: NormalizerConfig,
}

impl SummaryNormalizer {
    /// Create a normaliser from an already validated configuration.
    pub fn new(config: NormalizerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &NormalizerConfig {
        &self.config
    }

    /// Apply a single stage.
    pub fn apply(&self, stage: Stage, input: &str) -> String {
        match stage {
            Stage::SentenceBreaks => breaks::insert_sentence_breaks(input),
            Stage::QuoteSpacing => quotes::normalize_quote_spacing(input),
            Stage::IdentifierPrefix => identifiers::strip_identifier_prefix(input),
            Stage::TrailingPeriod => breaks::enforce_trailing_period(input),
            Stage::Boilerplate => boilerplate::remove_boilerplate(input, &self.config.boilerplate),
            Stage::DanglingPeriod => breaks::strip_dangling_period(input),
            Stage::ClosingQuoteBreaks => quotes::break_after_closing_quote(input),
            Stage::IdentifierSentences => identifiers::remove_identifier_sentences(input),
            Stage::TrailingSpaces => breaks::collapse_trailing_spaces(input),
            Stage::IndentContinuations => breaks::indent_continuations(input),
            Stage::Truncate => truncate::truncate(input, &self.config.truncation),
        }
    }

    /// Run every stage in [`Stage::ORDER`].
    pub fn process(&self, raw: &str) -> String {
        self.process_traced(raw).0
    }

    /// Run every stage and report, per stage, whether it changed the text.
    pub fn process_traced(&self, raw: &str) -> (String, Vec<StageOutcome>) {
        let mut text = raw.to_string();
        let mut outcomes = Vec::with_capacity(Stage::ORDER.len());

        for stage in Stage::ORDER {
            let next = self.apply(stage, &text);
            let outcome = StageOutcome {
                stage,
                changed: next != text,
                chars_before: text.chars().count(),
                chars_after: next.chars().count(),
            };
            if outcome.changed {
                debug!(
                    "Stage {}: {} → {} chars",
                    stage, outcome.chars_before, outcome.chars_after
                );
            }
            outcomes.push(outcome);
            text = next;
        }

        (text, outcomes)
    }
}

// ── Tests ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_covers_every_stage_once() {
        let mut names: Vec<_> = Stage::ORDER.iter().map(|s| s.name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), 11);
        assert_eq!(Stage::ORDER[0], Stage::SentenceBreaks);
        assert_eq!(Stage::ORDER[10], Stage::Truncate);
    }

    #[test]
    fn test_traced_matches_process() {
        let n = SummaryNormalizer::default();
        let raw = "ASIN B0ABCThe start.It goes \" on \"and on";
        let (text, outcomes) = n.process_traced(raw);
        assert_eq!(text, n.process(raw));
        assert_eq!(outcomes.len(), Stage::ORDER.len());
        assert!(outcomes[0].changed, "sentence break expected");
        assert!(outcomes[1].changed, "quote spacing expected");
        assert!(outcomes[2].changed, "identifier prefix expected");
        assert!(!outcomes[10].changed, "nothing to truncate");
    }

    #[test]
    fn test_traced_char_counts_chain() {
        let (_, outcomes) = SummaryNormalizer::default().process_traced("one.Two three");
        for pair in outcomes.windows(2) {
            assert_eq!(pair[0].chars_after, pair[1].chars_before);
        }
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(process_summary(""), "");
    }

    #[test]
    fn test_sentence_breaks_become_indented_paragraphs() {
        assert_eq!(
            process_summary("First part.Second part."),
            "First part.\n\tSecond part"
        );
    }

    #[test]
    fn test_custom_phrase_removed() {
        let config = NormalizerConfig::builder()
            .phrase("librarian-note", "Librarian's note: see here.")
            .build()
            .unwrap();
        let n = SummaryNormalizer::new(config);
        assert_eq!(
            n.process("Librarian's note: see here. A quiet story"),
            "A quiet story"
        );
    }

    #[test]
    fn test_stage_display() {
        assert_eq!(Stage::ClosingQuoteBreaks.to_string(), "closing_quote_breaks");
    }
}
