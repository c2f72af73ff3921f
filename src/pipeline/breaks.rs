//! Line-break and punctuation rules.
//!
//! Scraped summaries lose their paragraph structure when tags are stripped:
//! `...the end.Chapter one...` runs sentences together, and the indentation
//! the site renders with CSS turns into stray spaces. These rules restore
//! line breaks and normalise the whitespace around them.

use once_cell::sync::Lazy;
use regex::Regex;

// ── Sentence breaks ──────────────────────────────────────────────────────────

static RE_RUN_ON_SENTENCE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([.?!])([0-9A-Za-z])").unwrap());

/// Insert a newline between sentence punctuation and an ASCII alphanumeric
/// character that follows it with no whitespace.
///
/// Punctuation at the end of the text or followed by whitespace is left
/// alone. The match consumes the following character, which can never be
/// punctuation itself, so a single pass finds every boundary.
pub fn insert_sentence_breaks(input: &str) -> String {
    RE_RUN_ON_SENTENCE
        .replace_all(input, "${1}\n${2}")
        .into_owned()
}

// ── Trailing period ──────────────────────────────────────────────────────────

/// Append a `.` when the text ends in a letter or digit.
pub fn enforce_trailing_period(input: &str) -> String {
    match input.chars().next_back() {
        Some(c) if c.is_alphanumeric() => format!("{input}."),
        _ => input.to_string(),
    }
}

// ── Dangling terminator ──────────────────────────────────────────────────────

/// Remove a `\n.` left at the very end of the text, typically by a phrase
/// removal that took the sentence but not its period.
pub fn strip_dangling_period(input: &str) -> String {
    input.strip_suffix("\n.").unwrap_or(input).to_string()
}

// ── Whitespace around newlines ───────────────────────────────────────────────

static RE_SPACES_BEFORE_NEWLINE: Lazy<Regex> = Lazy::new(|| Regex::new(r" +\n").unwrap());
static RE_SPACES_AFTER_NEWLINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n +").unwrap());

/// Drop the spaces that come right before a newline.
pub fn collapse_trailing_spaces(input: &str) -> String {
    RE_SPACES_BEFORE_NEWLINE.replace_all(input, "\n").into_owned()
}

/// Turn a newline followed by spaces into a newline and one tab, so
/// continuation paragraphs render indented.
pub fn indent_continuations(input: &str) -> String {
    RE_SPACES_AFTER_NEWLINE.replace_all(input, "\n\t").into_owned()
}

// ── Tests ────────────────────────────────────────────────────────────────────
