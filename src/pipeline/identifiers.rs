//! ASIN/ISBN cleanup.
//!
//! The source site prepends edition identifiers to some summaries
//! (`ASIN B00ABCDEFGThe story begins...`) and appends or prepends whole
//! sentences about editions to others. The prefix is cut by pattern; the
//! sentences are found by splitting on literal `.`, which cannot tell a
//! sentence end from an abbreviation or a decimal point.

use once_cell::sync::Lazy;
use regex::Regex;

// ── Identifier prefix ────────────────────────────────────────────────────────

// Group 1 marks where the prose starts: a capital followed by a lowercase
// letter, right after the code or after spaces following it.
static RE_IDENTIFIER_PREFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:ASIN|ISBN) [A-Z0-9]+ *([A-Z][a-z])").unwrap());

/// Cut everything up to and including the first `ASIN <code>` or
/// `ISBN <code>` that is followed by the start of a sentence.
///
/// Text before the identifier is dropped as well. Without a match the input
/// is returned unchanged.
pub fn strip_identifier_prefix(input: &str) -> String {
    match RE_IDENTIFIER_PREFIX
        .captures(input)
        .and_then(|caps| caps.get(1))
    {
        Some(prose) => input[prose.start()..].to_string(),
        None => input.to_string(),
    }
}

// ── Identifier sentences ─────────────────────────────────────────────────────

fn mentions_identifier(sentence: &str) -> bool {
    sentence.contains("ASIN") || sentence.contains("ISBN")
}

fn is_blank(sentence: &str) -> bool {
    sentence.trim().is_empty()
}

/// Delete the first and the last sentence when they mention an ASIN or ISBN.
///
/// The first sentence is the text before the first `.`; when it goes,
/// newlines at the start of the second sentence go too. The last sentence is
/// the final non-blank `.`-delimited fragment, so a text that ends with a
/// period still has its closing sentence checked. The survivors are rejoined
/// with `.`, outer periods and whitespace are trimmed, and a space is put
/// after every `.\n`.
pub fn remove_identifier_sentences(input: &str) -> String {
    let mut sentences: Vec<&str> = input.split('.').collect();

    if mentions_identifier(sentences[0]) {
        sentences[0] = "";
        if let Some(next) = sentences.get_mut(1) {
            *next = next.trim_start_matches('\n');
        }
    }

    if let Some(last) = sentences.iter().rposition(|s| !is_blank(s)) {
        if mentions_identifier(sentences[last]) {
            sentences[last] = "";
        }
    }

    let joined = sentences
        .into_iter()
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(".");

    joined
        .trim_matches('.')
        .replace(".\n", ".\n ")
        .replace("..", ".")
        .trim()
        .to_string()
}

// ── Tests ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_glued_to_prose() {
        assert_eq!(
            strip_identifier_prefix("ASIN B01234ABCDThis book is great."),
            "This book is great."
        );
    }

    #[test]
    fn test_prefix_followed_by_space() {
        assert_eq!(
            strip_identifier_prefix("ISBN 9780000000000 The story."),
            "The story."
        );
    }

    #[test]
    fn test_prefix_drops_leading_text() {
        assert_eq!(
            strip_identifier_prefix("Kindle ASIN B0XYZWhen it rains"),
            "When it rains"
        );
    }

    #[test]
    fn test_prefix_requires_sentence_start() {
        let inputs = [
            "ASIN 123456",
            "ISBN can be found here",
            "ASIN B0X THE END",
            "No identifier at all",
        ];
        for input in inputs {
            assert_eq!(strip_identifier_prefix(input), input, "{input:?}");
        }
    }

    #[test]
    fn test_prefix_first_match_only() {
        assert_eq!(
            strip_identifier_prefix("ASIN AAAOne then ISBN 111Two"),
            "One then ISBN 111Two"
        );
    }

    #[test]
    fn test_removes_trailing_identifier_sentence() {
        assert_eq!(
            remove_identifier_sentences("What a twist.ASIN 123456"),
            "What a twist"
        );
    }

    #[test]
    fn test_removes_last_sentence_before_final_period() {
        assert_eq!(
            remove_identifier_sentences("What a twist.\nASIN 123456."),
            "What a twist"
        );
    }

    #[test]
    fn test_removes_first_sentence_and_next_newline() {
        assert_eq!(
            remove_identifier_sentences("ISBN 978 edition.\nThe story starts. It ends."),
            "The story starts. It ends"
        );
    }

    #[test]
    fn test_leading_period_shields_identifier_sentence() {
        assert_eq!(
            remove_identifier_sentences("...ISBN 978 reprint. The story begins"),
            "ISBN 978 reprint. The story begins"
        );
    }

    #[test]
    fn test_middle_sentence_kept() {
        assert_eq!(
            remove_identifier_sentences("One. The ISBN matters. Three."),
            "One. The ISBN matters. Three"
        );
    }

    #[test]
    fn test_single_identifier_sentence_empties() {
        assert_eq!(remove_identifier_sentences("ASIN B0000."), "");
        assert_eq!(remove_identifier_sentences("."), "");
        assert_eq!(remove_identifier_sentences(""), "");
    }

    #[test]
    fn test_rejoin_spaces_after_newline() {
        assert_eq!(remove_identifier_sentences("One.\nTwo."), "One.\n Two");
    }

    #[test]
    fn test_rejoin_collapses_empty_sentences() {
        assert_eq!(remove_identifier_sentences("Wait... what"), "Wait. what");
    }
}
