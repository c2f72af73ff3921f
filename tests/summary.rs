//! Integration tests for shelf-summary.
//!
//! These exercise the public API only: the full pipeline on realistic
//! scraped summaries, the stage-level invariants, config files on disk and
//! the packet payload.
//!
//! Run with:
//!   cargo test --test summary -- --nocapture

use shelf_summary::pipeline::{quotes, truncate};
use shelf_summary::{
    process_summary, BookPacket, NormalizerConfig, ScrapedBook, Stage, SummaryError,
    SummaryNormalizer, TruncationLimits,
};
use std::io::Write;

// ── Test helpers ─────────────────────────────────────────────────────────────

fn quote_count(s: &str) -> usize {
    s.matches('"').count()
}

/// Assert the cleaned summary passes basic display checks.
fn assert_display_ready(summary: &str, context: &str) {
    assert!(
        summary.chars().count() <= 2000,
        "[{context}] summary longer than the destination field"
    );
    assert_eq!(summary, summary.trim(), "[{context}] outer whitespace left");
    assert!(!summary.contains(" \n"), "[{context}] space before newline");
    assert!(!summary.contains("\n "), "[{context}] space after newline");
    for id in ["ASIN", "ISBN"] {
        let first = summary.split('.').next().unwrap_or("");
        assert!(!first.contains(id), "[{context}] first sentence mentions {id}");
    }
}

// ── Scenarios ────────────────────────────────────────────────────────────────

#[test]
fn test_identifier_prefix_before_prose() {
    let out = process_summary("ASIN B01234ABCD This book is great. It has twists.");
    assert_eq!(out, "This book is great. It has twists");
    assert_display_ready(&out, "prefix");
}

#[test]
fn test_identifier_prefix_glued_to_prose() {
    let out = process_summary("ASIN B01234ABCDThis book is great.It has twists.");
    assert_eq!(out, "This book is great.\n\tIt has twists");
}

#[test]
fn test_trailing_identifier_sentence_removed() {
    let out = process_summary("The ending is a real twist.ASIN 123456");
    assert_eq!(out, "The ending is a real twist");
}

#[test]
fn test_boilerplate_only_input_is_empty() {
    assert_eq!(
        process_summary("An alternate cover for this ISBN can be found here"),
        ""
    );
}

#[test]
fn test_alternate_cover_edition_removed() {
    let raw = "This is an alternate cover edition of ISBN 9780451529305.\nIt was the best of times.";
    assert_eq!(process_summary(raw), "It was the best of times");
}

#[test]
fn test_closing_quote_runs_into_word() {
    assert_eq!(
        process_summary("He said \"Hello\"world"),
        "He said \"Hello\"\nworld"
    );
}

#[test]
fn test_long_summary_truncated() {
    let out = process_summary(&"a".repeat(2500));
    assert_eq!(out.chars().count(), 1999);
    assert_eq!(out, format!("{} ...", "a".repeat(1995)));
}

#[test]
fn test_realistic_goodreads_summary() {
    let raw = "ISBN 9780441013593Set on the desert planet Arrakis, Dune is the story of \
               Paul Atreides.He and his family accept the stewardship of the planet.  \n\
               \"  The spice must flow \"said the Baron.An alternate cover for this ISBN can be found here";
    let out = process_summary(raw);
    assert_eq!(
        out,
        "Set on the desert planet Arrakis, Dune is the story of Paul Atreides.\n\
         \tHe and his family accept the stewardship of the planet.\n\
         \"The spice must flow\"\nsaid the Baron"
    );
    assert_display_ready(&out, "goodreads");
}

// ── Properties ───────────────────────────────────────────────────────────────

#[test]
fn test_clean_prose_is_a_fixed_point() {
    let inputs = [
        "This book is great. It has twists",
        "A quiet story about a lighthouse keeper",
        "She said \"yes\" and left. Nobody followed her",
        "Why would anyone stay? Nobody knows",
    ];
    for input in inputs {
        assert_eq!(process_summary(input), input, "{input:?}");
    }
}

#[test]
fn test_clean_output_is_stable_on_second_pass() {
    let raw = "ASIN B0ABCDEFGHThe first night.\"Run\"she said. Nobody ran.";
    let once = process_summary(raw);
    let twice = process_summary(&once);
    let thrice = process_summary(&twice);
    assert_eq!(twice, thrice);
}

#[test]
fn test_truncate_length_properties() {
    let limits = TruncationLimits::default();
    for len in [0, 1, 1999, 2000] {
        let text = "b".repeat(len);
        assert_eq!(truncate::truncate(&text, &limits), text, "len {len}");
    }
    for len in [2001, 2002, 4096] {
        let out = truncate::truncate(&"ü".repeat(len), &limits);
        assert_eq!(out.chars().count(), 1999, "len {len}");
        assert!(out.ends_with(" ..."), "len {len}");
    }
}

#[test]
fn test_quote_stages_preserve_quote_count() {
    let inputs = [
        "",
        "\"",
        "no quotes here",
        "a \" b \" c",
        "\"one\"two\"three",
        "  \"  \"  \"  \"  ",
        "He said \"Hello\"world and \"bye\"",
        "\"\"\"\"\"",
    ];
    for input in inputs {
        assert_eq!(
            quote_count(&quotes::normalize_quote_spacing(input)),
            quote_count(input),
            "spacing {input:?}"
        );
        assert_eq!(
            quote_count(&quotes::break_after_closing_quote(input)),
            quote_count(input),
            "breaks {input:?}"
        );
    }
}

#[test]
fn test_malformed_inputs_never_panic() {
    let inputs = [
        "",
        ".",
        "...",
        "\n.",
        "\"",
        "ASIN",
        "ISBN ",
        "!?.!?.",
        "«Bonjour» dit-il.Ça va?Oui",
        "末尾のテキスト。ASIN B0X",
        "   \n   \n   ",
    ];
    for input in inputs {
        let out = process_summary(input);
        assert!(out.chars().count() <= 2000, "{input:?}");
    }
}

#[test]
fn test_stage_order_is_fixed() {
    let names: Vec<_> = Stage::ORDER.iter().map(|s| s.name()).collect();
    assert_eq!(
        names,
        [
            "sentence_breaks",
            "quote_spacing",
            "identifier_prefix",
            "trailing_period",
            "boilerplate",
            "dangling_period",
            "closing_quote_breaks",
            "identifier_sentences",
            "trailing_spaces",
            "indent_continuations",
            "truncate",
        ]
    );
}

// ── Config files ─────────────────────────────────────────────────────────────

#[test]
fn test_config_file_replaces_phrases() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{
            "boilerplate": [
                {{ "id": "kindle", "text": "Also available as a Kindle edition." }}
            ],
            "truncation": {{ "max_chars": 40, "keep_chars": 30 }}
        }}"#
    )
    .unwrap();

    let config = NormalizerConfig::from_json_file(file.path()).unwrap();
    assert_eq!(config.boilerplate.len(), 1, "file replaces the default list");

    let normalizer = SummaryNormalizer::new(config);
    assert_eq!(
        normalizer.process("Also available as a Kindle edition. Short tale"),
        "Short tale"
    );

    let long = normalizer.process("An extremely long sentence that will not fit");
    assert_eq!(long, "An extremely long sentence tha ...");
}

#[test]
fn test_config_file_missing() {
    let err = NormalizerConfig::from_json_file("/definitely/not/here.json").unwrap_err();
    assert!(matches!(err, SummaryError::ConfigRead { .. }), "got: {err}");
}

#[test]
fn test_config_file_invalid_limits() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"{{"truncation": {{"max_chars": 10, "keep_chars": 10}}}}"#).unwrap();
    let err = NormalizerConfig::from_json_file(file.path()).unwrap_err();
    assert!(matches!(err, SummaryError::InvalidConfig(_)), "got: {err}");
}

// ── Packets ──────────────────────────────────────────────────────────────────

#[test]
fn test_packet_from_json() {
    let raw: ScrapedBook = serde_json::from_str(
        r#"{
            "goodreads_id": "5907",
            "title": "The Hobbit",
            "author": "J.R.R. Tolkien",
            "publication_info": "First published September 21, 1937",
            "rating": "4.29",
            "ratings_count": "4,123,456ratings",
            "pages_format": "366 pages, Paperback",
            "summary": "ASIN B0CABCDEFGIn a hole in the ground there lived a hobbit.",
            "genres": ["Fantasy", "Classics", "...more"]
        }"#,
    )
    .unwrap();

    let packet = BookPacket::from_scraped(raw, &SummaryNormalizer::default());
    assert_eq!(packet.sort_author, "Tolkien, J.R.R.");
    assert_eq!(packet.summary, "In a hole in the ground there lived a hobbit");

    let body = serde_json::to_value(packet.page_update(None).unwrap()).unwrap();
    let props = &body["properties"];
    assert_eq!(props["Publication Date"]["date"]["start"], "1937-09-21");
    assert_eq!(props["Number of Ratings"]["number"], 4_123_456);
    assert_eq!(props["Page Count"]["number"], 366);
    assert!(props.get("Series").is_none());
    assert!(body.get("cover").is_none());
}
