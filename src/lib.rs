//! # shelf-summary
//!
//! Normalise book summaries scraped from a book-catalogue page into clean,
//! display-ready prose for a reading-list database.
//!
//! ## Why this crate?
//!
//! Summary text extracted from the page HTML is messy: sentences run into
//! each other where paragraph tags used to be, quotations carry stray
//! padding, edition identifiers (`ASIN B00…`, `ISBN 978…`) are glued to the
//! first word, the site injects fixed boilerplate, and the destination field
//! holds at most 2000 characters. The normaliser fixes all of that with a
//! fixed sequence of deterministic string rules.
//!
//! ## Pipeline Overview
//!
//! ```text
//! raw summary
//!  │
//!  ├─  1. Sentence breaks      end.Next        → end.\nNext
//!  ├─  2. Quote spacing        " Hi "          → "Hi"
//!  ├─  3. Identifier prefix    ASIN B0XThe…    → The…
//!  ├─  4. Trailing period      …the end        → …the end.
//!  ├─  5. Boilerplate          configured literal phrases removed
//!  ├─  6. Dangling period      …\n.            → …
//!  ├─  7. Closing-quote breaks "Hi"there       → "Hi"\nthere
//!  ├─  8. Identifier sentences first/last sentence naming an ASIN/ISBN dropped
//!  ├─  9. Trailing spaces      a   \n          → a\n
//!  ├─ 10. Indentation          \n   b          → \n\tb
//!  └─ 11. Truncate             > 2000 chars    → 1995 chars + " ..."
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use shelf_summary::{process_summary, NormalizerConfig, SummaryNormalizer};
//!
//! let clean = process_summary("ISBN 9780000000000The hero leaves home.She returns.");
//! assert_eq!(clean, "The hero leaves home.\n\tShe returns");
//!
//! // Custom phrases and limits
//! let config = NormalizerConfig::builder()
//!     .phrase("sponsored", "Sponsored edition.")
//!     .build()
//!     .unwrap();
//! let normalizer = SummaryNormalizer::new(config);
//! assert_eq!(normalizer.process("Sponsored edition. A tale"), "A tale");
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `cli`   | on      | Enables the `shelf-summary` binary (clap + anyhow + tracing-subscriber) |
//!
//! Disable `cli` when using only the library:
//! ```toml
//! shelf-summary = { version = "0.1", default-features = false }
//! ```

// ── Modules ──────────────────────────────────────────────────────────────

pub mod config;
pub mod dates;
pub mod error;
pub mod names;
pub mod normalize;
pub mod packet;
pub mod pipeline;

// ── Re-exports ───────────────────────────────────────────────────────────

pub use config::{BoilerplatePhrase, NormalizerConfig, NormalizerConfigBuilder, TruncationLimits};
pub use dates::{iso_date, parse_publication_date};
pub use error::SummaryError;
pub use names::sort_name;
pub use normalize::{process_summary, Stage, StageOutcome, SummaryNormalizer};
pub use packet::{BookPacket, Cover, PageUpdate, ScrapedBook};
