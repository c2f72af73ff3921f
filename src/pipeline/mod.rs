//! Pipeline stages for summary normalisation.
//!
//! Each submodule holds pure `&str → String` transforms for one concern.
//! Keeping stages separate makes each independently testable; the order they
//! run in is owned by [`crate::normalize::Stage::ORDER`].
//!
//! ## Data Flow
//!
//! ```text
//! raw ─▶ breaks ─▶ quotes ─▶ identifiers ─▶ breaks ─▶ boilerplate ─▶ breaks
//!      (sentence)  (spacing)  (prefix)      (period)   (phrases)    (dangling)
//!
//!     ─▶ quotes ─▶ identifiers ─▶ breaks ─▶ truncate ─▶ clean
//!      (closing)   (sentences)   (spaces,   (limit)
//!                                 tabs)
//! ```
//!
//! 1. [`breaks`]: sentence newlines, trailing period, dangling `\n.`,
//!    whitespace before and after newlines
//! 2. [`quotes`]: quote-aware spacing and closing-quote newlines
//! 3. [`identifiers`]: ASIN/ISBN prefixes and sentences
//! 4. [`boilerplate`]: literal phrases from [`crate::NormalizerConfig`]
//! 5. [`truncate`]: length limit for the destination field

pub mod boilerplate;
pub mod breaks;
pub mod identifiers;
pub mod quotes;
pub mod truncate;
