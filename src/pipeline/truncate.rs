//! Length limit for the destination field.
//!
//! Lengths are counted in characters (Unicode scalar values), never bytes,
//! so a cut cannot land inside a multi-byte character.

use crate::config::TruncationLimits;

/// Cut `input` to `limits.keep_chars` characters plus `limits.marker` when it
/// is longer than `limits.max_chars`; otherwise return it unchanged.
///
/// With the default limits a truncated text is always 1999 characters long.
pub fn truncate(input: &str, limits: &TruncationLimits) -> String {
    if input.chars().count() <= limits.max_chars {
        return input.to_string();
    }
    let cut = input
        .char_indices()
        .nth(limits.keep_chars)
        .map_or(input.len(), |(i, _)| i);
    format!("{}{}", &input[..cut], limits.marker)
}
