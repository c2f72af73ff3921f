//! Literal boilerplate removal.
//!
//! The phrases come from [`crate::NormalizerConfig::boilerplate`]; this stage
//! only knows how to delete them.

use crate::config::BoilerplatePhrase;
use tracing::debug;

/// Remove every occurrence of each phrase, one phrase at a time in list
/// order. Matching is exact and case-sensitive.
pub fn remove_boilerplate(input: &str, phrases: &[BoilerplatePhrase]) -> String {
    let mut out = input.to_string();
    for phrase in phrases {
        if out.contains(&phrase.text) {
            debug!("Removing boilerplate phrase '{}'", phrase.id);
            out = out.replace(&phrase.text, "");
        }
    }
    out
}
