//! Author sort names.

/// Format an author name for sorting: `"Ursula K. Le Guin"` becomes
/// `"K. Le Guin, Ursula"`.
///
/// Only the first given name moves behind the comma. Middle names,
/// particles (`De`, `Van`) and suffixes (`Jr.`, `III`) all stay with the
/// surname part. Single-word names are returned as they are.
pub fn sort_name(name: &str) -> String {
    let mut parts = name.split_whitespace();
    let Some(first) = parts.next() else {
        return String::new();
    };
    let rest = parts.collect::<Vec<_>>().join(" ");
    if rest.is_empty() {
        first.to_string()
    } else {
        format!("{rest}, {first}")
    }
}
