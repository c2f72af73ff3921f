//! Quote-aware rules.
//!
//! Both rules split the text on `"` and walk the segments left to right with
//! a two-state machine: the text starts [`QuoteState::Outside`], and every
//! quote character flips the state. A segment that runs to the end of the
//! text while `Inside` is an unterminated quotation; neither rule touches it
//! or appends a quote after it, so the number of `"` characters never
//! changes.

/// Where the scan currently is relative to a quotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuoteState {
    Outside,
    Inside,
}

impl QuoteState {
    fn flip(self) -> Self {
        match self {
            QuoteState::Outside => QuoteState::Inside,
            QuoteState::Inside => QuoteState::Outside,
        }
    }
}

// ── Quote spacing ────────────────────────────────────────────────────────────

/// Remove whitespace padding just inside quotation marks:
/// `" Hello "` becomes `"Hello"`.
///
/// Text outside quotes is not modified.
pub fn normalize_quote_spacing(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut state = QuoteState::Outside;
    let mut segments = input.split('"').peekable();
    let mut first = true;

    while let Some(segment) = segments.next() {
        if !first {
            out.push('"');
        }
        first = false;

        let terminated = segments.peek().is_some();
        match state {
            QuoteState::Inside if terminated => out.push_str(segment.trim()),
            _ => out.push_str(segment),
        }
        state = state.flip();
    }
    out
}

// ── Closing-quote breaks ─────────────────────────────────────────────────────

/// Insert a newline after a closing quote that runs straight into an ASCII
/// alphanumeric character: `"Hello"world` becomes `"Hello"\nworld`.
pub fn break_after_closing_quote(input: &str) -> String {
    let mut out = String::with_capacity(input.len() + 8);
    let mut state = QuoteState::Outside;
    let mut segments = input.split('"').peekable();

    while let Some(segment) = segments.next() {
        out.push_str(segment);
        let Some(next) = segments.peek() else {
            break;
        };
        out.push('"');
        if state == QuoteState::Inside && next.starts_with(|c: char| c.is_ascii_alphanumeric()) {
            out.push('\n');
        }
        state = state.flip();
    }
    out
}

// ── Tests ────────────────────────────────────────────────────────────────────
