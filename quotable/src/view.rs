//! Plain-text rendering of the quote list.
use std::fmt::Write;

use crate::model::state::QuoteListState;

/// Heading printed above everything else.
pub const TITLE: &str = "Random Quote Generator";
/// Key help shown under the title.
pub const CONTROLS: &str = "[n] New Quote   [d N] Delete Quote N   [q] Quit";
/// Shown while a fetch is outstanding.
pub const LOADING: &str = "Loading...";
/// Shown when the list is empty and nothing is loading.
pub const EMPTY: &str = "No quotes available. Type \"n\" to fetch one.";

/// Draws `state` into a string, one line per element.
pub fn render(state: &QuoteListState) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", TITLE);
    let _ = writeln!(out, "{}", CONTROLS);
    out.push('\n');

    if state.is_loading() {
        let _ = writeln!(out, "{}", LOADING);
    }
    if let Some(message) = state.error_message() {
        let _ = writeln!(out, "Error: {}", message);
    }

    if state.is_empty_idle() {
        let _ = writeln!(out, "{}", EMPTY);
    } else {
        for (index, quote) in state.quotes().iter().enumerate() {
            // on-screen numbers are what `d N` expects
            let _ = writeln!(out, "[{}] {}", index + 1, quote.text);
            if let Some(author) = &quote.author {
                let _ = writeln!(out, "    \u{2014} {}", author);
            }
        }
    }

    if let Some(at) = state.last_updated() {
        out.push('\n');
        let _ = writeln!(out, "Last updated: {}", at.format("%H:%M:%S"));
    }
    out
}
