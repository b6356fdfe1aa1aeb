//! Snapshot of everything the view needs to draw.
use chrono::{DateTime, Local};
use quotable_common::Quote;

/// Quote list plus the flags describing the current fetch.
#[derive(Debug, Clone, Default)]
pub struct QuoteListState {
    pub(crate) quotes: Vec<Quote>,
    pub(crate) is_loading: bool,
    pub(crate) error_message: Option<String>,
    pub(crate) last_updated: Option<DateTime<Local>>,
}

impl QuoteListState {
    /// Quotes in insertion order.
    pub fn quotes(&self) -> &[Quote] {
        &self.quotes
    }

    /// `true` while a fetch is outstanding.
    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    /// Message of the most recent failed fetch, cleared when a new one starts.
    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    /// Local time of the last successful append.
    pub fn last_updated(&self) -> Option<DateTime<Local>> {
        self.last_updated
    }

    /// `true` when there is nothing to list and nothing on the way.
    pub fn is_empty_idle(&self) -> bool {
        self.quotes.is_empty() && !self.is_loading
    }
}
