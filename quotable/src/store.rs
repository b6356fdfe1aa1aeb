//! Owner of the quote list and its fetch state.
//!
//! A refresh is split at the point where it waits on the network:
//!
//! - `QuoteStore::begin_refresh()` — mark loading and clear the previous error.
//! - `QuoteStore::finish_refresh(outcome)` — append the quote or record the error,
//!   then clear the loading flag.
//!
//! Both halves mutate the live state held by the store, so a `remove` that lands
//! while a fetch is in flight is never lost when the fetch completes.
//! Overlapping refreshes are not coordinated: each completion appends on success,
//! any completion clears the loading flag, and an error stays visible until the
//! next refresh begins.
use chrono::Local;
use log::{debug, error, warn};
use quotable_common::{Quote, Result};

use crate::model::state::QuoteListState;

/// Single owner of [`QuoteListState`].
#[derive(Debug, Default)]
pub struct QuoteStore {
    state: QuoteListState,
}

impl QuoteStore {
    /// Empty store, not loading.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read-only view for rendering.
    pub fn state(&self) -> &QuoteListState {
        &self.state
    }

    /// First half of a refresh.
    pub fn begin_refresh(&mut self) {
        self.state.is_loading = true;
        self.state.error_message = None;
    }

    /// Second half of a refresh. Fetch errors end up in the error message and
    /// leave the list untouched.
    pub fn finish_refresh(&mut self, outcome: Result<Quote>) {
        match outcome {
            Ok(quote) => {
                debug!("Appending quote {}", quote);
                self.state.quotes.push(quote);
                self.state.last_updated = Some(Local::now());
            }
            Err(e) => {
                if e.is_fetch_error() {
                    warn!("Refresh failed: {}", e);
                } else {
                    error!("Refresh got an unusable response: {}", e);
                }
                self.state.error_message = Some(e.to_string());
            }
        }
        self.state.is_loading = false;
    }

    /// Removes whatever currently sits at `index`. Out of range is a no-op.
    pub fn remove(&mut self, index: usize) -> Option<Quote> {
        if index >= self.state.quotes.len() {
            debug!(
                "Ignoring remove({}) on a list of {}",
                index,
                self.state.quotes.len()
            );
            return None;
        }
        Some(self.state.quotes.remove(index))
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::source::QuoteSource;
    use quotable_common::QuoteError;
    use std::collections::VecDeque;
    use std::sync::Mutex;

    /// Source replaying scripted outcomes, one per call.
    pub(crate) struct ScriptedSource {
        outcomes: Mutex<VecDeque<Result<Quote>>>,
    }

    impl ScriptedSource {
        pub(crate) fn new(outcomes: Vec<Result<Quote>>) -> Self {
            Self {
                outcomes: Mutex::new(outcomes.into()),
            }
        }
    }

    impl QuoteSource for ScriptedSource {
        fn fetch(&self) -> Result<Quote> {
            self.outcomes
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Err(QuoteError::Network("script exhausted".into())))
        }
    }

    pub(crate) fn quote(text: &str) -> Quote {
        Quote::new(text, Some("Anon".into()), None)
    }

    /// Both halves of a refresh back to back on the test thread.
    fn refresh(store: &mut QuoteStore, source: &ScriptedSource) {
        store.begin_refresh();
        let outcome = source.fetch();
        store.finish_refresh(outcome);
    }

    fn texts(store: &QuoteStore) -> Vec<&str> {
        store.state().quotes().iter().map(|q| q.text.as_str()).collect()
    }

    #[test]
    fn successful_refresh_appends_one_quote() {
        let source = ScriptedSource::new(vec![Ok(quote("first")), Ok(quote("second"))]);
        let mut store = QuoteStore::new();

        refresh(&mut store, &source);
        assert_eq!(texts(&store), ["first"]);
        refresh(&mut store, &source);
        assert_eq!(texts(&store), ["first", "second"]);

        let state = store.state();
        assert!(!state.is_loading());
        assert_eq!(state.error_message(), None);
        assert!(state.last_updated().is_some());
    }

    #[test]
    fn http_failure_keeps_quotes_and_sets_error() {
        let source = ScriptedSource::new(vec![Ok(quote("kept")), Err(QuoteError::Status(500))]);
        let mut store = QuoteStore::new();
        refresh(&mut store, &source);
        refresh(&mut store, &source);

        assert_eq!(texts(&store), ["kept"]);
        let message = store.state().error_message().unwrap();
        assert!(message.contains("500"));
        assert!(!store.state().is_loading());
    }

    #[test]
    fn empty_array_keeps_quotes_and_sets_error() {
        let source = ScriptedSource::new(vec![Err(QuoteError::MalformedResponse(
            "empty array".into(),
        ))]);
        let mut store = QuoteStore::new();
        refresh(&mut store, &source);

        assert!(store.state().quotes().is_empty());
        assert!(!store.state().error_message().unwrap().is_empty());
        assert!(!store.state().is_loading());
    }

    #[test]
    fn new_attempt_clears_previous_error() {
        let mut store = QuoteStore::new();
        store.finish_refresh(Err(QuoteError::Status(502)));
        assert!(store.state().error_message().is_some());

        store.begin_refresh();
        assert!(store.state().is_loading());
        assert_eq!(store.state().error_message(), None);
    }

    #[test]
    fn remove_preserves_order_of_the_rest() {
        let mut store = QuoteStore::new();
        for text in ["a", "b", "c", "d"] {
            store.finish_refresh(Ok(quote(text)));
        }

        let removed = store.remove(1);
        assert_eq!(removed.map(|q| q.text), Some("b".to_string()));
        assert_eq!(texts(&store), ["a", "c", "d"]);
    }

    #[test]
    fn remove_out_of_range_is_noop() {
        let mut store = QuoteStore::new();
        store.finish_refresh(Ok(quote("only")));
        assert_eq!(store.remove(1), None);
        assert_eq!(texts(&store), ["only"]);
    }

    #[test]
    fn refresh_then_remove_empties_list() {
        let source = ScriptedSource::new(vec![Ok(quote("Hi"))]);
        let mut store = QuoteStore::new();
        refresh(&mut store, &source);
        store.remove(0);
        assert!(store.state().quotes().is_empty());
        assert!(store.state().is_empty_idle());
    }

    #[test]
    fn remove_during_fetch_is_not_lost() {
        let mut store = QuoteStore::new();
        store.finish_refresh(Ok(quote("a")));
        store.finish_refresh(Ok(quote("b")));

        store.begin_refresh();
        store.remove(0);
        store.finish_refresh(Ok(quote("c")));

        assert_eq!(texts(&store), ["b", "c"]);
    }

    #[test]
    fn overlapping_refreshes_complete_independently() {
        let mut store = QuoteStore::new();
        store.begin_refresh();
        store.begin_refresh();

        store.finish_refresh(Err(QuoteError::Status(429)));
        assert!(!store.state().is_loading());
        store.finish_refresh(Ok(quote("late")));

        assert_eq!(texts(&store), ["late"]);
        assert_eq!(
            store.state().error_message(),
            Some("Failed to fetch quote: HTTP status 429")
        );
    }
}
