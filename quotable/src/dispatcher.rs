//! Running fetches off the event loop thread.
//!
//! Every dispatched request gets its own short-lived worker thread. The worker
//! only calls the `QuoteSource` and hands the outcome back through a channel;
//! the store itself is touched exclusively by the thread draining that channel.
use std::sync::Arc;
use std::thread;

use crossbeam_channel::{Receiver, Sender, unbounded};
use log::{debug, info};
use quotable_common::{Quote, Result};

use crate::source::QuoteSource;

/// Result of one fetch, tagged with the request number that produced it.
#[derive(Debug)]
pub struct FetchOutcome {
    /// Sequence number returned by [`FetchDispatcher::dispatch`].
    pub request_id: u64,
    /// What the source returned.
    pub result: Result<Quote>,
}

/// Spawns fetch workers and collects their outcomes on one channel.
pub struct FetchDispatcher {
    source: Arc<dyn QuoteSource>,
    outcome_tx: Sender<FetchOutcome>,
    next_id: u64,
}

impl FetchDispatcher {
    /// Creates a dispatcher together with the receiving end of its outcome channel.
    pub fn new(source: Arc<dyn QuoteSource>) -> (Self, Receiver<FetchOutcome>) {
        let (outcome_tx, outcome_rx) = unbounded::<FetchOutcome>();
        let dispatcher = Self {
            source,
            outcome_tx,
            next_id: 0,
        };
        (dispatcher, outcome_rx)
    }

    /// Starts one fetch in the background and returns its request number.
    /// Requests already in flight are left alone.
    pub fn dispatch(&mut self) -> u64 {
        self.next_id += 1;
        let request_id = self.next_id;
        let source = Arc::clone(&self.source);
        let outcome_tx = self.outcome_tx.clone();

        info!("Fetch #{} started", request_id);
        thread::spawn(move || {
            let result = source.fetch();
            debug!("Fetch #{} finished, ok={}", request_id, result.is_ok());
            if outcome_tx.send(FetchOutcome { request_id, result }).is_err() {
                debug!("Fetch #{} dropped: event loop already gone", request_id);
            }
        });
        request_id
    }
}
