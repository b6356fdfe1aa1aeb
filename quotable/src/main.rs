//! Quotable — a terminal quote viewer. It fetches a random quote from a public
//! HTTP API on startup, keeps every fetched quote in an in-memory list, and lets the
//! user fetch more or delete individual quotes by their on-screen number.
//!
//! Usage example (CLI):
//! ```bash
//! quotable --endpoint https://zenquotes.io/api/random --timeout-secs 10
//! ```
//!
//! Commands typed at the prompt: `n` fetches a new quote, `d N` deletes quote `N`,
//! `q` quits. Set `RUST_LOG=debug` to see fetch traces on stderr.
#![warn(missing_docs)]
mod app;
mod args;
mod dispatcher;
mod input;
mod model;
mod source;
mod store;
mod view;

use crate::app::{App, InputEvent};
use crate::args::Args;
use crate::input::start_input_thread;
use crate::source::HttpQuoteSource;
use clap::Parser;
use crossbeam_channel::unbounded;
use log::info;
use quotable_common::QuoteError;
use quotable_common::Result;
use std::io;
use std::sync::Arc;

fn main() -> Result<(), QuoteError> {
    init_logger();
    let args = Args::parse();

    let (input_tx, input_rx) = unbounded::<InputEvent>();
    {
        let input_tx = input_tx.clone();
        ctrlc::set_handler(move || {
            let _ = input_tx.send(InputEvent::Interrupt);
        })
        .map_err(|e| QuoteError::Io(io::Error::other(e)))?;
    }
    start_input_thread(input_tx);

    let source = HttpQuoteSource::new(args.source_config())?;
    info!("Fetching quotes from {}", source.endpoint());

    let app = App::start(Arc::new(source));
    let stdout = io::stdout();
    app.run(input_rx, &mut stdout.lock())
}

fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();
}
