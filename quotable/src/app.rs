//! Event loop tying user input, background fetches and the store together.
//!
//! Two channels feed the loop: terminal input (lines and interrupts) and fetch
//! outcomes from the dispatcher. Crossbeam `select!` multiplexes them and every
//! state change happens here, on the loop thread, followed by a redraw.
use std::io::Write;
use std::sync::Arc;

use crossbeam_channel::{Receiver, select};
use log::{debug, info};
use quotable_common::{QuoteError, Result};

use crate::dispatcher::{FetchDispatcher, FetchOutcome};
use crate::model::intent::Intent;
use crate::model::state::QuoteListState;
use crate::source::QuoteSource;
use crate::store::QuoteStore;
use crate::view;

/// Something that happened on the terminal side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// A line typed by the user, without the trailing newline.
    Line(String),
    /// Ctrl+C.
    Interrupt,
    /// No more input will arrive (EOF or a read error).
    Closed,
}

/// Whether the loop should keep going after an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    /// Keep running.
    Continue,
    /// Stop the loop.
    Quit,
}

/// The running application.
pub struct App {
    store: QuoteStore,
    dispatcher: FetchDispatcher,
    outcome_rx: Receiver<FetchOutcome>,
    hint: Option<String>,
}

impl App {
    /// Builds the app around `source` and kicks off the initial fetch.
    pub fn start(source: Arc<dyn QuoteSource>) -> Self {
        let (dispatcher, outcome_rx) = FetchDispatcher::new(source);
        let mut app = Self {
            store: QuoteStore::new(),
            dispatcher,
            outcome_rx,
            hint: None,
        };
        app.refresh();
        app
    }

    /// Current state, for drawing and inspection.
    pub fn state(&self) -> &QuoteListState {
        self.store.state()
    }

    /// Receiving end of the fetch outcomes.
    pub fn outcomes(&self) -> &Receiver<FetchOutcome> {
        &self.outcome_rx
    }

    /// Starts a background fetch. Fetches already running are not cancelled.
    pub fn refresh(&mut self) {
        self.store.begin_refresh();
        self.dispatcher.dispatch();
    }

    /// Applies a finished fetch to the store.
    pub fn handle_outcome(&mut self, outcome: FetchOutcome) {
        debug!("Applying outcome of fetch #{}", outcome.request_id);
        self.store.finish_refresh(outcome.result);
    }

    /// Parses and applies one line of user input. Blank lines are ignored.
    pub fn handle_line(&mut self, line: &str) -> Control {
        if line.trim().is_empty() {
            return Control::Continue;
        }
        match line.parse::<Intent>() {
            Ok(intent) => {
                self.hint = None;
                self.handle_intent(intent)
            }
            Err(e) => {
                debug!("Rejected input {:?}: {}", line, e);
                self.hint = Some(e.to_string());
                Control::Continue
            }
        }
    }

    /// Applies one intent.
    pub fn handle_intent(&mut self, intent: Intent) -> Control {
        match intent {
            Intent::Refresh => {
                self.refresh();
                Control::Continue
            }
            Intent::Remove(index) => {
                if let Some(removed) = self.store.remove(index) {
                    info!("Removed quote {} {}", removed.key(index), removed);
                }
                Control::Continue
            }
            Intent::Quit => Control::Quit,
        }
    }

    /// Full screen: the rendered state plus the last input problem, if any.
    pub fn screen(&self) -> String {
        let mut screen = view::render(self.state());
        if let Some(hint) = &self.hint {
            screen.push_str(hint);
            screen.push('\n');
        }
        screen
    }

    /// Runs until the user quits, presses Ctrl+C, or closes the input.
    pub fn run<W: Write>(mut self, input_rx: Receiver<InputEvent>, out: &mut W) -> Result<()> {
        let outcome_rx = self.outcomes().clone();
        draw(out, &self.screen())?;

        loop {
            select! {
                recv(input_rx) -> msg => match msg {
                    Ok(InputEvent::Line(line)) => {
                        if self.handle_line(&line) == Control::Quit {
                            break;
                        }
                    }
                    Ok(InputEvent::Interrupt) => {
                        info!("Interrupted, shutting down");
                        break;
                    }
                    Ok(InputEvent::Closed) | Err(_) => {
                        info!("Input closed, shutting down");
                        break;
                    }
                },
                recv(outcome_rx) -> msg => match msg {
                    Ok(outcome) => self.handle_outcome(outcome),
                    Err(e) => return Err(QuoteError::ChannelRecv(e.to_string())),
                },
            }
            draw(out, &self.screen())?;
        }
        Ok(())
    }
}

fn draw<W: Write>(out: &mut W, screen: &str) -> Result<()> {
    writeln!(out, "{}", screen)?;
    write!(out, "> ")?;
    out.flush()?;
    Ok(())
}
