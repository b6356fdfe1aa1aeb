//! Forwarding terminal input to the event loop.
//!
//! Lines are read as raw bytes and decoded lossily, so a line that is not valid
//! UTF-8 reaches the loop as an ordinary (unparseable) command instead of ending
//! the input stream. When reading stops for any reason an `InputEvent::Closed`
//! is sent; the channel itself stays open because the Ctrl+C handler holds a sender.
use std::io::{self, BufRead};
use std::thread;

use crossbeam_channel::Sender;
use log::{debug, error};

use crate::app::InputEvent;

/// Sends every line of `reader` to `input_tx`, then `InputEvent::Closed`.
pub fn forward_input<R: BufRead>(mut reader: R, input_tx: &Sender<InputEvent>) {
    let mut buf = Vec::new();
    loop {
        buf.clear();
        match reader.read_until(b'\n', &mut buf) {
            Ok(0) => break,
            Ok(_) => {
                let line = String::from_utf8_lossy(&buf);
                let line = line.trim_end_matches(['\n', '\r']).to_string();
                if input_tx.send(InputEvent::Line(line)).is_err() {
                    return;
                }
            }
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => {
                error!("Failed to read input: {}", e);
                break;
            }
        }
    }
    let _ = input_tx.send(InputEvent::Closed);
}

/// Forwards stdin on a background thread.
pub fn start_input_thread(input_tx: Sender<InputEvent>) {
    thread::spawn(move || {
        forward_input(io::stdin().lock(), &input_tx);
        debug!("Input thread stopping...");
    });
}
