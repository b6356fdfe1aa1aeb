//! Data model types owned by the client.
//!
//! This module groups the plain types the event loop works with:
//! - `state` — the quote list together with its loading/error flags.
//! - `intent` — user commands read from the terminal.
pub mod intent;
pub mod state;
