//!
//! Common types and utilities shared by the quote viewer.
//!
//! This crate aggregates:
//! - `error` — unified error type `QuoteError` used across the workspace.
//! - `result` — handy `Result<T, QuoteError>` alias.
//! - `quote` — the `Quote` model and decoding of the service payload.
//! - `net` — endpoint constants and small HTTP helpers.
#![warn(missing_docs)]
pub mod error;
pub mod result;
pub mod quote;
pub mod net;

pub use error::QuoteError;
pub use result::Result;
pub use quote::Quote;
