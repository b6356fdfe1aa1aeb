//! Where quotes come from.
//!
//! `QuoteSource` is the seam between the store and the network: the event loop only
//! ever sees a `Result<Quote>`, which keeps the store testable with canned sources.
//! `HttpQuoteSource` is the production implementation backed by a blocking
//! `reqwest` client.
use std::time::Duration;

use log::debug;
use quotable_common::net::{is_success, user_agent};
use quotable_common::quote::decode_first;
use quotable_common::{Quote, QuoteError, Result};
use reqwest::blocking::Client;

/// Anything able to produce one fresh quote per call.
///
/// Calls happen on worker threads, so implementations must be [`Send`] and [`Sync`].
pub trait QuoteSource: Send + Sync {
    /// Fetch a single quote.
    fn fetch(&self) -> Result<Quote>;
}

/// HTTP client configuration.
#[derive(Debug, Clone)]
pub struct HttpSourceConfig {
    /// URL answering `GET` with a JSON array of quotes.
    pub endpoint: String,
    /// Request timeout.
    pub timeout: Duration,
    /// Honour `HTTP(S)_PROXY` style environment variables.
    pub system_proxy: bool,
}

/// Fetches quotes from a remote JSON endpoint.
pub struct HttpQuoteSource {
    client: Client,
    config: HttpSourceConfig,
}

/// Helper to convert reqwest errors into fetch errors.
fn network_error(err: reqwest::Error) -> QuoteError {
    QuoteError::Network(err.to_string())
}

impl HttpQuoteSource {
    /// Build a client for `config`.
    pub fn new(config: HttpSourceConfig) -> Result<Self> {
        let mut builder = Client::builder()
            .timeout(config.timeout)
            .user_agent(user_agent(
                env!("CARGO_PKG_NAME"),
                env!("CARGO_PKG_VERSION"),
            ));
        if !config.system_proxy {
            builder = builder.no_proxy();
        }
        let client = builder.build().map_err(network_error)?;

        Ok(Self { client, config })
    }

    /// Endpoint this source talks to.
    pub fn endpoint(&self) -> &str {
        &self.config.endpoint
    }
}

impl QuoteSource for HttpQuoteSource {
    fn fetch(&self) -> Result<Quote> {
        let response = self
            .client
            .get(&self.config.endpoint)
            .header("Accept", "application/json")
            .send()
            .map_err(network_error)?;

        let status = response.status().as_u16();
        if !is_success(status) {
            return Err(QuoteError::Status(status));
        }

        let body = response.bytes().map_err(network_error)?;
        debug!("Received {} bytes from {}", body.len(), self.config.endpoint);
        decode_first(&body)
    }
}
