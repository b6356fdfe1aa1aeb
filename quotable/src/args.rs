//! Command-line arguments for the quote viewer.
//!
//! This module defines the CLI interface using `clap`. See `main` for end-to-end usage.
use std::time::Duration;

use clap::Parser;
use quotable_common::net::{DEFAULT_TIMEOUT_SECS, ZENQUOTES_RANDOM_URL};

use crate::source::HttpSourceConfig;

/// Parsed command-line arguments.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// URL returning a JSON array of `{ "q", "a", "_id" }` objects.
    #[clap(long, default_value = ZENQUOTES_RANDOM_URL)]
    pub endpoint: String,

    /// Request timeout in seconds.
    #[clap(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_secs: u64,

    /// Ignore proxy settings from the environment.
    #[clap(long)]
    pub no_proxy: bool,
}

impl Args {
    /// HTTP source settings derived from the flags.
    pub fn source_config(&self) -> HttpSourceConfig {
        HttpSourceConfig {
            endpoint: self.endpoint.trim().to_string(),
            timeout: Duration::from_secs(self.timeout_secs),
            system_proxy: !self.no_proxy,
        }
    }
}
