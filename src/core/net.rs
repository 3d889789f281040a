// src/core/net.rs
// Blocking HTTP GET with the client's library defaults (headers, timeouts).
// One request at a time, no retry, no cache.

use reqwest::blocking::Client;
use tracing::debug;

use crate::error::{Result, ScrapeError};

/// Source of page bodies. The scrape traversal only ever needs a GET.
pub trait Fetch {
    /// Return the body of `url`, or `ScrapeError::Network` on any transport
    /// failure or non-success status.
    fn get(&self, url: &str) -> Result<String>;
}

pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new() -> Result<Self> {
        let client = Client::builder().build().map_err(|e| network("<client>", e))?;
        Ok(Self { client })
    }
}

impl Fetch for HttpFetcher {
    fn get(&self, url: &str) -> Result<String> {
        let resp = self
            .client
            .get(url)
            .send()
            .and_then(|r| r.error_for_status())
            .map_err(|e| network(url, e))?;

        let body = resp.text().map_err(|e| network(url, e))?;
        debug!(url, bytes = body.len(), "fetched");
        Ok(body)
    }
}

fn network(url: &str, e: reqwest::Error) -> ScrapeError {
    ScrapeError::Network { url: s!(url), reason: e.to_string() }
}
