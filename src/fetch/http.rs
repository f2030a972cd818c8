// src/fetch/http.rs
// =============================================================================
// This module fetches handbook pages over HTTP.
//
// The Fetcher trait is the boundary between the crawl and the network. A
// worker suspends on fetch() and nothing else, and the trait keeps "the fetch
// failed" strictly apart from "the page was empty": an unreachable faculty
// must never read as a faculty with zero units.
//
// Tests swap in fetch::testing::FakeSite instead of going to the network.
// =============================================================================

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

// The page-fetch collaborator the crawl depends on
//
// Ok(text) is the page content, possibly empty. Err means the page could not
// be fetched at all (network failure or a non-success HTTP status).
#[async_trait]
pub trait Fetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<String>;
}

// Production Fetcher backed by a shared reqwest client
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new() -> Result<Self> {
        // One client for the whole run (connection pooling), with a timeout so
        // a dead page cannot stall a worker forever
        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .build()?;

        Ok(Self { client })
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String> {
        let response = self.client.get(url).send().await?;

        if !response.status().is_success() {
            return Err(anyhow!("HTTP {}", response.status()));
        }

        Ok(response.text().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetcher_builds() {
        assert!(HttpFetcher::new().is_ok());
    }
}
