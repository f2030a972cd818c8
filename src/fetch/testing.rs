// src/fetch/testing.rs
// =============================================================================
// An in-memory Fetcher for tests: a map of URL -> page text standing in for
// the handbook site, plus a log of every fetch so tests can assert which
// pages were requested and how often.
// =============================================================================

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

use super::Fetcher;

pub struct FakeSite {
    pages: HashMap<String, String>,
    fetched: Mutex<Vec<String>>,
}

impl FakeSite {
    pub fn new(pages: &[(&str, &str)]) -> Self {
        Self {
            pages: pages
                .iter()
                .map(|(url, html)| (url.to_string(), html.to_string()))
                .collect(),
            fetched: Mutex::new(Vec::new()),
        }
    }

    /// How many times a URL was fetched over the fake's lifetime
    pub fn fetch_count(&self, url: &str) -> usize {
        self.fetched
            .lock()
            .unwrap()
            .iter()
            .filter(|fetched| *fetched == url)
            .count()
    }

    /// Total number of fetches, successful or not
    pub fn total_fetches(&self) -> usize {
        self.fetched.lock().unwrap().len()
    }
}

#[async_trait]
impl Fetcher for FakeSite {
    async fn fetch(&self, url: &str) -> Result<String> {
        self.fetched.lock().unwrap().push(url.to_string());
        self.pages
            .get(url)
            .cloned()
            .ok_or_else(|| anyhow!("HTTP 404 Not Found: {}", url))
    }
}
