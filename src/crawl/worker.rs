// src/crawl/worker.rs
// =============================================================================
// This module implements one bounded breadth-first traversal from a single
// faculty seed.
//
// How it works:
// 1. Start with the seed in a FIFO frontier at depth 0
// 2. Dequeue the oldest (url, depth) entry
// 3. Fetch the page and run the extractor over it
// 4. Keep the unit codes, enqueue the followable links at depth + 1
// 5. Repeat until the frontier is empty or the depth limit is hit
//
// The frontier is FIFO, so entries come out in non-decreasing depth order.
// That is what makes the depth cutoff a single comparison: the first dequeued
// entry past the limit means every remaining entry is past it too, and the
// whole traversal stops.
//
// A fetch that fails is recorded and skipped; the traversal carries on with
// the rest of the frontier.
// =============================================================================

use std::collections::{HashSet, VecDeque};

use crate::config::SiteConfig;
use crate::crawl::extract::Extract;
use crate::fetch::Fetcher;

// What one worker's traversal produced
//
// pages_visited / fetch_failures let the coordinator tell "this faculty has
// no units" apart from "this faculty's crawl went dark".
#[derive(Debug)]
pub struct CrawlOutcome {
    /// The seed this worker started from
    pub seed: String,
    /// Every unit code found across the traversal
    pub units: HashSet<String>,
    /// Pages fetched and extracted successfully
    pub pages_visited: usize,
    /// Pages that could not be fetched
    pub fetch_failures: usize,
}

// Runs one traversal to completion. Never fails: fetch errors are absorbed
// into the outcome's failure count.
pub async fn crawl_seed(
    fetcher: &dyn Fetcher,
    extractor: &dyn Extract,
    config: &SiteConfig,
    seed: &str,
    max_depth: usize,
) -> CrawlOutcome {
    let mut outcome = CrawlOutcome {
        seed: seed.to_string(),
        units: HashSet::new(),
        pages_visited: 0,
        fetch_failures: 0,
    };

    let mut frontier: VecDeque<(String, usize)> = VecDeque::new();
    frontier.push_back((seed.to_string(), 0));
    let mut visited: HashSet<String> = HashSet::new();

    while let Some((url, depth)) = frontier.pop_front() {
        // The frontier is depth-sorted; the first over-depth entry ends the
        // whole traversal, not just this branch
        if depth > max_depth {
            break;
        }

        // A URL reachable along several paths is still fetched at most once
        if !visited.insert(url.clone()) {
            continue;
        }

        let html = match fetcher.fetch(&url).await {
            Ok(html) => html,
            Err(e) => {
                eprintln!("  ⚠️  Failed to fetch {}: {}", url, e);
                outcome.fetch_failures += 1;
                continue;
            }
        };
        outcome.pages_visited += 1;

        let extraction = extractor.extract(config, &url, &html);
        outcome.units.extend(extraction.units);
        for link in extraction.links {
            if !visited.contains(&link) {
                frontier.push_back((link, depth + 1));
            }
        }
    }

    outcome
}
