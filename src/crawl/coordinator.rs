// src/crawl/coordinator.rs
// =============================================================================
// This module fans a year's crawl out across its faculty seeds.
//
// One tokio task per seed, each running its own independent traversal: no
// shared mutable state, no communication between workers. Each task's
// completion handle delivers its outcome exactly once, and the union happens
// here after every handle has reported. Union is commutative, so the result
// set does not depend on which worker finished first.
//
// A worker that failed partway still contributes whatever it accumulated;
// the failure counts ride along so the caller can warn about partial
// coverage instead of silently under-reporting a year.
// =============================================================================

use futures::future::join_all;
use std::collections::HashSet;
use std::sync::Arc;

use crate::config::SiteConfig;
use crate::crawl::extract::Extract;
use crate::crawl::worker::crawl_seed;
use crate::fetch::Fetcher;

// Everything the crawl of one academic year produced
#[derive(Debug, Default)]
pub struct YearCrawl {
    /// Union of every worker's unit codes
    pub units: HashSet<String>,
    /// Pages fetched successfully across all workers
    pub pages_visited: usize,
    /// Pages that could not be fetched, across all workers
    pub fetch_failures: usize,
    /// Seeds whose workers fetched nothing at all
    pub failed_seeds: Vec<String>,
}

// Crawls every seed of one year concurrently and merges the results
pub async fn crawl_year(
    fetcher: Arc<dyn Fetcher>,
    extractor: Arc<dyn Extract>,
    config: &SiteConfig,
    seeds: Vec<String>,
    max_depth: usize,
) -> YearCrawl {
    let mut handles = Vec::with_capacity(seeds.len());
    let mut launched = Vec::with_capacity(seeds.len());

    for seed in seeds {
        launched.push(seed.clone());
        let fetcher = Arc::clone(&fetcher);
        let extractor = Arc::clone(&extractor);
        let config = config.clone();
        handles.push(tokio::spawn(async move {
            let outcome =
                crawl_seed(fetcher.as_ref(), extractor.as_ref(), &config, &seed, max_depth).await;
            println!("   ✅ {} done ({} units)", outcome.seed, outcome.units.len());
            outcome
        }));
    }

    let mut year = YearCrawl::default();
    for (seed, joined) in launched.into_iter().zip(join_all(handles).await) {
        match joined {
            Ok(outcome) => {
                if outcome.pages_visited == 0 {
                    year.failed_seeds.push(outcome.seed);
                }
                year.units.extend(outcome.units);
                year.pages_visited += outcome.pages_visited;
                year.fetch_failures += outcome.fetch_failures;
            }
            Err(e) => {
                // A panicked worker counts as a failed seed, not a failed run
                eprintln!("  ⚠️  Crawl worker for {} crashed: {}", seed, e);
                year.failed_seeds.push(seed);
            }
        }
    }

    year
}
