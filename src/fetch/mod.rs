// src/fetch/mod.rs
// =============================================================================
// This module owns everything that talks to the handbook site over HTTP.
//
// Submodules:
// - http: the Fetcher trait (the seam the crawl suspends on) and its
//   reqwest-backed implementation
// - faculties: discovers the faculty seed URLs for a year from the handbook
//   index page
// - testing: an in-memory fake site, compiled for tests only
//
// The crawl itself never creates HTTP clients; it only sees a Fetcher.
// =============================================================================

mod faculties;
mod http;

// Re-export the public API so callers write fetch::discover() instead of
// fetch::faculties::discover()
pub use faculties::{discover, faculty_name};
pub use http::{Fetcher, HttpFetcher};

#[cfg(test)]
pub mod testing;
