// src/config.rs
// =============================================================================
// Site configuration shared by the resolver, faculty discovery, and the crawl.
//
// Everything that depends on *which* handbook site we're pointed at lives here:
// the base domain and what "the current year" means (the current year's
// handbooks live at a different path than archived years).
//
// The config is built once in main() and passed down by reference, so there are
// no process-wide globals to reach for.
// =============================================================================

use chrono::{Datelike, Local};

/// The handbook site this tool was written against.
pub const DEFAULT_BASE_URL: &str = "https://www.sydney.edu.au";

// Holds the site-wide values the crawl needs
//
// base_url has no trailing slash; rooted links ("/handbooks/...") are resolved
// by appending them directly to it.
#[derive(Debug, Clone)]
pub struct SiteConfig {
    /// Scheme + host of the handbook site, no trailing slash
    pub base_url: String,
    /// The year whose handbooks live at the top-level (non-archive) path
    pub current_year: i32,
}

impl SiteConfig {
    // Creates a config for the default site, with "current year" taken from
    // the system clock (matching how the site decides what to archive)
    pub fn new() -> Self {
        Self::for_site(DEFAULT_BASE_URL, Local::now().year())
    }

    // Creates a config for an arbitrary site and current year
    //
    // Tests use this to point the crawl at synthetic URLs
    pub fn for_site(base_url: &str, current_year: i32) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            current_year,
        }
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_stripped() {
        let config = SiteConfig::for_site("https://example.edu/", 2024);
        assert_eq!(config.base_url, "https://example.edu");
    }

    #[test]
    fn test_default_points_at_real_site() {
        let config = SiteConfig::new();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
    }
}
