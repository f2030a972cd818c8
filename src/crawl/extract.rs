// src/crawl/extract.rs
// =============================================================================
// This module pulls unit of study codes and followable links out of a fetched
// handbook page.
//
// Extraction is behind a trait so the matching technique is swappable:
// - PatternExtractor (default): compiled regexes over the raw page text, the
//   same way the handbook markup has always been scraped. Tolerant of the
//   malformed HTML these pages actually contain.
// - DomExtractor (--strict-html): parses the page into a DOM with `scraper`
//   and walks real elements instead of text.
//
// Both return sets: a unit code or link counts once per page no matter how
// often it appears. Neither can fail - a page with no matches extracts empty.
// =============================================================================

use regex::Regex;
use scraper::{Html, Selector};
use std::collections::HashSet;

use crate::config::SiteConfig;
use crate::crawl::resolve::{is_followable, page_dir, resolve};

// Marker that distinguishes handbook content pages from everything else the
// site serves; only hrefs containing it are link candidates
const CONTENT_PAGE_MARKER: &str = ".shtml";

// What one page contributed to the crawl
#[derive(Debug, Default, PartialEq)]
pub struct Extraction {
    /// Unit of study codes found on the page (e.g. "COMP1001")
    pub units: HashSet<String>,
    /// Resolved, followable URLs to enqueue next
    pub links: HashSet<String>,
}

// The extraction seam: given a page's URL and its content, produce the units
// on it and the links worth following from it
pub trait Extract: Send + Sync {
    fn extract(&self, config: &SiteConfig, page_url: &str, html: &str) -> Extraction;
}

// Regex-based extractor matching the handbook markup conventions:
// unit codes sit at the start of a <strong> tag, links to further content
// pages all carry the .shtml suffix somewhere in their href.
pub struct PatternExtractor {
    unit_re: Regex,
    href_re: Regex,
}

impl PatternExtractor {
    pub fn new() -> Self {
        Self {
            // Both patterns are constants and known to be valid, so unwrap is fine
            unit_re: Regex::new(r"<\s*strong\s*>([A-Z]{4}[0-9]{4})").unwrap(),
            href_re: Regex::new(r#"href\s*=\s*['"]([^'"]*\.shtml[^'"]*)['"]"#).unwrap(),
        }
    }
}

impl Default for PatternExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl Extract for PatternExtractor {
    fn extract(&self, config: &SiteConfig, page_url: &str, html: &str) -> Extraction {
        let dir = page_dir(page_url);
        let mut out = Extraction::default();

        for caps in self.unit_re.captures_iter(html) {
            out.units.insert(caps[1].to_string());
        }

        for caps in self.href_re.captures_iter(html) {
            let link = &caps[1];
            if is_followable(config, &dir, link) {
                out.links.insert(resolve(config, &dir, link));
            }
        }

        out
    }
}

// DOM-based extractor: same contract, but goes through a real HTML parse.
// Catches pages where the markup around a unit code is too mangled for the
// text patterns, at the cost of html5ever's stricter view of the document.
pub struct DomExtractor {
    code_re: Regex,
    strong_selector: Selector,
    anchor_selector: Selector,
}

impl DomExtractor {
    pub fn new() -> Self {
        Self {
            // Anchored: the code must open the emphasised text
            code_re: Regex::new(r"^[A-Z]{4}[0-9]{4}").unwrap(),
            // Selectors are constants and known to be valid, so unwrap is fine
            strong_selector: Selector::parse("strong").unwrap(),
            anchor_selector: Selector::parse("a[href]").unwrap(),
        }
    }
}

impl Default for DomExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl Extract for DomExtractor {
    fn extract(&self, config: &SiteConfig, page_url: &str, html: &str) -> Extraction {
        let dir = page_dir(page_url);
        let mut out = Extraction::default();

        let document = Html::parse_document(html);

        for element in document.select(&self.strong_selector) {
            let text: String = element.text().collect();
            if let Some(code) = self.code_re.find(&text) {
                out.units.insert(code.as_str().to_string());
            }
        }

        for element in document.select(&self.anchor_selector) {
            if let Some(href) = element.value().attr("href") {
                if href.contains(CONTENT_PAGE_MARKER) && is_followable(config, &dir, href) {
                    out.links.insert(resolve(config, &dir, href));
                }
            }
        }

        out
    }
}
