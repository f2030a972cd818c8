// src/fetch/faculties.rs
// =============================================================================
// This module discovers the crawl's starting points: one seed URL per faculty,
// listed on the handbook index page for a year.
//
// How it works:
// 1. Build the index URL. The current year's handbooks sit at /handbooks/;
//    older years are archived one level deeper at /handbooks/archive/<year>/.
// 2. Fetch the index. If it cannot be fetched there is nothing to seed, so
//    this is the one fetch failure that is fatal for a year.
// 3. The index page can list several years' tables. Narrow to the span from
//    "<year> Handbooks" to "<year-1> Handbooks" when it matches, otherwise
//    scan the whole page.
// 4. Collect the first href out of every table cell and resolve it.
//
// The followability filter is deliberately not applied here - it exists to
// keep traversals inside a faculty's tree, and these ARE the faculty roots.
// =============================================================================

use anyhow::{Context, Result};
use regex::Regex;
use url::Url;

use crate::config::SiteConfig;
use crate::crawl::resolve::{page_dir, resolve};
use crate::fetch::Fetcher;

// The handbook index page for a year
fn index_url(config: &SiteConfig, year: i32) -> String {
    if year == config.current_year {
        format!("{}/handbooks/", config.base_url)
    } else {
        format!("{}/handbooks/archive/{}/", config.base_url, year)
    }
}

// Discovers the faculty seed URLs for one year, in page order
pub async fn discover(
    fetcher: &dyn Fetcher,
    config: &SiteConfig,
    year: i32,
) -> Result<Vec<String>> {
    let page_url = index_url(config, year);
    let html = fetcher
        .fetch(&page_url)
        .await
        .with_context(|| format!("failed to fetch the {} handbooks index at {}", year, page_url))?;

    // Narrow to the requested year's table when the page carries several years
    let span_re = Regex::new(&format!(r"{} Handbooks[\s\S]*{} Handbooks", year, year - 1))?;
    let table = span_re
        .find(&html)
        .map(|span| span.as_str())
        .unwrap_or(&html);

    // Patterns are constants and known to be valid, so unwrap is fine
    let cell_re = Regex::new(r"<td[\s\S]*?/td>").unwrap();
    let href_re = Regex::new(r#"href\s*=\s*['"]([^'"]*)['"]"#).unwrap();

    let dir = page_dir(&page_url);
    let mut seeds = Vec::new();
    for cell in cell_re.find_iter(table) {
        if let Some(caps) = href_re.captures(cell.as_str()) {
            seeds.push(resolve(config, &dir, &caps[1]));
        }
    }

    Ok(seeds)
}

// Derives a short display name for a faculty from its seed URL path
//
// Current-year seeds look like .../handbooks/<faculty>/..., archived ones
// like .../handbooks/archive/<year>/<faculty>/...
pub fn faculty_name(url: &str) -> Option<String> {
    let parsed = Url::parse(url).ok()?;
    let segments: Vec<&str> = parsed.path_segments()?.filter(|s| !s.is_empty()).collect();

    let index = match segments.iter().position(|s| *s == "archive") {
        Some(archive) => archive + 2,
        None => segments.iter().position(|s| *s == "handbooks")? + 1,
    };

    let segment = segments.get(index)?;
    // "arts.shtml" and "arts/" both name the arts faculty
    let name = segment.split('.').next().unwrap_or(segment);
    if name.is_empty() {
        None
    } else {
        Some(name.to_string())
    }
}
