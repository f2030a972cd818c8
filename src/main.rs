// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. For each requested year: discover the faculty seed URLs (optionally
//    narrowed interactively), crawl them all concurrently, and keep the
//    year's unit set
// 3. Build the comparison table and write it as CSV (or print JSON)
// 4. Exit with proper code (0 = success, 2 = error)
// =============================================================================

// Module declarations - tells Rust about our other source files
mod cli; // src/cli.rs - command-line parsing
mod config; // src/config.rs - site configuration
mod crawl; // src/crawl/ - the crawl engine
mod fetch; // src/fetch/ - HTTP fetching and faculty discovery
mod report; // src/report.rs - comparison table and CSV output

use std::collections::HashSet;
use std::io;
use std::sync::Arc;

use anyhow::{anyhow, bail, Context, Result};
use clap::Parser;

use cli::Cli;
use config::SiteConfig;
use crawl::{crawl_year, DomExtractor, Extract, PatternExtractor};
use fetch::{discover, faculty_name, Fetcher, HttpFetcher};
use report::ComparisonTable;

// The #[tokio::main] attribute creates a tokio runtime and runs our async
// code inside it
#[tokio::main]
async fn main() {
    let exit_code = match run().await {
        Ok(code) => code,
        Err(e) => {
            // {:#} prints the error with its whole context chain
            eprintln!("Error: {:#}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

async fn run() -> Result<i32> {
    let cli = Cli::parse();
    let config = SiteConfig::new();

    let fetcher: Arc<dyn Fetcher> = Arc::new(HttpFetcher::new()?);
    let extractor: Arc<dyn Extract> = if cli.strict_html {
        Arc::new(DomExtractor::new())
    } else {
        Arc::new(PatternExtractor::new())
    };

    // One labelled unit set per requested year, in argument order
    let mut years: Vec<(String, HashSet<String>)> = Vec::new();

    for year in &cli.years {
        let mut label = year.to_string();

        println!("🔍 Discovering {} faculties...", year);
        let mut seeds = discover(fetcher.as_ref(), &config, *year).await?;
        println!("📚 Found {} faculty handbook(s)", seeds.len());

        if cli.faculty {
            seeds = select_faculties(*year, seeds, &mut label)?;
        }

        println!("🕸️  Crawling {} seed(s) to depth {}...", seeds.len(), cli.depth);
        let crawl = crawl_year(
            Arc::clone(&fetcher),
            Arc::clone(&extractor),
            &config,
            seeds,
            cli.depth,
        )
        .await;

        println!(
            "📖 {}: {} unit(s) across {} page(s)\n",
            label,
            crawl.units.len(),
            crawl.pages_visited
        );
        if crawl.fetch_failures > 0 {
            eprintln!(
                "⚠️  {}: {} page fetch(es) failed - this year's results may be incomplete",
                label, crawl.fetch_failures
            );
        }
        for seed in &crawl.failed_seeds {
            eprintln!("⚠️  {}: nothing could be fetched from {}", label, seed);
        }

        years.push((label, crawl.units));
    }

    let table = ComparisonTable::build(years);

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&table)?);
    } else {
        table.write_csv(&cli.output)?;
        println!("📄 Wrote {}", cli.output.display());
    }

    Ok(0)
}

// Asks the user which of the discovered faculties to crawl
//
// Prints an indexed listing, reads whitespace-separated indices from stdin,
// and appends each chosen faculty's name to the year's column label. A bad
// index is fatal: better to stop than to silently crawl the wrong faculty.
fn select_faculties(year: i32, seeds: Vec<String>, label: &mut String) -> Result<Vec<String>> {
    println!("Enter the indices of faculties to search, separated by spaces:");
    println!("E.g. 0 1 4\n");
    for (index, url) in seeds.iter().enumerate() {
        let name = faculty_name(url).unwrap_or_else(|| url.clone());
        println!("[{}]\t{} {}", index, year, name);
    }
    println!();

    let mut line = String::new();
    io::stdin()
        .read_line(&mut line)
        .context("failed to read faculty selection")?;

    let mut selected = Vec::new();
    for token in line.split_whitespace() {
        let index: usize = token
            .parse()
            .with_context(|| format!("'{}' is not a faculty index", token))?;
        let seed = seeds.get(index).ok_or_else(|| {
            anyhow!(
                "faculty index {} is out of range (there are {} faculties)",
                index,
                seeds.len()
            )
        })?;

        if let Some(name) = faculty_name(seed) {
            label.push(' ');
            label.push_str(&name);
        }
        selected.push(seed.clone());
    }

    if selected.is_empty() {
        bail!("no faculties selected");
    }

    Ok(selected)
}
