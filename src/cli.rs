// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// We use the "derive" API: the CLI structure is a plain struct and clap
// generates the parsing code from the attributes. Doc comments on the fields
// become the --help text.
// =============================================================================

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "handbook-diff",
    version,
    about = "A tool for comparing university handbook units of study between years",
    long_about = "handbook-diff crawls the university handbook site for each requested year, \
                  collects every unit of study code it finds, and writes the years side by side \
                  as CSV. With exactly two years it also lists the units unique to each year."
)]
pub struct Cli {
    /// The years for comparison, separated by spaces
    #[arg(required = true)]
    pub years: Vec<i32>,

    /// The search depth
    ///
    /// How many link hops from a faculty's landing page the crawl will follow
    #[arg(short = 'd', long, default_value_t = 2)]
    pub depth: usize,

    /// If set, pick the faculties to search interactively
    #[arg(short = 'f', long)]
    pub faculty: bool,

    /// The output path
    #[arg(short = 'o', long, default_value = "out.csv")]
    pub output: PathBuf,

    /// Print the comparison as JSON to stdout instead of writing CSV
    #[arg(long)]
    pub json: bool,

    /// Extract with a structural HTML parser instead of text patterns
    #[arg(long)]
    pub strict_html: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_years_and_options() {
        let cli = Cli::try_parse_from(["handbook-diff", "2023", "2024", "-d", "3", "-f"]).unwrap();
        assert_eq!(cli.years, vec![2023, 2024]);
        assert_eq!(cli.depth, 3);
        assert!(cli.faculty);
        assert!(!cli.json);
        assert_eq!(cli.output, PathBuf::from("out.csv"));
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["handbook-diff", "2024"]).unwrap();
        assert_eq!(cli.depth, 2);
        assert!(!cli.faculty);
        assert!(!cli.strict_html);
    }

    #[test]
    fn test_years_are_required() {
        assert!(Cli::try_parse_from(["handbook-diff"]).is_err());
    }
}
