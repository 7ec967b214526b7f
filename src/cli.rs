// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// Usage:
//   wikiracer /wiki/Rust_(programming_language) /wiki/Philosophy
//   wikiracer Rust Philosophy --workers 8 --fetch-timeout 5 --json
//
// Start and end are positional; everything else is an optional flag.
// Defaults: 4 workers, 2 second fetch timeout, English Wikipedia.
// =============================================================================

use anyhow::Result;
use clap::Parser;

use crate::config::{
    SearchConfig, DEFAULT_ARTICLE_PREFIX, DEFAULT_BASE_URL, DEFAULT_FETCH_TIMEOUT_SECS,
    DEFAULT_WORKERS,
};

#[derive(Parser, Debug)]
#[command(
    name = "wikiracer",
    version,
    about = "Finds the shortest link path between two wiki articles",
    long_about = "wikiracer runs a breadth-first search over article links, fetching and \
                  parsing pages on demand one depth level at a time, and reports the depth \
                  at which the end article is first linked."
)]
pub struct Cli {
    /// Starting article, e.g. /wiki/Rust or just Rust
    #[arg(value_name = "/wiki/<start-article-name>")]
    pub start: String,

    /// Target article, e.g. /wiki/Philosophy or just Philosophy
    #[arg(value_name = "/wiki/<end-article-name>")]
    pub end: String,

    /// Number of pages fetched / parsed in parallel
    #[arg(short, long, default_value_t = DEFAULT_WORKERS)]
    pub workers: usize,

    /// Per-page fetch timeout in seconds; slow pages count as having no links
    #[arg(long, default_value_t = DEFAULT_FETCH_TIMEOUT_SECS)]
    pub fetch_timeout: f64,

    /// Site root the article paths are resolved against
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Path prefix that marks a link as an article
    #[arg(long, default_value = DEFAULT_ARTICLE_PREFIX)]
    pub article_prefix: String,

    /// Give up after searching this many levels
    #[arg(long)]
    pub max_depth: Option<usize>,

    /// Print the search report as JSON instead of text
    #[arg(long)]
    pub json: bool,

    /// Enable debug logging (per-page fetch details)
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn search_config(&self) -> Result<SearchConfig> {
        SearchConfig::from_args(
            &self.base_url,
            &self.article_prefix,
            self.workers,
            self.fetch_timeout,
            self.max_depth,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positional_args_and_defaults() {
        let cli = Cli::try_parse_from(["wikiracer", "/wiki/A", "/wiki/B"]).unwrap();
        assert_eq!(cli.start, "/wiki/A");
        assert_eq!(cli.end, "/wiki/B");
        assert_eq!(cli.workers, 4);
        assert_eq!(cli.fetch_timeout, 2.0);
        assert!(cli.max_depth.is_none());
        assert!(cli.search_config().is_ok());
    }

    #[test]
    fn test_flags() {
        let cli = Cli::try_parse_from([
            "wikiracer", "A", "B", "--workers", "8", "--fetch-timeout", "0.5",
            "--max-depth", "3", "--json",
        ])
        .unwrap();
        let config = cli.search_config().unwrap();
        assert_eq!(config.workers, 8);
        assert_eq!(config.max_depth, Some(3));
        assert!(cli.json);
    }

    #[test]
    fn test_missing_end_is_an_error() {
        assert!(Cli::try_parse_from(["wikiracer", "/wiki/A"]).is_err());
    }

    #[test]
    fn test_invalid_workers_rejected_by_config() {
        let cli = Cli::try_parse_from(["wikiracer", "A", "B", "--workers", "0"]).unwrap();
        assert!(cli.search_config().is_err());
    }
}
