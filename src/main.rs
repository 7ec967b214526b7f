// src/main.rs
// =============================================================================
// This is the entry point of wikiracer.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Set up logging (tracing, to stderr)
// 3. Validate the configuration and build fetcher, extractor and pool
// 4. Run the search and print the result
// 5. Exit with proper code (0 = found, 1 = no path, 2 = error)
// =============================================================================

mod cli;    // src/cli.rs - command-line parsing
mod config; // src/config.rs - search settings and validation
mod race;   // src/race/ - the level-synchronized BFS
mod wiki;   // src/wiki/ - article ids, link extraction, page fetching

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::Cli;
use race::{Outcome, Racer, SearchReport, WorkerPool};
use wiki::{ArticleId, HttpFetcher, LinkExtractor};

#[tokio::main]
async fn main() {
    let exit_code = match run().await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

// Returns:
//   Ok(0) = target found
//   Ok(1) = no path (exhausted or depth limit reached)
//   Err   = configuration or setup error (exit code 2)
async fn run() -> Result<i32> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = cli.search_config()?;
    let start = ArticleId::from_arg(&cli.start, &config.article_prefix)
        .context("Invalid start article")?;
    let end = ArticleId::from_arg(&cli.end, &config.article_prefix)
        .context("Invalid end article")?;

    tracing::info!(
        start = %start,
        end = %end,
        site = %config.base_url,
        workers = config.workers,
        timeout = ?config.fetch_timeout,
        "starting search"
    );

    let fetcher = HttpFetcher::new(config.base_url.clone(), config.fetch_timeout)?;
    let extractor = LinkExtractor::new(config.base_url.clone(), config.article_prefix.clone());
    let racer = Racer::new(fetcher, extractor, WorkerPool::new(config.workers))
        .with_max_depth(config.max_depth);

    let report = racer.run(start, end).await;
    print_report(&report, cli.json)?;

    Ok(if report.outcome.is_found() { 0 } else { 1 })
}

// Logs go to stderr so stdout only carries the result
//
// RUST_LOG overrides the default filter.
fn init_logging(verbose: bool) {
    let default = if verbose { "wikiracer=debug" } else { "wikiracer=info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn print_report(report: &SearchReport, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(report)?);
        return Ok(());
    }

    match report.outcome {
        Outcome::Found { depth } => {
            println!("Target found at search depth: {}", depth);
        }
        Outcome::Exhausted { levels_searched } => {
            println!(
                "No path from {} to {}: every reachable article was visited ({} levels)",
                report.start, report.target, levels_searched
            );
        }
        Outcome::DepthLimit { levels_searched } => {
            println!(
                "No path from {} to {} within {} levels",
                report.start, report.target, levels_searched
            );
        }
    }

    println!(
        "📊 {} page(s) fetched, {} empty, {} article(s) visited in {} ms",
        report.pages_fetched, report.pages_empty, report.visited, report.elapsed_ms
    );
    Ok(())
}
