use anyhow::{Context, Result};
use clap::Parser;
use std::fs::{self, OpenOptions};
use std::sync::Mutex;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use gigsift::config::Cli;
use gigsift::fetch::DumpFetcher;
use gigsift::report::Report;
use gigsift::search::Search;
use gigsift::summary::log_summary;

fn init_tracing(cli: &Cli) -> Result<()> {
    fs::create_dir_all(&cli.results_dir)
        .with_context(|| format!("Failed to create {:?}", cli.results_dir))?;
    let log_path = cli.log_path();
    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .with_context(|| format!("Failed to open log file {:?}", log_path))?;

    let default_filter = if cli.verbose { "info,gigsift=debug" } else { "info" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()))
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(Mutex::new(log_file)),
        )
        .init();

    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli)?;

    let mut fetcher = DumpFetcher::from_path(&cli.input)
        .with_context(|| format!("Failed to load listings from {:?}", cli.input))?;
    tracing::info!(
        listings = fetcher.len(),
        skipped = fetcher.skipped(),
        "Loaded scraped listings"
    );

    let outcome = Search::default()
        .run(&mut fetcher, &cli.search_config())
        .context("Search failed")?;
    tracing::debug!(evaluated = outcome.evaluated, "Pipeline finished");

    let report = Report::from_outcome(outcome);
    let path = report
        .save(&cli.results_dir)
        .with_context(|| format!("Failed to write results to {:?}", cli.results_dir))?;

    log_summary(&report, Some(&path), cli.top);
    println!(
        "Search completed successfully. Found {} gigs.",
        report.total_results
    );

    Ok(())
}
