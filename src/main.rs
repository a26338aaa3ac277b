//! # Tennessee School Closings Aggregator
//!
//! Scrapes school closing announcements from multiple Tennessee news
//! outlets, normalizes the free-text status phrases and organization names,
//! merges duplicate reports across sources, and writes a single
//! region-classified JSON dataset.
//!
//! ## Usage
//!
//! ```sh
//! tn_closings -o ./data
//! ```
//!
//! ## Architecture
//!
//! The application follows a pipeline architecture:
//! 1. **Scraping**: Fetch each outlet's closings page and extract raw
//!    (name, status text) pairs (concurrent, fail-open per source)
//! 2. **Classification**: Map status text to a fixed status taxonomy and
//!    organization names to Tennessee grand divisions
//! 3. **Aggregation**: Merge records describing the same organization into
//!    one canonical record with deterministic conflict resolution
//! 4. **Output**: Write the JSON report and log a run summary
//!
//! The classification/aggregation core is pure and synchronous; only the
//! page fetching is async.

use clap::Parser;
use futures::stream::{self, StreamExt};
use std::error::Error;
use tracing::{debug, error, info, instrument};
use tracing_subscriber::{EnvFilter, fmt as tfmt};

mod aggregate;
mod classify;
mod cli;
mod models;
mod normalize;
mod outputs;
mod scrapers;
mod tables;
mod utils;

use aggregate::{aggregate, build_report};
use classify::RegionClassifier;
use cli::Cli;
use models::RawClosing;
use outputs::{json, summary};
use utils::ensure_writable_dir;

/// Sources fetched concurrently at a time.
const PARALLEL_SOURCES: usize = 3;

#[tokio::main]
#[instrument]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let start_time = std::time::Instant::now();
    info!("closings scrape starting up");

    let args = Cli::parse();
    debug!(?args.output_dir, "Parsed CLI arguments");

    // Early check: fail before any network work if we cannot write output.
    if let Err(e) = ensure_writable_dir(&args.output_dir).await {
        error!(
            path = %args.output_dir,
            error = %e,
            "Output directory is not writable (fix perms or choose a different path)"
        );
        return Err(e);
    }

    // ---- Scrape all sources ----
    let raw_closings: Vec<RawClosing> = stream::iter(scrapers::SOURCES)
        .map(scrapers::scrape_source)
        .buffered(PARALLEL_SOURCES)
        .collect::<Vec<Vec<RawClosing>>>()
        .await
        .into_iter()
        .flatten()
        .collect();
    info!(count = raw_closings.len(), "Total raw closings to aggregate");

    // ---- Classify, merge, summarize ----
    let regions = RegionClassifier::tennessee();
    let records = aggregate(raw_closings, &regions);
    info!(unique = records.len(), "Merged closings");

    let report = build_report(records);

    // ---- Outputs ----
    if let Err(e) = json::write_report(&report, &args.output_dir).await {
        error!(error = %e, "Failed to write closings JSON");
        return Err(e);
    }

    summary::log_summary(&report);

    let elapsed = start_time.elapsed();
    info!(
        ?elapsed,
        secs = elapsed.as_secs(),
        millis = elapsed.subsec_millis(),
        "Execution complete"
    );

    Ok(())
}
