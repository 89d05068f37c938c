//! # MP Tracker data fetcher
//!
//! Fetches Indian legislative data from a fixed set of trusted government
//! and civic websites, extracts bill listings from their HTML, and saves
//! them as JSON files the MP Tracker front-end reads.
//!
//! ## Usage
//!
//! ```sh
//! UPDATE_SECTION=legislation mp_tracker_fetch --data-dir ./data
//! ```
//!
//! ## Architecture
//!
//! A single sequential pass per invocation:
//! 1. **Validation**: each source URL must be `https` on an allow-listed domain
//! 2. **Fetching**: one GET per source, 30 second timeout, no retries
//! 3. **Extraction**: `.bill-item` containers become records
//! 4. **Output**: non-empty sections are written to `{data_dir}/{section}.json`
//!
//! A failing source is logged and skipped; it never aborts the run.

use chrono::Local;
use clap::Parser;
use std::error::Error;
use std::time::Duration;
use tracing::{debug, info, instrument};
use tracing_subscriber::{EnvFilter, fmt as tfmt};

mod cli;
mod error;
mod extract;
mod fetch;
mod models;
mod outputs;
mod pipeline;
mod sources;
mod utils;
mod validate;

use cli::Cli;
use fetch::HttpFetcher;

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
    info!(started_at = %Local::now().to_rfc3339(), "mp_tracker_fetch starting up");

    let args = Cli::parse();
    debug!(?args, "Parsed CLI arguments");

    let fetcher = HttpFetcher::new(Duration::from_secs(args.timeout_secs))?;
    let summary = pipeline::run(&fetcher, &args.section, &args.data_dir).await;

    for outcome in &summary.sections {
        match &outcome.written {
            Some(path) => info!(
                section = %outcome.section,
                records = outcome.records,
                path = %path.display(),
                "Section saved"
            ),
            None => info!(
                section = %outcome.section,
                records = outcome.records,
                "Section not saved"
            ),
        }
    }

    let elapsed = start_time.elapsed();
    info!(
        ?elapsed,
        secs = elapsed.as_secs(),
        millis = elapsed.subsec_millis(),
        files_written = summary.files_written(),
        "Execution complete"
    );

    Ok(())
}
