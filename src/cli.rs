//! Command-line interface definitions.
//!
//! Every option can also be supplied through an environment variable, so
//! scheduled jobs can configure the fetcher without flags.

use crate::fetch::DEFAULT_TIMEOUT;
use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments for the MP Tracker data fetcher.
///
/// # Examples
///
/// ```sh
/// # Refresh everything into ./data
/// mp_tracker_fetch
///
/// # Only legislation, into a custom directory
/// UPDATE_SECTION=legislation mp_tracker_fetch --data-dir ./site/data
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Section to update: all, legislation, mps or know_your_rep (case-insensitive)
    #[arg(short, long, env = "UPDATE_SECTION", default_value = "all")]
    pub section: String,

    /// Directory the JSON files are written to
    #[arg(short, long, env = "DATA_DIR", default_value = "data")]
    pub data_dir: PathBuf,

    /// Per-request timeout in seconds
    #[arg(long, env = "FETCH_TIMEOUT_SECS", default_value_t = DEFAULT_TIMEOUT.as_secs())]
    pub timeout_secs: u64,
}
