//! Section orchestration: fetch, extract and persist, one source at a time.
//!
//! # Sections
//!
//! | Section | Output file | Status |
//! |---------|-------------|--------|
//! | `legislation` | `legislation.json` | Scrapes [`LEGISLATION_SOURCES`] |
//! | `mps` | `mps.json` | Not implemented, always empty |
//! | `know_your_rep` | `know_your_rep.json` | Not implemented, always empty |
//!
//! A section's file is written only when it produced at least one record,
//! so a failed or empty run leaves the previous file in place.
//!
//! # Failure handling
//!
//! Every per-source failure (untrusted URL, certificate, transport,
//! extraction) is logged with the source name and the source is skipped.
//! A failed write is logged and the remaining sections still run.

use crate::error::FetchError;
use crate::extract::extract_records;
use crate::fetch::Fetcher;
use crate::models::{Record, Source};
use crate::outputs::json::write_dataset;
use crate::sources::LEGISLATION_SOURCES;
use crate::validate::is_allowed_url;
use futures::stream::{self, StreamExt};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::{error, info, instrument, warn};

/// A dataset the pipeline can refresh.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Legislation,
    Mps,
    KnowYourRep,
}

impl Section {
    /// Every section, in the order a full run processes them.
    pub const ALL: [Section; 3] = [Section::Legislation, Section::Mps, Section::KnowYourRep];

    pub fn key(self) -> &'static str {
        match self {
            Section::Legislation => "legislation",
            Section::Mps => "mps",
            Section::KnowYourRep => "know_your_rep",
        }
    }

    /// Canonical output filename under the data directory.
    pub fn filename(self) -> &'static str {
        match self {
            Section::Legislation => "legislation.json",
            Section::Mps => "mps.json",
            Section::KnowYourRep => "know_your_rep.json",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Which sections a run should refresh.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionSelector {
    All,
    Only(Section),
}

impl SectionSelector {
    pub fn includes(self, section: Section) -> bool {
        match self {
            SectionSelector::All => true,
            SectionSelector::Only(only) => only == section,
        }
    }
}

impl FromStr for SectionSelector {
    type Err = String;

    /// Case-insensitive; `know-your-rep` is accepted for `know_your_rep`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        if normalized == "all" {
            return Ok(SectionSelector::All);
        }
        Section::ALL
            .into_iter()
            .find(|section| section.key() == normalized)
            .map(SectionSelector::Only)
            .ok_or_else(|| format!("unknown section {s:?}"))
    }
}

/// What happened to one section during a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionOutcome {
    pub section: Section,
    pub records: usize,
    /// Path of the written file; `None` when nothing was written.
    pub written: Option<PathBuf>,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub sections: Vec<SectionOutcome>,
}

impl RunSummary {
    pub fn files_written(&self) -> usize {
        self.sections.iter().filter(|s| s.written.is_some()).count()
    }
}

/// Refresh every section matched by `requested` and write non-empty
/// results under `data_dir`.
///
/// An unrecognized `requested` value is logged and runs nothing.
#[instrument(level = "info", skip(fetcher, data_dir), fields(data_dir = %data_dir.display()))]
pub async fn run<F: Fetcher>(fetcher: &F, requested: &str, data_dir: &Path) -> RunSummary {
    let mut summary = RunSummary::default();

    let selector = match requested.parse::<SectionSelector>() {
        Ok(selector) => selector,
        Err(e) => {
            warn!(error = %e, "No section matches; nothing to update");
            return summary;
        }
    };

    for section in Section::ALL {
        if !selector.includes(section) {
            continue;
        }

        info!(%section, "==== Updating section ====");
        let records = match section {
            Section::Legislation => fetch_legislation(fetcher, LEGISLATION_SOURCES).await,
            Section::Mps => fetch_mps(),
            Section::KnowYourRep => fetch_know_your_rep(),
        };

        let written = if records.is_empty() {
            info!(%section, "No records; leaving existing file untouched");
            None
        } else {
            match write_dataset(&records, data_dir, section.filename()).await {
                Ok(path) => Some(path),
                Err(e) => {
                    error!(%section, error = %e, "Failed to save section");
                    None
                }
            }
        };

        summary.sections.push(SectionOutcome {
            section,
            records: records.len(),
            written,
        });
    }

    summary
}

/// Fetch and extract bills from each source in turn.
///
/// Failed sources are logged and contribute nothing; the result holds the
/// records of every source that succeeded, in source order.
#[instrument(level = "info", skip_all, fields(sources = sources.len()))]
pub async fn fetch_legislation<F: Fetcher>(fetcher: &F, sources: &[Source]) -> Vec<Record> {
    let per_source: Vec<Vec<Record>> = stream::iter(sources)
        .then(|source| async move {
            match fetch_source(fetcher, source).await {
                Ok(records) => {
                    info!(source = %source.name, count = records.len(), "Fetched bills");
                    records
                }
                Err(e) => {
                    log_source_failure(source, &e);
                    Vec::new()
                }
            }
        })
        .collect()
        .await;

    let records: Vec<Record> = per_source.into_iter().flatten().collect();
    info!(count = records.len(), "Total bills fetched");
    records
}

async fn fetch_source<F: Fetcher>(fetcher: &F, source: &Source) -> Result<Vec<Record>, FetchError> {
    if !is_allowed_url(source.url) {
        return Err(FetchError::UntrustedUrl(source.url.to_string()));
    }
    let body = fetcher.fetch(source.url).await?;
    extract_records(&body, source)
}

fn log_source_failure(source: &Source, err: &FetchError) {
    match err {
        FetchError::UntrustedUrl(_) => {
            warn!(source = %source.name, url = %source.url, error = %err, "Untrusted source URL; skipping")
        }
        FetchError::Certificate(_) => {
            error!(source = %source.name, error = %err, "SSL certificate verification failed; skipping source")
        }
        FetchError::Transport(_) => {
            error!(source = %source.name, error = %err, "Error fetching data; skipping source")
        }
        FetchError::Unexpected(_) => {
            error!(source = %source.name, error = %err, "Unexpected error processing source; skipping")
        }
    }
}

/// MP profiles. Not implemented yet: always empty.
pub fn fetch_mps() -> Vec<Record> {
    info!("MP data fetching is not implemented yet");
    Vec::new()
}

/// Representative lookup data. Not implemented yet: always empty.
pub fn fetch_know_your_rep() -> Vec<Record> {
    info!("Know-your-rep data fetching is not implemented yet");
    Vec::new()
}
