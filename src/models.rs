//! Data models for legislative sources and the records extracted from them.
//!
//! - [`Source`]: a statically defined site with its URL and CSS selectors
//! - [`FieldSelectors`]: the per-source selector for each bill field
//! - [`Record`]: one bill as extracted from a source document
//!
//! Records serialize to the JSON shape consumed by the MP Tracker front-end:
//! `{"name", "status", "date", "summary", "source"}`.

use serde::{Deserialize, Serialize};

/// Placeholder for any field whose element could not be located.
pub const NOT_AVAILABLE: &str = "N/A";

/// CSS selectors locating each bill field inside an item container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSelectors {
    pub bill_name: &'static str,
    pub bill_status: &'static str,
    pub bill_date: &'static str,
    pub bill_summary: &'static str,
}

/// A trusted site publishing bill listings.
///
/// Sources are defined once at startup (see [`crate::sources`]) and never
/// modified. The `url` must pass [`crate::validate::is_allowed_url`] before
/// anything is fetched from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Source {
    /// Human-readable name, copied into every [`Record::source`].
    pub name: &'static str,
    /// Listing page to fetch.
    pub url: &'static str,
    pub selectors: FieldSelectors,
}

/// One bill entry extracted from a source document.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Record {
    pub name: String,
    pub status: String,
    pub date: String,
    pub summary: String,
    /// Name of the [`Source`] this record was extracted from.
    pub source: String,
}

impl Record {
    /// Build a record for `source`, substituting [`NOT_AVAILABLE`] for any
    /// missing field.
    pub fn new(
        source: &Source,
        name: Option<String>,
        status: Option<String>,
        date: Option<String>,
        summary: Option<String>,
    ) -> Self {
        let or_na = |v: Option<String>| v.unwrap_or_else(|| NOT_AVAILABLE.to_string());
        Self {
            name: or_na(name),
            status: or_na(status),
            date: or_na(date),
            summary: or_na(summary),
            source: source.name.to_string(),
        }
    }
}
