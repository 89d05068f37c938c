//! Trusted legislative sources.
//!
//! | Source | Listing page | Name selector |
//! |--------|--------------|---------------|
//! | PRS India | `https://prsindia.org/bills` | `.bill-name` |
//! | Lok Sabha | `https://loksabha.nic.in/` | `.bill-title` |
//!
//! The selectors have not been verified against the live sites. When a site
//! changes its markup the source simply yields no records.

use crate::models::{FieldSelectors, Source};

pub const PRS_INDIA: Source = Source {
    name: "PRS India",
    url: "https://prsindia.org/bills",
    selectors: FieldSelectors {
        bill_name: ".bill-name",
        bill_status: ".bill-status",
        bill_date: ".bill-date",
        bill_summary: ".bill-summary",
    },
};

pub const LOK_SABHA: Source = Source {
    name: "Lok Sabha",
    url: "https://loksabha.nic.in/",
    selectors: FieldSelectors {
        bill_name: ".bill-title",
        bill_status: ".bill-status",
        bill_date: ".bill-date",
        bill_summary: ".bill-desc",
    },
};

/// Sources for the legislation section, in fetch order.
pub const LEGISLATION_SOURCES: &[Source] = &[PRS_INDIA, LOK_SABHA];
