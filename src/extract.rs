//! Bill extraction from source HTML.
//!
//! A document contributes records only if it carries the `bill-item`
//! marker. Each `.bill-item` container becomes one [`Record`]; fields are
//! located with the source's [`FieldSelectors`](crate::models::FieldSelectors)
//! and default to `"N/A"` when missing.

use crate::error::FetchError;
use crate::models::{Record, Source};
use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};
use tracing::{debug, instrument};

const ITEM_MARKER: &str = "bill-item";

static ITEM_SELECTOR: Lazy<Selector> = Lazy::new(|| Selector::parse(".bill-item").unwrap());

/// Extract every bill listed in `body`, tagged with `source.name`.
///
/// Returns an empty Vec when the marker is absent. Fails only if one of the
/// source's selectors is not valid CSS.
#[instrument(level = "debug", skip_all, fields(source = %source.name))]
pub fn extract_records(body: &str, source: &Source) -> Result<Vec<Record>, FetchError> {
    if !body.contains(ITEM_MARKER) {
        debug!("No bill items in document");
        return Ok(Vec::new());
    }

    let sel = &source.selectors;
    let name = parse_selector(sel.bill_name)?;
    let status = parse_selector(sel.bill_status)?;
    let date = parse_selector(sel.bill_date)?;
    let summary = parse_selector(sel.bill_summary)?;

    let document = Html::parse_document(body);
    let records: Vec<Record> = document
        .select(&ITEM_SELECTOR)
        .map(|item| {
            Record::new(
                source,
                field_text(item, &name),
                field_text(item, &status),
                field_text(item, &date),
                field_text(item, &summary),
            )
        })
        .collect();

    debug!(count = records.len(), "Extracted bill records");
    Ok(records)
}

fn parse_selector(css: &str) -> Result<Selector, FetchError> {
    Selector::parse(css).map_err(|e| FetchError::Unexpected(format!("invalid selector {css:?}: {e}")))
}

/// Trimmed text of the first element under `item` matching `selector`.
fn field_text(item: ElementRef<'_>, selector: &Selector) -> Option<String> {
    item.select(selector)
        .next()
        .map(|el| el.text().collect::<String>().trim().to_string())
}
