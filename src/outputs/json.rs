//! JSON output for the front-end.
//!
//! Each section is written as a single array to `{data_dir}/{filename}`,
//! replacing whatever the previous run left there:
//!
//! ```text
//! data/
//! ├── legislation.json
//! ├── mps.json
//! └── know_your_rep.json
//! ```
//!
//! Output is indented with four spaces and keeps non-ASCII text as-is.

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::error::Error;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{error, info, instrument};

/// Write `records` as a pretty-printed JSON array to `{data_dir}/{filename}`.
///
/// Creates `data_dir` if needed and overwrites any existing file.
///
/// # Returns
///
/// The path that was written.
#[instrument(level = "info", skip_all, fields(data_dir = %data_dir.display(), %filename))]
pub async fn write_dataset<T: Serialize>(
    records: &[T],
    data_dir: &Path,
    filename: &str,
) -> Result<PathBuf, Box<dyn Error>> {
    let json = to_pretty_json(records)?;

    if let Err(e) = fs::create_dir_all(data_dir).await {
        error!(error = %e, "Failed to create data dir");
        return Err(e.into());
    }

    let path = data_dir.join(filename);
    fs::write(&path, json).await?;
    info!(path = %path.display(), count = records.len(), "Wrote JSON dataset");

    Ok(path)
}

fn to_pretty_json<T: Serialize>(records: &[T]) -> Result<Vec<u8>, serde_json::Error> {
    let mut buf = Vec::new();
    let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
    records.serialize(&mut ser)?;
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::extract_records;
    use crate::models::Record;
    use crate::sources::PRS_INDIA;

    fn record(name: &str) -> Record {
        Record::new(&PRS_INDIA, Some(name.to_string()), None, None, None)
    }

    #[tokio::test]
    async fn test_creates_missing_directory() {
        let tmp = tempfile::tempdir().unwrap();
        let data_dir = tmp.path().join("nested").join("data");

        let path = write_dataset(&[record("A")], &data_dir, "legislation.json")
            .await
            .unwrap();

        assert_eq!(path, data_dir.join("legislation.json"));
        assert!(path.exists());
    }

    #[tokio::test]
    async fn test_overwrites_previous_file() {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::write(tmp.path().join("legislation.json"), "x".repeat(4096)).unwrap();

        let path = write_dataset(&[record("Only")], tmp.path(), "legislation.json")
            .await
            .unwrap();

        let back: Vec<Record> = serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap();
        assert_eq!(back, vec![record("Only")]);
    }

    #[tokio::test]
    async fn test_four_space_indent_and_unescaped_unicode() {
        let tmp = tempfile::tempdir().unwrap();
        let path = write_dataset(&[record("वित्त विधेयक")], tmp.path(), "legislation.json")
            .await
            .unwrap();

        let text = std::fs::read_to_string(path).unwrap();
        assert!(text.starts_with("[\n    {\n        \"name\": "));
        assert!(text.contains("वित्त विधेयक"));
        assert!(!text.contains("\\u"));
    }

    #[tokio::test]
    async fn test_extract_then_persist_round_trip() {
        let html = r#"
            <div class="bill-item"><span class="bill-name">First</span><span class="bill-date">2024</span></div>
            <div class="bill-item"><span class="bill-status">Lapsed</span></div>
            <div class="bill-item"><span class="bill-summary">Third</span></div>"#;
        let records = extract_records(html, &PRS_INDIA).unwrap();

        let tmp = tempfile::tempdir().unwrap();
        let path = write_dataset(&records, tmp.path(), "legislation.json")
            .await
            .unwrap();

        let back: Vec<Record> = serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap();
        assert_eq!(back.len(), 3);
        assert_eq!(back, records);
    }
}
