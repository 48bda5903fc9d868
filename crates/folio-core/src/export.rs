//! CSV and JSON export of search results.

use std::io::{self, Write};
use std::path::Path;

use tracing::debug;

use crate::error::{FolioError, Result};
use crate::models::report::{SearchHit, SearchReport};

/// File name used when results are saved without an explicit name.
pub const DEFAULT_CSV_FILE_NAME: &str = "search_results.csv";

/// Column headers of the CSV export.
pub const CSV_HEADERS: [&str; 3] = ["File Name", "Page", "Line"];

/// Write `hits` as CSV to `writer`. The header row is always written.
pub fn write_csv<W: Write>(hits: &[SearchHit], writer: W) -> Result<()> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    wtr.write_record(CSV_HEADERS)?;
    for hit in hits {
        wtr.write_record([hit.file.as_str(), &hit.page.to_string(), hit.line.as_str()])?;
    }

    wtr.flush()?;
    Ok(())
}

/// Render `hits` as a CSV document.
pub fn to_csv_string(hits: &[SearchHit]) -> Result<String> {
    let mut buffer = Vec::new();
    write_csv(hits, &mut buffer)?;
    String::from_utf8(buffer)
        .map_err(|e| FolioError::Io(io::Error::new(io::ErrorKind::InvalidData, e)))
}

/// Save `hits` as CSV at `path`.
pub fn write_csv_file(hits: &[SearchHit], path: &Path) -> Result<()> {
    let file = std::fs::File::create(path)?;
    write_csv(hits, file)?;
    debug!("Wrote {} rows to {}", hits.len(), path.display());
    Ok(())
}

/// Render the whole report as pretty-printed JSON.
pub fn to_json_string(report: &SearchReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use pretty_assertions::assert_eq;
    use std::path::PathBuf;

    fn hits() -> Vec<SearchHit> {
        vec![
            SearchHit {
                file: "a.pdf".to_string(),
                page: 1,
                line_number: 4,
                line: "Total, incl. VAT".to_string(),
            },
            SearchHit {
                file: "b.pdf".to_string(),
                page: 7,
                line_number: 1,
                line: "વેપારી સાફિન".to_string(),
            },
        ]
    }

    #[test]
    fn test_csv_layout() {
        let csv = to_csv_string(&hits()).unwrap();
        assert_eq!(
            csv,
            "File Name,Page,Line\na.pdf,1,\"Total, incl. VAT\"\nb.pdf,7,વેપારી સાફિન\n"
        );
    }

    #[test]
    fn test_csv_header_without_hits() {
        assert_eq!(to_csv_string(&[]).unwrap(), "File Name,Page,Line\n");
    }

    #[test]
    fn test_csv_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DEFAULT_CSV_FILE_NAME);
        write_csv_file(&hits(), &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("File Name,Page,Line\n"));
        assert_eq!(content.lines().count(), 3);
    }

    #[test]
    fn test_json_report() {
        let report = SearchReport {
            query: "total".to_string(),
            folder: PathBuf::from("pdfs"),
            files_searched: 2,
            hits: hits(),
            failures: vec![],
            started_at: Utc::now(),
            elapsed_ms: 12,
        };

        let json = to_json_string(&report).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["query"], "total");
        assert_eq!(value["hits"][1]["page"], 7);
        assert_eq!(value["hits"][0]["line_number"], 4);
    }
}
