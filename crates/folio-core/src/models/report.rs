//! Search results.

use std::collections::BTreeSet;
use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One matching line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchHit {
    /// File name relative to the searched folder.
    pub file: String,
    /// Page number (1-indexed).
    pub page: u32,
    /// Line number within the page text (1-indexed).
    pub line_number: usize,
    /// The matching line with surrounding whitespace trimmed.
    pub line: String,
}

/// A file that could not be searched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileFailure {
    pub file: String,
    pub error: String,
}

/// Outcome of searching a folder.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchReport {
    /// The term as given by the user.
    pub query: String,
    /// Folder that was searched.
    pub folder: PathBuf,
    /// Number of PDF files attempted, failures included.
    pub files_searched: usize,
    /// Hits in file, page, line order.
    pub hits: Vec<SearchHit>,
    /// Files skipped because of errors.
    pub failures: Vec<FileFailure>,
    /// When the search started.
    pub started_at: DateTime<Utc>,
    /// Wall-clock duration of the search.
    pub elapsed_ms: u64,
}

impl SearchReport {
    /// Whether the search found nothing.
    pub fn is_empty(&self) -> bool {
        self.hits.is_empty()
    }

    pub fn hit_count(&self) -> usize {
        self.hits.len()
    }

    /// Distinct files with at least one hit.
    pub fn files_with_hits(&self) -> usize {
        self.hits
            .iter()
            .map(|h| h.file.as_str())
            .collect::<BTreeSet<_>>()
            .len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hit(file: &str, page: u32) -> SearchHit {
        SearchHit {
            file: file.to_string(),
            page,
            line_number: 1,
            line: "x".to_string(),
        }
    }

    #[test]
    fn test_report_counts() {
        let report = SearchReport {
            query: "x".to_string(),
            folder: PathBuf::from("pdfs"),
            files_searched: 3,
            hits: vec![hit("a.pdf", 1), hit("a.pdf", 2), hit("b.pdf", 1)],
            failures: vec![],
            started_at: Utc::now(),
            elapsed_ms: 5,
        };

        assert!(!report.is_empty());
        assert_eq!(report.hit_count(), 3);
        assert_eq!(report.files_with_hits(), 2);
    }
}
