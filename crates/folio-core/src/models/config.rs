//! Configuration structures for folio.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{FolioError, Result};
use crate::export::DEFAULT_CSV_FILE_NAME;
use crate::search::MatchMode;

/// Main configuration for folio.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FolioConfig {
    /// Search configuration.
    pub search: SearchConfig,

    /// PDF processing configuration.
    pub pdf: PdfConfig,

    /// Result output configuration.
    pub output: OutputConfig,
}

/// Where and how to search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Folder holding the PDF files.
    pub folder: PathBuf,

    /// Match case exactly instead of ignoring it.
    pub case_sensitive: bool,

    /// Interpret the term as a substring or a regular expression.
    pub mode: MatchMode,

    /// Include PDFs in sub-folders.
    pub recursive: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            folder: PathBuf::from("pdfs"),
            case_sensitive: false,
            mode: MatchMode::Substring,
            recursive: false,
        }
    }
}

/// PDF processing configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PdfConfig {
    /// Maximum pages to search per file (0 = unlimited).
    pub max_pages: usize,
}

/// Format used to print results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResultFormat {
    /// Aligned text table.
    #[default]
    Table,
    /// JSON search report.
    Json,
    /// CSV with File Name, Page, Line columns.
    Csv,
}

/// Result output configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Default result format.
    pub format: ResultFormat,

    /// File name offered when saving results as CSV.
    pub csv_file_name: String,

    /// Show a progress bar while searching.
    pub progress: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: ResultFormat::Table,
            csv_file_name: DEFAULT_CSV_FILE_NAME.to_string(),
            progress: true,
        }
    }
}

impl FolioConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| FolioError::Config(format!("{}: {}", path.display(), e)))
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults() {
        let config = FolioConfig::default();
        assert_eq!(config.search.folder, PathBuf::from("pdfs"));
        assert!(!config.search.case_sensitive);
        assert_eq!(config.search.mode, MatchMode::Substring);
        assert_eq!(config.pdf.max_pages, 0);
        assert_eq!(config.output.format, ResultFormat::Table);
        assert_eq!(config.output.csv_file_name, "search_results.csv");
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let config: FolioConfig =
            serde_json::from_str(r#"{ "search": { "folder": "docs", "mode": "regex" } }"#).unwrap();
        assert_eq!(config.search.folder, PathBuf::from("docs"));
        assert_eq!(config.search.mode, MatchMode::Regex);
        assert!(!config.search.recursive);
        assert!(config.output.progress);
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");

        let mut config = FolioConfig::default();
        config.output.format = ResultFormat::Csv;
        config.pdf.max_pages = 12;
        config.save(&path).unwrap();

        assert_eq!(FolioConfig::from_file(&path).unwrap(), config);
    }

    #[test]
    fn test_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{ not json").unwrap();

        assert!(matches!(FolioConfig::from_file(&path), Err(FolioError::Config(_))));
    }
}
