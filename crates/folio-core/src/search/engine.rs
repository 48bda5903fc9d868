//! Folder and file search.

use std::fs;
use std::path::Path;
use std::time::Instant;

use chrono::Utc;
use tracing::{debug, info};

use super::discovery::{discover_pdfs, display_name};
use super::matcher::match_page;
use super::observer::SearchObserver;
use super::Query;
use crate::error::Result;
use crate::models::config::FolioConfig;
use crate::models::report::{FileFailure, SearchHit, SearchReport};
use crate::pdf::{PdfExtractor, PdfProcessor};

/// Runs a query over PDF files.
#[derive(Debug, Clone)]
pub struct Searcher {
    query: Query,
    recursive: bool,
    max_pages: usize,
}

impl Searcher {
    /// Create a searcher with default options: top-level files only, every page.
    pub fn new(query: Query) -> Self {
        Self {
            query,
            recursive: false,
            max_pages: 0,
        }
    }

    /// Create a searcher using the folder and page options from `config`.
    pub fn from_config(query: Query, config: &FolioConfig) -> Self {
        Self::new(query)
            .with_recursive(config.search.recursive)
            .with_max_pages(config.pdf.max_pages)
    }

    /// Descend into sub-folders when listing files.
    pub fn with_recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }

    /// Search at most `max_pages` pages per file (0 = unlimited).
    pub fn with_max_pages(mut self, max_pages: usize) -> Self {
        self.max_pages = max_pages;
        self
    }

    pub fn query(&self) -> &Query {
        &self.query
    }

    /// Search an in-memory PDF, labelling hits with `name`.
    pub fn search_bytes(&self, name: &str, data: &[u8]) -> Result<Vec<SearchHit>> {
        let extractor = PdfExtractor::from_bytes(data)?;
        let mut pages = extractor.extract_pages()?;

        if self.max_pages > 0 && pages.len() > self.max_pages {
            debug!("{}: searching first {} of {} pages", name, self.max_pages, pages.len());
            pages.truncate(self.max_pages);
        }

        let hits: Vec<SearchHit> = pages
            .iter()
            .flat_map(|page| match_page(&self.query, name, page))
            .collect();

        debug!("{}: {} hits over {} pages", name, hits.len(), pages.len());
        Ok(hits)
    }

    /// Search the PDF at `path`, labelling hits with `name`.
    pub fn search_file(&self, path: &Path, name: &str) -> Result<Vec<SearchHit>> {
        let data = fs::read(path)?;
        self.search_bytes(name, &data)
    }

    /// Search every PDF in `folder`.
    ///
    /// Files that cannot be read or parsed are recorded in the report's
    /// failures and the search moves on. Only discovery errors abort.
    pub fn search_folder(
        &self,
        folder: &Path,
        observer: &mut dyn SearchObserver,
    ) -> Result<SearchReport> {
        let started_at = Utc::now();
        let start = Instant::now();

        let files = discover_pdfs(folder, self.recursive)?;
        let total = files.len();
        info!("Searching {} PDF files in {} for '{}'", total, folder.display(), self.query.term());
        observer.on_start(total);

        let mut hits = Vec::new();
        let mut failures = Vec::new();

        for (i, path) in files.iter().enumerate() {
            let name = display_name(folder, path);
            observer.on_file(i + 1, total, &name);

            match self.search_file(path, &name) {
                Ok(file_hits) => {
                    observer.on_file_done(&name, file_hits.len());
                    hits.extend(file_hits);
                }
                Err(e) => {
                    debug!("Skipping {}: {}", name, e);
                    observer.on_file_error(&name, &e);
                    failures.push(FileFailure {
                        file: name,
                        error: e.to_string(),
                    });
                }
            }
        }

        let report = SearchReport {
            query: self.query.term().to_string(),
            folder: folder.to_path_buf(),
            files_searched: total,
            hits,
            failures,
            started_at,
            elapsed_ms: start.elapsed().as_millis() as u64,
        };

        info!(
            "Found {} matches in {} of {} files ({} failed)",
            report.hit_count(),
            report.files_with_hits(),
            total,
            report.failures.len()
        );
        observer.on_finish(&report);
        Ok(report)
    }
}
