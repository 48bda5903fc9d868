//! Progress callbacks for folder searches.

use crate::error::FolioError;
use crate::models::report::SearchReport;

/// Receives progress events while a folder is searched.
///
/// Every method has an empty default so front ends only implement what they show.
pub trait SearchObserver {
    /// Called once the file list is known.
    fn on_start(&mut self, _total: usize) {}

    /// Called before file `index` (1-indexed) of `total` is processed.
    fn on_file(&mut self, _index: usize, _total: usize, _name: &str) {}

    /// Called after a file was searched successfully.
    fn on_file_done(&mut self, _name: &str, _hits: usize) {}

    /// Called when a file is skipped because of an error.
    fn on_file_error(&mut self, _name: &str, _error: &FolioError) {}

    /// Called after the last file.
    fn on_finish(&mut self, _report: &SearchReport) {}
}

/// Observer that ignores every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl SearchObserver for NoopObserver {}
