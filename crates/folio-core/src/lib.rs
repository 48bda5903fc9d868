//! Core library for folio, a text search over folders of PDF files.
//!
//! This crate provides:
//! - PDF page text extraction (lopdf + pdf-extract)
//! - Case-insensitive substring and regex line matching
//! - Folder search with progress callbacks and per-file error isolation
//! - CSV and JSON export of results

pub mod error;
pub mod export;
pub mod models;
pub mod pdf;
pub mod search;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use error::{FolioError, PdfError, Result, SearchError};
pub use models::config::FolioConfig;
pub use models::report::{FileFailure, SearchHit, SearchReport};
pub use pdf::{PdfExtractor, PdfPage, PdfProcessor};
pub use search::{MatchMode, NoopObserver, Query, SearchObserver, Searcher};
