//! Data models for folio.

pub mod config;
pub mod report;

pub use config::{FolioConfig, OutputConfig, PdfConfig, ResultFormat, SearchConfig};
pub use report::{FileFailure, SearchHit, SearchReport};
