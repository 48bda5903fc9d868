//! Error types for the folio-core library.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the folio library.
#[derive(Error, Debug)]
pub enum FolioError {
    /// PDF processing error.
    #[error("PDF error: {0}")]
    Pdf(#[from] PdfError),

    /// Query or folder search error.
    #[error("search error: {0}")]
    Search(#[from] SearchError),

    /// CSV export error.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Errors related to PDF processing.
#[derive(Error, Debug)]
pub enum PdfError {
    /// Failed to open/parse the PDF file.
    #[error("failed to parse PDF: {0}")]
    Parse(String),

    /// Failed to extract text from PDF.
    #[error("failed to extract text: {0}")]
    TextExtraction(String),

    /// The PDF is encrypted and cannot be processed.
    #[error("PDF is encrypted")]
    Encrypted,

    /// The PDF is empty or has no pages.
    #[error("PDF has no pages")]
    NoPages,

    /// Invalid page number requested.
    #[error("invalid page number: {0}")]
    InvalidPage(u32),

    /// An operation needed a document but none was loaded.
    #[error("no document loaded")]
    NotLoaded,
}

/// Errors related to building queries and walking the search folder.
#[derive(Error, Debug)]
pub enum SearchError {
    /// The search term is empty or whitespace only.
    #[error("search text is empty")]
    EmptyQuery,

    /// The term could not be compiled as a regular expression.
    #[error("invalid pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    /// The folder to search does not exist.
    #[error("folder '{}' not found", .0.display())]
    FolderNotFound(PathBuf),

    /// The folder path points at something other than a directory.
    #[error("'{}' is not a directory", .0.display())]
    NotADirectory(PathBuf),

    /// The folder holds no PDF files.
    #[error("no PDF files found in '{}'", .0.display())]
    NoPdfFiles(PathBuf),

    /// File discovery failed.
    #[error("failed to list files: {0}")]
    Discovery(String),
}

/// Result type for the folio library.
pub type Result<T> = std::result::Result<T, FolioError>;
