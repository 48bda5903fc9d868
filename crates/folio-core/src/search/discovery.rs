//! PDF file discovery inside the search folder.

use std::path::{Path, PathBuf};

use glob::{glob, Pattern};
use tracing::{debug, warn};

use crate::error::SearchError;

/// Whether `path` has a `.pdf` extension, ignoring case.
pub fn is_pdf(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("pdf"))
}

/// List the PDF files in `folder`, sorted by path.
///
/// Only the folder itself is listed unless `recursive` is set.
pub fn discover_pdfs(folder: &Path, recursive: bool) -> Result<Vec<PathBuf>, SearchError> {
    if !folder.exists() {
        return Err(SearchError::FolderNotFound(folder.to_path_buf()));
    }
    if !folder.is_dir() {
        return Err(SearchError::NotADirectory(folder.to_path_buf()));
    }

    let base = Pattern::escape(&folder.to_string_lossy());
    let pattern = if recursive {
        format!("{}/**/*", base)
    } else {
        format!("{}/*", base)
    };
    debug!("Listing files matching {}", pattern);

    let mut files: Vec<PathBuf> = glob(&pattern)
        .map_err(|e| SearchError::Discovery(e.to_string()))?
        .filter_map(|entry| match entry {
            Ok(path) => Some(path),
            Err(e) => {
                warn!("Skipping unreadable entry: {}", e);
                None
            }
        })
        .filter(|p| p.is_file() && is_pdf(p))
        .collect();

    if files.is_empty() {
        return Err(SearchError::NoPdfFiles(folder.to_path_buf()));
    }

    files.sort();
    debug!("Found {} PDF files in {}", files.len(), folder.display());
    Ok(files)
}

/// Name shown for `path` in results: its path relative to `folder`.
pub fn display_name(folder: &Path, path: &Path) -> String {
    path.strip_prefix(folder)
        .unwrap_or(path)
        .to_string_lossy()
        .into_owned()
}
