//! Subcommands of the folio CLI.

pub mod config;
pub mod find;
pub mod interactive;
pub mod search;

use std::io::{self, BufRead, Write};
use std::path::Path;

use console::style;

use folio_core::{FolioError, SearchError, SearchReport, Searcher};

use crate::progress::ProgressObserver;

/// Search `folder`, turning folder problems into user-facing messages.
pub(crate) fn run_search(
    searcher: &Searcher,
    folder: &Path,
    show_progress: bool,
) -> anyhow::Result<SearchReport> {
    let mut observer = ProgressObserver::new(show_progress);

    match searcher.search_folder(folder, &mut observer) {
        Ok(report) => Ok(report),
        Err(FolioError::Search(SearchError::FolderNotFound(path))) => anyhow::bail!(
            "Folder '{}' not found! Please create it and add PDFs.",
            path.display()
        ),
        Err(FolioError::Search(SearchError::NoPdfFiles(_))) => {
            anyhow::bail!("No PDF files found in the folder.")
        }
        Err(e) => Err(e.into()),
    }
}

/// Print `question` and read one line from stdin.
///
/// Returns `None` once stdin is closed. The trailing newline is removed.
pub(crate) fn prompt(question: &str) -> io::Result<Option<String>> {
    let mut stdout = io::stdout();
    write!(stdout, "{} ", style(question).bold())?;
    stdout.flush()?;

    let mut line = String::new();
    if io::stdin().lock().read_line(&mut line)? == 0 {
        return Ok(None);
    }

    let trimmed_len = line.trim_end_matches(['\r', '\n']).len();
    line.truncate(trimmed_len);
    Ok(Some(line))
}
