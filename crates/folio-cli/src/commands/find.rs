//! Find command - search a single PDF file.

use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use tracing::info;

use folio_core::search::display_name;
use folio_core::{FolioConfig, MatchMode, Query, Searcher};

/// Arguments for the find command.
#[derive(Args)]
pub struct FindArgs {
    /// PDF file to search
    #[arg(required = true)]
    file: PathBuf,

    /// Text to search for (asked on stdin when omitted)
    term: Option<String>,

    /// Treat the term as a regular expression
    #[arg(long)]
    regex: bool,

    /// Match case exactly
    #[arg(long)]
    case_sensitive: bool,
}

pub fn run(args: FindArgs, config: &FolioConfig) -> anyhow::Result<()> {
    let term = match args.term {
        Some(term) => term,
        None => super::prompt("Enter text to search:")?.unwrap_or_default(),
    };

    if !args.file.is_file() {
        anyhow::bail!("PDF file not found: {}", args.file.display());
    }

    let mode = if args.regex { MatchMode::Regex } else { config.search.mode };
    let query = Query::compile(&term, mode, args.case_sensitive || config.search.case_sensitive)?;
    let searcher = Searcher::from_config(query, config);

    println!();
    println!("Searching for '{}' in {}...", term, args.file.display());
    println!();

    let name = args
        .file
        .parent()
        .map(|dir| display_name(dir, &args.file))
        .unwrap_or_else(|| args.file.display().to_string());
    let hits = searcher
        .search_file(&args.file, &name)
        .with_context(|| format!("An error occurred while reading {}", args.file.display()))?;

    info!("{} hits in {}", hits.len(), name);

    if hits.is_empty() {
        println!("No matching text found in the PDF.");
        return Ok(());
    }

    for hit in &hits {
        println!("Page {}, Line {}: {}", hit.page, hit.line_number, hit.line);
    }

    Ok(())
}
