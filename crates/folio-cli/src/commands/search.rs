//! Search command - find a term across every PDF in a folder.

use std::fs;
use std::path::PathBuf;

use clap::Args;
use console::style;
use tracing::debug;

use folio_core::{FolioConfig, MatchMode, Query, Searcher};

use crate::output::{self, OutputFormat};

/// Arguments for the search command.
#[derive(Args)]
pub struct SearchArgs {
    /// Text to search for
    #[arg(required = true)]
    term: String,

    /// Folder containing the PDF files (default from config: pdfs)
    #[arg(short, long)]
    dir: Option<PathBuf>,

    /// Output format (default from config: table)
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,

    /// Write results to a file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Treat the term as a regular expression
    #[arg(long)]
    regex: bool,

    /// Match case exactly
    #[arg(long)]
    case_sensitive: bool,

    /// Include PDFs in sub-folders
    #[arg(short, long)]
    recursive: bool,

    /// Hide the progress bar
    #[arg(long)]
    no_progress: bool,
}

pub fn run(args: SearchArgs, config: &FolioConfig) -> anyhow::Result<()> {
    let folder = args.dir.unwrap_or_else(|| config.search.folder.clone());
    let mode = if args.regex { MatchMode::Regex } else { config.search.mode };
    let case_sensitive = args.case_sensitive || config.search.case_sensitive;
    let format = args.format.unwrap_or_else(|| config.output.format.into());

    let query = Query::compile(&args.term, mode, case_sensitive)?;
    let searcher = Searcher::from_config(query, config)
        .with_recursive(args.recursive || config.search.recursive);

    let show_progress = config.output.progress && !args.no_progress;
    let report = super::run_search(&searcher, &folder, show_progress)?;
    debug!("Search finished in {}ms", report.elapsed_ms);

    let rendered = output::render(&report, format)?;

    if let Some(output_path) = &args.output {
        fs::write(output_path, &rendered)?;
        println!("{}", output::summary_line(&report));
        println!(
            "{} Output written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else if format == OutputFormat::Table {
        println!("{}", output::summary_line(&report));
        if !report.is_empty() {
            println!();
            print!("{}", rendered);
        }
    } else {
        // Machine-readable output owns stdout
        eprintln!("{}", output::summary_line(&report));
        print!("{}", rendered);
        if format == OutputFormat::Json {
            println!();
        }
    }

    if let Some(line) = output::failure_summary(&report) {
        eprintln!("{}", line);
    }

    Ok(())
}
