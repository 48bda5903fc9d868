//! Interactive command - prompt-driven search over the PDF folder.

use std::path::PathBuf;

use clap::Args;
use console::style;

use folio_core::export::write_csv_file;
use folio_core::{FolioConfig, Query, SearchError, Searcher};

use super::{prompt, run_search};
use crate::output;

/// Arguments for the interactive command.
#[derive(Args)]
pub struct InteractiveArgs {
    /// Folder containing the PDF files (default from config: pdfs)
    #[arg(short, long)]
    dir: Option<PathBuf>,

    /// Hide the progress bar
    #[arg(long)]
    no_progress: bool,
}

pub fn run(args: InteractiveArgs, config: &FolioConfig) -> anyhow::Result<()> {
    let folder = args.dir.unwrap_or_else(|| config.search.folder.clone());
    let show_progress = config.output.progress && !args.no_progress;

    println!("{}", style("Smart PDF Search").cyan().bold());
    println!("Searching PDF files in {}", style(folder.display()).bold());
    println!();

    if !folder.is_dir() {
        anyhow::bail!(
            "Folder '{}' not found! Please create it and add PDFs.",
            folder.display()
        );
    }

    loop {
        let Some(term) = prompt("Enter text to search:")? else {
            break;
        };

        let query = match Query::compile(&term, config.search.mode, config.search.case_sensitive) {
            Ok(query) => query,
            Err(SearchError::EmptyQuery) => {
                println!("{} Please enter text to search.", style("⚠").yellow());
                continue;
            }
            Err(e) => {
                println!("{} {}", style("✗").red(), e);
                continue;
            }
        };

        let searcher = Searcher::from_config(query, config);
        let report = match run_search(&searcher, &folder, show_progress) {
            Ok(report) => report,
            Err(e) => {
                println!("{} {}", style("✗").red(), e);
                continue;
            }
        };

        println!();
        println!("{}", output::summary_line(&report));
        if let Some(line) = output::failure_summary(&report) {
            println!("{}", line);
        }

        if !report.is_empty() {
            println!();
            print!("{}", output::render_table(&report.hits));
            println!();

            let answer = prompt("Download results as CSV? [y/N]")?.unwrap_or_default();
            if is_yes(&answer) {
                let path = PathBuf::from(&config.output.csv_file_name);
                write_csv_file(&report.hits, &path)?;
                println!(
                    "{} Saved {} rows to {}",
                    style("✓").green(),
                    report.hit_count(),
                    path.display()
                );
            }
        }

        println!();
        let again = prompt("Search again? [y/N]")?.unwrap_or_default();
        if !is_yes(&again) {
            break;
        }
    }

    Ok(())
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}
