//! Terminal progress for folder searches.

use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::debug;

use folio_core::{FolioError, SearchObserver, SearchReport};

const TEMPLATE: &str = "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}";

/// Shows an indicatif bar while files are searched and reports skipped files.
pub struct ProgressObserver {
    enabled: bool,
    bar: Option<ProgressBar>,
}

impl ProgressObserver {
    pub fn new(enabled: bool) -> Self {
        Self { enabled, bar: None }
    }

    fn println(&self, message: String) {
        match &self.bar {
            Some(bar) => bar.println(message),
            None => eprintln!("{}", message),
        }
    }
}

impl SearchObserver for ProgressObserver {
    fn on_start(&mut self, total: usize) {
        if !self.enabled {
            return;
        }

        let bar = ProgressBar::new(total as u64);
        bar.set_style(
            ProgressStyle::with_template(TEMPLATE)
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("=>-"),
        );
        self.bar = Some(bar);
    }

    fn on_file(&mut self, index: usize, total: usize, name: &str) {
        debug!("Processing: {} ({}/{})", name, index, total);
        if let Some(bar) = &self.bar {
            bar.set_message(format!("Processing: {} ({}/{})", name, index, total));
        }
    }

    fn on_file_done(&mut self, _name: &str, _hits: usize) {
        if let Some(bar) = &self.bar {
            bar.inc(1);
        }
    }

    fn on_file_error(&mut self, name: &str, error: &FolioError) {
        self.println(format!("{} Error reading {}: {}", style("✗").red(), name, error));
        if let Some(bar) = &self.bar {
            bar.inc(1);
        }
    }

    fn on_finish(&mut self, _report: &SearchReport) {
        if let Some(bar) = self.bar.take() {
            bar.finish_and_clear();
        }
    }
}
