//! Result rendering shared by the search front ends.

use console::{measure_text_width, pad_str, style, truncate_str, Alignment};

use folio_core::export::{to_csv_string, to_json_string, CSV_HEADERS};
use folio_core::models::config::ResultFormat;
use folio_core::{SearchHit, SearchReport};

/// Widest the Line column gets before text is cut.
const MAX_LINE_WIDTH: usize = 120;

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Aligned table
    Table,
    /// JSON search report
    Json,
    /// CSV (File Name, Page, Line)
    Csv,
}

impl From<ResultFormat> for OutputFormat {
    fn from(format: ResultFormat) -> Self {
        match format {
            ResultFormat::Table => OutputFormat::Table,
            ResultFormat::Json => OutputFormat::Json,
            ResultFormat::Csv => OutputFormat::Csv,
        }
    }
}

/// Render the report in `format`.
pub fn render(report: &SearchReport, format: OutputFormat) -> anyhow::Result<String> {
    Ok(match format {
        OutputFormat::Table => render_table(&report.hits),
        OutputFormat::Json => to_json_string(report)?,
        OutputFormat::Csv => to_csv_string(&report.hits)?,
    })
}

/// Lay hits out as a File Name / Page / Line table.
pub fn render_table(hits: &[SearchHit]) -> String {
    let rows: Vec<[String; 3]> = hits
        .iter()
        .map(|h| {
            [
                h.file.clone(),
                h.page.to_string(),
                truncate_str(&h.line, MAX_LINE_WIDTH, "...").into_owned(),
            ]
        })
        .collect();

    let mut widths = CSV_HEADERS.map(measure_text_width);
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(measure_text_width(cell));
        }
    }

    let mut output = String::new();
    push_row(&mut output, &CSV_HEADERS.map(str::to_string), &widths);
    push_row(&mut output, &widths.map(|w| "-".repeat(w)), &widths);
    for row in &rows {
        push_row(&mut output, row, &widths);
    }
    output
}

fn push_row(output: &mut String, cells: &[String; 3], widths: &[usize; 3]) {
    let file = pad_str(&cells[0], widths[0], Alignment::Left, None);
    let page = pad_str(&cells[1], widths[1], Alignment::Right, None);
    output.push_str(format!("{}  {}  {}", file, page, cells[2]).trim_end());
    output.push('\n');
}

/// One-line outcome of a folder search.
pub fn summary_line(report: &SearchReport) -> String {
    if report.is_empty() {
        format!("{} No matches found for '{}'.", style("ℹ").blue(), report.query)
    } else {
        format!(
            "{} Found {} matches for '{}' in {} PDFs.",
            style("✓").green(),
            report.hit_count(),
            report.query,
            report.files_searched
        )
    }
}

/// Count of skipped files, `None` when every file was read.
///
/// Each failure has already been reported by the progress observer.
pub fn failure_summary(report: &SearchReport) -> Option<String> {
    if report.failures.is_empty() {
        return None;
    }

    Some(format!(
        "{} {} of {} files could not be read.",
        style("!").yellow(),
        report.failures.len(),
        report.files_searched
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn report_with(hits: Vec<SearchHit>) -> SearchReport {
        serde_json::from_value(serde_json::json!({
            "query": "total",
            "folder": "pdfs",
            "files_searched": 2,
            "hits": hits,
            "failures": [],
            "started_at": "2024-05-01T10:00:00Z",
            "elapsed_ms": 3
        }))
        .unwrap()
    }

    fn hit(file: &str, page: u32, line: &str) -> SearchHit {
        SearchHit {
            file: file.to_string(),
            page,
            line_number: 1,
            line: line.to_string(),
        }
    }

    #[test]
    fn test_table_alignment() {
        let table = render_table(&[hit("a.pdf", 1, "Total 5"), hit("report-2024.pdf", 12, "total due")]);
        assert_eq!(
            table,
            "File Name        Page  Line\n\
             ---------------  ----  ---------\n\
             a.pdf               1  Total 5\n\
             report-2024.pdf    12  total due\n"
        );
    }

    #[test]
    fn test_table_without_hits() {
        assert_eq!(render_table(&[]), "File Name  Page  Line\n---------  ----  ----\n");
    }

    #[test]
    fn test_long_lines_are_cut() {
        let long = "x".repeat(300);
        let table = render_table(&[hit("a.pdf", 1, &long)]);
        let last = table.lines().last().unwrap();
        assert!(last.ends_with("..."));
        assert!(measure_text_width(last) < 300);
    }

    #[test]
    fn test_render_csv() {
        let report = report_with(vec![hit("a.pdf", 2, "Total 5")]);
        let csv = render(&report, OutputFormat::Csv).unwrap();
        assert_eq!(csv, "File Name,Page,Line\na.pdf,2,Total 5\n");
    }

    #[test]
    fn test_render_json() {
        let report = report_with(vec![hit("a.pdf", 2, "Total 5")]);
        let json = render(&report, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["hits"][0]["file"], "a.pdf");
    }

    #[test]
    fn test_summary_mentions_counts() {
        let report = report_with(vec![hit("a.pdf", 2, "Total 5")]);
        let line = console::strip_ansi_codes(&summary_line(&report)).into_owned();
        assert!(line.ends_with("Found 1 matches for 'total' in 2 PDFs."), "{}", line);

        let empty = report_with(vec![]);
        let line = console::strip_ansi_codes(&summary_line(&empty)).into_owned();
        assert!(line.ends_with("No matches found for 'total'."), "{}", line);
    }

    #[test]
    fn test_failure_summary() {
        let mut report = report_with(vec![]);
        assert_eq!(failure_summary(&report), None);

        report.failures.push(folio_core::FileFailure {
            file: "bad.pdf".to_string(),
            error: "PDF error: PDF is encrypted".to_string(),
        });
        let line = failure_summary(&report).unwrap();
        let line = console::strip_ansi_codes(&line).into_owned();
        assert_eq!(line, "! 1 of 2 files could not be read.");
    }

    #[test]
    fn test_config_format_maps() {
        assert_eq!(OutputFormat::from(ResultFormat::Csv), OutputFormat::Csv);
        assert_eq!(OutputFormat::from(ResultFormat::Table), OutputFormat::Table);
    }
}
