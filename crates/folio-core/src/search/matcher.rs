//! Line-by-line matching over extracted page text.

use super::Query;
use crate::models::report::SearchHit;
use crate::pdf::PdfPage;

/// Lines of `text` that match `query`, as `(line_number, line)` pairs.
///
/// Lines are split on `'\n'` and numbered from 1; blank lines keep their
/// number. The returned line is the raw line, untrimmed.
pub fn matching_lines<'a>(query: &'a Query, text: &'a str) -> impl Iterator<Item = (usize, &'a str)> + 'a {
    text.split('\n')
        .enumerate()
        .map(|(i, line)| (i + 1, line))
        .filter(move |(_, line)| query.matches(line))
}

/// Collect hits for one page of `file`.
pub fn match_page(query: &Query, file: &str, page: &PdfPage) -> Vec<SearchHit> {
    if page.text.is_empty() {
        return Vec::new();
    }

    matching_lines(query, &page.text)
        .map(|(line_number, line)| SearchHit {
            file: file.to_string(),
            page: page.number,
            line_number,
            line: line.trim().to_string(),
        })
        .collect()
}
