//! Search terms and line matching.

use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};

use crate::error::SearchError;

/// How the search term is interpreted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchMode {
    /// Plain substring containment.
    #[default]
    Substring,
    /// Regular expression (regex crate syntax).
    Regex,
}

#[derive(Debug, Clone)]
enum Needle {
    /// Term as typed, already lowercased when matching ignores case.
    Plain(String),
    Pattern(Regex),
}

/// A compiled search term.
#[derive(Debug, Clone)]
pub struct Query {
    term: String,
    mode: MatchMode,
    case_sensitive: bool,
    needle: Needle,
}

impl Query {
    /// Case-insensitive substring query, the default search.
    pub fn new(term: &str) -> Result<Self, SearchError> {
        Self::compile(term, MatchMode::Substring, false)
    }

    /// Build a query with explicit matching options.
    ///
    /// Whitespace-only terms are rejected. The term itself is kept as typed,
    /// so leading or trailing spaces take part in matching.
    pub fn compile(term: &str, mode: MatchMode, case_sensitive: bool) -> Result<Self, SearchError> {
        if term.trim().is_empty() {
            return Err(SearchError::EmptyQuery);
        }

        let needle = match mode {
            MatchMode::Substring if case_sensitive => Needle::Plain(term.to_string()),
            MatchMode::Substring => Needle::Plain(term.to_lowercase()),
            MatchMode::Regex => Needle::Pattern(
                RegexBuilder::new(term)
                    .case_insensitive(!case_sensitive)
                    .build()?,
            ),
        };

        Ok(Self {
            term: term.to_string(),
            mode,
            case_sensitive,
            needle,
        })
    }

    /// The term as given by the user.
    pub fn term(&self) -> &str {
        &self.term
    }

    pub fn mode(&self) -> MatchMode {
        self.mode
    }

    pub fn is_case_sensitive(&self) -> bool {
        self.case_sensitive
    }

    /// Check whether `line` contains the term.
    pub fn matches(&self, line: &str) -> bool {
        match &self.needle {
            Needle::Plain(needle) if self.case_sensitive => line.contains(needle.as_str()),
            Needle::Plain(needle) => line.to_lowercase().contains(needle.as_str()),
            Needle::Pattern(re) => re.is_match(line),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_substring_ignores_case() {
        let query = Query::new("Invoice").unwrap();
        assert!(query.matches("shipping INVOICE #12"));
        assert!(query.matches("invoice"));
        assert!(!query.matches("receipt"));
    }

    #[test]
    fn test_substring_case_sensitive() {
        let query = Query::compile("Invoice", MatchMode::Substring, true).unwrap();
        assert!(query.matches("Invoice 7"));
        assert!(!query.matches("invoice 7"));
    }

    #[test]
    fn test_unicode_lowercasing() {
        let query = Query::new("ŻÓŁW").unwrap();
        assert!(query.matches("zielony żółw"));

        // Scripts without case still match as plain substrings
        let query = Query::new("વેપારી").unwrap();
        assert!(query.matches("નામ: વેપારી સાફિન"));
    }

    #[test]
    fn test_blank_term_rejected() {
        assert!(matches!(Query::new(""), Err(SearchError::EmptyQuery)));
        assert!(matches!(Query::new("   \t"), Err(SearchError::EmptyQuery)));
    }

    #[test]
    fn test_term_kept_verbatim() {
        let query = Query::new(" total").unwrap();
        assert_eq!(query.term(), " total");
        assert!(query.matches("grand total"));
        assert!(!query.matches("total"));
    }

    #[test]
    fn test_regex_mode() {
        let query = Query::compile(r"FV/\d+/2024", MatchMode::Regex, false).unwrap();
        assert!(query.matches("faktura fv/001/2024"));
        assert!(!query.matches("FV/abc/2024"));
        assert_eq!(query.mode(), MatchMode::Regex);
    }

    #[test]
    fn test_regex_case_sensitive() {
        let query = Query::compile("^Total", MatchMode::Regex, true).unwrap();
        assert!(query.is_case_sensitive());
        assert!(query.matches("Total: 10"));
        assert!(!query.matches("total: 10"));
    }

    #[test]
    fn test_invalid_regex() {
        let result = Query::compile("(unclosed", MatchMode::Regex, false);
        assert!(matches!(result, Err(SearchError::InvalidPattern(_))));
    }
}
