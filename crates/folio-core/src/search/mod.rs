//! Query matching and folder search.

pub mod discovery;
mod engine;
pub mod matcher;
mod observer;
mod query;

pub use discovery::{discover_pdfs, display_name, is_pdf};
pub use engine::Searcher;
pub use matcher::{match_page, matching_lines};
pub use observer::{NoopObserver, SearchObserver};
pub use query::{MatchMode, Query};
