//! Page text extraction using lopdf and pdf-extract.

use std::io::{self, Write};
use std::panic::{self, UnwindSafe};
use std::thread;

use gag::Gag;
use lopdf::Document;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use super::{PdfProcessor, Result};
use crate::error::PdfError;

/// PDF text extractor using lopdf for the document model and pdf-extract for layout.
pub struct PdfExtractor {
    document: Option<Document>,
    raw_data: Vec<u8>,
}

/// Text from a single PDF page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PdfPage {
    /// Page number (1-indexed).
    pub number: u32,
    /// Extracted text from this page.
    pub text: String,
}

impl PdfExtractor {
    /// Create a new PDF extractor.
    pub fn new() -> Self {
        Self {
            document: None,
            raw_data: Vec::new(),
        }
    }

    /// Create an extractor and load `data` in one step.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        let mut extractor = Self::new();
        extractor.load(data)?;
        Ok(extractor)
    }

    fn document(&self) -> Result<&Document> {
        self.document.as_ref().ok_or(PdfError::NotLoaded)
    }

    /// Page texts as laid out by pdf-extract.
    ///
    /// A panic inside pdf-extract is reported as an extraction error.
    fn layout_pages(&self) -> Result<Vec<String>> {
        let data = &self.raw_data;
        match quietly(|| pdf_extract::extract_text_from_mem_by_pages(data)) {
            Ok(Ok(pages)) => Ok(pages),
            Ok(Err(e)) => Err(PdfError::TextExtraction(e.to_string())),
            Err(_) => Err(PdfError::TextExtraction(
                "pdf-extract panicked while reading content streams".to_string(),
            )),
        }
    }

    /// Use the pdf-extract layout when it covers every page, lopdf text otherwise.
    fn page_texts(&self, layout: Result<Vec<String>>) -> Result<Vec<String>> {
        let page_count = self.document()?.get_pages().len();

        match layout {
            Ok(texts) if texts.len() == page_count => Ok(texts),
            Ok(texts) => {
                warn!(
                    "pdf-extract returned {} pages for a {}-page document, using lopdf text",
                    texts.len(),
                    page_count
                );
                self.lopdf_pages()
            }
            Err(e) => {
                warn!("{}, using lopdf text", e);
                self.lopdf_pages()
            }
        }
    }

    /// Page texts straight from lopdf's content-stream decoder.
    fn lopdf_pages(&self) -> Result<Vec<String>> {
        let doc = self.document()?;
        Ok(doc
            .get_pages()
            .keys()
            .map(|&number| {
                doc.extract_text(&[number]).unwrap_or_else(|e| {
                    trace!("lopdf could not extract page {}: {}", number, e);
                    String::new()
                })
            })
            .collect())
    }
}

impl Default for PdfExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfProcessor for PdfExtractor {
    fn load(&mut self, data: &[u8]) -> Result<()> {
        let mut doc = Document::load_mem(data).map_err(|e| PdfError::Parse(e.to_string()))?;

        // Handle PDFs with empty password encryption
        if doc.is_encrypted() {
            if doc.decrypt("").is_err() {
                return Err(PdfError::Encrypted);
            }
            debug!("Decrypted PDF with empty password");

            // pdf-extract works from bytes, so hand it the decrypted copy
            let mut decrypted_data = Vec::new();
            doc.save_to(&mut decrypted_data)
                .map_err(|e| PdfError::Parse(format!("Failed to save decrypted PDF: {}", e)))?;
            self.raw_data = decrypted_data;
        } else {
            self.raw_data = data.to_vec();
        }

        let page_count = doc.get_pages().len();
        if page_count == 0 {
            return Err(PdfError::NoPages);
        }

        debug!("Loaded PDF with {} pages", page_count);
        self.document = Some(doc);
        Ok(())
    }

    fn page_count(&self) -> u32 {
        self.document
            .as_ref()
            .map(|doc| doc.get_pages().len() as u32)
            .unwrap_or(0)
    }

    fn extract_text(&self) -> Result<String> {
        let pages = self.extract_pages()?;
        Ok(pages
            .into_iter()
            .map(|p| p.text)
            .collect::<Vec<_>>()
            .join("\n"))
    }

    fn extract_page_text(&self, page: u32) -> Result<String> {
        let page_count = self.page_count();
        if page == 0 || page > page_count {
            return Err(PdfError::InvalidPage(page));
        }

        let mut pages = self.extract_pages()?;
        Ok(pages.swap_remove((page - 1) as usize).text)
    }

    fn extract_pages(&self) -> Result<Vec<PdfPage>> {
        self.document()?;
        let texts = self.page_texts(self.layout_pages())?;

        trace!(
            "Extracted {} chars over {} pages",
            texts.iter().map(String::len).sum::<usize>(),
            texts.len()
        );

        Ok(texts
            .into_iter()
            .enumerate()
            .map(|(i, text)| PdfPage {
                number: i as u32 + 1,
                text,
            })
            .collect())
    }
}

/// Run `f` with stdout sent to the null device and the panic hook muted.
///
/// pdf-extract prints font and glyph diagnostics with `println!`, which would
/// otherwise land in the middle of JSON or CSV written to stdout.
fn quietly<T>(f: impl FnOnce() -> T + UnwindSafe) -> thread::Result<T> {
    let _ = io::stdout().flush();
    let gag = Gag::stdout()
        .map_err(|e| trace!("could not silence stdout: {}", e))
        .ok();
    let hook = panic::take_hook();
    panic::set_hook(Box::new(|_| {}));

    let result = panic::catch_unwind(f);

    panic::set_hook(hook);
    let _ = io::stdout().flush();
    drop(gag);
    result
}
