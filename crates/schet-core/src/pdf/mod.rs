//! PDF processing module.

mod extractor;

pub use extractor::PdfExtractor;

use crate::error::PdfError;

/// Result type for PDF operations.
pub type Result<T> = std::result::Result<T, PdfError>;

/// Trait for PDF text extraction implementations.
pub trait PdfProcessor {
    /// Load a PDF from bytes, validating its structure.
    fn load(&mut self, data: &[u8]) -> Result<()>;

    /// Number of pages in the loaded PDF.
    fn page_count(&self) -> u32;

    /// Extract text from the entire PDF, pages in reading order joined by
    /// newlines. No OCR, no layout reconstruction.
    fn extract_text(&self) -> Result<String>;
}

/// Extract the full text of a PDF held in memory.
///
/// The decode resources live only for the duration of the call and are
/// released on every path, success or failure.
pub fn extract_text(data: &[u8]) -> Result<String> {
    let mut extractor = PdfExtractor::new();
    extractor.load(data)?;
    extractor.extract_text()
}
