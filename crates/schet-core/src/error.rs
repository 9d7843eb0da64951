//! Error types for the schet-core library.

use thiserror::Error;

/// Main error type for the schet library.
#[derive(Error, Debug)]
pub enum SchetError {
    /// PDF processing error.
    #[error("PDF error: {0}")]
    Pdf(#[from] PdfError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Structural failures while decoding a PDF document.
///
/// These propagate to the caller unchanged; a document that decodes but
/// matches none of the field rules is not an error (see
/// [`crate::models::Field`]).
#[derive(Error, Debug)]
pub enum PdfError {
    /// Failed to open/parse the PDF bytes.
    #[error("failed to parse PDF: {0}")]
    Parse(String),

    /// Failed to extract text from the PDF.
    #[error("failed to extract text: {0}")]
    TextExtraction(String),

    /// The PDF is encrypted and cannot be processed.
    #[error("PDF is encrypted")]
    Encrypted,

    /// The PDF is empty or has no pages.
    #[error("PDF has no pages")]
    NoPages,
}

/// Result type for the schet library.
pub type Result<T> = std::result::Result<T, SchetError>;
