//! Core library for Russian payment invoice (счёт) extraction.
//!
//! This crate provides:
//! - PDF text extraction (lopdf + pdf-extract)
//! - rule-based field extraction for one known invoice layout family
//! - a structured, always-fully-shaped invoice record with a tagged
//!   per-field "unrecognized" channel instead of per-field errors
//!
//! The pipeline is two stages: [`pdf::extract_text`] turns document bytes
//! into a flat text dump; [`invoice::InvoiceParser`] scans it with a fixed
//! battery of pattern rules. Only the first stage can fail; the second is
//! best-effort by design.

pub mod error;
pub mod invoice;
pub mod models;
pub mod pdf;

pub use error::{PdfError, Result, SchetError};
pub use invoice::{InvoiceParser, KnownProductRecognizer, LineItemRecognizer};
pub use models::{
    Customer, Field, InvoiceHeader, InvoiceRecord, LineItem, Supplier, Totals, UNRECOGNIZED,
};
pub use pdf::{PdfExtractor, PdfProcessor};

/// Parse a payment invoice PDF into a structured record.
///
/// The sole pipeline entry point. Bytes that are not a readable PDF fail
/// loudly with [`SchetError::Pdf`]; a readable document always yields a
/// fully-shaped record, with [`Field::Unrecognized`] standing in for every
/// field the rules did not match.
pub fn parse_invoice_pdf(data: &[u8]) -> Result<InvoiceRecord> {
    let text = pdf::extract_text(data)?;
    Ok(InvoiceParser::new().parse(&text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_document_fails_without_partial_record() {
        let err = parse_invoice_pdf(b"not a pdf at all").unwrap_err();
        assert!(matches!(err, SchetError::Pdf(_)));
    }
}
