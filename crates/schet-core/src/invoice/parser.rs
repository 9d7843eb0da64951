//! Rule-based invoice parser for the счёт layout family.

use tracing::{debug, info};

use crate::models::{Customer, Field, InvoiceHeader, InvoiceRecord, LineItem, Supplier, Totals};

use super::items::{KnownProductRecognizer, LineItemRecognizer};
use super::rules::patterns::*;
use super::rules::{bounded_block, capture};

/// Best-effort single-pass field extractor.
///
/// Each field is independent: a rule that finds nothing resolves to
/// [`Field::Unrecognized`] and never blocks the extraction of the others.
/// The parser holds no mutable state across calls and is safe to share
/// between threads.
pub struct InvoiceParser {
    recognizer: Box<dyn LineItemRecognizer>,
}

impl InvoiceParser {
    /// Create a parser with the default line-item recognizer.
    pub fn new() -> Self {
        Self {
            recognizer: Box::new(KnownProductRecognizer::default()),
        }
    }

    /// Substitute the line-item recognizer.
    pub fn with_recognizer(mut self, recognizer: Box<dyn LineItemRecognizer>) -> Self {
        self.recognizer = recognizer;
        self
    }

    /// Parse the text dump of a single invoice into a structured record.
    ///
    /// Infallible by design: every unmatched field comes back as the
    /// sentinel, and `items` always has at least one entry.
    pub fn parse(&self, text: &str) -> InvoiceRecord {
        info!("Parsing invoice from {} characters of text", text.len());

        // The working representation: trimmed, non-empty lines, pages
        // already flattened by the text extractor.
        let lines: Vec<&str> = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();
        let full_text = lines.join("\n");

        let record = InvoiceRecord {
            supplier: self.extract_supplier(&lines),
            customer: self.extract_customer(&lines),
            invoice: self.extract_header(&lines),
            items: self.extract_items(&lines),
            totals: self.extract_totals(&full_text),
        };

        debug!(
            "Extracted invoice {} dated {}",
            record.invoice.number, record.invoice.date
        );
        record
    }

    fn extract_supplier(&self, lines: &[&str]) -> Supplier {
        let block = bounded_block(
            lines,
            |line| line.starts_with("Поставщик"),
            |line| line.starts_with("СЧЁТ"),
        );

        match block {
            Some(block) => Supplier {
                name: capture(&SUPPLIER_NAME, &block, 1),
                inn: capture(&INN, &block, 1),
                kpp: capture(&KPP, &block, 1),
                address: capture(&ADDRESS, &block, 1),
                bank_name: capture(&BANK_NAME, &block, 1),
                bik: capture(&BIK, &block, 1),
                account: capture(&SETTLEMENT_ACCOUNT, &block, 1),
                corr_account: capture(&CORR_ACCOUNT, &block, 1),
                raw: Field::Recognized(block),
            },
            None => Supplier::default(),
        }
    }

    fn extract_customer(&self, lines: &[&str]) -> Customer {
        let block = bounded_block(
            lines,
            |line| line.starts_with("Покупатель"),
            |line| line.contains("Тел."),
        );

        match block {
            Some(block) => Customer {
                name: capture(&CUSTOMER_NAME, &block, 1),
                inn: capture(&INN, &block, 1),
                kpp: capture(&KPP, &block, 1),
                address: capture(&ADDRESS, &block, 1),
                phone: capture(&PHONE, &block, 1),
                raw: Field::Recognized(block),
            },
            None => Customer::default(),
        }
    }

    fn extract_header(&self, lines: &[&str]) -> InvoiceHeader {
        // Prefer the line carrying both markers; fall back to the invoice
        // marker alone so the number survives a missing date.
        let header_line = lines
            .iter()
            .find(|line| line.contains("СЧЁТ") && line.contains("от"))
            .or_else(|| lines.iter().find(|line| line.contains("СЧЁТ")))
            .copied();

        match header_line {
            Some(line) => InvoiceHeader {
                number: capture(&INVOICE_NUMBER, line, 1),
                date: capture(&INVOICE_DATE, line, 1),
                raw_header: Field::Recognized(line.to_string()),
            },
            None => InvoiceHeader::default(),
        }
    }

    fn extract_items(&self, lines: &[&str]) -> Vec<LineItem> {
        let items = self.recognizer.recognize(lines);
        if items.is_empty() {
            debug!("No line items recognized, emitting placeholder");
            return vec![LineItem::default()];
        }
        items
    }

    fn extract_totals(&self, full_text: &str) -> Totals {
        Totals {
            total_no_vat: capture(&TOTAL_NO_VAT, full_text, 1),
            vat_percent: capture(&VAT_PERCENT, full_text, 1),
            vat_sum: capture(&VAT_SUM, full_text, 1),
            total_with_vat: capture(&TOTAL_WITH_VAT, full_text, 1),
            total_in_words: capture(&TOTAL_IN_WORDS, full_text, 1),
        }
    }
}

impl Default for InvoiceParser {
    fn default() -> Self {
        Self::new()
    }
}
