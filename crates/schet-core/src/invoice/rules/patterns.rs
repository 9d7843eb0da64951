//! Fixed regex table for the счёт layout family.
//!
//! Process-wide read-only data, kept apart from the scan/assembly logic so
//! the rules can be tested and extended independently.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Party blocks
    pub static ref SUPPLIER_NAME: Regex =
        Regex::new(r"Поставщик\s+(.+?)\s+ИНН").unwrap();

    pub static ref CUSTOMER_NAME: Regex =
        Regex::new(r"Покупатель\s+(.+?)\s+ИНН").unwrap();

    pub static ref INN: Regex = Regex::new(r"ИНН\s+(\d+)").unwrap();

    pub static ref KPP: Regex = Regex::new(r"КПП\s+(\d+)").unwrap();

    pub static ref ADDRESS: Regex = Regex::new(r"Адрес\s+(.+)").unwrap();

    // Bank requisites (supplier only)
    pub static ref BANK_NAME: Regex = Regex::new(r"Банк.*?\s(.+?)\s+БИК").unwrap();

    pub static ref BIK: Regex = Regex::new(r"БИК\s+(\d+)").unwrap();

    pub static ref SETTLEMENT_ACCOUNT: Regex = Regex::new(r"р/с\s+(\d+)").unwrap();

    pub static ref CORR_ACCOUNT: Regex = Regex::new(r"к/с\s+(\d+)").unwrap();

    pub static ref PHONE: Regex = Regex::new(r"Тел\.\s*(.+)").unwrap();

    // Header, e.g. "СЧЁТ № 2/168935 от 16.09.2025"
    pub static ref INVOICE_NUMBER: Regex = Regex::new(r"СЧЁТ\s*№\s*(\S+)").unwrap();

    pub static ref INVOICE_DATE: Regex =
        Regex::new(r"от\s+(\d{2}\.\d{2}\.\d{4})").unwrap();

    // Totals (Russian format: 243 375,00)
    pub static ref TOTAL_NO_VAT: Regex =
        Regex::new(r"Итого\s+([\d\s]+,\d{2})").unwrap();

    pub static ref VAT_PERCENT: Regex = Regex::new(r"НДС\s*\((\d+)%\)").unwrap();

    pub static ref VAT_SUM: Regex =
        Regex::new(r"НДС\s*\(\d+%\)\s+([\d\s]+,\d{2})").unwrap();

    pub static ref TOTAL_WITH_VAT: Regex =
        Regex::new(r"Всего с НДС\s+([\d\s]+,\d{2})").unwrap();

    pub static ref TOTAL_IN_WORDS: Regex =
        Regex::new(r"([А-ЯЁ].+рублей.*копеек)").unwrap();
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn invoice_number_takes_token_after_numero_sign() {
        let caps = INVOICE_NUMBER.captures("СЧЁТ № 2/168935 от 16.09.2025").unwrap();
        assert_eq!(&caps[1], "2/168935");
    }

    #[test]
    fn invoice_date_requires_full_dmy() {
        assert!(INVOICE_DATE.captures("от 16.09.2025").is_some());
        assert!(INVOICE_DATE.captures("от 16.09.25").is_none());
    }

    #[test]
    fn amount_patterns_keep_thousands_spaces() {
        let caps = TOTAL_NO_VAT.captures("Итого 243 375,00").unwrap();
        assert_eq!(&caps[1], "243 375,00");

        let caps = VAT_SUM.captures("НДС (20%) 48 675,00").unwrap();
        assert_eq!(&caps[1], "48 675,00");
    }

    #[test]
    fn total_in_words_stays_on_one_line() {
        let text = "Всего с НДС 292 050,00\nДвести рублей 00 копеек\nконец";
        let caps = TOTAL_IN_WORDS.captures(text).unwrap();
        assert_eq!(&caps[1], "Двести рублей 00 копеек");
    }
}
