//! Invoice data model for the Russian payment invoice (счёт) layout family.

use rust_decimal::Decimal;
use serde::Serialize;

use super::field::Field;

/// The aggregate result of one parse call.
///
/// Every top-level key is always present; unmatched leaves carry the
/// sentinel (see [`Field`]). The record is immutable once returned and has
/// no identity beyond the document it was derived from.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct InvoiceRecord {
    /// Supplier (поставщик) block.
    pub supplier: Supplier,

    /// Customer (покупатель) block.
    pub customer: Customer,

    /// Invoice header (number and date).
    pub invoice: InvoiceHeader,

    /// Line items, always at least one entry (possibly the placeholder).
    pub items: Vec<LineItem>,

    /// Totals block.
    pub totals: Totals,
}

/// Supplier details, derived from the block bounded by the `Поставщик`
/// marker and the invoice header line.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Supplier {
    /// Legal name, between the marker word and the taxpayer-id marker.
    pub name: Field<String>,

    /// Taxpayer id (ИНН).
    pub inn: Field<String>,

    /// Registration code (КПП).
    pub kpp: Field<String>,

    /// Postal address, to end of line.
    pub address: Field<String>,

    /// Bank name, between the bank marker and the routing-code marker.
    pub bank_name: Field<String>,

    /// Bank routing code (БИК).
    pub bik: Field<String>,

    /// Settlement account (р/с).
    pub account: Field<String>,

    /// Correspondent account (к/с).
    pub corr_account: Field<String>,

    /// The captured block of source lines. Never an empty string: when the
    /// start marker is missing this is the sentinel too.
    pub raw: Field<String>,
}

/// Customer details, derived from the block bounded by the `Покупатель`
/// marker and the phone-label line.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Customer {
    /// Legal name.
    pub name: Field<String>,

    /// Taxpayer id (ИНН).
    pub inn: Field<String>,

    /// Registration code (КПП).
    pub kpp: Field<String>,

    /// Postal address.
    pub address: Field<String>,

    /// Phone number, after the `Тел.` label.
    pub phone: Field<String>,

    /// The captured block of source lines.
    pub raw: Field<String>,
}

/// Invoice number and date from the header line.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct InvoiceHeader {
    /// Invoice number, the token after `№`.
    pub number: Field<String>,

    /// Invoice date as found, DD.MM.YYYY. Kept as an opaque string;
    /// calendar validation is out of scope.
    pub date: Field<String>,

    /// The header line the fields were taken from.
    pub raw_header: Field<String>,
}

/// A single line item from the tabular part of the invoice.
///
/// [`LineItem::default`] is the fully-unrecognized placeholder emitted when
/// no row is recognized at all.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LineItem {
    /// Product/service name.
    pub name: Field<String>,

    /// Unit of measure (шт).
    pub unit: Field<String>,

    /// Quantity.
    pub quantity: Field<Decimal>,

    /// Unit price excluding VAT.
    pub price_no_vat: Field<Decimal>,

    /// Line subtotal excluding VAT.
    pub sum_no_vat: Field<Decimal>,

    /// VAT amount for the line.
    pub vat_sum: Field<Decimal>,

    /// Line total including VAT.
    pub sum_with_vat: Field<Decimal>,

    /// The originating source lines.
    pub raw: Field<String>,
}

/// Totals block, extracted from the full joined text.
///
/// Numeric values stay in the source's locale format (space thousands,
/// comma decimals) as opaque strings; downstream consumers depend on the
/// original textual form.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Totals {
    /// Subtotal excluding VAT (Итого).
    pub total_no_vat: Field<String>,

    /// VAT rate percentage from the parenthetical.
    pub vat_percent: Field<String>,

    /// VAT amount.
    pub vat_sum: Field<String>,

    /// Grand total including VAT (Всего с НДС).
    pub total_with_vat: Field<String>,

    /// Amount in words (рублей/копеек line).
    pub total_in_words: Field<String>,
}
