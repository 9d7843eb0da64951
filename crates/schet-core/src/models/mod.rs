//! Data model: tagged field results and the invoice record shape.

mod field;
mod record;

pub use field::{Field, UNRECOGNIZED};
pub use record::{Customer, InvoiceHeader, InvoiceRecord, LineItem, Supplier, Totals};
