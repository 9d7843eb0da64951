//! Invoice field extraction module.

mod items;
mod parser;
pub mod rules;

pub use items::{KnownProductRecognizer, LineItemRecognizer};
pub use parser::InvoiceParser;
