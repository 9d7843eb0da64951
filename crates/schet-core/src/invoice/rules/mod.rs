//! Rule machinery: the shared capture primitive, the block scan, and the
//! fixed pattern table.

mod blocks;
pub mod patterns;

pub use blocks::bounded_block;

use regex::Regex;

use crate::models::Field;

/// Apply one extraction rule: the first match of `re` in `text` yields the
/// given capture group trimmed of surrounding whitespace, otherwise the
/// field is unrecognized. Every field rule in the system goes through this
/// one primitive.
pub fn capture(re: &Regex, text: &str, group: usize) -> Field<String> {
    match re.captures(text).and_then(|caps| caps.get(group)) {
        Some(m) => Field::Recognized(m.as_str().trim().to_string()),
        None => Field::Unrecognized,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn capture_trims_the_matched_group() {
        let re = Regex::new(r"Тел\.\s*(.+)").unwrap();
        assert_eq!(
            capture(&re, "Тел. +7 (495) 123-45-67 ", 1),
            Field::Recognized("+7 (495) 123-45-67".to_string())
        );
    }

    #[test]
    fn capture_misses_become_unrecognized_not_empty() {
        let re = Regex::new(r"ИНН\s+(\d+)").unwrap();
        let field = capture(&re, "здесь нет идентификаторов", 1);
        assert_eq!(field, Field::Unrecognized);
        assert_ne!(field, Field::Recognized(String::new()));
    }
}
