//! Tagged per-field extraction result.

use std::fmt;

use serde::{Serialize, Serializer};

/// Wire representation of an unmatched field.
pub const UNRECOGNIZED: &str = "UNRECOGNIZED";

/// Result of applying a single extraction rule to a field.
///
/// A field that was not found is carried as [`Field::Unrecognized`] rather
/// than an empty string, so "was this found" stays explicit and cannot
/// collide with legitimate data. On the wire an unrecognized field
/// serializes as the literal string `"UNRECOGNIZED"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Field<T> {
    /// The rule matched; holds the trimmed captured value.
    Recognized(T),
    /// The rule did not match anywhere in the search text.
    Unrecognized,
}

impl<T> Field<T> {
    /// Whether the rule matched.
    pub fn is_recognized(&self) -> bool {
        matches!(self, Field::Recognized(_))
    }

    /// The captured value, if any.
    pub fn value(&self) -> Option<&T> {
        match self {
            Field::Recognized(v) => Some(v),
            Field::Unrecognized => None,
        }
    }

    /// Map the captured value, preserving `Unrecognized`.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Field<U> {
        match self {
            Field::Recognized(v) => Field::Recognized(f(v)),
            Field::Unrecognized => Field::Unrecognized,
        }
    }
}

impl<T> Default for Field<T> {
    fn default() -> Self {
        Field::Unrecognized
    }
}

impl<T> From<Option<T>> for Field<T> {
    fn from(opt: Option<T>) -> Self {
        match opt {
            Some(v) => Field::Recognized(v),
            None => Field::Unrecognized,
        }
    }
}

impl<T: Serialize> Serialize for Field<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Field::Recognized(v) => v.serialize(serializer),
            Field::Unrecognized => serializer.serialize_str(UNRECOGNIZED),
        }
    }
}

impl<T: fmt::Display> fmt::Display for Field<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Recognized(v) => v.fmt(f),
            Field::Unrecognized => f.write_str(UNRECOGNIZED),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn recognized_serializes_as_inner_value() {
        let field = Field::Recognized("2/168935".to_string());
        assert_eq!(serde_json::to_value(&field).unwrap(), json!("2/168935"));
    }

    #[test]
    fn unrecognized_serializes_as_sentinel() {
        let field: Field<String> = Field::Unrecognized;
        assert_eq!(serde_json::to_value(&field).unwrap(), json!(UNRECOGNIZED));
    }

    #[test]
    fn display_prints_sentinel_never_empty() {
        let field: Field<String> = Field::Unrecognized;
        assert_eq!(field.to_string(), UNRECOGNIZED);
        assert!(!field.to_string().is_empty());
    }

    #[test]
    fn from_option() {
        assert_eq!(Field::from(Some(1)), Field::Recognized(1));
        assert_eq!(Field::<i32>::from(None), Field::Unrecognized);
    }
}
