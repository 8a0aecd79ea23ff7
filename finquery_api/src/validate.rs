//! Schema validation for JSON row sequences.
//!
//! Upstream feeds serialize numbers as strings as often as not, so the
//! numeric readers accept either form. Validation is all-or-nothing: the
//! first row that fails the schema aborts the whole decode, and no prefix of
//! successfully parsed rows is returned.

use serde_json::{Map, Value};

use crate::Error;

/// Checks that `raw` is a JSON array of objects and parses every row in
/// order with `parse`. Fails on the first row that does not satisfy the
/// schema, reporting its index.
pub fn rows<T, F>(raw: &Value, parse: F) -> Result<Vec<T>, Error>
where
    F: Fn(usize, &Map<String, Value>) -> Result<T, Error>,
{
    let items = raw.as_array().ok_or_else(|| Error::Validation {
        index: 0,
        field: String::new(),
        reason: format!("expected a JSON array, got {}", kind(raw)),
    })?;
    items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            let row = item.as_object().ok_or_else(|| Error::Validation {
                index,
                field: String::new(),
                reason: format!("expected a JSON object, got {}", kind(item)),
            })?;
            parse(index, row)
        })
        .collect()
}

/// Reads a required string field.
pub fn text_field(row: &Map<String, Value>, index: usize, field: &str) -> Result<String, Error> {
    match get(row, index, field)? {
        Value::String(s) => Ok(s.clone()),
        other => Err(mismatch(index, field, "a string", other)),
    }
}

/// Reads a required floating-point field, accepting a JSON number or a
/// numeric string.
pub fn float_field(row: &Map<String, Value>, index: usize, field: &str) -> Result<f64, Error> {
    match get(row, index, field)? {
        Value::Number(n) => n
            .as_f64()
            .ok_or_else(|| mismatch_text(index, field, format!("{n} is out of range"))),
        Value::String(s) => s
            .trim()
            .parse::<f64>()
            .map_err(|_| mismatch_text(index, field, format!("`{s}` is not a number"))),
        other => Err(mismatch(index, field, "a number", other)),
    }
}

/// Reads a required integer field, accepting a JSON number or a numeric
/// string.
pub fn int_field(row: &Map<String, Value>, index: usize, field: &str) -> Result<i64, Error> {
    match get(row, index, field)? {
        Value::Number(n) => n
            .as_i64()
            .ok_or_else(|| mismatch_text(index, field, format!("{n} is not an integer"))),
        Value::String(s) => s
            .trim()
            .parse::<i64>()
            .map_err(|_| mismatch_text(index, field, format!("`{s}` is not an integer"))),
        other => Err(mismatch(index, field, "an integer", other)),
    }
}

fn get<'a>(row: &'a Map<String, Value>, index: usize, field: &str) -> Result<&'a Value, Error> {
    row.get(field).ok_or_else(|| Error::Validation {
        index,
        field: field.to_string(),
        reason: "missing".to_string(),
    })
}

fn mismatch(index: usize, field: &str, expected: &str, got: &Value) -> Error {
    mismatch_text(index, field, format!("expected {}, got {}", expected, kind(got)))
}

fn mismatch_text(index: usize, field: &str, reason: String) -> Error {
    Error::Validation {
        index,
        field: field.to_string(),
        reason,
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a bool",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, PartialEq)]
    struct Quote {
        price: f64,
        size: i64,
    }

    fn parse_quote(index: usize, row: &Map<String, Value>) -> Result<Quote, Error> {
        Ok(Quote {
            price: float_field(row, index, "price")?,
            size: int_field(row, index, "size")?,
        })
    }

    #[test]
    fn numeric_strings_coerce() {
        let raw = json!([{"price": "1.25", "size": "100"}]);
        let quotes = rows(&raw, parse_quote).unwrap();
        assert_eq!(
            quotes,
            vec![Quote {
                price: 1.25,
                size: 100
            }]
        );
    }

    #[test]
    fn json_numbers_pass_through() {
        let raw = json!([{"price": 2.5, "size": 10}]);
        let quotes = rows(&raw, parse_quote).unwrap();
        assert_eq!(quotes[0].price, 2.5);
        assert_eq!(quotes[0].size, 10);
    }

    #[test]
    fn first_bad_row_aborts_the_decode() {
        let raw = json!([
            {"price": 1.0, "size": 1},
            {"price": 2.0, "size": 2},
            {"price": "not a price", "size": 3},
            {"price": 4.0, "size": 4},
        ]);
        let err = rows(&raw, parse_quote).unwrap_err();
        match err {
            Error::Validation { index, field, .. } => {
                assert_eq!(index, 2);
                assert_eq!(field, "price");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn missing_field_is_named() {
        let raw = json!([{"price": 1.0}]);
        let err = rows(&raw, parse_quote).unwrap_err();
        match err {
            Error::Validation {
                index,
                field,
                reason,
            } => {
                assert_eq!(index, 0);
                assert_eq!(field, "size");
                assert_eq!(reason, "missing");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn non_array_input_is_rejected() {
        let raw = json!({"rows": []});
        assert!(rows(&raw, parse_quote).is_err());
    }

    #[test]
    fn non_object_row_is_rejected_at_its_index() {
        let raw = json!([{"price": 1.0, "size": 1}, 42]);
        let err = rows(&raw, parse_quote).unwrap_err();
        match err {
            Error::Validation { index, .. } => assert_eq!(index, 1),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn float_rejects_non_numeric_text() {
        let raw = json!([{"price": true, "size": 1}]);
        let err = rows(&raw, parse_quote).unwrap_err();
        match err {
            Error::Validation { field, reason, .. } => {
                assert_eq!(field, "price");
                assert!(reason.contains("expected a number"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
