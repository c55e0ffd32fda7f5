//! Strict row decoding
//!
//! A collection is decoded row by row so that a contract violation names the
//! entity and the index of the first bad row.

use crate::error::ModelError;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// A backend row type
pub trait Row: DeserializeOwned {
    /// Entity name used in diagnostics
    const ENTITY: &'static str;
}

/// Decode a JSON array of rows
///
/// # Errors
/// - [`ModelError::NotAnArray`] if `value` is not an array
/// - [`ModelError::MalformedRow`] for the first row that fails to decode
pub fn decode_rows<T: Row>(value: Value) -> Result<Vec<T>, ModelError> {
    let Value::Array(items) = value else {
        return Err(ModelError::NotAnArray { entity: T::ENTITY });
    };

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            serde_json::from_value(item).map_err(|e| ModelError::MalformedRow {
                entity: T::ENTITY,
                index,
                message: e.to_string(),
            })
        })
        .collect()
}

/// Decode a JSON text holding an array of rows
///
/// # Errors
/// Same as [`decode_rows`], plus [`ModelError::Json`] for invalid JSON.
pub fn decode_rows_str<T: Row>(json: &str) -> Result<Vec<T>, ModelError> {
    let value: Value = serde_json::from_str(json)?;
    decode_rows(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{LineItem, Quote};
    use serde_json::json;

    #[test]
    fn decode_reports_failing_index() {
        let value = json!([
            {"id": 1, "area_id": 1, "budgeted_amount": 10.0},
            {"id": 2, "budgeted_amount": 10.0}
        ]);

        let err = decode_rows::<LineItem>(value).unwrap_err();
        match err {
            ModelError::MalformedRow { entity, index, message } => {
                assert_eq!(entity, "line item");
                assert_eq!(index, 1);
                assert!(message.contains("area_id"));
            }
            other => panic!("expected MalformedRow, got {other:?}"),
        }
    }

    #[test]
    fn decode_rejects_non_array() {
        let err = decode_rows::<Quote>(json!({"id": 1})).unwrap_err();
        assert!(matches!(err, ModelError::NotAnArray { entity: "quote" }));
    }

    #[test]
    fn decode_str_rejects_invalid_json() {
        let err = decode_rows_str::<Quote>("[{").unwrap_err();
        assert!(matches!(err, ModelError::Json(_)));
    }

    #[test]
    fn decode_empty_array() {
        let rows = decode_rows_str::<LineItem>("[]").unwrap();
        assert!(rows.is_empty());
    }
}
