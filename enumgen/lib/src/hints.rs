//! Member-name hints read from schema annotations.

use serde_json::Value;

use crate::error::EnumError;
use crate::schema::Schema;

/// Annotation keys that carry member-name hints, highest priority first.
pub const NAME_HINT_KEYS: [&str; 4] = [
    "x-enumNames",
    "x-enumnames",
    "x-enum-varnames",
    "x-enumvarnames",
];

/// Returns the member-name hints of a schema, if it has any.
///
/// Only the first key of [`NAME_HINT_KEYS`] present on the schema is read;
/// later keys are ignored even when they are also present.
///
/// ## Errors
///
/// Returns [`EnumError::InvalidNameHints`] when the chosen key does not hold
/// a list of strings.
///
/// ## Examples
///
/// ```
/// use enumgen_lib::{EnumValue, Schema, name_hints};
/// use serde_json::json;
///
/// let schema = Schema::with_enum([EnumValue::Int(1), EnumValue::Int(2)])
///     .with_extension("x-enum-varnames", json!(["LOW", "HIGH"]));
///
/// assert_eq!(
///     name_hints(&schema).unwrap(),
///     Some(vec!["LOW".to_string(), "HIGH".to_string()])
/// );
/// ```
pub fn name_hints(schema: &Schema) -> Result<Option<Vec<String>>, EnumError> {
    let Some((key, value)) = NAME_HINT_KEYS
        .iter()
        .find_map(|key| schema.extension(key).map(|value| (*key, value)))
    else {
        return Ok(None);
    };

    let invalid = || EnumError::InvalidNameHints {
        key: key.to_string(),
    };

    let Value::Array(items) = value else {
        return Err(invalid());
    };

    items
        .iter()
        .map(|item| item.as_str().map(str::to_string).ok_or_else(invalid))
        .collect::<Result<Vec<_>, _>>()
        .map(Some)
}
