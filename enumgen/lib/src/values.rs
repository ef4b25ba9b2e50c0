//! Generated member names for enumeration values.
//!
//! [`values_from_list`] is the entry point: it resolves name hints, derives a
//! member name for every value and refuses to build a mapping in which two
//! values share a name.

use indexmap::IndexMap;
use indexmap::map::Entry;
use tracing::{debug, trace};

use crate::casing::{remove_string_escapes, snake_case};
use crate::error::EnumError;
use crate::hints::name_hints;
use crate::schema::Schema;
use crate::value::EnumValue;

/// Ordered mapping from generated member name to member value.
pub type EnumValues = IndexMap<String, EnumValue>;

/// Parses a string made only of ASCII digits as an integer.
///
/// Signs, whitespace and empty strings are not accepted, and neither are
/// digit strings too large for an `i64`.
///
/// ## Examples
///
/// ```
/// use enumgen_lib::try_parse_integer;
///
/// assert_eq!(try_parse_integer("0042"), Some(42));
/// assert_eq!(try_parse_integer("-5"), None);
/// assert_eq!(try_parse_integer("4a"), None);
/// ```
pub fn try_parse_integer(value: &str) -> Option<i64> {
    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    value.parse().ok()
}

/// Applies numeric coercion to a raw value.
pub fn coerce(value: &EnumValue) -> EnumValue {
    match value {
        EnumValue::Str(s) => try_parse_integer(s).map_or_else(|| value.clone(), EnumValue::Int),
        EnumValue::Int(_) => value.clone(),
    }
}

/// Coerces a raw value and sanitizes it the way it is stored in a mapping.
pub fn normalize(value: &EnumValue) -> EnumValue {
    strip_escapes(coerce(value))
}

fn strip_escapes(value: EnumValue) -> EnumValue {
    match value {
        EnumValue::Str(s) => EnumValue::Str(remove_string_escapes(&s)),
        int => int,
    }
}

/// Member name for an integer value.
fn integer_key(n: i64) -> String {
    if n < 0 {
        format!("VALUE_NEGATIVE_{}", n.unsigned_abs())
    } else {
        format!("VALUE_{n}")
    }
}

/// Member name for a string value at position `index`.
fn string_key(value: &str, index: usize) -> String {
    let base = match value.chars().next() {
        Some(first) if first.is_alphabetic() => value.to_uppercase(),
        _ => format!("VALUE_{index}"),
    };
    snake_case(&base).to_uppercase()
}

/// Derives the mapping for a list of values, reading name hints from `schema`.
///
/// Each value is coerced first: digit-only strings become integers. The
/// member name is then chosen in this order:
///
/// 1. the hint at the same position, used verbatim, when the schema has hints
/// 2. `VALUE_<n>` or `VALUE_NEGATIVE_<n>` for integers
/// 3. the uppercased value for strings starting with a letter, otherwise
///    `VALUE_<index>`, normalized through snake casing
///
/// String values are stored with escape sequences removed. Their names are
/// derived from the value before that removal.
///
/// ## Errors
///
/// - [`EnumError::DuplicateName`] when two values produce the same name
/// - [`EnumError::MissingNameHint`] when there are fewer hints than values
/// - [`EnumError::InvalidNameHints`] when the hint annotation is malformed
///
/// ## Examples
///
/// ```
/// use enumgen_lib::{EnumValue, Schema, values_from_list};
///
/// let values = vec![
///     EnumValue::from("active"),
///     EnumValue::Int(-5),
///     EnumValue::from("7"),
///     EnumValue::from("#bad"),
/// ];
/// let mapping = values_from_list(&values, &Schema::default()).unwrap();
///
/// let names: Vec<_> = mapping.keys().map(String::as_str).collect();
/// assert_eq!(names, ["ACTIVE", "VALUE_NEGATIVE_5", "VALUE_7", "VALUE_3"]);
/// assert_eq!(mapping["VALUE_7"], EnumValue::Int(7));
/// ```
pub fn values_from_list(values: &[EnumValue], schema: &Schema) -> Result<EnumValues, EnumError> {
    derive_mapping(values.iter().enumerate(), schema)
}

/// Derives the mapping for a raw `enum` list that may contain `null` entries.
///
/// `null` entries get no member, but they keep their position: hints and
/// `VALUE_<index>` fallbacks of the values after them use the index the value
/// has in `values`, not in the list with the nulls removed.
///
/// ## Errors
///
/// Same as [`values_from_list`]. [`EnumError::MissingNameHint`] reports the
/// index within `values`.
///
/// ## Examples
///
/// ```
/// use enumgen_lib::{EnumValue, Schema, values_from_entries};
/// use serde_json::json;
///
/// let schema = Schema::default().with_extension("x-enumNames", json!(["Alpha", "Nothing", "Beta"]));
/// let values = vec![Some(EnumValue::from("a")), None, Some(EnumValue::from("b"))];
/// let mapping = values_from_entries(&values, &schema).unwrap();
///
/// let names: Vec<_> = mapping.keys().map(String::as_str).collect();
/// assert_eq!(names, ["Alpha", "Beta"]);
/// ```
pub fn values_from_entries(
    values: &[Option<EnumValue>],
    schema: &Schema,
) -> Result<EnumValues, EnumError> {
    derive_mapping(
        values
            .iter()
            .enumerate()
            .filter_map(|(index, value)| value.as_ref().map(|value| (index, value))),
        schema,
    )
}

/// Builds the mapping from `(position, value)` pairs.
fn derive_mapping<'a>(
    values: impl Iterator<Item = (usize, &'a EnumValue)>,
    schema: &Schema,
) -> Result<EnumValues, EnumError> {
    let hints = name_hints(schema)?;
    let mut output = EnumValues::with_capacity(values.size_hint().0);

    for (index, raw) in values {
        let value = coerce(raw);

        let key = match (&hints, &value) {
            (Some(hints), _) => hints
                .get(index)
                .cloned()
                .ok_or(EnumError::MissingNameHint {
                    index,
                    hint_count: hints.len(),
                })?,
            (None, EnumValue::Int(n)) => integer_key(*n),
            (None, EnumValue::Str(s)) => string_key(s, index),
        };

        let value = strip_escapes(value);

        match output.entry(key) {
            Entry::Occupied(entry) => {
                return Err(EnumError::DuplicateName {
                    name: entry.key().clone(),
                });
            }
            Entry::Vacant(entry) => {
                trace!(index, name = %entry.key(), value = %value, "Derived enum member");
                entry.insert(value);
            }
        }
    }

    debug!(
        member_count = output.len(),
        hinted = hints.is_some(),
        "Built enum value mapping"
    );
    Ok(output)
}
