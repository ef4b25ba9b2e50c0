//! Enumeration values and their primitive wire types.

use std::fmt;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString, IntoStaticStr};

/// A single enumeration value: a string or an integer.
///
/// Deserializes untagged, so a JSON/YAML schema's `enum: [1, "a"]` parses
/// directly into `[Int(1), Str("a")]`. Floats and booleans are rejected.
///
/// ## Examples
///
/// ```
/// use enumgen_lib::EnumValue;
///
/// let values: Vec<EnumValue> = serde_json::from_str(r#"[1, "active"]"#).unwrap();
/// assert_eq!(values, vec![EnumValue::Int(1), EnumValue::from("active")]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EnumValue {
    /// An integer member value.
    Int(i64),
    /// A string member value.
    Str(String),
}

impl EnumValue {
    /// Returns the primitive type of this value.
    pub fn value_type(&self) -> ValueType {
        match self {
            Self::Int(_) => ValueType::Int,
            Self::Str(_) => ValueType::Str,
        }
    }
}

impl fmt::Display for EnumValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(n) => write!(f, "{n}"),
            Self::Str(s) => f.write_str(s),
        }
    }
}

impl From<i64> for EnumValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<&str> for EnumValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<String> for EnumValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

/// The primitive type every member of one enumeration resolves to on the wire.
///
/// Displays as the generated-code type name (`str` or `int`).
///
/// ## Examples
///
/// ```
/// use std::str::FromStr;
/// use enumgen_lib::ValueType;
///
/// assert_eq!(ValueType::Int.to_string(), "int");
/// assert_eq!(ValueType::from_str("str").unwrap(), ValueType::Str);
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ValueType {
    /// String-valued enumeration.
    Str,
    /// Integer-valued enumeration.
    Int,
}

impl ValueType {
    /// The type name used in generated code.
    pub fn type_name(self) -> &'static str {
        self.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_mixed_list() {
        let values: Vec<EnumValue> = serde_json::from_str(r#"[-5, "a", "12"]"#).unwrap();
        assert_eq!(
            values,
            vec![
                EnumValue::Int(-5),
                EnumValue::Str("a".to_string()),
                EnumValue::Str("12".to_string()),
            ]
        );
    }

    #[test]
    fn rejects_floats_and_booleans() {
        assert!(serde_json::from_str::<EnumValue>("1.5").is_err());
        assert!(serde_json::from_str::<EnumValue>("true").is_err());
    }

    #[test]
    fn value_type_follows_variant() {
        assert_eq!(EnumValue::Int(3).value_type(), ValueType::Int);
        assert_eq!(EnumValue::from("x").value_type(), ValueType::Str);
    }

    #[test]
    fn type_names() {
        assert_eq!(ValueType::Str.type_name(), "str");
        assert_eq!(ValueType::Int.type_name(), "int");
    }

    #[test]
    fn display_is_raw_value() {
        assert_eq!(EnumValue::Int(-2).to_string(), "-2");
        assert_eq!(EnumValue::from("on").to_string(), "on");
    }
}
