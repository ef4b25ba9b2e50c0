//! Properties whose values are restricted to a schema enumeration.

use std::collections::BTreeSet;

use serde_json::Value;
use tracing::{debug, instrument};

use crate::class::Class;
use crate::config::GeneratorConfig;
use crate::error::EnumError;
use crate::property::{Property, PropertyCommon, base_imports};
use crate::schema::Schema;
use crate::value::{EnumValue, ValueType};
use crate::values::{EnumValues, normalize, values_from_entries};

/// A property that is emitted as a generated enumeration type.
///
/// Built once per schema enumeration and immutable afterwards.
///
/// ## Examples
///
/// ```
/// use enumgen_lib::{Class, EnumProperty, GeneratorConfig, Property, Schema};
///
/// let schema: Schema = serde_json::from_str(
///     r#"{"enum": ["available", "sold"], "default": "sold"}"#,
/// ).unwrap();
/// let config = GeneratorConfig::default();
/// let class = Class::from_string("PetStatus", &config);
///
/// let property = EnumProperty::from_schema("status", true, &schema, class, &config).unwrap();
///
/// assert_eq!(property.get_type_string(false, false, false), "PetStatus");
/// assert_eq!(property.default(), Some("PetStatus.SOLD"));
/// assert!(property
///     .get_imports("..")
///     .contains("from ..models.pet_status import PetStatus"));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct EnumProperty {
    common: PropertyCommon,
    values: EnumValues,
    class_info: Class,
    value_type: ValueType,
    default: Option<String>,
    models_package: String,
    types_module: String,
}

impl EnumProperty {
    /// Builds the property for an enum schema.
    ///
    /// `null` members are dropped and make the property nullable. Members
    /// after a `null` keep their schema position for hints and fallback
    /// names. The value type is that of the first member. A schema default
    /// must match one of the members after the same coercion and sanitizing
    /// the members get; it is stored as `Class.MEMBER`.
    ///
    /// ## Errors
    ///
    /// - [`EnumError::NotAnEnum`] when the schema has no `enum` keyword
    /// - [`EnumError::EmptyEnum`] when no non-null members remain
    /// - [`EnumError::InvalidDefault`] when the default is not a member
    /// - any error of [`values_from_entries`]
    #[instrument(level = "debug", skip(schema, config), fields(class = %class_info.name))]
    pub fn from_schema(
        name: &str,
        required: bool,
        schema: &Schema,
        class_info: Class,
        config: &GeneratorConfig,
    ) -> Result<Self, EnumError> {
        let raw = schema.enum_values.as_ref().ok_or_else(|| EnumError::NotAnEnum {
            name: name.to_string(),
        })?;

        let nullable = schema.nullable || raw.iter().any(Option::is_none);

        let values = values_from_entries(raw, schema)?;
        let value_type = values
            .values()
            .next()
            .map(EnumValue::value_type)
            .ok_or_else(|| EnumError::EmptyEnum {
                name: name.to_string(),
            })?;

        let default = match &schema.default {
            None | Some(Value::Null) => None,
            Some(default) => Some(resolve_default(default, &values, &class_info)?),
        };

        debug!(
            member_count = values.len(),
            %value_type,
            nullable,
            "Built enum property"
        );

        let common = PropertyCommon::new(name, required, nullable)
            .with_description(schema.description.clone())
            .with_example(schema.example.clone());

        Ok(Self {
            common,
            values,
            class_info,
            value_type,
            default,
            models_package: config.models_package.clone(),
            types_module: config.types_module.clone(),
        })
    }

    /// Generated member names mapped to their values, in schema order.
    pub fn values(&self) -> &EnumValues {
        &self.values
    }

    pub fn class_info(&self) -> &Class {
        &self.class_info
    }

    pub fn value_type(&self) -> ValueType {
        self.value_type
    }

    /// The default as a member reference, e.g. `Status.ACTIVE`.
    pub fn default(&self) -> Option<&str> {
        self.default.as_deref()
    }

    /// The import statement binding the enum's module to its type name.
    pub fn class_import(&self, prefix: &str) -> String {
        format!(
            "from {prefix}{}.{} import {}",
            self.models_package, self.class_info.module_name, self.class_info.name
        )
    }
}

/// Finds the member a schema default refers to.
fn resolve_default(
    default: &Value,
    values: &EnumValues,
    class_info: &Class,
) -> Result<String, EnumError> {
    let invalid = || EnumError::InvalidDefault {
        default: match default {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        },
        class_name: class_info.name.clone(),
    };

    let wanted = serde_json::from_value::<EnumValue>(default.clone())
        .map(|value| normalize(&value))
        .map_err(|_| invalid())?;

    values
        .iter()
        .find(|(_, value)| **value == wanted)
        .map(|(key, _)| format!("{}.{}", class_info.name, key))
        .ok_or_else(invalid)
}

impl Property for EnumProperty {
    const TEMPLATE: Option<&'static str> = Some("enum_property.py.jinja");

    fn common(&self) -> &PropertyCommon {
        &self.common
    }

    /// The generated type's name. Enum types are never quoted.
    fn get_base_type_string(&self, _quoted: bool) -> String {
        self.class_info.name.clone()
    }

    fn get_base_json_type_string(&self, _quoted: bool) -> String {
        self.value_type.type_name().to_string()
    }

    fn default_value(&self) -> Option<&str> {
        self.default()
    }

    fn get_imports(&self, prefix: &str) -> BTreeSet<String> {
        let mut imports = base_imports(&self.common, prefix, &self.types_module);
        imports.insert(self.class_import(prefix));
        imports
    }
}
