//! Schema objects and the documents they are loaded from.
//!
//! Only the keywords the enum pipeline reads are modeled as fields. Every
//! other key, including `x-*` annotations, lands in [`Schema::extensions`].

use std::fs;
use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use strum::{Display, EnumString};
use tracing::debug;

use crate::error::SchemaError;
use crate::value::EnumValue;

/// Name given to a standalone schema that has no `title`.
pub const DEFAULT_SCHEMA_NAME: &str = "Enum";

/// A schema object with an open-ended attribute bag.
///
/// ## Examples
///
/// ```
/// use enumgen_lib::Schema;
///
/// let schema: Schema = serde_json::from_str(
///     r#"{"enum": ["a", "b"], "x-enumNames": ["First", "Second"]}"#,
/// ).unwrap();
///
/// assert_eq!(schema.enum_values.as_ref().map(Vec::len), Some(2));
/// assert!(schema.extensions.contains_key("x-enumNames"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Schema {
    /// The `enum` keyword. `null` entries are kept as `None`.
    #[serde(rename = "enum", default, skip_serializing_if = "Option::is_none")]
    pub enum_values: Option<Vec<Option<EnumValue>>>,

    /// The `type` keyword, if given.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub schema_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub example: Option<Value>,

    #[serde(default)]
    pub nullable: bool,

    /// Nested property schemas of an object schema.
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub properties: IndexMap<String, Schema>,

    /// Names of the required entries in `properties`.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub required: Vec<String>,

    /// Every key not modeled above.
    #[serde(flatten)]
    pub extensions: Map<String, Value>,
}

impl Schema {
    /// Creates an enum schema from a list of values.
    pub fn with_enum(values: impl IntoIterator<Item = EnumValue>) -> Self {
        Self {
            enum_values: Some(values.into_iter().map(Some).collect()),
            ..Self::default()
        }
    }

    /// Adds an entry to the attribute bag.
    pub fn with_extension(mut self, key: impl Into<String>, value: Value) -> Self {
        self.extensions.insert(key.into(), value);
        self
    }

    /// Looks up an entry of the attribute bag.
    pub fn extension(&self, key: &str) -> Option<&Value> {
        self.extensions.get(key)
    }

    /// Returns `true` when the schema carries the `enum` keyword.
    pub fn is_enum(&self) -> bool {
        self.enum_values.is_some()
    }
}

/// Serialization format of a schema document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum InputFormat {
    #[default]
    Json,
    Yaml,
}

impl InputFormat {
    /// Infers the format from a file extension.
    pub fn from_path(path: &Path) -> Result<Self, SchemaError> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(Self::Json),
            Some("yaml") | Some("yml") => Ok(Self::Yaml),
            _ => Err(SchemaError::UnknownFormat(path.to_path_buf())),
        }
    }
}

/// An enum schema found in a document, with the context needed to build it.
#[derive(Debug, Clone)]
pub struct EnumSchemaRef<'a> {
    /// Name the generated class is derived from.
    pub name: String,
    /// Property name of an inline enum; equal to `name` at the top level.
    pub property_name: &'a str,
    /// Whether the enclosing object lists the property as required.
    pub required: bool,
    pub schema: &'a Schema,
}

/// A set of named schemas loaded from a single file.
///
/// Accepts either an OpenAPI-style document (`components.schemas`) or one
/// standalone schema object.
#[derive(Debug, Clone, Default)]
pub struct SchemaDocument {
    schemas: IndexMap<String, Schema>,
}

impl SchemaDocument {
    /// Builds a document from already-named schemas.
    pub fn new(schemas: IndexMap<String, Schema>) -> Self {
        Self { schemas }
    }

    /// Parses a document from text.
    ///
    /// ## Errors
    ///
    /// Returns [`SchemaError::Json`] or [`SchemaError::Yaml`] when the text
    /// does not parse, or parses to something that is not a schema.
    pub fn parse(text: &str, format: InputFormat) -> Result<Self, SchemaError> {
        let root: Value = match format {
            InputFormat::Json => serde_json::from_str(text)?,
            InputFormat::Yaml => serde_yaml::from_str(text)?,
        };

        let schemas = match root.pointer("/components/schemas") {
            Some(components) => {
                serde_json::from_value::<IndexMap<String, Schema>>(components.clone())?
            }
            None => {
                let schema: Schema = serde_json::from_value(root)?;
                let name = schema
                    .title
                    .clone()
                    .unwrap_or_else(|| DEFAULT_SCHEMA_NAME.to_string());
                IndexMap::from([(name, schema)])
            }
        };

        debug!(schema_count = schemas.len(), %format, "Parsed schema document");
        Ok(Self::new(schemas))
    }

    /// Reads and parses a document, inferring its format from the extension.
    ///
    /// ## Errors
    ///
    /// Returns [`SchemaError::UnknownFormat`] for unsupported extensions,
    /// [`SchemaError::Read`] when the file can't be read, or a parse error.
    pub fn load(path: &Path) -> Result<Self, SchemaError> {
        let format = InputFormat::from_path(path)?;
        let text = fs::read_to_string(path).map_err(|source| SchemaError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&text, format)
    }

    /// All named top-level schemas, in document order.
    pub fn schemas(&self) -> &IndexMap<String, Schema> {
        &self.schemas
    }

    /// Every enum schema in document order.
    ///
    /// Top-level enums are always required. Enums declared inline as object
    /// properties follow the top-level schema they belong to, are named
    /// `<parent>_<property>`, and are required when the parent says so.
    pub fn enum_schemas(&self) -> Vec<EnumSchemaRef<'_>> {
        let mut found = Vec::new();

        for (name, schema) in &self.schemas {
            if schema.is_enum() {
                found.push(EnumSchemaRef {
                    name: name.clone(),
                    property_name: name,
                    required: true,
                    schema,
                });
            }

            for (property, inner) in schema.properties.iter().filter(|(_, inner)| inner.is_enum()) {
                found.push(EnumSchemaRef {
                    name: format!("{name}_{property}"),
                    property_name: property,
                    required: schema.required.contains(property),
                    schema: inner,
                });
            }
        }

        found
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const PETSTORE: &str = r#"
components:
  schemas:
    PetStatus:
      type: string
      enum: [available, pending, sold]
    Pet:
      type: object
      required: [kind]
      properties:
        name:
          type: string
        kind:
          type: integer
          enum: [1, 2]
        size:
          enum: [small, null]
"#;

    #[test]
    fn unknown_keys_go_to_extensions() {
        let schema: Schema = serde_json::from_value(json!({
            "enum": [1],
            "x-enum-varnames": ["ONE"],
            "format": "int32"
        }))
        .unwrap();

        assert_eq!(schema.extension("x-enum-varnames"), Some(&json!(["ONE"])));
        assert_eq!(schema.extension("format"), Some(&json!("int32")));
        assert!(schema.extension("enum").is_none());
    }

    #[test]
    fn null_enum_entries_are_kept_as_none() {
        let schema: Schema = serde_json::from_value(json!({"enum": ["a", null]})).unwrap();
        assert_eq!(
            schema.enum_values,
            Some(vec![Some(EnumValue::from("a")), None])
        );
    }

    #[test]
    fn standalone_schema_uses_title() {
        let doc = SchemaDocument::parse(
            r#"{"title": "Color", "enum": ["red"]}"#,
            InputFormat::Json,
        )
        .unwrap();
        assert!(doc.schemas().contains_key("Color"));
    }

    #[test]
    fn standalone_schema_without_title_gets_default_name() {
        let doc = SchemaDocument::parse(r#"{"enum": ["red"]}"#, InputFormat::Json).unwrap();
        assert!(doc.schemas().contains_key(DEFAULT_SCHEMA_NAME));
    }

    #[test]
    fn components_yield_top_level_and_inline_enums_in_order() {
        let doc = SchemaDocument::parse(PETSTORE, InputFormat::Yaml).unwrap();
        let found = doc.enum_schemas();

        let names: Vec<_> = found.iter().map(|entry| entry.name.as_str()).collect();
        assert_eq!(names, vec!["PetStatus", "Pet_kind", "Pet_size"]);

        assert!(found[0].required);
        assert!(found[1].required);
        assert_eq!(found[1].property_name, "kind");
        assert!(!found[2].required);
    }

    #[test]
    fn malformed_yaml_is_an_error() {
        let err = SchemaDocument::parse("enum: [a, b", InputFormat::Yaml).unwrap_err();
        assert!(matches!(err, SchemaError::Yaml(_)));
    }

    #[test]
    fn float_enum_values_are_rejected() {
        let err = SchemaDocument::parse(r#"{"enum": [1.5]}"#, InputFormat::Json).unwrap_err();
        assert!(matches!(err, SchemaError::Json(_)));
    }

    #[test]
    fn format_from_extension() {
        assert_eq!(
            InputFormat::from_path(Path::new("a/b.yml")).unwrap(),
            InputFormat::Yaml
        );
        assert_eq!(
            InputFormat::from_path(Path::new("api.json")).unwrap(),
            InputFormat::Json
        );
        assert!(InputFormat::from_path(Path::new("api.toml")).is_err());
    }
}
