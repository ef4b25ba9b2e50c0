//! Enum member-name derivation for generated API clients.
//!
//! Turns the `enum` list of a schema into an ordered, collision-free mapping
//! from generated member names to values, and wraps that mapping in an
//! [`EnumProperty`] that knows its generated type, wire type and imports.
//!
//! ## Core Types
//!
//! - [`EnumProperty`] - A property emitted as a generated enumeration
//! - [`Property`] - Type-string and import contract shared by all properties
//! - [`Class`] - Name and module of a generated type
//! - [`EnumValue`] / [`ValueType`] - Member values and their wire type
//! - [`Schema`] / [`SchemaDocument`] - Schema objects and the files they come from
//! - [`GeneratorConfig`] - Package layout and class-name overrides
//!
//! ## Name Derivation
//!
//! - [`name_hints`] - Reads `x-enumNames` and its alternate spellings
//! - [`values_from_list`] - Derives member names and rejects collisions
//! - [`values_from_entries`] - The same for raw lists with `null` entries
//! - [`casing`] - Snake/Pascal casing and escape stripping
//!
//! ## Examples
//!
//! ```
//! use enumgen_lib::{EnumValue, Schema, values_from_list};
//!
//! let values = vec![EnumValue::from("active"), EnumValue::Int(-5)];
//! let mapping = values_from_list(&values, &Schema::default()).unwrap();
//!
//! assert_eq!(mapping["ACTIVE"], EnumValue::from("active"));
//! assert_eq!(mapping["VALUE_NEGATIVE_5"], EnumValue::Int(-5));
//! ```

pub mod casing;
mod class;
mod config;
mod enum_property;
mod error;
mod hints;
mod property;
mod schema;
mod value;
mod values;

pub use class::Class;
pub use config::{ClassOverride, GeneratorConfig};
pub use enum_property::EnumProperty;
pub use error::{ConfigError, EnumError, SchemaError};
pub use hints::{NAME_HINT_KEYS, name_hints};
pub use property::{ParameterLocation, Property, PropertyCommon, base_imports};
pub use schema::{DEFAULT_SCHEMA_NAME, EnumSchemaRef, InputFormat, Schema, SchemaDocument};
pub use value::{EnumValue, ValueType};
pub use values::{
    EnumValues, coerce, normalize, try_parse_integer, values_from_entries, values_from_list,
};
