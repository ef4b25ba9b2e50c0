//! Error types for the enumgen library.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while turning a schema enumeration into an [`EnumProperty`].
///
/// Every variant is fatal for the enumeration being built. Identical input
/// always reproduces the same error, so callers should report and move on
/// rather than retry.
///
/// [`EnumProperty`]: crate::EnumProperty
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EnumError {
    /// Two values normalize to the same generated member name.
    #[error("duplicate key {name} in enum")]
    DuplicateName {
        /// The member name produced twice.
        name: String,
    },

    /// The name-hint list has no entry for a value position.
    #[error("no name hint for value at index {index} (only {hint_count} hints given)")]
    MissingNameHint {
        /// Position of the value without a hint.
        index: usize,
        /// Number of hints the schema supplied.
        hint_count: usize,
    },

    /// A name-hint annotation is present but is not a list of strings.
    #[error("name hints under '{key}' must be a list of strings")]
    InvalidNameHints {
        /// The annotation key that was read.
        key: String,
    },

    /// The schema has no `enum` keyword.
    #[error("schema '{name}' does not define an enum")]
    NotAnEnum {
        /// Name of the property being built.
        name: String,
    },

    /// The schema's `enum` list holds no non-null values.
    #[error("enum '{name}' has no values")]
    EmptyEnum {
        /// Name of the property being built.
        name: String,
    },

    /// The schema default is not one of the enum's values.
    #[error("{default} is an invalid default for enum {class_name}")]
    InvalidDefault {
        /// The default as written in the schema.
        default: String,
        /// Generated class the default was looked up in.
        class_name: String,
    },
}

/// Errors that can occur when loading a [`GeneratorConfig`].
///
/// [`GeneratorConfig`]: crate::GeneratorConfig
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read the config file.
    #[error("failed to read config '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse the config file.
    #[error("failed to parse config '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

/// Errors that can occur when loading a [`SchemaDocument`].
///
/// [`SchemaDocument`]: crate::SchemaDocument
#[derive(Debug, Error)]
pub enum SchemaError {
    /// Failed to read the schema file.
    #[error("failed to read schema '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The document is not valid JSON for a schema.
    #[error("failed to parse JSON schema: {0}")]
    Json(#[from] serde_json::Error),

    /// The document is not valid YAML for a schema.
    #[error("failed to parse YAML schema: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// The file extension does not name a supported format.
    #[error("cannot infer schema format from '{0}' (expected .json, .yaml or .yml)")]
    UnknownFormat(PathBuf),
}
