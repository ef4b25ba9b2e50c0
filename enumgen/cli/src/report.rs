//! Report assembly for the `enumgen` binary.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use clap::ValueEnum;
use enumgen_lib::{
    Class, EnumError, EnumProperty, EnumValues, GeneratorConfig, Property, SchemaDocument,
    ValueType,
};
use serde::Serialize;
use thiserror::Error;
use tracing::{info, warn};

/// Output format for the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Json,
    Yaml,
}

/// Errors that stop report generation.
#[derive(Debug, Error)]
pub enum ReportError {
    /// An enum was rejected and invalid enums are not being skipped.
    #[error("enum '{name}' rejected: {source}")]
    Rejected {
        name: String,
        #[source]
        source: EnumError,
    },

    #[error("failed to serialize report to JSON: {0}")]
    JsonSerialize(#[source] serde_json::Error),

    #[error("failed to serialize report to YAML: {0}")]
    YamlSerialize(#[source] serde_yaml::Error),
}

/// Everything the rendering layer needs to know about one enum.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnumReport {
    /// Schema name the enum was found under.
    pub name: String,
    pub class_name: String,
    pub module_name: String,
    pub value_type: ValueType,
    pub type_string: String,
    pub nullable: bool,
    pub default: Option<String>,
    pub members: EnumValues,
    pub imports: Vec<String>,
}

impl EnumReport {
    fn new(name: &str, property: &EnumProperty, prefix: &str) -> Self {
        let class = property.class_info();
        Self {
            name: name.to_string(),
            class_name: class.name.clone(),
            module_name: class.module_name.clone(),
            value_type: property.value_type(),
            type_string: property.get_type_string(false, false, false),
            nullable: property.common().nullable,
            default: property.default().map(str::to_string),
            members: property.values().clone(),
            imports: property.get_imports(prefix).into_iter().collect(),
        }
    }
}

/// An enum that could not be built.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Rejection {
    pub name: String,
    pub error: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Report {
    pub enums: Vec<EnumReport>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub rejected: Vec<Rejection>,
}

impl Report {
    /// Builds a report entry for every enum schema in `doc`.
    ///
    /// Two enums that resolve to the same generated class are both reported,
    /// with a warning naming the schemas involved.
    ///
    /// ## Errors
    ///
    /// Returns [`ReportError::Rejected`] for the first enum that fails to
    /// build, unless `skip_invalid` is set, in which case failures are
    /// collected under `rejected`.
    pub fn build(
        doc: &SchemaDocument,
        config: &GeneratorConfig,
        prefix: &str,
        skip_invalid: bool,
    ) -> Result<Self, ReportError> {
        let mut report = Self::default();
        let mut classes: HashMap<Class, String> = HashMap::new();

        for found in doc.enum_schemas() {
            let class = Class::from_string(&found.name, config);
            match EnumProperty::from_schema(
                found.property_name,
                found.required,
                found.schema,
                class,
                config,
            ) {
                Ok(property) => {
                    match classes.entry(property.class_info().clone()) {
                        Entry::Occupied(entry) => warn!(
                            class = %entry.key().name,
                            first = %entry.get(),
                            second = %found.name,
                            "Enums resolve to the same generated class"
                        ),
                        Entry::Vacant(entry) => {
                            entry.insert(found.name.clone());
                        }
                    }
                    report
                        .enums
                        .push(EnumReport::new(&found.name, &property, prefix));
                }
                Err(source) if skip_invalid => {
                    warn!(name = %found.name, error = %source, "Skipping rejected enum");
                    report.rejected.push(Rejection {
                        name: found.name,
                        error: source.to_string(),
                    });
                }
                Err(source) => {
                    return Err(ReportError::Rejected {
                        name: found.name,
                        source,
                    });
                }
            }
        }

        info!(
            built = report.enums.len(),
            rejected = report.rejected.len(),
            "Enum report complete"
        );
        Ok(report)
    }

    /// Serializes the report.
    pub fn render(&self, format: OutputFormat) -> Result<String, ReportError> {
        match format {
            OutputFormat::Json => {
                serde_json::to_string_pretty(self).map_err(ReportError::JsonSerialize)
            }
            OutputFormat::Yaml => serde_yaml::to_string(self).map_err(ReportError::YamlSerialize),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use enumgen_lib::{EnumValue, InputFormat};

    fn doc(text: &str) -> SchemaDocument {
        SchemaDocument::parse(text, InputFormat::Json).expect("valid document")
    }

    #[test]
    fn report_entry_carries_descriptor_fields() {
        let doc = doc(r##"{"title": "Color", "enum": ["red", "#fff"]}"##);
        let report = Report::build(&doc, &GeneratorConfig::default(), "..", false).unwrap();

        let entry = &report.enums[0];
        assert_eq!(entry.class_name, "Color");
        assert_eq!(entry.module_name, "color");
        assert_eq!(entry.value_type, ValueType::Str);
        assert_eq!(entry.type_string, "Color");
        assert_eq!(entry.members["RED"], EnumValue::from("red"));
        assert_eq!(entry.members["VALUE_1"], EnumValue::from("#fff"));
        assert_eq!(entry.imports, vec!["from ..models.color import Color"]);
    }

    #[test]
    fn rejection_aborts_by_default() {
        let doc = doc(r#"{"enum": ["Active", "ACTIVE"]}"#);
        let err = Report::build(&doc, &GeneratorConfig::default(), "..", false).unwrap_err();
        assert!(matches!(err, ReportError::Rejected { ref name, .. } if name == "Enum"));
        assert_eq!(err.to_string(), "enum 'Enum' rejected: duplicate key ACTIVE in enum");
    }

    #[test]
    fn rejection_is_collected_when_skipping() {
        let doc = doc(r#"{"components": {"schemas": {
            "A": {"enum": ["x", "X"]},
            "B": {"enum": [1]}
        }}}"#);
        let report = Report::build(&doc, &GeneratorConfig::default(), "..", true).unwrap();

        assert_eq!(report.enums.len(), 1);
        assert_eq!(report.enums[0].name, "B");
        assert_eq!(
            report.rejected,
            vec![Rejection {
                name: "A".to_string(),
                error: "duplicate key X in enum".to_string(),
            }]
        );
    }

    #[test]
    #[tracing_test::traced_test]
    fn shared_class_identity_is_warned_about() {
        let doc = doc(r#"{"components": {"schemas": {
            "OrderStatus": {"enum": ["placed"]},
            "Order": {"type": "object", "properties": {"status": {"enum": ["open"]}}}
        }}}"#);
        let report = Report::build(&doc, &GeneratorConfig::default(), "..", false).unwrap();

        assert_eq!(report.enums.len(), 2);
        assert_eq!(report.enums[0].class_name, report.enums[1].class_name);
        assert!(logs_contain("Enums resolve to the same generated class"));
        assert!(logs_contain("Order_status"));
    }

    #[test]
    #[tracing_test::traced_test]
    fn distinct_classes_are_not_warned_about() {
        let doc = doc(r#"{"components": {"schemas": {
            "OrderStatus": {"enum": ["placed"]},
            "Order": {"type": "object", "properties": {"state": {"enum": ["open"]}}}
        }}}"#);
        Report::build(&doc, &GeneratorConfig::default(), "..", false).unwrap();

        assert!(!logs_contain("Enums resolve to the same generated class"));
    }

    #[test]
    fn json_render_keeps_member_order() {
        let doc = doc(r#"{"title": "T", "enum": ["zeta", "alpha"]}"#);
        let report = Report::build(&doc, &GeneratorConfig::default(), ".", false).unwrap();
        let json = report.render(OutputFormat::Json).unwrap();

        let zeta = json.find("\"ZETA\"").expect("ZETA present");
        let alpha = json.find("\"ALPHA\"").expect("ALPHA present");
        assert!(zeta < alpha);
        assert!(!json.contains("rejected"));
    }

    #[test]
    fn yaml_render() {
        let doc = doc(r#"{"title": "T", "enum": [3]}"#);
        let report = Report::build(&doc, &GeneratorConfig::default(), ".", false).unwrap();
        let yaml = report.render(OutputFormat::Yaml).unwrap();

        assert!(yaml.contains("class_name: T"));
        assert!(yaml.contains("VALUE_3: 3"));
        assert!(yaml.contains("value_type: int"));
    }
}
