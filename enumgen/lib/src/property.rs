//! The contract shared by every generated property.
//!
//! [`Property`] supplies the type-string wrapping, import sets and field
//! declarations that do not depend on the property kind. Implementors only
//! provide their base types and the shared [`PropertyCommon`] fields.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use strum::{Display, EnumIter, EnumString};

use crate::casing::{fix_keywords, snake_case};

/// Where an operation parameter can be sent.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ParameterLocation {
    Query,
    Path,
    Cookie,
    Header,
}

/// Fields common to every property kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyCommon {
    /// Name as written in the schema.
    pub name: String,
    pub required: bool,
    pub nullable: bool,
    pub description: Option<String>,
    pub example: Option<Value>,
    /// Identifier used for the field in generated code.
    pub python_name: String,
}

impl PropertyCommon {
    /// Creates the common fields, deriving `python_name` from `name`.
    pub fn new(name: impl Into<String>, required: bool, nullable: bool) -> Self {
        let name = name.into();
        let python_name = fix_keywords(&snake_case(&name));

        Self {
            name,
            required,
            nullable,
            description: None,
            example: None,
            python_name,
        }
    }

    pub fn with_description(mut self, description: Option<String>) -> Self {
        self.description = description;
        self
    }

    pub fn with_example(mut self, example: Option<Value>) -> Self {
        self.example = example;
        self
    }
}

/// Base contract for generated properties.
pub trait Property {
    /// Template the rendering layer uses for this property kind.
    const TEMPLATE: Option<&'static str> = None;

    /// Locations this property kind may be used in as a parameter.
    const ALLOWED_LOCATIONS: &'static [ParameterLocation] = &[
        ParameterLocation::Query,
        ParameterLocation::Path,
        ParameterLocation::Cookie,
        ParameterLocation::Header,
    ];

    fn common(&self) -> &PropertyCommon;

    /// The type name without any optional wrapping.
    fn get_base_type_string(&self, quoted: bool) -> String;

    /// The wire type name without any optional wrapping.
    fn get_base_json_type_string(&self, quoted: bool) -> String;

    /// Rendered default value, if the property has one.
    fn default_value(&self) -> Option<&str> {
        None
    }

    /// The full type string, wrapped according to `required` and `nullable`.
    ///
    /// | required | nullable | result                  |
    /// |----------|----------|-------------------------|
    /// | yes      | no       | `T`                     |
    /// | yes      | yes      | `Optional[T]`           |
    /// | no       | yes      | `Union[Unset, None, T]` |
    /// | no       | no       | `Union[Unset, T]`       |
    ///
    /// `no_optional` always returns the bare `T`.
    fn get_type_string(&self, no_optional: bool, json: bool, quoted: bool) -> String {
        let type_string = if json {
            self.get_base_json_type_string(quoted)
        } else {
            self.get_base_type_string(quoted)
        };

        let common = self.common();
        match (no_optional, common.required, common.nullable) {
            (true, _, _) | (false, true, false) => type_string,
            (false, true, true) => format!("Optional[{type_string}]"),
            (false, false, true) => format!("Union[Unset, None, {type_string}]"),
            (false, false, false) => format!("Union[Unset, {type_string}]"),
        }
    }

    /// Import statements needed wherever this property is used.
    ///
    /// `prefix` is the relative path (a run of `.`) from the importing module
    /// back to the root of the generated client.
    fn get_imports(&self, prefix: &str) -> BTreeSet<String> {
        base_imports(self.common(), prefix, "types")
    }

    /// Field declaration: `name: Type`, followed by `= default` when the
    /// property has a default or is not required.
    fn to_declaration(&self) -> String {
        let common = self.common();
        let type_string = self.get_type_string(false, false, true);
        let default = match self.default_value() {
            Some(default) => Some(default),
            None if !common.required => Some("UNSET"),
            None => None,
        };

        match default {
            Some(default) => format!("{}: {} = {}", common.python_name, type_string, default),
            None => format!("{}: {}", common.python_name, type_string),
        }
    }

    /// Whether this property kind may be used as a parameter in `location`.
    fn is_allowed_in(&self, location: ParameterLocation) -> bool {
        Self::ALLOWED_LOCATIONS.contains(&location)
    }
}

/// The imports every property needs, regardless of kind.
pub fn base_imports(common: &PropertyCommon, prefix: &str, types_module: &str) -> BTreeSet<String> {
    let mut imports = BTreeSet::new();
    if common.nullable {
        imports.insert("from typing import Optional".to_string());
    }
    if !common.required {
        imports.insert("from typing import Union".to_string());
        imports.insert(format!("from {prefix}{types_module} import UNSET, Unset"));
    }
    imports
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    struct PlainProperty {
        common: PropertyCommon,
        default: Option<String>,
    }

    impl Property for PlainProperty {
        const ALLOWED_LOCATIONS: &'static [ParameterLocation] = &[ParameterLocation::Query];

        fn common(&self) -> &PropertyCommon {
            &self.common
        }

        fn get_base_type_string(&self, quoted: bool) -> String {
            if quoted { "'Plain'".to_string() } else { "Plain".to_string() }
        }

        fn get_base_json_type_string(&self, _quoted: bool) -> String {
            "str".to_string()
        }

        fn default_value(&self) -> Option<&str> {
            self.default.as_deref()
        }
    }

    fn plain(required: bool, nullable: bool) -> PlainProperty {
        PlainProperty {
            common: PropertyCommon::new("plain", required, nullable),
            default: None,
        }
    }

    #[test]
    fn type_string_wrapping() {
        assert_eq!(plain(true, false).get_type_string(false, false, false), "Plain");
        assert_eq!(
            plain(true, true).get_type_string(false, false, false),
            "Optional[Plain]"
        );
        assert_eq!(
            plain(false, true).get_type_string(false, false, false),
            "Union[Unset, None, Plain]"
        );
        assert_eq!(
            plain(false, false).get_type_string(false, false, false),
            "Union[Unset, Plain]"
        );
    }

    #[test]
    fn no_optional_returns_bare_type() {
        assert_eq!(plain(false, true).get_type_string(true, false, false), "Plain");
    }

    #[test]
    fn json_flag_uses_wire_type() {
        assert_eq!(
            plain(true, true).get_type_string(false, true, false),
            "Optional[str]"
        );
    }

    #[test]
    fn imports_follow_required_and_nullable() {
        assert!(plain(true, false).get_imports("..").is_empty());

        let imports = plain(false, true).get_imports("..");
        let expected: BTreeSet<String> = [
            "from typing import Optional",
            "from typing import Union",
            "from ..types import UNSET, Unset",
        ]
        .into_iter()
        .map(String::from)
        .collect();
        assert_eq!(imports, expected);
    }

    #[test]
    fn declarations() {
        assert_eq!(plain(true, false).to_declaration(), "plain: 'Plain'");
        assert_eq!(
            plain(false, false).to_declaration(),
            "plain: Union[Unset, 'Plain'] = UNSET"
        );

        let mut with_default = plain(true, false);
        with_default.default = Some("Plain.A".to_string());
        assert_eq!(with_default.to_declaration(), "plain: 'Plain' = Plain.A");
    }

    #[test]
    fn python_name_is_snake_cased_and_keyword_safe() {
        assert_eq!(PropertyCommon::new("petStatus", true, false).python_name, "pet_status");
        assert_eq!(PropertyCommon::new("from", true, false).python_name, "from_");
    }

    #[test]
    fn allowed_locations_can_be_narrowed() {
        let property = plain(true, false);
        let allowed: Vec<_> = ParameterLocation::iter()
            .filter(|location| property.is_allowed_in(*location))
            .collect();
        assert_eq!(allowed, vec![ParameterLocation::Query]);
    }
}
