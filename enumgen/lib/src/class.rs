//! Identity of a generated type.

use serde::{Deserialize, Serialize};

use crate::casing::{pascal_case, snake_case};
use crate::config::GeneratorConfig;

/// Name and owning module of a generated type.
///
/// ## Examples
///
/// ```
/// use enumgen_lib::{Class, GeneratorConfig};
///
/// let class = Class::from_string("pet-status", &GeneratorConfig::default());
/// assert_eq!(class.name, "PetStatus");
/// assert_eq!(class.module_name, "pet_status");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Class {
    /// Identifier the type is emitted under.
    pub name: String,
    /// Module (file stem) that defines the type.
    pub module_name: String,
}

impl Class {
    pub fn new(name: impl Into<String>, module_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            module_name: module_name.into(),
        }
    }

    /// Derives a class from a schema name, applying configured overrides.
    ///
    /// The name is `PascalCase` and the module `snake_case` of `value`. An
    /// entry in `class_overrides` keyed by `value` replaces either part.
    pub fn from_string(value: &str, config: &GeneratorConfig) -> Self {
        let override_ = config.class_overrides.get(value);

        let name = override_
            .and_then(|o| o.class_name.clone())
            .unwrap_or_else(|| pascal_case(value));
        let module_name = override_
            .and_then(|o| o.module_name.clone())
            .unwrap_or_else(|| snake_case(value));

        Self { name, module_name }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ClassOverride;

    #[test]
    fn derives_names_from_inline_property_path() {
        let class = Class::from_string("Pet_kind", &GeneratorConfig::default());
        assert_eq!(class, Class::new("PetKind", "pet_kind"));
    }

    #[test]
    fn override_replaces_class_name_only() {
        let mut config = GeneratorConfig::default();
        config.class_overrides.insert(
            "PetStatus".to_string(),
            ClassOverride {
                class_name: Some("Status".to_string()),
                module_name: None,
            },
        );

        let class = Class::from_string("PetStatus", &config);
        assert_eq!(class, Class::new("Status", "pet_status"));
    }

    #[test]
    fn override_replaces_both() {
        let mut config = GeneratorConfig::default();
        config.class_overrides.insert(
            "a".to_string(),
            ClassOverride {
                class_name: Some("Alpha".to_string()),
                module_name: Some("alpha_mod".to_string()),
            },
        );

        assert_eq!(
            Class::from_string("a", &config),
            Class::new("Alpha", "alpha_mod")
        );
    }
}
