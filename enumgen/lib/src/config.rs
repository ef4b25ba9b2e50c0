//! Generator configuration.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::ConfigError;

/// Replacement names for one generated class.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassOverride {
    /// Class name to use instead of the derived one.
    #[serde(default)]
    pub class_name: Option<String>,
    /// Module name to use instead of the derived one.
    #[serde(default)]
    pub module_name: Option<String>,
}

/// Settings that shape generated names and imports.
///
/// Loaded from a YAML or JSON file. Every field has a default, so an empty
/// file is a valid configuration.
///
/// ## Examples
///
/// ```
/// use enumgen_lib::GeneratorConfig;
///
/// let config: GeneratorConfig = serde_yaml::from_str(
///     "class_overrides:\n  PetStatus:\n    class_name: Status\n",
/// ).unwrap();
///
/// assert_eq!(config.models_package, "models");
/// assert_eq!(
///     config.class_overrides["PetStatus"].class_name.as_deref(),
///     Some("Status")
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Package under the client root that holds generated models.
    pub models_package: String,
    /// Module under the client root that defines `UNSET` and `Unset`.
    pub types_module: String,
    /// Per-schema replacements for derived class and module names.
    pub class_overrides: BTreeMap<String, ClassOverride>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            models_package: "models".to_string(),
            types_module: "types".to_string(),
            class_overrides: BTreeMap::new(),
        }
    }
}

impl GeneratorConfig {
    /// Loads a configuration file.
    ///
    /// ## Errors
    ///
    /// Returns [`ConfigError::Read`] when the file can't be read and
    /// [`ConfigError::Parse`] when it isn't a valid configuration.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        info!(path = %path.display(), "Loading generator configuration");

        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(bytes = contents.len(), "Read configuration file");

        let config: Self = serde_yaml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        debug!(
            models_package = %config.models_package,
            overrides = config.class_overrides.len(),
            "Parsed configuration"
        );
        Ok(config)
    }
}
