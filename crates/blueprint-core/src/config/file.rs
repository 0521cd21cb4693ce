//! `blueprint.yaml` reading and writing

use super::BlueprintConfig;
use crate::error::ConfigError;
use std::path::Path;

/// File name of the configuration, both as CLI input and inside generated projects
pub const CONFIG_FILE_NAME: &str = "blueprint.yaml";

const HEADER: &str = "# Generated by flutter-blueprint. Used by `flutter-blueprint add-feature`.\n";

/// Parse and validate a configuration from YAML text
pub fn from_yaml(content: &str) -> Result<BlueprintConfig, ConfigError> {
    Ok(serde_yaml::from_str(content)?)
}

/// Serialize a configuration, with a short header comment
pub fn to_yaml(config: &BlueprintConfig) -> Result<String, serde_yaml::Error> {
    Ok(format!("{}{}", HEADER, serde_yaml::to_string(config)?))
}

/// Load a configuration file from disk
pub fn load(path: &Path) -> Result<BlueprintConfig, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    from_yaml(&content)
}

/// Load `blueprint.yaml` from a generated project's root
pub fn load_from_project(project_dir: &Path) -> Result<BlueprintConfig, ConfigError> {
    load(&project_dir.join(CONFIG_FILE_NAME))
}
