//! Error types for configuration and template rendering

use thiserror::Error;

/// Errors raised while building or loading a [`BlueprintConfig`](crate::BlueprintConfig)
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid app name '{name}': {reason}")]
    InvalidAppName { name: String, reason: &'static str },

    #[error("at least one platform must be selected")]
    NoPlatforms,

    #[error("invalid API base URL '{url}': {reason}")]
    InvalidApiUrl { url: String, reason: String },

    #[error("unknown platform '{0}' (expected mobile, web or desktop)")]
    UnknownPlatform(String),

    #[error("unknown state management '{0}' (expected provider, riverpod or bloc)")]
    UnknownStateManagement(String),

    #[error("unknown project template '{0}'")]
    UnknownTemplate(String),

    #[error("unknown feature flag '{0}' (expected env, api, tests, l10n or theme)")]
    UnknownFeature(String),

    #[error("invalid feature name '{name}': {reason}")]
    InvalidFeatureName { name: String, reason: &'static str },

    #[error("failed to parse blueprint config: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("failed to read blueprint config: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors raised by a single template's content builder
#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("failed to serialize YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("invalid version constraint '{constraint}' for package '{package}'")]
    InvalidConstraint { package: String, constraint: String },

    #[error("template produced empty content")]
    Empty,

    #[error("{0}")]
    Render(String),
}

/// A template that failed to build, recorded so the rest of the run can continue
#[derive(Debug)]
pub struct TemplateFailure {
    pub path: String,
    pub error: TemplateError,
}

impl std::fmt::Display for TemplateFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.path, self.error)
    }
}
