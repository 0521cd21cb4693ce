//! Templates: the unit of generation and the unit of composition
//!
//! This module provides:
//! - [`TemplateFile`]: an output path, a content builder and an optional inclusion predicate
//! - [`TemplateBundle`]: an ordered list of template files plus dependency metadata
//! - [`emit`]: evaluation of a bundle into a path -> content map
//! - The template bodies themselves, grouped by concern

pub mod app;
pub mod emit;
pub mod feature;
pub mod platform;
pub mod project;
pub mod shared;
pub mod testing;

use crate::config::BlueprintConfig;
use crate::dependencies::Dependencies;
use crate::error::TemplateError;
use std::fmt;

pub use emit::{emit, emit_files, Emission, FileMap};

/// Result of a single content builder
pub type BuildResult = Result<String, TemplateError>;

type ContentFn = Box<dyn Fn(&BlueprintConfig) -> BuildResult + Send + Sync>;
type PredicateFn = Box<dyn Fn(&BlueprintConfig) -> bool + Send + Sync>;

/// One generated file
pub struct TemplateFile {
    path: String,
    content: ContentFn,
    predicate: Option<PredicateFn>,
}

impl TemplateFile {
    /// A file whose builder cannot fail
    pub fn new<F>(path: impl Into<String>, build: F) -> Self
    where
        F: Fn(&BlueprintConfig) -> String + Send + Sync + 'static,
    {
        Self {
            path: path.into(),
            content: Box::new(move |config| Ok(build(config))),
            predicate: None,
        }
    }

    /// A file whose builder may fail (serialization-backed content)
    pub fn fallible<F>(path: impl Into<String>, build: F) -> Self
    where
        F: Fn(&BlueprintConfig) -> BuildResult + Send + Sync + 'static,
    {
        Self {
            path: path.into(),
            content: Box::new(build),
            predicate: None,
        }
    }

    /// A file with fixed content
    pub fn fixed(path: impl Into<String>, content: &'static str) -> Self {
        Self::new(path, move |_| content.to_string())
    }

    /// Gate inclusion on a predicate
    pub fn when<P>(mut self, predicate: P) -> Self
    where
        P: Fn(&BlueprintConfig) -> bool + Send + Sync + 'static,
    {
        self.predicate = Some(Box::new(predicate));
        self
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn is_gated(&self) -> bool {
        self.predicate.is_some()
    }

    /// True when no predicate is set, or when the predicate holds for `config`
    pub fn should_include(&self, config: &BlueprintConfig) -> bool {
        self.predicate.as_ref().map_or(true, |p| p(config))
    }

    /// Build the file content; callers check [`should_include`](Self::should_include) first
    pub fn build(&self, config: &BlueprintConfig) -> BuildResult {
        (self.content)(config)
    }
}

impl fmt::Debug for TemplateFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TemplateFile")
            .field("path", &self.path)
            .field("gated", &self.is_gated())
            .finish()
    }
}

/// A complete set of template files plus dependency and feature metadata
#[derive(Debug, Default)]
pub struct TemplateBundle {
    name: String,
    files: Vec<TemplateFile>,
    dependencies: Dependencies,
    dev_dependencies: Dependencies,
    required_features: Vec<String>,
}

impl TemplateBundle {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_file(mut self, file: TemplateFile) -> Self {
        self.files.push(file);
        self
    }

    pub fn with_files(mut self, files: impl IntoIterator<Item = TemplateFile>) -> Self {
        self.files.extend(files);
        self
    }

    pub fn with_dependencies(mut self, deps: &Dependencies) -> Self {
        self.dependencies.merge(deps);
        self
    }

    pub fn with_dev_dependencies(mut self, deps: &Dependencies) -> Self {
        self.dev_dependencies.merge(deps);
        self
    }

    pub fn require_feature(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        if !self.required_features.contains(&name) {
            self.required_features.push(name);
        }
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn files(&self) -> &[TemplateFile] {
        &self.files
    }

    pub fn dependencies(&self) -> &Dependencies {
        &self.dependencies
    }

    pub fn dev_dependencies(&self) -> &Dependencies {
        &self.dev_dependencies
    }

    pub fn required_features(&self) -> &[String] {
        &self.required_features
    }

    /// Paths of the files that `config` includes, in bundle order
    pub fn included_paths(&self, config: &BlueprintConfig) -> Vec<&str> {
        self.files
            .iter()
            .filter(|f| f.should_include(config))
            .map(TemplateFile::path)
            .collect()
    }
}

/// Placeholder values substituted into `{{key}}` markers
#[derive(Debug, Clone, Default)]
pub struct Vars(Vec<(&'static str, String)>);

impl Vars {
    pub fn new() -> Self {
        Self::default()
    }

    /// `app_name`, `app_title` and `class_prefix` for a config
    pub fn app(config: &BlueprintConfig) -> Self {
        Self::new()
            .set("app_name", config.app_name())
            .set("app_title", config.app_title())
            .set("class_prefix", config.class_prefix())
    }

    pub fn set(mut self, key: &'static str, value: impl Into<String>) -> Self {
        self.0.push((key, value.into()));
        self
    }

    pub fn render(&self, template: &str) -> String {
        self.0.iter().fold(template.to_string(), |out, (key, value)| {
            out.replace(&format!("{{{{{}}}}}", key), value)
        })
    }
}

/// Inclusion predicates for flag-gated files
pub mod gates {
    use crate::config::BlueprintConfig;

    pub fn env(config: &BlueprintConfig) -> bool {
        config.features().env
    }

    pub fn api(config: &BlueprintConfig) -> bool {
        config.features().api
    }

    pub fn tests(config: &BlueprintConfig) -> bool {
        config.features().tests
    }

    pub fn localization(config: &BlueprintConfig) -> bool {
        config.features().localization
    }

    pub fn theme(config: &BlueprintConfig) -> bool {
        config.features().theme
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FeatureFlags;

    fn config(features: FeatureFlags) -> BlueprintConfig {
        BlueprintConfig::builder("demo_app")
            .features(features)
            .build()
            .unwrap()
    }

    #[test]
    fn test_ungated_file_always_included() {
        let file = TemplateFile::fixed("README.md", "# hi\n");
        assert!(file.should_include(&config(FeatureFlags::none())));
        assert!(!file.is_gated());
    }

    #[test]
    fn test_predicate_controls_inclusion() {
        let file = TemplateFile::fixed(".env.example", "API_BASE_URL=\n").when(gates::env);
        assert!(!file.should_include(&config(FeatureFlags::none())));
        assert!(file.should_include(&config(FeatureFlags::all())));
    }

    #[test]
    fn test_builder_sees_config() {
        let file = TemplateFile::new("name.txt", |c| c.app_title());
        assert_eq!(
            file.build(&config(FeatureFlags::none())).unwrap(),
            "Demo App"
        );
    }

    #[test]
    fn test_vars_render() {
        let c = config(FeatureFlags::none());
        let out = Vars::app(&c)
            .set("extra", "x")
            .render("{{app_name}} / {{class_prefix}} / {{app_title}} / {{extra}} / {{missing}}");
        assert_eq!(out, "demo_app / DemoApp / Demo App / x / {{missing}}");
    }

    #[test]
    fn test_bundle_metadata() {
        let deps: Dependencies = [("dio", "^5.7.0")].into_iter().collect();
        let bundle = TemplateBundle::new("demo")
            .with_file(TemplateFile::fixed("a.txt", "a"))
            .with_file(TemplateFile::fixed("b.txt", "b").when(gates::api))
            .with_dependencies(&deps)
            .require_feature("cart")
            .require_feature("cart");

        assert_eq!(bundle.name(), "demo");
        assert_eq!(bundle.required_features(), ["cart".to_string()]);
        assert_eq!(bundle.dependencies().get("dio"), Some("^5.7.0"));
        assert_eq!(
            bundle.included_paths(&config(FeatureFlags::none())),
            vec!["a.txt"]
        );
        assert_eq!(
            bundle.included_paths(&config(FeatureFlags::all())),
            vec!["a.txt", "b.txt"]
        );
    }
}
