//! Blueprint configuration: what to generate
//!
//! A [`BlueprintConfig`] is built once per generation run, validated on
//! construction and read-only afterwards. Every template receives it by
//! shared reference.

pub mod file;

use crate::error::ConfigError;
use crate::naming;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;
use url::Url;

/// Default base URL written into the API layer and `.env.example`
pub const DEFAULT_API_BASE_URL: &str = "https://api.example.com";

/// Target platform family
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Mobile,
    Web,
    Desktop,
}

impl Platform {
    pub const ALL: [Platform; 3] = [Platform::Mobile, Platform::Web, Platform::Desktop];

    pub fn name(&self) -> &'static str {
        match self {
            Platform::Mobile => "mobile",
            Platform::Web => "web",
            Platform::Desktop => "desktop",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Platform::Mobile => "Mobile (Android, iOS)",
            Platform::Web => "Web",
            Platform::Desktop => "Desktop (Windows, macOS, Linux)",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Platform {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "mobile" | "android" | "ios" => Ok(Platform::Mobile),
            "web" => Ok(Platform::Web),
            "desktop" | "windows" | "macos" | "linux" => Ok(Platform::Desktop),
            _ => Err(ConfigError::UnknownPlatform(s.to_string())),
        }
    }
}

/// State-management idiom the generated feature code is wired through
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StateManagement {
    /// ChangeNotifier publish/subscribe
    Provider,
    /// Reactive provider tree
    #[default]
    Riverpod,
    /// Event/state reducers
    Bloc,
}

impl StateManagement {
    pub const ALL: [StateManagement; 3] = [
        StateManagement::Provider,
        StateManagement::Riverpod,
        StateManagement::Bloc,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            StateManagement::Provider => "provider",
            StateManagement::Riverpod => "riverpod",
            StateManagement::Bloc => "bloc",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            StateManagement::Provider => "Provider",
            StateManagement::Riverpod => "Riverpod",
            StateManagement::Bloc => "Bloc",
        }
    }
}

impl fmt::Display for StateManagement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for StateManagement {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "provider" => Ok(StateManagement::Provider),
            "riverpod" => Ok(StateManagement::Riverpod),
            "bloc" | "cubit" => Ok(StateManagement::Bloc),
            _ => Err(ConfigError::UnknownStateManagement(s.to_string())),
        }
    }
}

/// Domain starter the project is seeded with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectTemplate {
    #[default]
    Blank,
    Ecommerce,
    SocialMedia,
    FitnessTracker,
    FinanceApp,
    FoodDelivery,
    ChatApp,
}

impl ProjectTemplate {
    pub const ALL: [ProjectTemplate; 7] = [
        ProjectTemplate::Blank,
        ProjectTemplate::Ecommerce,
        ProjectTemplate::SocialMedia,
        ProjectTemplate::FitnessTracker,
        ProjectTemplate::FinanceApp,
        ProjectTemplate::FoodDelivery,
        ProjectTemplate::ChatApp,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ProjectTemplate::Blank => "blank",
            ProjectTemplate::Ecommerce => "ecommerce",
            ProjectTemplate::SocialMedia => "social-media",
            ProjectTemplate::FitnessTracker => "fitness-tracker",
            ProjectTemplate::FinanceApp => "finance-app",
            ProjectTemplate::FoodDelivery => "food-delivery",
            ProjectTemplate::ChatApp => "chat-app",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ProjectTemplate::Blank => "Blank",
            ProjectTemplate::Ecommerce => "E-commerce",
            ProjectTemplate::SocialMedia => "Social media",
            ProjectTemplate::FitnessTracker => "Fitness tracker",
            ProjectTemplate::FinanceApp => "Finance app",
            ProjectTemplate::FoodDelivery => "Food delivery",
            ProjectTemplate::ChatApp => "Chat app",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            ProjectTemplate::Blank => "Core setup with a single home feature",
            ProjectTemplate::Ecommerce => "Product catalog, cart, checkout and order history",
            ProjectTemplate::SocialMedia => "Feed, posts, profiles and notifications",
            ProjectTemplate::FitnessTracker => "Workouts, goals and progress charts",
            ProjectTemplate::FinanceApp => "Accounts, transactions and budgets",
            ProjectTemplate::FoodDelivery => "Restaurants, menus, cart and orders",
            ProjectTemplate::ChatApp => "Conversations, messages and contacts",
        }
    }
}

impl fmt::Display for ProjectTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for ProjectTemplate {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace('_', "-");
        ProjectTemplate::ALL
            .into_iter()
            .find(|t| t.name() == normalized)
            .ok_or_else(|| ConfigError::UnknownTemplate(s.to_string()))
    }
}

/// A single optional feature toggle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feature {
    Env,
    Api,
    Tests,
    Localization,
    Theme,
}

impl Feature {
    pub const ALL: [Feature; 5] = [
        Feature::Env,
        Feature::Api,
        Feature::Tests,
        Feature::Localization,
        Feature::Theme,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Feature::Env => "env",
            Feature::Api => "api",
            Feature::Tests => "tests",
            Feature::Localization => "l10n",
            Feature::Theme => "theme",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Feature::Env => "Environment files (.env)",
            Feature::Api => "API client (dio)",
            Feature::Tests => "Test scaffolding",
            Feature::Localization => "Localization (ARB files)",
            Feature::Theme => "Custom theme",
        }
    }
}

impl FromStr for Feature {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "env" | "dotenv" => Ok(Feature::Env),
            "api" | "http" => Ok(Feature::Api),
            "tests" | "test" => Ok(Feature::Tests),
            "l10n" | "localization" | "i18n" => Ok(Feature::Localization),
            "theme" | "theming" => Ok(Feature::Theme),
            _ => Err(ConfigError::UnknownFeature(s.to_string())),
        }
    }
}

/// Independent optional features
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeatureFlags {
    pub env: bool,
    pub api: bool,
    pub tests: bool,
    pub localization: bool,
    pub theme: bool,
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self {
            env: false,
            api: true,
            tests: true,
            localization: false,
            theme: true,
        }
    }
}

impl FeatureFlags {
    /// All features switched off
    pub fn none() -> Self {
        Self {
            env: false,
            api: false,
            tests: false,
            localization: false,
            theme: false,
        }
    }

    /// All features switched on
    pub fn all() -> Self {
        Self {
            env: true,
            api: true,
            tests: true,
            localization: true,
            theme: true,
        }
    }

    /// Exactly the named features enabled, everything else off
    pub fn from_names<S: AsRef<str>>(names: &[S]) -> Result<Self, ConfigError> {
        let mut flags = Self::none();
        for name in names {
            flags.set(name.as_ref().parse()?, true);
        }
        Ok(flags)
    }

    pub fn is_enabled(&self, feature: Feature) -> bool {
        match feature {
            Feature::Env => self.env,
            Feature::Api => self.api,
            Feature::Tests => self.tests,
            Feature::Localization => self.localization,
            Feature::Theme => self.theme,
        }
    }

    pub fn set(&mut self, feature: Feature, enabled: bool) {
        match feature {
            Feature::Env => self.env = enabled,
            Feature::Api => self.api = enabled,
            Feature::Tests => self.tests = enabled,
            Feature::Localization => self.localization = enabled,
            Feature::Theme => self.theme = enabled,
        }
    }

    pub fn enabled(&self) -> Vec<Feature> {
        Feature::ALL
            .into_iter()
            .filter(|f| self.is_enabled(*f))
            .collect()
    }
}

/// Platform target combination that drives bundle selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    Mobile,
    Web,
    Desktop,
    Universal,
}

impl Shape {
    pub fn name(&self) -> &'static str {
        match self {
            Shape::Mobile => "mobile",
            Shape::Web => "web",
            Shape::Desktop => "desktop",
            Shape::Universal => "universal",
        }
    }
}

/// Serialized form of the configuration (`blueprint.yaml`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawConfig {
    pub app_name: String,

    #[serde(default = "default_platforms")]
    pub platforms: Vec<Platform>,

    #[serde(default)]
    pub state_management: StateManagement,

    #[serde(default)]
    pub template: ProjectTemplate,

    #[serde(default)]
    pub features: FeatureFlags,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_base_url: Option<String>,
}

fn default_platforms() -> Vec<Platform> {
    vec![Platform::Mobile]
}

/// Validated, immutable description of a project to generate
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawConfig", into = "RawConfig")]
pub struct BlueprintConfig {
    app_name: String,
    platforms: BTreeSet<Platform>,
    state_management: StateManagement,
    template: ProjectTemplate,
    features: FeatureFlags,
    api_base_url: String,
}

impl BlueprintConfig {
    pub fn builder(app_name: impl Into<String>) -> BlueprintConfigBuilder {
        BlueprintConfigBuilder::new(app_name)
    }

    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    /// Human-readable title, e.g. `My Shop`
    pub fn app_title(&self) -> String {
        naming::title_case(&self.app_name)
    }

    /// Prefix for generated Dart classes, e.g. `MyShop`
    pub fn class_prefix(&self) -> String {
        naming::pascal_case(&self.app_name)
    }

    pub fn platforms(&self) -> &BTreeSet<Platform> {
        &self.platforms
    }

    pub fn has_platform(&self, platform: Platform) -> bool {
        self.platforms.contains(&platform)
    }

    pub fn state_management(&self) -> StateManagement {
        self.state_management
    }

    pub fn template(&self) -> ProjectTemplate {
        self.template
    }

    pub fn features(&self) -> &FeatureFlags {
        &self.features
    }

    pub fn api_base_url(&self) -> &str {
        &self.api_base_url
    }

    /// One platform selects its own shape; several select the universal composer
    pub fn shape(&self) -> Shape {
        let mut iter = self.platforms.iter();
        match (iter.next(), iter.next()) {
            (Some(Platform::Mobile), None) => Shape::Mobile,
            (Some(Platform::Web), None) => Shape::Web,
            (Some(Platform::Desktop), None) => Shape::Desktop,
            _ => Shape::Universal,
        }
    }
}

impl TryFrom<RawConfig> for BlueprintConfig {
    type Error = ConfigError;

    fn try_from(raw: RawConfig) -> Result<Self, Self::Error> {
        naming::check_snake_identifier(&raw.app_name).map_err(|reason| {
            ConfigError::InvalidAppName {
                name: raw.app_name.clone(),
                reason,
            }
        })?;

        let platforms: BTreeSet<Platform> = raw.platforms.into_iter().collect();
        if platforms.is_empty() {
            return Err(ConfigError::NoPlatforms);
        }

        let api_base_url = validate_api_url(
            raw.api_base_url
                .as_deref()
                .unwrap_or(DEFAULT_API_BASE_URL),
        )?;

        Ok(Self {
            app_name: raw.app_name,
            platforms,
            state_management: raw.state_management,
            template: raw.template,
            features: raw.features,
            api_base_url,
        })
    }
}

impl From<BlueprintConfig> for RawConfig {
    fn from(config: BlueprintConfig) -> Self {
        let api_base_url = (config.api_base_url != DEFAULT_API_BASE_URL)
            .then_some(config.api_base_url);
        Self {
            app_name: config.app_name,
            platforms: config.platforms.into_iter().collect(),
            state_management: config.state_management,
            template: config.template,
            features: config.features,
            api_base_url,
        }
    }
}

/// Accept only absolute http(s) URLs, stored in normalized form without a
/// trailing slash
///
/// The URL ends up inside single-quoted Dart string literals, so characters
/// Dart would read as a terminator or an interpolation are rejected.
fn validate_api_url(raw: &str) -> Result<String, ConfigError> {
    let invalid = |reason: String| ConfigError::InvalidApiUrl {
        url: raw.to_string(),
        reason,
    };
    let url = Url::parse(raw).map_err(|e| invalid(e.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid(format!("unsupported scheme '{}'", url.scheme())));
    }
    if url.host_str().is_none() {
        return Err(invalid("missing host".to_string()));
    }
    let normalized = url.as_str().trim_end_matches('/');
    if let Some(c) = normalized.chars().find(|c| matches!(c, '\'' | '$' | '\\')) {
        return Err(invalid(format!("'{}' is not allowed in a Dart string literal", c)));
    }
    Ok(normalized.to_string())
}

/// Builder for [`BlueprintConfig`]; validation happens in [`build`](Self::build)
#[derive(Debug, Clone)]
pub struct BlueprintConfigBuilder {
    raw: RawConfig,
}

impl BlueprintConfigBuilder {
    pub fn new(app_name: impl Into<String>) -> Self {
        Self {
            raw: RawConfig {
                app_name: app_name.into(),
                platforms: default_platforms(),
                state_management: StateManagement::default(),
                template: ProjectTemplate::default(),
                features: FeatureFlags::default(),
                api_base_url: None,
            },
        }
    }

    pub fn platforms(mut self, platforms: impl IntoIterator<Item = Platform>) -> Self {
        self.raw.platforms = platforms.into_iter().collect();
        self
    }

    pub fn state_management(mut self, state: StateManagement) -> Self {
        self.raw.state_management = state;
        self
    }

    pub fn template(mut self, template: ProjectTemplate) -> Self {
        self.raw.template = template;
        self
    }

    pub fn features(mut self, features: FeatureFlags) -> Self {
        self.raw.features = features;
        self
    }

    pub fn api_base_url(mut self, url: impl Into<String>) -> Self {
        self.raw.api_base_url = Some(url.into());
        self
    }

    pub fn build(self) -> Result<BlueprintConfig, ConfigError> {
        BlueprintConfig::try_from(self.raw)
    }
}

impl From<BlueprintConfig> for BlueprintConfigBuilder {
    fn from(config: BlueprintConfig) -> Self {
        Self {
            raw: config.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let config = BlueprintConfig::builder("my_app").build().unwrap();
        assert_eq!(config.app_name(), "my_app");
        assert_eq!(config.shape(), Shape::Mobile);
        assert_eq!(config.state_management(), StateManagement::Riverpod);
        assert_eq!(config.template(), ProjectTemplate::Blank);
        assert_eq!(config.api_base_url(), DEFAULT_API_BASE_URL);
        assert_eq!(config.app_title(), "My App");
        assert_eq!(config.class_prefix(), "MyApp");
    }

    #[test]
    fn test_invalid_app_name_rejected() {
        let err = BlueprintConfig::builder("My-App").build().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidAppName { .. }));
    }

    #[test]
    fn test_empty_platforms_rejected() {
        let err = BlueprintConfig::builder("my_app")
            .platforms([])
            .build()
            .unwrap_err();
        assert!(matches!(err, ConfigError::NoPlatforms));
    }

    #[test]
    fn test_shape_derivation() {
        let web = BlueprintConfig::builder("my_app")
            .platforms([Platform::Web])
            .build()
            .unwrap();
        assert_eq!(web.shape(), Shape::Web);

        let desktop = BlueprintConfig::builder("my_app")
            .platforms([Platform::Desktop, Platform::Desktop])
            .build()
            .unwrap();
        assert_eq!(desktop.shape(), Shape::Desktop);

        let multi = BlueprintConfig::builder("my_app")
            .platforms([Platform::Web, Platform::Mobile])
            .build()
            .unwrap();
        assert_eq!(multi.shape(), Shape::Universal);
        assert_eq!(
            multi.platforms().iter().copied().collect::<Vec<_>>(),
            vec![Platform::Mobile, Platform::Web]
        );
    }

    #[test]
    fn test_api_url_validation() {
        let ok = BlueprintConfig::builder("my_app")
            .api_base_url("http://localhost:8080/")
            .build()
            .unwrap();
        assert_eq!(ok.api_base_url(), "http://localhost:8080");

        let bad_scheme = BlueprintConfig::builder("my_app")
            .api_base_url("ftp://example.com")
            .build();
        assert!(matches!(bad_scheme, Err(ConfigError::InvalidApiUrl { .. })));

        let relative = BlueprintConfig::builder("my_app")
            .api_base_url("/api")
            .build();
        assert!(matches!(relative, Err(ConfigError::InvalidApiUrl { .. })));
    }

    #[test]
    fn test_api_url_is_safe_in_dart_literals() {
        let padded = BlueprintConfig::builder("my_app")
            .api_base_url("  https://API.example.com/v1/  ")
            .build()
            .unwrap();
        assert_eq!(padded.api_base_url(), "https://api.example.com/v1");

        for url in [
            "https://api.example.com/it's",
            "https://api.example.com/$version",
            "https://api.example.com/v1?q=${env}",
        ] {
            let result = BlueprintConfig::builder("my_app").api_base_url(url).build();
            assert!(
                matches!(result, Err(ConfigError::InvalidApiUrl { .. })),
                "{} should be rejected",
                url
            );
        }
    }

    #[test]
    fn test_parse_enums() {
        assert_eq!("iOS".parse::<Platform>().unwrap(), Platform::Mobile);
        assert_eq!("linux".parse::<Platform>().unwrap(), Platform::Desktop);
        assert!("tv".parse::<Platform>().is_err());
        assert_eq!(
            "Bloc".parse::<StateManagement>().unwrap(),
            StateManagement::Bloc
        );
        assert!("redux".parse::<StateManagement>().is_err());
        assert_eq!(
            "social_media".parse::<ProjectTemplate>().unwrap(),
            ProjectTemplate::SocialMedia
        );
        assert!("crm".parse::<ProjectTemplate>().is_err());
    }

    #[test]
    fn test_feature_flags_from_names() {
        let flags = FeatureFlags::from_names(&["env", "l10n"]).unwrap();
        assert!(flags.env);
        assert!(flags.localization);
        assert!(!flags.api);
        assert!(!flags.tests);
        assert!(!flags.theme);
        assert_eq!(flags.enabled(), vec![Feature::Env, Feature::Localization]);

        assert!(FeatureFlags::from_names(&["analytics"]).is_err());
    }
}
