//! Package dependency sets and the pinned version catalog
//!
//! Bundles declare hosted pub packages as `name -> constraint`. When two
//! bundles name the same package the later one wins; no range intersection
//! is attempted.

use crate::config::{BlueprintConfig, Platform, StateManagement};
use crate::error::TemplateError;
use semver::VersionReq;
use std::collections::BTreeMap;

/// Pinned constraints for every package a generated project may depend on
pub mod versions {
    pub const PROVIDER: &str = "^6.1.2";
    pub const FLUTTER_RIVERPOD: &str = "^2.5.1";
    pub const FLUTTER_BLOC: &str = "^8.1.6";
    pub const EQUATABLE: &str = "^2.0.5";
    pub const LOGGER: &str = "^2.4.0";
    pub const SHARED_PREFERENCES: &str = "^2.3.2";
    pub const DIO: &str = "^5.7.0";
    pub const FLUTTER_DOTENV: &str = "^5.1.0";
    pub const INTL: &str = "^0.19.0";
    pub const WINDOW_MANAGER: &str = "^0.4.2";
    pub const CACHED_NETWORK_IMAGE: &str = "^3.4.1";
    pub const IMAGE_PICKER: &str = "^1.1.2";
    pub const FL_CHART: &str = "^0.69.0";
    pub const WEB_SOCKET_CHANNEL: &str = "^3.0.1";
    pub const UUID: &str = "^4.5.1";
    pub const FLUTTER_LINTS: &str = "^4.0.0";
    pub const MOCKTAIL: &str = "^1.0.4";
    pub const BLOC_TEST: &str = "^9.1.7";
}

/// Ordered `package -> version constraint` map
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dependencies(BTreeMap<String, String>);

impl Dependencies {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a package constraint
    pub fn insert(&mut self, name: impl Into<String>, constraint: impl Into<String>) {
        self.0.insert(name.into(), constraint.into());
    }

    /// Merge another set into this one; entries from `other` win
    pub fn merge(&mut self, other: &Dependencies) {
        for (name, constraint) in &other.0 {
            self.0.insert(name.clone(), constraint.clone());
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Every constraint must parse as a caret/semver requirement
    pub fn validate(&self) -> Result<(), TemplateError> {
        for (name, constraint) in &self.0 {
            if constraint.trim().is_empty() || VersionReq::parse(constraint).is_err() {
                return Err(TemplateError::InvalidConstraint {
                    package: name.clone(),
                    constraint: constraint.clone(),
                });
            }
        }
        Ok(())
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Dependencies {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// Runtime packages every shape shares: state package, logging, storage and flag-driven extras
pub fn base_dependencies(config: &BlueprintConfig) -> Dependencies {
    let mut deps = Dependencies::new();
    match config.state_management() {
        StateManagement::Provider => deps.insert("provider", versions::PROVIDER),
        StateManagement::Riverpod => deps.insert("flutter_riverpod", versions::FLUTTER_RIVERPOD),
        StateManagement::Bloc => {
            deps.insert("flutter_bloc", versions::FLUTTER_BLOC);
            deps.insert("equatable", versions::EQUATABLE);
        }
    }
    deps.insert("logger", versions::LOGGER);
    deps.insert("shared_preferences", versions::SHARED_PREFERENCES);

    let features = config.features();
    if features.api {
        deps.insert("dio", versions::DIO);
    }
    if features.env {
        deps.insert("flutter_dotenv", versions::FLUTTER_DOTENV);
    }
    if features.localization {
        deps.insert("intl", versions::INTL);
    }
    deps
}

/// Development-only packages: lints, plus mocking when tests are generated
pub fn base_dev_dependencies(config: &BlueprintConfig) -> Dependencies {
    let mut deps = Dependencies::new();
    deps.insert("flutter_lints", versions::FLUTTER_LINTS);
    if config.features().tests {
        deps.insert("mocktail", versions::MOCKTAIL);
        if config.state_management() == StateManagement::Bloc {
            deps.insert("bloc_test", versions::BLOC_TEST);
        }
    }
    deps
}

/// Hosted packages a single platform adds on top of the base set
pub fn platform_dependencies(platform: Platform) -> Dependencies {
    match platform {
        Platform::Mobile | Platform::Web => Dependencies::new(),
        Platform::Desktop => [("window_manager", versions::WINDOW_MANAGER)]
            .into_iter()
            .collect(),
    }
}
