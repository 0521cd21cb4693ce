//! Project generation: shape bundle, project template modules, merged manifest

use crate::bundles::{self, library, universal};
use crate::config::{BlueprintConfig, Shape};
use crate::dependencies::Dependencies;
use crate::error::{ConfigError, TemplateFailure};
use crate::templates::project::{render_pubspec, PUBSPEC_PATH};
use crate::templates::{emit, emit_files, feature, Emission, FileMap};

/// Everything a generation run produced
#[derive(Debug, Default)]
pub struct Generation {
    pub files: FileMap,
    pub dependencies: Dependencies,
    pub dev_dependencies: Dependencies,
    /// Feature modules the project template asked for
    pub required_features: Vec<String>,
    pub failures: Vec<TemplateFailure>,
    /// Paths written twice outside the universal layering
    pub collisions: Vec<String>,
}

impl Generation {
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty() && self.collisions.is_empty()
    }

    fn absorb(&mut self, emission: Emission) {
        let mut merged = Emission {
            files: std::mem::take(&mut self.files),
            failures: std::mem::take(&mut self.failures),
            collisions: std::mem::take(&mut self.collisions),
        };
        merged.absorb(emission);
        self.files = merged.files;
        self.failures = merged.failures;
        self.collisions = merged.collisions;
    }
}

impl From<universal::Composition> for Generation {
    fn from(composition: universal::Composition) -> Self {
        Self {
            files: composition.files,
            dependencies: composition.dependencies,
            dev_dependencies: composition.dev_dependencies,
            required_features: Vec::new(),
            failures: composition.failures,
            collisions: composition.collisions,
        }
    }
}

/// Generate the full file set for `config`
///
/// Pure and deterministic: identical configs yield identical maps. Builder
/// failures do not stop the run; they are listed in [`Generation::failures`].
pub fn generate(config: &BlueprintConfig) -> Generation {
    let shape = config.shape();
    let base = bundles::select(shape, config);

    let mut generation = match shape {
        Shape::Universal => Generation::from(universal::compose(config, &base)),
        Shape::Mobile | Shape::Web | Shape::Desktop => {
            let emission = emit(&base, config);
            Generation {
                files: emission.files,
                dependencies: base.dependencies().clone(),
                dev_dependencies: base.dev_dependencies().clone(),
                failures: emission.failures,
                collisions: emission.collisions,
                ..Generation::default()
            }
        }
    };

    let template = library::build(config);
    for name in template.required_features() {
        let files = feature::files(name, config.state_management());
        generation.absorb(emit_files(&files, config));
    }
    generation.required_features = template.required_features().to_vec();

    if !template.dependencies().is_empty() || !template.dev_dependencies().is_empty() {
        generation.dependencies.merge(template.dependencies());
        generation.dev_dependencies.merge(template.dev_dependencies());
        match render_pubspec(
            config,
            &generation.dependencies,
            &generation.dev_dependencies,
        ) {
            Ok(content) => {
                generation.files.insert(PUBSPEC_PATH.to_string(), content);
            }
            Err(error) => {
                generation.files.remove(PUBSPEC_PATH);
                generation.failures.push(TemplateFailure {
                    path: PUBSPEC_PATH.to_string(),
                    error,
                });
            }
        }
    }

    generation
}

/// Generate one feature module for an existing project
pub fn generate_feature(config: &BlueprintConfig, name: &str) -> Result<Generation, ConfigError> {
    feature::validate_feature_name(name)?;

    let mut generation = Generation {
        required_features: vec![name.to_string()],
        ..Generation::default()
    };
    generation.absorb(emit_files(
        &feature::files(name, config.state_management()),
        config,
    ));
    Ok(generation)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{FeatureFlags, Platform, ProjectTemplate, StateManagement};
    use crate::templates::gates;

    fn config(
        platforms: &[Platform],
        style: StateManagement,
        features: FeatureFlags,
    ) -> BlueprintConfig {
        BlueprintConfig::builder("demo_app")
            .platforms(platforms.iter().copied())
            .state_management(style)
            .features(features)
            .build()
            .unwrap()
    }

    fn all_platform_sets() -> Vec<Vec<Platform>> {
        vec![
            vec![Platform::Mobile],
            vec![Platform::Web],
            vec![Platform::Desktop],
            vec![Platform::Mobile, Platform::Web],
            vec![Platform::Mobile, Platform::Web, Platform::Desktop],
        ]
    }

    #[test]
    fn test_generation_is_deterministic() {
        for platforms in all_platform_sets() {
            for style in StateManagement::ALL {
                let c = config(&platforms, style, FeatureFlags::all());
                assert_eq!(generate(&c).files, generate(&c).files);
            }
        }
    }

    #[test]
    fn test_predicate_completeness() {
        for platforms in all_platform_sets() {
            for features in [FeatureFlags::none(), FeatureFlags::all()] {
                let c = config(&platforms, StateManagement::Bloc, features);
                let bundle = bundles::select(c.shape(), &c);
                let generation = generate(&c);
                assert!(generation.is_clean());

                for file in bundle.files().iter().filter(|f| f.is_gated()) {
                    if file.should_include(&c) {
                        let content = generation.files.get(file.path());
                        assert!(
                            content.is_some_and(|body| !body.trim().is_empty()),
                            "{} missing",
                            file.path()
                        );
                    } else {
                        assert!(
                            !generation.files.contains_key(file.path()),
                            "{} should be excluded",
                            file.path()
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn test_env_disabled_excludes_env_files() {
        let mut features = FeatureFlags::all();
        features.env = false;
        for platforms in all_platform_sets() {
            let c = config(&platforms, StateManagement::Provider, features);
            let generation = generate(&c);
            assert!(!generation.files.keys().any(|p| p.ends_with("env_loader.dart")));
            assert!(!generation.files.contains_key(".env.example"));
            assert!(!generation.files.values().any(|body| body.contains("EnvLoader")));
        }
        assert!(!gates::env(&config(
            &[Platform::Mobile],
            StateManagement::Provider,
            features
        )));
    }

    #[test]
    fn test_riverpod_with_api_dependencies() {
        let features = FeatureFlags::from_names(&["api"]).unwrap();
        let c = config(&[Platform::Mobile], StateManagement::Riverpod, features);
        let generation = generate(&c);

        let riverpod = generation.dependencies.get("flutter_riverpod");
        let dio = generation.dependencies.get("dio");
        assert!(riverpod.is_some_and(|v| !v.is_empty()));
        assert!(dio.is_some_and(|v| !v.is_empty()));
        assert!(generation.files[PUBSPEC_PATH].contains("flutter_riverpod"));
    }

    #[test]
    fn test_project_template_modules_and_manifest() {
        let c = BlueprintConfig::builder("shop")
            .platforms([Platform::Mobile, Platform::Web])
            .template(ProjectTemplate::ChatApp)
            .build()
            .unwrap();
        let generation = generate(&c);

        assert!(generation.is_clean(), "{:?}", generation.collisions);
        assert_eq!(
            generation.required_features,
            vec!["conversations", "messages", "contacts"]
        );
        for feature in &generation.required_features {
            let page = format!(
                "lib/features/{0}/presentation/pages/{0}_page.dart",
                feature
            );
            assert!(generation.files.contains_key(&page), "{}", page);
        }
        assert!(generation.dependencies.contains("web_socket_channel"));
        assert!(generation.files[PUBSPEC_PATH].contains("web_socket_channel"));
        assert!(generation.files["lib/core/routing/app_router.dart"]
            .contains("const MessagesPage()"));
    }

    #[test]
    fn test_feature_over_existing_module_is_a_collision() {
        let c = config(&[Platform::Mobile], StateManagement::Provider, FeatureFlags::none());
        let mut generation = generate(&c);
        assert!(generation.collisions.is_empty());

        generation.absorb(emit_files(
            &feature::files("home", c.state_management()),
            &c,
        ));
        assert!(generation
            .collisions
            .contains(&"lib/features/home/presentation/pages/home_page.dart".to_string()));
        assert!(generation.failures.is_empty());
    }

    #[test]
    fn test_generate_feature() {
        let c = config(&[Platform::Mobile], StateManagement::Bloc, FeatureFlags::none());
        let generation = generate_feature(&c, "wishlist").unwrap();
        assert!(generation
            .files
            .contains_key("lib/features/wishlist/presentation/bloc/wishlist_bloc.dart"));
        assert!(generation.files.keys().all(|p| p.starts_with("lib/features/wishlist/")));

        assert!(matches!(
            generate_feature(&c, "Wish List"),
            Err(ConfigError::InvalidFeatureName { .. })
        ));
    }
}
