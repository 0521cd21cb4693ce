//! Project-level files: manifest, README, lint and ignore files, env and l10n setup

use super::{gates, BuildResult, TemplateFile, Vars};
use crate::bundles::library;
use crate::config::{file as config_file, BlueprintConfig, Platform, Shape};
use crate::dependencies::Dependencies;
use crate::naming;
use serde::Serialize;
use std::collections::BTreeMap;

pub const PUBSPEC_PATH: &str = "pubspec.yaml";
pub const README_PATH: &str = "README.md";

/// Minimum Dart SDK the generated project declares
pub const MIN_DART_SDK: &str = "3.4.0";
/// Minimum Flutter SDK the generated project declares
pub const MIN_FLUTTER_SDK: &str = "3.22.0";

#[derive(Serialize)]
#[serde(untagged)]
enum DependencySpec {
    Hosted(String),
    Sdk { sdk: &'static str },
}

#[derive(Serialize)]
struct FlutterSection {
    #[serde(rename = "uses-material-design")]
    uses_material_design: bool,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    generate: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    assets: Vec<&'static str>,
}

#[derive(Serialize)]
struct Pubspec<'a> {
    name: &'a str,
    description: String,
    publish_to: &'static str,
    version: &'static str,
    environment: BTreeMap<&'static str, String>,
    dependencies: BTreeMap<String, DependencySpec>,
    dev_dependencies: BTreeMap<String, DependencySpec>,
    flutter: FlutterSection,
}

/// Render `pubspec.yaml` from a dependency set
pub fn render_pubspec(
    config: &BlueprintConfig,
    dependencies: &Dependencies,
    dev_dependencies: &Dependencies,
) -> BuildResult {
    dependencies.validate()?;
    dev_dependencies.validate()?;

    let mut deps: BTreeMap<String, DependencySpec> = dependencies
        .iter()
        .map(|(name, c)| (name.to_string(), DependencySpec::Hosted(c.to_string())))
        .collect();
    deps.insert("flutter".to_string(), DependencySpec::Sdk { sdk: "flutter" });
    if config.features().localization {
        deps.insert(
            "flutter_localizations".to_string(),
            DependencySpec::Sdk { sdk: "flutter" },
        );
    }
    if config.has_platform(Platform::Web) {
        deps.insert(
            "flutter_web_plugins".to_string(),
            DependencySpec::Sdk { sdk: "flutter" },
        );
    }

    let mut dev_deps: BTreeMap<String, DependencySpec> = dev_dependencies
        .iter()
        .map(|(name, c)| (name.to_string(), DependencySpec::Hosted(c.to_string())))
        .collect();
    dev_deps.insert("flutter_test".to_string(), DependencySpec::Sdk { sdk: "flutter" });

    let mut environment = BTreeMap::new();
    environment.insert("sdk", format!(">={} <4.0.0", MIN_DART_SDK));
    environment.insert("flutter", format!(">={}", MIN_FLUTTER_SDK));

    let pubspec = Pubspec {
        name: config.app_name(),
        description: format!("{} - generated by flutter-blueprint.", config.app_title()),
        publish_to: "none",
        version: "1.0.0+1",
        environment,
        dependencies: deps,
        dev_dependencies: dev_deps,
        flutter: FlutterSection {
            uses_material_design: true,
            generate: config.features().localization,
            assets: if config.features().env { vec![".env"] } else { Vec::new() },
        },
    };

    Ok(serde_yaml::to_string(&pubspec)?)
}

/// Manifest template capturing the bundle's dependency set
pub fn pubspec(dependencies: Dependencies, dev_dependencies: Dependencies) -> TemplateFile {
    TemplateFile::fallible(PUBSPEC_PATH, move |config| {
        render_pubspec(config, &dependencies, &dev_dependencies)
    })
}

/// README with run instructions for a shape
pub fn render_readme(config: &BlueprintConfig, shape: Shape) -> String {
    let features = config.features();
    let mut out = format!(
        "# {}\n\nA Flutter {} application generated by flutter-blueprint.\n\n",
        config.app_title(),
        match shape {
            Shape::Mobile => "mobile",
            Shape::Web => "web",
            Shape::Desktop => "desktop",
            Shape::Universal => "multi-platform",
        }
    );

    out.push_str("## Getting started\n\n```bash\nflutter pub get\n");
    if features.localization {
        out.push_str("flutter gen-l10n\n");
    }
    if features.env {
        out.push_str("cp .env.example .env\n");
    }
    match shape {
        Shape::Mobile => out.push_str("flutter run\n"),
        Shape::Web => out.push_str("flutter run -d chrome\n"),
        Shape::Desktop => {
            out.push_str("flutter create --platforms=windows,macos,linux .\n");
            out.push_str("flutter run -d macos   # or windows, linux\n");
        }
        Shape::Universal => {
            if config.has_platform(Platform::Desktop) {
                out.push_str("flutter create --platforms=windows,macos,linux .\n");
            }
            for platform in config.platforms() {
                let line = match platform {
                    Platform::Mobile => "flutter run                # Android or iOS\n",
                    Platform::Web => "flutter run -d chrome      # web\n",
                    Platform::Desktop => "flutter run -d macos       # or windows, linux\n",
                };
                out.push_str(line);
            }
        }
    }
    out.push_str("```\n\n");

    if shape == Shape::Universal {
        out.push_str("## Platforms\n\n");
        out.push_str(
            "`lib/main.dart` detects the running platform and delegates to one entry point per target:\n\n",
        );
        for platform in config.platforms() {
            out.push_str(&format!(
                "- `lib/main_{}.dart`: {}\n",
                platform.name(),
                platform.display_name()
            ));
        }
        out.push_str(
            "\nShared layout helpers live in `lib/core/utils/responsive.dart` and \
             `lib/core/utils/platform_info.dart`.\n\n",
        );
    }

    out.push_str("## Project structure\n\n```\nlib/\n");
    out.push_str("  app/          app shell and settings state\n");
    out.push_str("  core/         logging, validation, errors, routing, storage");
    if features.api {
        out.push_str(", API client");
    }
    if features.theme {
        out.push_str(", theme");
    }
    out.push_str("\n  features/     one folder per feature (data + presentation)\n");
    if features.localization {
        out.push_str("  l10n/         ARB translation files\n");
    }
    if features.tests {
        out.push_str("test/          unit and widget tests\n");
    }
    out.push_str("```\n\n");

    out.push_str(&format!(
        "## State management\n\nFeatures are wired with **{}**.\n",
        config.state_management().display_name()
    ));

    let required = library::required_features(config.template());
    if !required.is_empty() {
        out.push_str(&format!(
            "\n## {} modules\n\n",
            config.template().display_name()
        ));
        for feature in required {
            out.push_str(&format!(
                "- `lib/features/{}/`: {}\n",
                feature,
                naming::title_case(feature)
            ));
        }
    }

    out.push_str(
        "\n## Adding features\n\n```bash\nflutter-blueprint add-feature <name>\n```\n",
    );
    out
}

pub fn readme(shape: Shape) -> TemplateFile {
    TemplateFile::new(README_PATH, move |config| render_readme(config, shape))
}

const ANALYSIS_OPTIONS: &str = r#"include: package:flutter_lints/flutter.yaml

analyzer:
  exclude:
    - "**/*.g.dart"
    - "**/*.freezed.dart"

linter:
  rules:
    - always_declare_return_types
    - avoid_print
    - prefer_const_constructors
    - prefer_final_locals
    - prefer_single_quotes
    - require_trailing_commas
    - sort_child_properties_last
"#;

pub fn analysis_options() -> TemplateFile {
    TemplateFile::fixed("analysis_options.yaml", ANALYSIS_OPTIONS)
}

const GITIGNORE: &str = r#"# Miscellaneous
*.class
*.log
*.pyc
*.swp
.DS_Store
.atom/
.buildlog/
.history
.svn/
migrate_working_dir/

# IntelliJ related
*.iml
*.ipr
*.iws
.idea/

# Flutter/Dart/Pub related
**/doc/api/
**/ios/Flutter/.last_build_id
.dart_tool/
.flutter-plugins
.flutter-plugins-dependencies
.pub-cache/
.pub/
/build/

# Symbolication and obfuscation
app.*.symbols
app.*.map.json

# Android Studio
/android/app/debug
/android/app/profile
/android/app/release
"#;

pub fn gitignore() -> TemplateFile {
    TemplateFile::new(".gitignore", |config| {
        let mut out = GITIGNORE.to_string();
        if config.features().env {
            out.push_str("\n# Environment\n.env\n");
        }
        out
    })
}

/// Copy of the configuration so later commands can recover it
pub fn blueprint_file() -> TemplateFile {
    TemplateFile::fallible(config_file::CONFIG_FILE_NAME, |config| {
        Ok(config_file::to_yaml(config)?)
    })
}

const ENV_EXAMPLE: &str = r#"# Copy to .env and adjust per environment.
APP_ENV=development
API_BASE_URL={{api_base_url}}
API_TIMEOUT_MS=30000
LOG_LEVEL=debug
"#;

pub fn env_example() -> TemplateFile {
    TemplateFile::new(".env.example", |config| {
        Vars::new()
            .set("api_base_url", config.api_base_url())
            .render(ENV_EXAMPLE)
    })
    .when(gates::env)
}

const L10N_YAML: &str = r#"arb-dir: lib/l10n
template-arb-file: app_en.arb
output-localization-file: app_localizations.dart
nullable-getter: false
"#;

const APP_EN_ARB: &str = r#"{
  "@@locale": "en",
  "appTitle": "{{app_title}}",
  "@appTitle": {
    "description": "Application title"
  },
  "homeTitle": "Home",
  "addItem": "Add item",
  "emptyList": "Nothing here yet",
  "retry": "Retry",
  "genericError": "Something went wrong",
  "itemCount": "{count, plural, =0{No items} =1{1 item} other{{count} items}}",
  "@itemCount": {
    "placeholders": {
      "count": {
        "type": "int"
      }
    }
  }
}
"#;

pub fn localization_files() -> Vec<TemplateFile> {
    vec![
        TemplateFile::fixed("l10n.yaml", L10N_YAML).when(gates::localization),
        TemplateFile::new("lib/l10n/app_en.arb", |config| {
            Vars::app(config).render(APP_EN_ARB)
        })
        .when(gates::localization),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{FeatureFlags, StateManagement};
    use crate::dependencies::{base_dependencies, base_dev_dependencies};

    fn config(platforms: &[Platform], features: FeatureFlags) -> BlueprintConfig {
        BlueprintConfig::builder("my_shop")
            .platforms(platforms.iter().copied())
            .state_management(StateManagement::Riverpod)
            .features(features)
            .build()
            .unwrap()
    }

    #[test]
    fn test_pubspec_contains_hosted_and_sdk_packages() {
        let c = config(&[Platform::Mobile, Platform::Web], FeatureFlags::all());
        let yaml =
            render_pubspec(&c, &base_dependencies(&c), &base_dev_dependencies(&c)).unwrap();

        let parsed: serde_yaml::Value = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(parsed["name"].as_str(), Some("my_shop"));
        assert_eq!(
            parsed["dependencies"]["flutter_riverpod"].as_str(),
            Some(crate::dependencies::versions::FLUTTER_RIVERPOD)
        );
        assert_eq!(
            parsed["dependencies"]["flutter"]["sdk"].as_str(),
            Some("flutter")
        );
        assert!(parsed["dependencies"]["flutter_localizations"].is_mapping());
        assert!(parsed["dependencies"]["flutter_web_plugins"].is_mapping());
        assert!(parsed["dev_dependencies"]["flutter_test"].is_mapping());
        assert_eq!(parsed["flutter"]["generate"].as_bool(), Some(true));
        assert_eq!(parsed["flutter"]["assets"][0].as_str(), Some(".env"));
    }

    #[test]
    fn test_pubspec_omits_optional_sections() {
        let c = config(&[Platform::Mobile], FeatureFlags::none());
        let yaml =
            render_pubspec(&c, &base_dependencies(&c), &base_dev_dependencies(&c)).unwrap();
        assert!(!yaml.contains("generate"));
        assert!(!yaml.contains("assets"));
        assert!(!yaml.contains("flutter_web_plugins"));
    }

    #[test]
    fn test_pubspec_rejects_invalid_constraint() {
        let c = config(&[Platform::Mobile], FeatureFlags::none());
        let bad: Dependencies = [("dio", "whatever")].into_iter().collect();
        let err = render_pubspec(&c, &bad, &Dependencies::new()).unwrap_err();
        assert!(matches!(
            err,
            crate::error::TemplateError::InvalidConstraint { .. }
        ));
    }

    #[test]
    fn test_readme_lists_universal_entry_points() {
        let c = config(&[Platform::Mobile, Platform::Desktop], FeatureFlags::none());
        let readme = render_readme(&c, Shape::Universal);
        assert!(readme.starts_with("# My Shop"));
        assert!(readme.contains("lib/main_mobile.dart"));
        assert!(readme.contains("lib/main_desktop.dart"));
        assert!(!readme.contains("lib/main_web.dart"));
        assert!(readme.contains("flutter create --platforms=windows,macos,linux ."));
    }

    #[test]
    fn test_gitignore_hides_env_only_when_enabled() {
        let with_env = config(&[Platform::Mobile], FeatureFlags::all());
        let without = config(&[Platform::Mobile], FeatureFlags::none());
        let file = gitignore();
        assert!(file.build(&with_env).unwrap().contains("\n.env\n"));
        assert!(!file.build(&without).unwrap().contains("\n.env\n"));
    }
}
