//! Multi-platform composition
//!
//! A universal project starts from the mobile bundle and layers the other
//! platforms on top. Each step overrides earlier ones path by path, so the
//! order below is significant:
//!
//! 1. materialize the base bundle
//! 2. drop the base entry point
//! 3. add the shared layout and platform helpers
//! 4. add one entry point per platform plus the dispatcher
//! 5. add static assets for every platform beyond mobile
//! 6. replace the manifest and README with multi-platform versions

use crate::config::{BlueprintConfig, Platform, Shape};
use crate::dependencies::{platform_dependencies, Dependencies};
use crate::error::TemplateFailure;
use crate::templates::project::{self, PUBSPEC_PATH};
use crate::templates::{
    app, emit, emit_files, platform, shared, Emission, FileMap, TemplateBundle, TemplateFile,
};

/// Output of the universal composer
#[derive(Debug, Default)]
pub struct Composition {
    pub files: FileMap,
    pub dependencies: Dependencies,
    pub dev_dependencies: Dependencies,
    pub failures: Vec<TemplateFailure>,
    /// Collisions inside the base bundle; layered overrides are expected and not listed
    pub collisions: Vec<String>,
}

/// Evaluate `files` and write them over `emission`, replacing existing paths silently
fn layer(emission: &mut Emission, files: &[TemplateFile], config: &BlueprintConfig) {
    let overlay = emit_files(files, config);
    emission.files.extend(overlay.files);
    emission.failures.extend(overlay.failures);
    emission.collisions.extend(overlay.collisions);
}

/// Compose a multi-platform project on top of `base`
pub fn compose(config: &BlueprintConfig, base: &TemplateBundle) -> Composition {
    let mut dependencies = base.dependencies().clone();
    let dev_dependencies = base.dev_dependencies().clone();

    // 1
    let mut emission = emit(base, config);

    // 2
    emission.files.remove(app::MAIN_PATH);

    // 3
    layer(
        &mut emission,
        &[shared::responsive(), shared::platform_info()],
        config,
    );

    // 4
    let mut entries: Vec<TemplateFile> = config
        .platforms()
        .iter()
        .map(|&p| app::platform_entry(p))
        .collect();
    entries.push(app::dispatcher());
    layer(&mut emission, &entries, config);

    // 5
    for &platform in config.platforms() {
        if platform == Platform::Mobile {
            continue;
        }
        let mut assets = platform::assets(platform);
        if platform == Platform::Desktop {
            assets.push(shared::window_setup());
        }
        layer(&mut emission, &assets, config);
        dependencies.merge(&platform_dependencies(platform));
    }

    // 6
    emission.files.remove(PUBSPEC_PATH);
    layer(
        &mut emission,
        &[
            project::pubspec(dependencies.clone(), dev_dependencies.clone()),
            project::readme(Shape::Universal),
        ],
        config,
    );

    Composition {
        files: emission.files,
        dependencies,
        dev_dependencies,
        failures: emission.failures,
        collisions: emission.collisions,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bundles::mobile;
    use crate::config::{FeatureFlags, StateManagement};
    use crate::dependencies::versions;
    use crate::templates::project::README_PATH;

    fn config(platforms: &[Platform]) -> BlueprintConfig {
        BlueprintConfig::builder("my_app")
            .platforms(platforms.iter().copied())
            .features(FeatureFlags::all())
            .build()
            .unwrap()
    }

    #[test]
    fn test_manifest_and_readme_fully_replaced() {
        let c = config(&[Platform::Mobile, Platform::Web]);
        let stub = TemplateBundle::new("stub")
            .with_file(TemplateFile::fixed(PUBSPEC_PATH, "name: stub\n"))
            .with_file(TemplateFile::fixed(README_PATH, "stub readme\n"))
            .with_file(TemplateFile::fixed(app::MAIN_PATH, "void main() {}\n"));

        let composition = compose(&c, &stub);
        assert_eq!(
            composition.files[PUBSPEC_PATH],
            project::render_pubspec(&c, &Dependencies::new(), &Dependencies::new()).unwrap()
        );
        assert_eq!(
            composition.files[README_PATH],
            project::render_readme(&c, Shape::Universal)
        );
        assert!(composition.files[app::MAIN_PATH].contains("as web;"));
    }

    #[test]
    fn test_mobile_and_web_entry_points() {
        let c = config(&[Platform::Mobile, Platform::Web]);
        let composition = compose(&c, &mobile::build(&c));

        let entries: Vec<&str> = composition
            .files
            .keys()
            .map(String::as_str)
            .filter(|p| p.starts_with("lib/main"))
            .collect();
        assert_eq!(
            entries,
            vec!["lib/main.dart", "lib/main_mobile.dart", "lib/main_web.dart"]
        );
        assert!(!composition.files.contains_key("lib/main_desktop.dart"));
        assert!(!composition.files.keys().any(|p| p.contains("runner/")
            || p.starts_with("macos/")));
        assert!(composition.files.contains_key("web/index.html"));
        assert!(composition.files.contains_key(shared::PLATFORM_INFO_PATH));
        assert!(composition.failures.is_empty());
        assert!(composition.collisions.is_empty());
    }

    #[test]
    fn test_desktop_layer_adds_runner_and_dependency() {
        let c = BlueprintConfig::builder("my_app")
            .platforms([Platform::Mobile, Platform::Desktop])
            .state_management(StateManagement::Provider)
            .build()
            .unwrap();
        let composition = compose(&c, &mobile::build(&c));

        assert_eq!(
            composition.dependencies.get("window_manager"),
            Some(versions::WINDOW_MANAGER)
        );
        assert!(composition.files[PUBSPEC_PATH].contains("window_manager"));
        assert!(composition.files.contains_key("linux/runner/README.md"));
        assert!(composition.files.contains_key(shared::WINDOW_SETUP_PATH));
        assert!(composition.files["lib/main_desktop.dart"].contains("await setupWindow();"));
        assert!(!composition.files.contains_key("web/index.html"));
    }
}
