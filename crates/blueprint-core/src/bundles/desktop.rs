//! Desktop (Windows, macOS and Linux) bundle

use super::common;
use crate::config::{BlueprintConfig, Platform, Shape};
use crate::dependencies::platform_dependencies;
use crate::templates::{app, platform, shared, TemplateBundle};

/// Every state style gets its own fully wired desktop bundle
pub fn build(config: &BlueprintConfig) -> TemplateBundle {
    common::bundle(Shape::Desktop, config, &platform_dependencies(Platform::Desktop))
        .with_file(shared::responsive())
        .with_file(shared::window_setup())
        .with_files(platform::desktop_runner_files())
        .with_file(app::main_entry(Platform::Desktop))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StateManagement;
    use crate::dependencies::versions;
    use crate::templates::emit;

    fn config(style: StateManagement) -> BlueprintConfig {
        BlueprintConfig::builder("notes")
            .platforms([Platform::Desktop])
            .state_management(style)
            .build()
            .unwrap()
    }

    #[test]
    fn test_window_manager_dependency() {
        let bundle = build(&config(StateManagement::Bloc));
        assert_eq!(
            bundle.dependencies().get("window_manager"),
            Some(versions::WINDOW_MANAGER)
        );
    }

    #[test]
    fn test_each_style_is_specialized() {
        let expected = [
            (StateManagement::Provider, "lib/app/settings/settings_provider.dart"),
            (StateManagement::Riverpod, "lib/app/settings/settings_notifier.dart"),
            (StateManagement::Bloc, "lib/app/settings/settings_cubit.dart"),
        ];
        for (style, settings_path) in expected {
            let c = config(style);
            let bundle = build(&c);
            assert_eq!(bundle.name(), format!("desktop-{}", style.name()));

            let files = emit(&bundle, &c).files;
            assert!(files.contains_key(settings_path));
            assert!(files["lib/main.dart"].contains("await setupWindow();"));
            assert!(files.contains_key("windows/runner/README.md"));
        }
    }
}
