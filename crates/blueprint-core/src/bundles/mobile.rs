//! Mobile (Android and iOS) bundle

use super::common;
use crate::config::{BlueprintConfig, Platform, Shape};
use crate::dependencies::platform_dependencies;
use crate::templates::{app, TemplateBundle};

pub fn build(config: &BlueprintConfig) -> TemplateBundle {
    common::bundle(Shape::Mobile, config, &platform_dependencies(Platform::Mobile))
        .with_file(app::main_entry(Platform::Mobile))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{FeatureFlags, StateManagement};
    use crate::templates::emit;

    #[test]
    fn test_provider_bundle_contents() {
        let config = BlueprintConfig::builder("shop")
            .state_management(StateManagement::Provider)
            .features(FeatureFlags::none())
            .build()
            .unwrap();
        let bundle = build(&config);
        assert_eq!(bundle.name(), "mobile-provider");
        assert!(bundle.dependencies().contains("provider"));
        assert!(!bundle.dependencies().contains("dio"));

        let files = emit(&bundle, &config).files;
        assert!(files.contains_key("lib/main.dart"));
        assert!(files.contains_key("lib/app/settings/settings_provider.dart"));
        assert!(files
            .contains_key("lib/features/home/presentation/providers/home_provider.dart"));
        assert!(!files.contains_key("lib/core/api/api_client.dart"));
        assert!(!files.keys().any(|p| p.starts_with("web/")));
    }
}
