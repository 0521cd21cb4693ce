//! Bundle builders: one per platform shape, plus the multi-platform composer
//! and the project template library

pub mod common;
pub mod desktop;
pub mod library;
pub mod mobile;
pub mod universal;
pub mod web;

use crate::config::{BlueprintConfig, Shape};
use crate::templates::TemplateBundle;

/// Pick the bundle builder for a shape
///
/// `Universal` yields the mobile bundle, which [`universal::compose`] then
/// layers the other platforms onto.
pub fn select(shape: Shape, config: &BlueprintConfig) -> TemplateBundle {
    match shape {
        Shape::Mobile | Shape::Universal => mobile::build(config),
        Shape::Web => web::build(config),
        Shape::Desktop => desktop::build(config),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{FeatureFlags, Platform, StateManagement};
    use crate::templates::emit;
    use std::collections::HashSet;

    fn config(platform: Platform, style: StateManagement) -> BlueprintConfig {
        BlueprintConfig::builder("demo_app")
            .platforms([platform])
            .state_management(style)
            .features(FeatureFlags::all())
            .build()
            .unwrap()
    }

    #[test]
    fn test_included_paths_unique_per_shape_bundle() {
        for platform in Platform::ALL {
            for style in StateManagement::ALL {
                let c = config(platform, style);
                let bundle = select(c.shape(), &c);
                let paths = bundle.included_paths(&c);
                let unique: HashSet<&str> = paths.iter().copied().collect();
                assert_eq!(
                    unique.len(),
                    paths.len(),
                    "duplicate path in {}",
                    bundle.name()
                );

                let emission = emit(&bundle, &c);
                assert!(emission.is_clean(), "{} emitted with problems", bundle.name());
            }
        }
    }

    #[test]
    fn test_universal_selects_mobile_base() {
        let c = BlueprintConfig::builder("demo_app")
            .platforms([Platform::Mobile, Platform::Web])
            .build()
            .unwrap();
        assert_eq!(select(c.shape(), &c).name(), "mobile-riverpod");
    }
}
