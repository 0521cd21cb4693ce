//! Project template library: extra packages and feature modules per starter

use crate::config::{BlueprintConfig, ProjectTemplate};
use crate::dependencies::{versions, Dependencies};
use crate::templates::TemplateBundle;

/// Feature modules a project template scaffolds beyond `home`
pub fn required_features(template: ProjectTemplate) -> &'static [&'static str] {
    match template {
        ProjectTemplate::Blank => &[],
        ProjectTemplate::Ecommerce => &["products", "cart", "checkout", "orders"],
        ProjectTemplate::SocialMedia => &["feed", "posts", "profile", "notifications"],
        ProjectTemplate::FitnessTracker => &["workouts", "goals", "progress"],
        ProjectTemplate::FinanceApp => &["accounts", "transactions", "budgets"],
        ProjectTemplate::FoodDelivery => &["restaurants", "menu", "cart", "orders"],
        ProjectTemplate::ChatApp => &["conversations", "messages", "contacts"],
    }
}

/// Packages a project template adds on top of the shape bundle
pub fn extra_dependencies(template: ProjectTemplate) -> Dependencies {
    let entries: &[(&str, &str)] = match template {
        ProjectTemplate::Blank => &[],
        ProjectTemplate::Ecommerce => &[
            ("cached_network_image", versions::CACHED_NETWORK_IMAGE),
            ("uuid", versions::UUID),
        ],
        ProjectTemplate::SocialMedia => &[
            ("cached_network_image", versions::CACHED_NETWORK_IMAGE),
            ("image_picker", versions::IMAGE_PICKER),
        ],
        ProjectTemplate::FitnessTracker => &[("fl_chart", versions::FL_CHART)],
        ProjectTemplate::FinanceApp => &[
            ("fl_chart", versions::FL_CHART),
            ("intl", versions::INTL),
        ],
        ProjectTemplate::FoodDelivery => &[("cached_network_image", versions::CACHED_NETWORK_IMAGE)],
        ProjectTemplate::ChatApp => &[
            ("web_socket_channel", versions::WEB_SOCKET_CHANNEL),
            ("uuid", versions::UUID),
        ],
    };
    entries.iter().copied().collect()
}

/// Metadata-only bundle for the configured project template
pub fn build(config: &BlueprintConfig) -> TemplateBundle {
    let template = config.template();
    required_features(template).iter().fold(
        TemplateBundle::new(template.name()).with_dependencies(&extra_dependencies(template)),
        |bundle, feature| bundle.require_feature(*feature),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::templates::feature::validate_feature_name;

    #[test]
    fn test_blank_contributes_nothing() {
        let config = BlueprintConfig::builder("app").build().unwrap();
        let bundle = build(&config);
        assert!(bundle.files().is_empty());
        assert!(bundle.dependencies().is_empty());
        assert!(bundle.required_features().is_empty());
    }

    #[test]
    fn test_ecommerce_metadata() {
        let config = BlueprintConfig::builder("shop")
            .template(ProjectTemplate::Ecommerce)
            .build()
            .unwrap();
        let bundle = build(&config);
        assert_eq!(bundle.name(), "ecommerce");
        assert_eq!(
            bundle.required_features(),
            ["products", "cart", "checkout", "orders"].map(String::from)
        );
        assert!(bundle.dependencies().contains("cached_network_image"));
    }

    #[test]
    fn test_library_is_well_formed() {
        for template in ProjectTemplate::ALL {
            for feature in required_features(template) {
                assert!(validate_feature_name(feature).is_ok(), "{}", feature);
                assert_ne!(*feature, "home");
            }
            assert!(extra_dependencies(template).validate().is_ok());
        }
    }
}
