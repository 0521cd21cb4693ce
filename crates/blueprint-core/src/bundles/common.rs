//! Files every shape bundle shares

use crate::config::{BlueprintConfig, Shape, StateManagement};
use crate::dependencies::{base_dependencies, base_dev_dependencies, Dependencies};
use crate::templates::{app, feature, project, shared, testing, TemplateBundle};

/// Feature module every bundle ships as the working example
pub const EXAMPLE_FEATURE: &str = "home";

/// Bundle name: `<shape>-<style>`
pub fn bundle_name(shape: Shape, style: StateManagement) -> String {
    format!("{}-{}", shape.name(), style.name())
}

/// Project files, core utilities, app shell, gated layers and the example
/// feature, with `extra` dependencies merged over the base set
///
/// The entry point is left to the shape builder.
pub fn bundle(shape: Shape, config: &BlueprintConfig, extra: &Dependencies) -> TemplateBundle {
    let style = config.state_management();

    let mut dependencies = base_dependencies(config);
    dependencies.merge(extra);
    let dev_dependencies = base_dev_dependencies(config);

    TemplateBundle::new(bundle_name(shape, style))
        .with_file(project::pubspec(
            dependencies.clone(),
            dev_dependencies.clone(),
        ))
        .with_file(project::readme(shape))
        .with_file(project::analysis_options())
        .with_file(project::gitignore())
        .with_file(project::blueprint_file())
        .with_file(project::env_example())
        .with_files(project::localization_files())
        .with_files(shared::core_files())
        .with_files(app::app_files(style))
        .with_files(feature::files(EXAMPLE_FEATURE, style))
        .with_files(testing::test_files())
        .with_dependencies(&dependencies)
        .with_dev_dependencies(&dev_dependencies)
}
