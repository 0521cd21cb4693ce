//! Web bundle

use super::common;
use crate::config::{BlueprintConfig, Platform, Shape};
use crate::dependencies::platform_dependencies;
use crate::templates::{app, platform, shared, TemplateBundle};

pub fn build(config: &BlueprintConfig) -> TemplateBundle {
    common::bundle(Shape::Web, config, &platform_dependencies(Platform::Web))
        .with_file(shared::responsive())
        .with_files(platform::web_files())
        .with_file(app::main_entry(Platform::Web))
}
