//! Blueprint Core - Flutter starter project generation
//!
//! This library turns a small, validated configuration into the complete file
//! set of a Flutter application. Generation is pure: every template is a
//! function of [`BlueprintConfig`] alone, so identical input yields identical
//! output.
//!
//! # Architecture
//!
//! The library is organized into layers:
//!
//! - **Layer 1: Model** - [`config`] (typed, immutable configuration) and [`dependencies`]
//! - **Layer 2: Templates** - [`templates::TemplateFile`], [`templates::TemplateBundle`] and emission
//! - **Layer 3: Composition** - per-shape [`bundles`], the universal composer and [`generator`]
//! - **Layer 4: I/O** - [`writer`] (disk and zip), [`runtime`] (SDK detection), optional [`tui`]
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the cliclack-based interactive flows
//!
//! # Example Usage (without TUI)
//!
//! ```ignore
//! use blueprint_core::{generate, BlueprintConfig, Platform, StateManagement};
//!
//! let config = BlueprintConfig::builder("my_shop")
//!     .platforms([Platform::Mobile, Platform::Web])
//!     .state_management(StateManagement::Bloc)
//!     .build()?;
//!
//! let generation = generate(&config);
//! for failure in &generation.failures {
//!     eprintln!("{}", failure);
//! }
//! blueprint_core::writer::write_files(&generation.files, "my_shop".as_ref()).await?;
//! ```

pub mod bundles;
pub mod config;
pub mod dependencies;
pub mod error;
pub mod generator;
pub mod naming;
pub mod runtime;
pub mod templates;
pub mod writer;

#[cfg(feature = "tui")]
pub mod tui;

// Re-export main types for convenience
pub use config::{
    BlueprintConfig, BlueprintConfigBuilder, Feature, FeatureFlags, Platform, ProjectTemplate,
    Shape, StateManagement,
};
pub use dependencies::Dependencies;
pub use error::{ConfigError, TemplateError, TemplateFailure};
pub use generator::{generate, generate_feature, Generation};
pub use templates::{FileMap, TemplateBundle, TemplateFile};

#[cfg(feature = "tui")]
pub use tui::{add_feature, run, AddFeatureArgs, CreateArgs};
