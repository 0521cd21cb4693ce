//! Local toolchain detection
//!
//! This module provides:
//! - Flutter and Dart SDK detection
//! - Version parsing and the minimum-SDK advisory

pub mod check;
pub mod version;

pub use check::{check_dart, check_flutter, check_sdks, sdk_advisories, SdkInfo};
pub use version::{check_compatibility, parse_dart_version, parse_flutter_version};
