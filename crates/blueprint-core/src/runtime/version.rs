//! SDK version parsing and minimum-version comparison

use anyhow::{anyhow, Result};
use semver::Version;

/// Compare an installed SDK against the minimum a generated project needs
/// Returns a warning message if the SDK is older
pub fn check_compatibility(sdk: &str, installed: &str, minimum: &str) -> Option<String> {
    let installed_ver = parse_version(installed).ok()?;
    let minimum_ver = parse_version(minimum).ok()?;

    if installed_ver < minimum_ver {
        Some(format!(
            "Warning: generated projects need {} {} or newer.\n\
             You are running version {}.\n\
             Consider updating: flutter upgrade",
            sdk, minimum, installed
        ))
    } else {
        None
    }
}

/// Parse version string, handling a leading `v` and two-part versions
pub fn parse_version(version_str: &str) -> Result<Version> {
    let cleaned = version_str.trim();
    let cleaned = cleaned.strip_prefix('v').unwrap_or(cleaned);
    let padded;
    let cleaned = if cleaned.matches('.').count() == 1 {
        padded = format!("{}.0", cleaned);
        padded.as_str()
    } else {
        cleaned
    };
    Version::parse(cleaned).map_err(|e| anyhow!("Invalid version '{}': {}", version_str, e))
}

/// Version from `flutter --version` ("Flutter 3.24.3 • channel stable • ...")
pub fn parse_flutter_version(output: &str) -> Result<Version> {
    let token = output
        .lines()
        .find_map(|line| line.trim().strip_prefix("Flutter "))
        .and_then(|rest| rest.split_whitespace().next())
        .ok_or_else(|| anyhow!("Unrecognised flutter --version output"))?;
    parse_version(token)
}

/// Version from `dart --version` ("Dart SDK version: 3.5.3 (stable) ...")
pub fn parse_dart_version(output: &str) -> Result<Version> {
    let token = output
        .lines()
        .find_map(|line| line.split_once("Dart SDK version:").map(|(_, rest)| rest))
        .and_then(|rest| rest.split_whitespace().next())
        .ok_or_else(|| anyhow!("Unrecognised dart --version output"))?;
    parse_version(token)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sdk_older_than_minimum() {
        let warning = check_compatibility("Flutter", "3.19.6", "3.22.0");
        assert!(warning.is_some());
        assert!(warning.unwrap().contains("3.22.0"));
    }

    #[test]
    fn test_sdk_same_or_newer() {
        assert!(check_compatibility("Flutter", "3.22.0", "3.22.0").is_none());
        assert!(check_compatibility("Dart", "3.5.3", "3.4.0").is_none());
    }

    #[test]
    fn test_invalid_versions() {
        // Can't compare, so no warning
        assert!(check_compatibility("Flutter", "invalid", "3.22.0").is_none());
    }

    #[test]
    fn test_parse_flutter_output() {
        let output = "Flutter 3.24.3 • channel stable • https://github.com/flutter/flutter.git\n\
                      Framework • revision 2663184aa7 (4 weeks ago)\n\
                      Tools • Dart 3.5.3 • DevTools 2.37.3\n";
        assert_eq!(parse_flutter_version(output).unwrap(), Version::new(3, 24, 3));
        assert!(parse_flutter_version("command not found").is_err());
    }

    #[test]
    fn test_parse_dart_output() {
        let output = "Dart SDK version: 3.5.3 (stable) (Wed Sep 11 16:22:47 2024 +0000) on \"macos_arm64\"\n";
        assert_eq!(parse_dart_version(output).unwrap(), Version::new(3, 5, 3));
    }

    #[test]
    fn test_parse_version_variants() {
        assert_eq!(parse_version("v3.22").unwrap(), Version::new(3, 22, 0));
        assert!(parse_version("3.22.0-0.1.pre").is_ok());
    }
}
