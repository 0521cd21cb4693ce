//! Flutter and Dart SDK detection

use super::version::{check_compatibility, parse_dart_version, parse_flutter_version};
use crate::templates::project::{MIN_DART_SDK, MIN_FLUTTER_SDK};
use std::process::Command;

const FLUTTER_BIN: &str = if cfg!(windows) { "flutter.bat" } else { "flutter" };
const DART_BIN: &str = if cfg!(windows) { "dart.bat" } else { "dart" };

/// SDK detection result
#[derive(Debug, Clone)]
pub struct SdkInfo {
    pub name: &'static str,
    pub version: Option<String>,
    pub available: bool,
}

impl SdkInfo {
    fn missing(name: &'static str) -> Self {
        Self {
            name,
            version: None,
            available: false,
        }
    }
}

/// Run `<bin> --version` and return its combined output; some Dart releases print to stderr
fn version_output(bin: &str) -> Option<String> {
    let out = Command::new(bin).arg("--version").output().ok()?;
    if !out.status.success() {
        return None;
    }
    let mut text = String::from_utf8_lossy(&out.stdout).into_owned();
    text.push_str(&String::from_utf8_lossy(&out.stderr));
    Some(text)
}

/// Check if the Flutter SDK is available
pub fn check_flutter() -> SdkInfo {
    match version_output(FLUTTER_BIN) {
        Some(output) => SdkInfo {
            name: "Flutter",
            version: parse_flutter_version(&output).ok().map(|v| v.to_string()),
            available: true,
        },
        None => SdkInfo::missing("Flutter"),
    }
}

/// Check if the Dart SDK is available
pub fn check_dart() -> SdkInfo {
    match version_output(DART_BIN) {
        Some(output) => SdkInfo {
            name: "Dart",
            version: parse_dart_version(&output).ok().map(|v| v.to_string()),
            available: true,
        },
        None => SdkInfo::missing("Dart"),
    }
}

pub fn check_sdks() -> Vec<SdkInfo> {
    vec![check_flutter(), check_dart()]
}

/// Warnings for missing or outdated SDKs. Advisory only: generation never depends on them.
pub fn sdk_advisories(sdks: &[SdkInfo]) -> Vec<String> {
    let mut advisories = Vec::new();
    for sdk in sdks {
        let minimum = match sdk.name {
            "Flutter" => MIN_FLUTTER_SDK,
            _ => MIN_DART_SDK,
        };
        if !sdk.available {
            advisories.push(format!(
                "{} SDK not found (install from https://docs.flutter.dev/get-started/install)",
                sdk.name
            ));
            continue;
        }
        if let Some(warning) = sdk
            .version
            .as_deref()
            .and_then(|found| check_compatibility(sdk.name, found, minimum))
        {
            advisories.push(warning);
        }
    }
    advisories
}

#[cfg(test)]
mod tests {
    use super::*;

    fn found(name: &'static str, version: &str) -> SdkInfo {
        SdkInfo {
            name,
            version: Some(version.to_string()),
            available: true,
        }
    }

    #[test]
    fn test_missing_sdk_is_reported() {
        let advisories = sdk_advisories(&[SdkInfo::missing("Flutter")]);
        assert_eq!(advisories.len(), 1);
        assert!(advisories[0].contains("Flutter SDK not found"));
    }

    #[test]
    fn test_outdated_sdk_is_reported() {
        let advisories = sdk_advisories(&[found("Flutter", "3.10.0"), found("Dart", "3.5.3")]);
        assert_eq!(advisories.len(), 1);
        assert!(advisories[0].contains(MIN_FLUTTER_SDK));
    }

    #[test]
    fn test_current_sdks_are_quiet() {
        let advisories = sdk_advisories(&[found("Flutter", "3.24.3"), found("Dart", "3.5.3")]);
        assert!(advisories.is_empty());
    }
}
