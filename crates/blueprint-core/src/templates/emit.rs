//! Bundle evaluation into a path -> content map

use super::{TemplateBundle, TemplateFile};
use crate::config::BlueprintConfig;
use crate::error::{TemplateError, TemplateFailure};
use std::collections::BTreeMap;

/// Relative forward-slash path -> file content
pub type FileMap = BTreeMap<String, String>;

/// Output of evaluating template files
#[derive(Debug, Default)]
pub struct Emission {
    pub files: FileMap,
    /// Builders that failed; the rest of the run still emitted
    pub failures: Vec<TemplateFailure>,
    /// Paths written more than once (last write kept)
    pub collisions: Vec<String>,
}

impl Emission {
    /// Record a file, noting a collision if the path was already written
    pub fn record(&mut self, path: impl Into<String>, content: String) {
        let path = path.into();
        if self.files.insert(path.clone(), content).is_some() {
            self.collisions.push(path);
        }
    }

    /// Fold another emission into this one; its files win on collision
    pub fn absorb(&mut self, other: Emission) {
        for (path, content) in other.files {
            self.record(path, content);
        }
        self.failures.extend(other.failures);
        self.collisions.extend(other.collisions);
    }

    pub fn is_clean(&self) -> bool {
        self.failures.is_empty() && self.collisions.is_empty()
    }
}

/// Evaluate every included file of a bundle in bundle order
pub fn emit(bundle: &TemplateBundle, config: &BlueprintConfig) -> Emission {
    emit_files(bundle.files(), config)
}

/// Evaluate a list of template files: predicate first, then builder
pub fn emit_files(files: &[TemplateFile], config: &BlueprintConfig) -> Emission {
    let mut emission = Emission::default();

    for file in files {
        if !file.should_include(config) {
            continue;
        }
        match file.build(config) {
            Ok(content) if content.trim().is_empty() => emission.failures.push(TemplateFailure {
                path: file.path().to_string(),
                error: TemplateError::Empty,
            }),
            Ok(content) => emission.record(file.path(), content),
            Err(error) => emission.failures.push(TemplateFailure {
                path: file.path().to_string(),
                error,
            }),
        }
    }

    emission
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FeatureFlags;
    use crate::templates::gates;

    fn config() -> BlueprintConfig {
        BlueprintConfig::builder("demo_app")
            .features(FeatureFlags::none())
            .build()
            .unwrap()
    }

    #[test]
    fn test_gated_files_are_omitted() {
        let bundle = TemplateBundle::new("demo")
            .with_file(TemplateFile::fixed("lib/main.dart", "void main() {}\n"))
            .with_file(TemplateFile::fixed(".env.example", "X=1\n").when(gates::env));

        let emission = emit(&bundle, &config());
        assert!(emission.files.contains_key("lib/main.dart"));
        assert!(!emission.files.contains_key(".env.example"));
        assert!(emission.is_clean());
    }

    #[test]
    fn test_failure_is_isolated() {
        let bundle = TemplateBundle::new("demo")
            .with_file(TemplateFile::fallible("broken.yaml", |_| {
                Err(TemplateError::Render("boom".to_string()))
            }))
            .with_file(TemplateFile::new("blank.txt", |_| "   \n".to_string()))
            .with_file(TemplateFile::fixed("ok.txt", "fine\n"));

        let emission = emit(&bundle, &config());
        assert_eq!(emission.files.len(), 1);
        assert!(emission.files.contains_key("ok.txt"));

        let failed: Vec<_> = emission.failures.iter().map(|f| f.path.as_str()).collect();
        assert_eq!(failed, vec!["broken.yaml", "blank.txt"]);
        assert!(matches!(emission.failures[1].error, TemplateError::Empty));
    }

    #[test]
    fn test_last_write_wins_and_collision_recorded() {
        let bundle = TemplateBundle::new("demo")
            .with_file(TemplateFile::fixed("README.md", "first\n"))
            .with_file(TemplateFile::fixed("README.md", "second\n"));

        let emission = emit(&bundle, &config());
        assert_eq!(emission.files["README.md"], "second\n");
        assert_eq!(emission.collisions, vec!["README.md".to_string()]);
    }

    #[test]
    fn test_absorb_merges_everything() {
        let mut base = Emission::default();
        base.record("a", "1".to_string());

        let mut overlay = Emission::default();
        overlay.record("a", "2".to_string());
        overlay.record("b", "3".to_string());

        base.absorb(overlay);
        assert_eq!(base.files["a"], "2");
        assert_eq!(base.files.len(), 2);
        assert_eq!(base.collisions, vec!["a".to_string()]);
    }
}
