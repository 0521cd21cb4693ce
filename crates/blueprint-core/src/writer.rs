//! Writing a generated file map to disk or into a zip archive

use crate::templates::FileMap;
use anyhow::{bail, Context, Result};
use std::collections::BTreeSet;
use std::io::{Cursor, Write};
use std::path::{Component, Path};
use tokio::fs;
use walkdir::WalkDir;
use zip::write::SimpleFileOptions;
use zip::ZipWriter;

/// Reject paths that would escape the project root
pub fn validate_relative_path(path: &str) -> Result<()> {
    if path.is_empty() {
        bail!("Generated file has an empty path");
    }
    let candidate = Path::new(path);
    if candidate.is_absolute() || path.starts_with('/') || path.starts_with('\\') {
        bail!("Generated path must be relative: {}", path);
    }
    for component in candidate.components() {
        match component {
            Component::Normal(_) | Component::CurDir => {}
            _ => bail!("Generated path leaves the project root: {}", path),
        }
    }
    Ok(())
}

/// Write every file under `target_dir`, creating parent directories
///
/// Returns the relative paths written, in map order.
pub async fn write_files(files: &FileMap, target_dir: &Path) -> Result<Vec<String>> {
    for path in files.keys() {
        validate_relative_path(path)?;
    }

    fs::create_dir_all(target_dir)
        .await
        .context("Failed to create target directory")?;

    let mut written = Vec::with_capacity(files.len());
    for (path, content) in files {
        let target_path = target_dir.join(path);
        if let Some(parent) = target_path.parent() {
            fs::create_dir_all(parent)
                .await
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }
        fs::write(&target_path, content)
            .await
            .with_context(|| format!("Failed to write file: {}", target_path.display()))?;
        written.push(path.clone());
    }

    Ok(written)
}

/// Generated paths that already exist under `target_dir`
pub fn conflicting_files(files: &FileMap, target_dir: &Path) -> Result<Vec<String>> {
    if !target_dir.exists() {
        return Ok(Vec::new());
    }

    let mut existing = BTreeSet::new();
    for entry in WalkDir::new(target_dir).into_iter() {
        let entry = entry
            .with_context(|| format!("Failed to scan directory: {}", target_dir.display()))?;
        if !entry.file_type().is_file() {
            continue;
        }
        let relative = entry
            .path()
            .strip_prefix(target_dir)
            .context("Scanned file outside target directory")?;
        let normalized: Vec<String> = relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy().into_owned())
            .collect();
        existing.insert(normalized.join("/"));
    }

    Ok(files
        .keys()
        .filter(|path| existing.contains(path.as_str()))
        .cloned()
        .collect())
}

/// True when `dir` is missing or has no entries
pub fn is_empty_dir(dir: &Path) -> Result<bool> {
    if !dir.exists() {
        return Ok(true);
    }
    let mut entries = std::fs::read_dir(dir)
        .with_context(|| format!("Failed to read directory: {}", dir.display()))?;
    Ok(entries.next().is_none())
}

/// Build a deflated zip with every file placed under `<root>/`
pub fn build_zip(files: &FileMap, root: &str) -> Result<Vec<u8>> {
    validate_relative_path(root)?;
    for path in files.keys() {
        validate_relative_path(path)?;
    }

    let mut zip_buffer = Vec::new();
    {
        let mut zip = ZipWriter::new(Cursor::new(&mut zip_buffer));
        let options =
            SimpleFileOptions::default().compression_method(zip::CompressionMethod::Deflated);

        for (path, content) in files {
            let zip_path = format!("{}/{}", root, path);
            zip.start_file(&zip_path, options)
                .with_context(|| format!("Failed to add {} to archive", zip_path))?;
            zip.write_all(content.as_bytes())?;
        }

        zip.finish().context("Failed to finish archive")?;
    }

    Ok(zip_buffer)
}

/// Build the archive and write it to `output`
pub async fn write_zip(files: &FileMap, root: &str, output: &Path) -> Result<u64> {
    let bytes = build_zip(files, root)?;
    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .await
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }
    fs::write(output, &bytes)
        .await
        .with_context(|| format!("Failed to write archive: {}", output.display()))?;
    Ok(bytes.len() as u64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;
    use zip::ZipArchive;

    fn sample() -> FileMap {
        let mut files = FileMap::new();
        files.insert("pubspec.yaml".to_string(), "name: demo\n".to_string());
        files.insert(
            "lib/features/home/home_page.dart".to_string(),
            "class HomePage {}\n".to_string(),
        );
        files
    }

    #[test]
    fn test_validate_relative_path() {
        assert!(validate_relative_path("lib/main.dart").is_ok());
        assert!(validate_relative_path("./README.md").is_ok());
        assert!(validate_relative_path("").is_err());
        assert!(validate_relative_path("/etc/passwd").is_err());
        assert!(validate_relative_path("lib/../../escape.dart").is_err());
    }

    #[tokio::test]
    async fn test_write_files_creates_directories() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("demo");

        let written = write_files(&sample(), &target).await.unwrap();
        assert_eq!(written.len(), 2);
        let page = std::fs::read_to_string(target.join("lib/features/home/home_page.dart")).unwrap();
        assert_eq!(page, "class HomePage {}\n");
    }

    #[tokio::test]
    async fn test_write_files_rejects_escaping_paths() {
        let dir = tempfile::tempdir().unwrap();
        let mut files = sample();
        files.insert("../outside.txt".to_string(), "x".to_string());

        assert!(write_files(&files, dir.path()).await.is_err());
        assert!(!dir.path().join("pubspec.yaml").exists());
    }

    #[test]
    fn test_conflicting_files() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("pubspec.yaml"), "name: old\n").unwrap();
        std::fs::write(dir.path().join("notes.txt"), "keep\n").unwrap();

        let conflicts = conflicting_files(&sample(), dir.path()).unwrap();
        assert_eq!(conflicts, vec!["pubspec.yaml".to_string()]);
        assert!(conflicting_files(&sample(), &dir.path().join("missing"))
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_is_empty_dir() {
        let dir = tempfile::tempdir().unwrap();
        assert!(is_empty_dir(dir.path()).unwrap());
        assert!(is_empty_dir(&dir.path().join("missing")).unwrap());
        std::fs::write(dir.path().join("file"), "").unwrap();
        assert!(!is_empty_dir(dir.path()).unwrap());
    }

    #[test]
    fn test_zip_places_files_under_root() {
        let bytes = build_zip(&sample(), "demo").unwrap();
        let mut archive = ZipArchive::new(Cursor::new(bytes)).unwrap();
        assert_eq!(archive.len(), 2);

        let mut content = String::new();
        archive
            .by_name("demo/pubspec.yaml")
            .unwrap()
            .read_to_string(&mut content)
            .unwrap();
        assert_eq!(content, "name: demo\n");
    }

    #[tokio::test]
    async fn test_write_zip() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("out/demo.zip");
        let size = write_zip(&sample(), "demo", &output).await.unwrap();
        assert_eq!(std::fs::metadata(&output).unwrap().len(), size);
    }
}
