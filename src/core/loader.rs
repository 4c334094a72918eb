//! Record loading utilities
//!
//! Generic helpers for loading record files from a project directory,
//! reducing boilerplate in command implementations.

use miette::{IntoDiagnostic, Result};
use serde::de::DeserializeOwned;
use std::fs;
use std::path::{Path, PathBuf};

use console::style;

/// Load all records of type T from a directory.
///
/// Scans recursively for `.eiq.yaml` files and deserializes them. Files
/// that fail to read or parse are skipped with a warning on stderr; a
/// missing directory yields an empty set. Results are sorted by path so
/// load order is stable across platforms.
pub fn load_all<T: DeserializeOwned + 'static>(dir: &Path) -> Result<Vec<T>> {
    let mut records = Vec::new();

    if !dir.exists() {
        return Ok(records);
    }

    let mut paths: Vec<PathBuf> = walkdir::WalkDir::new(dir)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .filter(|e| e.path().to_string_lossy().ends_with(".eiq.yaml"))
        .map(|e| e.path().to_path_buf())
        .collect();
    paths.sort();

    for path in paths {
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) => {
                eprintln!(
                    "{} skipping {}: {}",
                    style("warning:").yellow().bold(),
                    path.display(),
                    e
                );
                continue;
            }
        };
        match serde_yml::from_str::<T>(&content) {
            Ok(record) => records.push(record),
            Err(e) => {
                eprintln!(
                    "{} skipping {}: {}",
                    style("warning:").yellow().bold(),
                    path.display(),
                    e
                );
            }
        }
    }

    Ok(records)
}

/// Find a record file whose stem contains the given key
pub fn find_record_file(dir: &Path, key: &str) -> Option<PathBuf> {
    if !dir.exists() {
        return None;
    }

    let mut paths: Vec<PathBuf> = walkdir::WalkDir::new(dir)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .filter(|e| e.path().to_string_lossy().ends_with(".eiq.yaml"))
        .map(|e| e.path().to_path_buf())
        .collect();
    paths.sort();

    paths.into_iter().find(|path| {
        path.file_name()
            .and_then(|s| s.to_str())
            .map(|name| name.contains(key))
            .unwrap_or(false)
    })
}

/// Load a single record by key.
///
/// Returns the path and record if a matching file exists; parse failures
/// here are hard errors, unlike the bulk loader.
pub fn load_record<T: DeserializeOwned + 'static>(
    dir: &Path,
    key: &str,
) -> Result<Option<(PathBuf, T)>> {
    if let Some(path) = find_record_file(dir, key) {
        let record: T = crate::yaml::parse_yaml_file(&path)?;
        return Ok(Some((path, record)));
    }
    Ok(None)
}

/// Serialize a record to its file, creating parent directories as needed
pub fn write_record<T: serde::Serialize>(path: &Path, record: &T) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).into_diagnostic()?;
    }
    let yaml = serde_yml::to_string(record).into_diagnostic()?;
    fs::write(path, yaml).into_diagnostic()?;
    Ok(())
}
