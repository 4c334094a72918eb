//! Project discovery and structure

use std::path::{Path, PathBuf};
use thiserror::Error;

/// The five record sets a project holds, one directory each.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    Facility,
    Asset,
    WorkOrder,
    Contract,
    Certification,
}

impl RecordKind {
    pub const ALL: &'static [RecordKind] = &[
        RecordKind::Facility,
        RecordKind::Asset,
        RecordKind::WorkOrder,
        RecordKind::Contract,
        RecordKind::Certification,
    ];

    /// Directory under the project root holding this record set
    pub fn directory(self) -> &'static str {
        match self {
            RecordKind::Facility => "facilities",
            RecordKind::Asset => "inventory",
            RecordKind::WorkOrder => "work_orders",
            RecordKind::Contract => "contracts",
            RecordKind::Certification => "certifications",
        }
    }
}

/// An equipment intelligence project on disk
#[derive(Debug)]
pub struct Project {
    /// Root directory of the project (parent of .eiq/)
    root: PathBuf,
}

impl Project {
    /// Find project root by walking up from the current directory
    pub fn discover() -> Result<Self, ProjectError> {
        let current =
            std::env::current_dir().map_err(|e| ProjectError::IoError(e.to_string()))?;
        Self::discover_from(&current)
    }

    /// Find project root by walking up from the given directory
    pub fn discover_from(start: &Path) -> Result<Self, ProjectError> {
        let mut current = start
            .canonicalize()
            .map_err(|e| ProjectError::IoError(e.to_string()))?;

        loop {
            let eiq_dir = current.join(".eiq");
            if eiq_dir.is_dir() {
                return Ok(Self { root: current });
            }

            if !current.pop() {
                return Err(ProjectError::NotFound {
                    searched_from: start.to_path_buf(),
                });
            }
        }
    }

    /// Create a new project structure at the given path
    pub fn init(path: &Path) -> Result<Self, ProjectError> {
        let root = path.canonicalize().unwrap_or_else(|_| path.to_path_buf());

        let eiq_dir = root.join(".eiq");
        if eiq_dir.exists() {
            return Err(ProjectError::AlreadyExists(root.clone()));
        }

        Self::create_structure(&root)?;
        Ok(Self { root })
    }

    /// Force initialization even if .eiq/ exists
    pub fn init_force(path: &Path) -> Result<Self, ProjectError> {
        let root = path.canonicalize().unwrap_or_else(|_| path.to_path_buf());
        Self::create_structure(&root)?;
        Ok(Self { root })
    }

    fn create_structure(root: &Path) -> Result<(), ProjectError> {
        let eiq_dir = root.join(".eiq");
        std::fs::create_dir_all(&eiq_dir).map_err(|e| ProjectError::IoError(e.to_string()))?;

        let config_path = eiq_dir.join("config.yaml");
        if !config_path.exists() {
            std::fs::write(&config_path, Self::default_config())
                .map_err(|e| ProjectError::IoError(e.to_string()))?;
        }

        for kind in RecordKind::ALL {
            std::fs::create_dir_all(root.join(kind.directory()))
                .map_err(|e| ProjectError::IoError(e.to_string()))?;
        }

        Ok(())
    }

    fn default_config() -> &'static str {
        r#"# Equipment intelligence project configuration

# Default output format (auto, yaml, tsv, json, csv, md, id)
# default_format: auto

# Fixed reference date for status/risk classification (YYYY-MM-DD).
# Unset means today.
# as_of: ""
"#
    }

    /// Get the project root directory
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Get the .eiq configuration directory
    pub fn eiq_dir(&self) -> PathBuf {
        self.root.join(".eiq")
    }

    /// Get the directory for a record kind
    pub fn record_dir(&self, kind: RecordKind) -> PathBuf {
        self.root.join(kind.directory())
    }

    /// Get the path for a new record file
    pub fn record_path(&self, kind: RecordKind, key: &str) -> PathBuf {
        self.record_dir(kind).join(format!("{}.eiq.yaml", key))
    }

    /// Iterate all record files of a given kind
    pub fn iter_record_files(&self, kind: RecordKind) -> impl Iterator<Item = PathBuf> {
        let dir = self.record_dir(kind);
        walkdir::WalkDir::new(dir)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
            .filter(|e| e.path().to_string_lossy().ends_with(".eiq.yaml"))
            .map(|e| e.path().to_path_buf())
    }
}

/// Errors that can occur during project operations
#[derive(Debug, Error)]
pub enum ProjectError {
    #[error("not an eiq project (searched from {searched_from:?}). Run 'eiq init' to create one.")]
    NotFound { searched_from: PathBuf },

    #[error("eiq project already exists at {0:?}")]
    AlreadyExists(PathBuf),

    #[error("IO error: {0}")]
    IoError(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_project_init_creates_structure() {
        let tmp = tempdir().unwrap();
        let project = Project::init(tmp.path()).unwrap();

        assert!(project.eiq_dir().exists());
        assert!(project.eiq_dir().join("config.yaml").exists());
        assert!(project.root().join("facilities").is_dir());
        assert!(project.root().join("inventory").is_dir());
        assert!(project.root().join("work_orders").is_dir());
        assert!(project.root().join("contracts").is_dir());
        assert!(project.root().join("certifications").is_dir());
    }

    #[test]
    fn test_project_init_fails_if_exists() {
        let tmp = tempdir().unwrap();
        Project::init(tmp.path()).unwrap();

        let err = Project::init(tmp.path()).unwrap_err();
        assert!(matches!(err, ProjectError::AlreadyExists(_)));
    }

    #[test]
    fn test_project_discover_finds_eiq_dir() {
        let tmp = tempdir().unwrap();
        Project::init(tmp.path()).unwrap();

        let subdir = tmp.path().join("some/nested/dir");
        std::fs::create_dir_all(&subdir).unwrap();

        let project = Project::discover_from(&subdir).unwrap();
        assert_eq!(
            project.root().canonicalize().unwrap(),
            tmp.path().canonicalize().unwrap()
        );
    }

    #[test]
    fn test_project_discover_fails_without_eiq_dir() {
        let tmp = tempdir().unwrap();
        let err = Project::discover_from(tmp.path()).unwrap_err();
        assert!(matches!(err, ProjectError::NotFound { .. }));
    }

    #[test]
    fn test_record_path_naming() {
        let tmp = tempdir().unwrap();
        let project = Project::init(tmp.path()).unwrap();
        let path = project.record_path(RecordKind::Asset, "AST-000042");
        assert!(path.ends_with("inventory/AST-000042.eiq.yaml"));
    }
}
