//! YAML parsing with rich diagnostics

pub mod diagnostics;

pub use diagnostics::{YamlError, YamlSyntaxError};

use miette::{IntoDiagnostic, Result};
use serde::de::DeserializeOwned;
use std::path::Path;

/// Parse a YAML file into a typed record, attaching source-located
/// diagnostics on syntax failures.
pub fn parse_yaml_file<T: DeserializeOwned + 'static>(path: &Path) -> Result<T> {
    let content = std::fs::read_to_string(path).into_diagnostic()?;
    parse_yaml_str(&content, &path.display().to_string())
}

/// Parse a YAML string, naming the source for diagnostics
pub fn parse_yaml_str<T: DeserializeOwned + 'static>(content: &str, filename: &str) -> Result<T> {
    serde_yml::from_str(content).map_err(|err| {
        YamlSyntaxError::from_serde_error(&err, content, filename).into()
    })
}
