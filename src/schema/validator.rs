//! Schema validation with detailed error reporting

use jsonschema::{validator_for, ValidationError as JsonSchemaError, Validator as JsonValidator};
use miette::{Diagnostic, NamedSource, SourceSpan};
use serde_json::Value as JsonValue;
use std::collections::HashMap;
use thiserror::Error;

use crate::core::RecordKind;
use crate::schema::registry::SchemaRegistry;

/// Validation error with source location information
#[derive(Debug, Error, Diagnostic)]
#[error("Schema validation failed: {summary}")]
#[diagnostic(code(eiq::schema::validation_error))]
pub struct ValidationError {
    summary: String,

    #[source_code]
    src: NamedSource<String>,

    #[related]
    violations: Vec<SchemaViolation>,
}

/// A single schema violation
#[derive(Debug, Error, Diagnostic)]
#[error("{message}")]
pub struct SchemaViolation {
    #[label("{}", self.hint)]
    span: SourceSpan,

    message: String,
    hint: String,

    #[help]
    help: Option<String>,
}

impl SchemaViolation {
    pub fn new(message: String, hint: String, span: SourceSpan, help: Option<String>) -> Self {
        Self {
            span,
            message,
            hint,
            help,
        }
    }
}

impl ValidationError {
    pub fn new(filename: &str, source: &str, violations: Vec<SchemaViolation>) -> Self {
        let count = violations.len();
        let summary = if count == 1 {
            "1 error".to_string()
        } else {
            format!("{} errors", count)
        };
        Self {
            summary,
            src: NamedSource::new(filename, source.to_string()),
            violations,
        }
    }

    pub fn violation_count(&self) -> usize {
        self.violations.len()
    }
}

/// Result of validation
#[derive(Debug)]
pub struct ValidationResult {
    pub valid: bool,
}

impl ValidationResult {
    pub fn success() -> Self {
        Self { valid: true }
    }
}

/// Schema validator with compiled schemas
pub struct Validator {
    /// Compiled JSON Schemas by record kind
    compiled: HashMap<&'static str, JsonValidator>,
}

impl Validator {
    /// Create a new validator with schemas from the registry
    pub fn new(registry: &SchemaRegistry) -> Self {
        let mut compiled = HashMap::new();

        for kind in RecordKind::ALL {
            if let Some(schema_str) = registry.get(*kind) {
                if let Ok(schema_json) = serde_json::from_str::<JsonValue>(&schema_str) {
                    if let Ok(compiled_schema) = validator_for(&schema_json) {
                        compiled.insert(kind.directory(), compiled_schema);
                    }
                }
            }
        }

        Self { compiled }
    }

    /// Validate YAML content against the schema for the given record kind,
    /// collecting every violation.
    pub fn iter_errors(
        &self,
        content: &str,
        filename: &str,
        kind: RecordKind,
    ) -> Result<ValidationResult, ValidationError> {
        let yaml_value: serde_yml::Value = match serde_yml::from_str(content) {
            Ok(v) => v,
            Err(e) => {
                let span = find_error_span(content, e.location());
                let violation = SchemaViolation::new(
                    format!("YAML parse error: {}", e),
                    "invalid YAML".to_string(),
                    span,
                    Some("Check YAML syntax - proper indentation, colons, quotes".to_string()),
                );
                return Err(ValidationError::new(filename, content, vec![violation]));
            }
        };

        let json_value: JsonValue = match serde_json::to_value(&yaml_value) {
            Ok(v) => v,
            Err(e) => {
                let violation = SchemaViolation::new(
                    format!("Failed to convert YAML to JSON: {}", e),
                    "conversion error".to_string(),
                    (0, content.len()).into(),
                    None,
                );
                return Err(ValidationError::new(filename, content, vec![violation]));
            }
        };

        let schema = match self.compiled.get(kind.directory()) {
            Some(s) => s,
            // No schema available - validation passes
            None => return Ok(ValidationResult::success()),
        };

        let violations: Vec<SchemaViolation> = schema
            .iter_errors(&json_value)
            .map(|e| error_to_violation(content, &e))
            .collect();

        if violations.is_empty() {
            Ok(ValidationResult::success())
        } else {
            Err(ValidationError::new(filename, content, violations))
        }
    }

    /// Validate a file, inferring the record kind from its directory
    pub fn validate_file(
        &self,
        path: &std::path::Path,
        kind: RecordKind,
    ) -> Result<ValidationResult, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        let filename = path.file_name().unwrap_or_default().to_string_lossy();
        self.iter_errors(&content, &filename, kind)
            .map_err(|e| Box::new(e) as Box<dyn std::error::Error>)
    }
}

impl Default for Validator {
    fn default() -> Self {
        let registry = SchemaRegistry::default();
        Self::new(&registry)
    }
}

/// Convert a JSON Schema validation error to our violation format
fn error_to_violation(content: &str, error: &JsonSchemaError) -> SchemaViolation {
    let path = error.instance_path.to_string();
    let message = format_schema_error(error);
    let hint = format_error_hint(error);
    let help = generate_help_message(error);
    let span = find_path_span(content, &path);

    SchemaViolation::new(message, hint, span, help)
}

/// Format a JSON Schema error into a user-friendly message
fn format_schema_error(error: &JsonSchemaError) -> String {
    let path = if error.instance_path.as_str().is_empty() {
        "document root".to_string()
    } else {
        format!("'{}'", error.instance_path)
    };

    match &error.kind {
        jsonschema::error::ValidationErrorKind::Required { property } => {
            let prop_str = property
                .as_str()
                .map(|s| s.to_string())
                .unwrap_or_else(|| property.to_string());
            format!("Missing required field: {} at {}", prop_str, path)
        }
        jsonschema::error::ValidationErrorKind::Type { kind } => {
            format!("Wrong type at {}: expected {:?}", path, kind)
        }
        jsonschema::error::ValidationErrorKind::Enum { options } => {
            format!(
                "Invalid value at {}: must be one of: {}",
                path,
                format_enum_options(options)
            )
        }
        jsonschema::error::ValidationErrorKind::Pattern { pattern } => {
            format!("Value at {} doesn't match pattern: {}", path, pattern)
        }
        jsonschema::error::ValidationErrorKind::Minimum { limit } => {
            format!("Value at {} is too small: minimum {}", path, limit)
        }
        jsonschema::error::ValidationErrorKind::Maximum { limit } => {
            format!("Value at {} is too large: maximum {}", path, limit)
        }
        jsonschema::error::ValidationErrorKind::AdditionalProperties { unexpected } => {
            format!("Unknown field(s) at {}: {}", path, unexpected.join(", "))
        }
        _ => {
            format!("Validation error at {}: {}", path, error)
        }
    }
}

/// Format enum options as a string
fn format_enum_options(options: &JsonValue) -> String {
    if let Some(arr) = options.as_array() {
        arr.iter()
            .map(|v| {
                v.as_str()
                    .map(|s| s.to_string())
                    .unwrap_or_else(|| v.to_string())
            })
            .collect::<Vec<_>>()
            .join(", ")
    } else {
        options.to_string()
    }
}

/// Generate a short hint for the error label
fn format_error_hint(error: &JsonSchemaError) -> String {
    match &error.kind {
        jsonschema::error::ValidationErrorKind::Required { .. } => {
            "required field missing".to_string()
        }
        jsonschema::error::ValidationErrorKind::Type { .. } => "wrong type".to_string(),
        jsonschema::error::ValidationErrorKind::Enum { .. } => "invalid value".to_string(),
        jsonschema::error::ValidationErrorKind::Pattern { .. } => "pattern mismatch".to_string(),
        jsonschema::error::ValidationErrorKind::AdditionalProperties { .. } => {
            "unknown field".to_string()
        }
        _ => "validation error".to_string(),
    }
}

/// Generate a help message with suggestions for fixing the error
fn generate_help_message(error: &JsonSchemaError) -> Option<String> {
    match &error.kind {
        jsonschema::error::ValidationErrorKind::Required { property } => {
            let prop_str = property
                .as_str()
                .map(|s| s.to_string())
                .unwrap_or_else(|| property.to_string());
            Some(format!("Add the '{}' field to your file", prop_str))
        }
        jsonschema::error::ValidationErrorKind::Enum { options } => {
            Some(format!("Valid values: {}", format_enum_options(options)))
        }
        jsonschema::error::ValidationErrorKind::Type { kind } => {
            Some(format!("Expected value of type: {:?}", kind))
        }
        jsonschema::error::ValidationErrorKind::AdditionalProperties { unexpected } => {
            if unexpected.len() == 1 {
                Some(format!(
                    "Remove the '{}' field or check spelling",
                    unexpected[0]
                ))
            } else {
                Some("Remove unknown fields or check spelling".to_string())
            }
        }
        _ => None,
    }
}

/// Find the span (byte offset, length) for an error location
fn find_error_span(content: &str, location: Option<serde_yml::Location>) -> SourceSpan {
    if let Some(loc) = location {
        let line = loc.line().saturating_sub(1);
        let column = loc.column().saturating_sub(1);

        let mut offset = 0;
        for (i, line_content) in content.lines().enumerate() {
            if i == line {
                offset += column;
                break;
            }
            offset += line_content.len() + 1;
        }

        let rest_of_content = &content[offset.min(content.len())..];
        let len = rest_of_content
            .find('\n')
            .unwrap_or(rest_of_content.len())
            .max(1);

        (offset, len).into()
    } else {
        let len = content.find('\n').unwrap_or(content.len()).max(1);
        (0, len).into()
    }
}

/// Find the span for a JSON path in YAML content
fn find_path_span(content: &str, json_path: &str) -> SourceSpan {
    let parts: Vec<&str> = json_path.split('/').filter(|s| !s.is_empty()).collect();

    if parts.is_empty() {
        let len = content.find('\n').unwrap_or(content.len()).max(1);
        return (0, len).into();
    }

    let search_key = parts.last().unwrap_or(&"");

    // Array indices point at their parent key
    if search_key.parse::<usize>().is_ok() {
        if parts.len() >= 2 {
            let parent_key = parts[parts.len() - 2];
            if let Some(span) = find_key_span(content, parent_key) {
                return span;
            }
        }
    }

    if let Some(span) = find_key_span(content, search_key) {
        return span;
    }

    let len = content.find('\n').unwrap_or(content.len()).max(1);
    (0, len).into()
}

/// Find the span of a key in YAML content
fn find_key_span(content: &str, key: &str) -> Option<SourceSpan> {
    let search_pattern = format!("{}:", key);

    let mut offset = 0;
    for line in content.lines() {
        let trimmed = line.trim_start();
        if trimmed.starts_with(&search_pattern) {
            let indent = line.len() - trimmed.len();
            let key_start = offset + indent;
            return Some((key_start, key.len() + 1).into());
        }
        offset += line.len() + 1;
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_facility_passes() {
        let validator = Validator::default();
        let content = r#"
facility_id: FAC-001
facility_name: Chicago Manufacturing Complex
city: Chicago
state_province: Illinois
country: USA
region: North America
facility_type: Manufacturing Plant
square_footage: 450000
employee_count: 1200
opened_date: 1998-03-15
"#;
        let result = validator.iter_errors(content, "FAC-001.eiq.yaml", RecordKind::Facility);
        assert!(result.is_ok());
    }

    #[test]
    fn test_missing_required_field_reported() {
        let validator = Validator::default();
        let content = "facility_id: FAC-001\n";
        let err = validator
            .iter_errors(content, "FAC-001.eiq.yaml", RecordKind::Facility)
            .unwrap_err();
        assert!(err.violation_count() >= 1);
    }

    #[test]
    fn test_invalid_enum_value_reported() {
        let validator = Validator::default();
        let content = r#"
contract_id: CTR-0001
manufacturer: Eaton Corporation
contract_type: Handshake Deal
start_date: 2024-01-01
end_date: 2026-12-31
annual_value_usd: 120000
sla_response_hours: 4
contract_status: Active
"#;
        let err = validator
            .iter_errors(content, "CTR-0001.eiq.yaml", RecordKind::Contract)
            .unwrap_err();
        assert!(err.violation_count() >= 1);
    }

    #[test]
    fn test_malformed_yaml_is_an_error() {
        let validator = Validator::default();
        let result = validator.iter_errors(": [ nope", "bad.eiq.yaml", RecordKind::Asset);
        assert!(result.is_err());
    }

    #[test]
    fn test_find_key_span_locates_key() {
        let content = "a: 1\n  nested: 2\n";
        let span = find_key_span(content, "nested").unwrap();
        assert_eq!(span.offset(), 7);
    }
}
