//! Schema system - embedded JSON Schemas and record validation

pub mod registry;
pub mod validator;

pub use registry::SchemaRegistry;
pub use validator::{ValidationError, ValidationResult, Validator};
