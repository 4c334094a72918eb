//! Embedded schema registry
//!
//! The JSON Schemas ship inside the binary so validation works without a
//! network or any project-local schema files.

use rust_embed::RustEmbed;

use crate::core::RecordKind;

#[derive(RustEmbed)]
#[folder = "schemas/"]
struct EmbeddedSchemas;

/// Lookup of embedded JSON Schemas by record kind
#[derive(Debug, Default)]
pub struct SchemaRegistry;

impl SchemaRegistry {
    pub fn new() -> Self {
        Self
    }

    fn file_name(kind: RecordKind) -> &'static str {
        match kind {
            RecordKind::Facility => "facility.schema.json",
            RecordKind::Asset => "asset.schema.json",
            RecordKind::WorkOrder => "work_order.schema.json",
            RecordKind::Contract => "contract.schema.json",
            RecordKind::Certification => "certification.schema.json",
        }
    }

    /// Get the schema source for a record kind
    pub fn get(&self, kind: RecordKind) -> Option<String> {
        let file = EmbeddedSchemas::get(Self::file_name(kind))?;
        String::from_utf8(file.data.into_owned()).ok()
    }
}
