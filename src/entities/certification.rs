//! Certification record type - structured fields extracted from
//! certification report documents by an external extraction pipeline.

use serde::{Deserialize, Serialize};

/// Certification outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CertificationStatus {
    #[serde(rename = "PASS")]
    Pass,
    #[serde(rename = "CONDITIONAL")]
    Conditional,
}

impl std::fmt::Display for CertificationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CertificationStatus::Pass => write!(f, "PASS"),
            CertificationStatus::Conditional => write!(f, "CONDITIONAL"),
        }
    }
}

impl std::str::FromStr for CertificationStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PASS" => Ok(CertificationStatus::Pass),
            "CONDITIONAL" => Ok(CertificationStatus::Conditional),
            _ => Err(format!("Unknown certification status: {}", s)),
        }
    }
}

/// One extracted certification report.
///
/// Keyed by the source document path, one record per document. There is no
/// document-to-asset identity mapping, so inventory joins use the composite
/// `(manufacturer, equipment_type)` - a deliberately lossy key that may
/// attach zero, one, or many certifications to an asset (and one
/// certification to many assets). Everything beyond the join key is
/// nullable: extraction may fail per-field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Certification {
    /// Path of the source document this record was extracted from
    pub source_file: String,

    pub manufacturer: String,
    pub equipment_type: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_number: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub certification_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub certification_status: Option<CertificationStatus>,

    /// Safety standard (e.g. "UL 508A")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub safety_rating: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub material_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight_kg: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub voltage_rating: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ip_rating: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operating_temp_min_c: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operating_temp_max_c: Option<f64>,

    /// Comma-separated list as it appears on the report
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compliance_standards: Option<String>,
}

impl Certification {
    /// The composite join key used to attach this record to inventory.
    pub fn join_key(&self) -> (&str, &str) {
        (self.manufacturer.as_str(), self.equipment_type.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_certification_roundtrip() {
        let cert = Certification {
            source_file: "equipment_docs/cert_UL-2024-018452.pdf".to_string(),
            manufacturer: "Siemens Industrial Systems".to_string(),
            equipment_type: "Programmable Logic Controller".to_string(),
            model_number: Some("PLC-4821-C3".to_string()),
            certification_id: Some("UL-2024-018452".to_string()),
            certification_status: Some(CertificationStatus::Conditional),
            safety_rating: Some("UL 508A".to_string()),
            material_type: Some("Galvanized Steel".to_string()),
            weight_kg: Some(18.4),
            voltage_rating: Some("480V AC".to_string()),
            ip_rating: Some("IP54".to_string()),
            operating_temp_min_c: Some(-10.0),
            operating_temp_max_c: Some(55.0),
            compliance_standards: Some("IEC 61131-2, NFPA 79, CSA C22.2".to_string()),
        };

        let yaml = serde_yml::to_string(&cert).unwrap();
        assert!(yaml.contains("certification_status: CONDITIONAL"));
        let parsed: Certification = serde_yml::from_str(&yaml).unwrap();
        assert_eq!(cert, parsed);
    }

    #[test]
    fn test_sparse_extraction_deserializes() {
        let yaml = r#"
source_file: equipment_docs/cert_unreadable.pdf
manufacturer: Eaton Corporation
equipment_type: Circuit Breaker Assembly
"#;
        let cert: Certification = serde_yml::from_str(yaml).unwrap();
        assert!(cert.certification_status.is_none());
        assert!(cert.weight_kg.is_none());
        assert_eq!(
            cert.join_key(),
            ("Eaton Corporation", "Circuit Breaker Assembly")
        );
    }
}
