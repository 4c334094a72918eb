//! Join indexes over the record sets
//!
//! Built once per view construction and borrowed for its duration. The
//! facility index is unique (last record wins on duplicate ids); the
//! certification and contract indexes are multimaps, and lookups against
//! them fan out: every matching record yields an output row downstream.

use std::collections::HashMap;

use crate::entities::{Certification, Contract, Facility};

/// Unique index of facilities by `facility_id`.
///
/// Duplicate ids keep the last record seen, matching loader order. The
/// `validate --refs` pass reports duplicates; the index itself stays quiet.
pub struct FacilityIndex<'a> {
    by_id: HashMap<&'a str, &'a Facility>,
}

impl<'a> FacilityIndex<'a> {
    pub fn new(facilities: &'a [Facility]) -> Self {
        let mut by_id = HashMap::with_capacity(facilities.len());
        for facility in facilities {
            by_id.insert(facility.facility_id.as_str(), facility);
        }
        Self { by_id }
    }

    pub fn get(&self, facility_id: &str) -> Option<&'a Facility> {
        self.by_id.get(facility_id).copied()
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}

/// Multimap of certifications keyed by `(manufacturer, equipment_type)`.
///
/// There is no document-to-asset identity, so this is the only join the
/// certification set supports. Insertion order within a key follows input
/// order.
pub struct CertificationIndex<'a> {
    // Nested rather than tuple-keyed so lookups can use borrowed keys of
    // any lifetime at each level.
    by_manufacturer: HashMap<&'a str, HashMap<&'a str, Vec<&'a Certification>>>,
}

impl<'a> CertificationIndex<'a> {
    pub fn new(certifications: &'a [Certification]) -> Self {
        let mut by_manufacturer: HashMap<&'a str, HashMap<&'a str, Vec<&'a Certification>>> =
            HashMap::new();
        for cert in certifications {
            let (manufacturer, equipment_type) = cert.join_key();
            by_manufacturer
                .entry(manufacturer)
                .or_default()
                .entry(equipment_type)
                .or_default()
                .push(cert);
        }
        Self { by_manufacturer }
    }

    /// All certifications matching an asset's manufacturer and equipment
    /// type. Empty slice when none match.
    pub fn matches(&self, manufacturer: &str, equipment_type: &str) -> &[&'a Certification] {
        self.by_manufacturer
            .get(manufacturer)
            .and_then(|types| types.get(equipment_type))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

/// Multimap of contracts keyed by manufacturer.
pub struct ContractIndex<'a> {
    by_manufacturer: HashMap<&'a str, Vec<&'a Contract>>,
}

impl<'a> ContractIndex<'a> {
    pub fn new(contracts: &'a [Contract]) -> Self {
        let mut by_manufacturer: HashMap<&'a str, Vec<&'a Contract>> = HashMap::new();
        for contract in contracts {
            by_manufacturer
                .entry(contract.manufacturer.as_str())
                .or_default()
                .push(contract);
        }
        Self { by_manufacturer }
    }

    /// All contracts with an asset's manufacturer. Empty slice when none.
    pub fn matches(&self, manufacturer: &str) -> &[&'a Contract] {
        self.by_manufacturer
            .get(manufacturer)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{ContractStatus, ContractType, FacilityType};
    use chrono::NaiveDate;

    fn facility(id: &str, name: &str) -> Facility {
        Facility {
            facility_id: id.to_string(),
            facility_name: name.to_string(),
            city: "Chicago".to_string(),
            state_province: "Illinois".to_string(),
            country: "USA".to_string(),
            region: "North America".to_string(),
            facility_type: FacilityType::ManufacturingPlant,
            square_footage: 450_000,
            employee_count: 1200,
            opened_date: NaiveDate::from_ymd_opt(1998, 3, 15).unwrap(),
        }
    }

    fn cert(manufacturer: &str, equipment_type: &str, source: &str) -> Certification {
        Certification {
            source_file: source.to_string(),
            manufacturer: manufacturer.to_string(),
            equipment_type: equipment_type.to_string(),
            model_number: None,
            certification_id: None,
            certification_status: None,
            safety_rating: None,
            material_type: None,
            weight_kg: None,
            voltage_rating: None,
            ip_rating: None,
            operating_temp_min_c: None,
            operating_temp_max_c: None,
            compliance_standards: None,
        }
    }

    fn contract(id: &str, manufacturer: &str) -> Contract {
        Contract {
            contract_id: id.to_string(),
            manufacturer: manufacturer.to_string(),
            contract_type: ContractType::ServiceAgreement,
            start_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2026, 12, 31).unwrap(),
            annual_value_usd: 120_000.0,
            sla_response_hours: 4,
            contract_status: ContractStatus::Active,
            primary_contact: None,
            contact_email: None,
        }
    }

    #[test]
    fn test_facility_duplicates_last_wins() {
        let facilities = vec![
            facility("FAC-001", "Old Name"),
            facility("FAC-001", "New Name"),
        ];
        let index = FacilityIndex::new(&facilities);
        assert_eq!(index.len(), 1);
        assert_eq!(index.get("FAC-001").unwrap().facility_name, "New Name");
        assert!(index.get("FAC-999").is_none());
    }

    #[test]
    fn test_certification_fan_out() {
        let certs = vec![
            cert("Siemens Industrial Systems", "Industrial Motor Controller", "a.pdf"),
            cert("Siemens Industrial Systems", "Industrial Motor Controller", "b.pdf"),
            cert("ABB Power Solutions", "Industrial Motor Controller", "c.pdf"),
        ];
        let index = CertificationIndex::new(&certs);
        let hits = index.matches("Siemens Industrial Systems", "Industrial Motor Controller");
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].source_file, "a.pdf");
        assert!(index
            .matches("Siemens Industrial Systems", "Power Distribution Unit")
            .is_empty());
    }

    #[test]
    fn test_certification_lookup_with_owned_keys() {
        // Lookup keys built on the fly must not need to outlive the index.
        let certs = vec![cert(
            "Siemens Industrial Systems",
            "Industrial Motor Controller",
            "a.pdf",
        )];
        let index = CertificationIndex::new(&certs);

        let manufacturer = "Siemens Industrial Systems".to_string();
        let equipment_type = "Industrial Motor Controller".to_string();
        let hits = index.matches(&manufacturer, &equipment_type);
        drop(manufacturer);
        drop(equipment_type);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].source_file, "a.pdf");
    }

    #[test]
    fn test_contract_lookup() {
        let contracts = vec![
            contract("CTR-0001", "Eaton Corporation"),
            contract("CTR-0002", "Eaton Corporation"),
        ];
        let index = ContractIndex::new(&contracts);
        assert_eq!(index.matches("Eaton Corporation").len(), 2);
        assert!(index.matches("GE Industrial").is_empty());
    }
}
