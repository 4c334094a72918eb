//! Facility record type

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Facility classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FacilityType {
    #[serde(rename = "Manufacturing Plant")]
    ManufacturingPlant,
    #[serde(rename = "Distribution Center")]
    DistributionCenter,
    #[serde(rename = "R&D Laboratory")]
    RdLaboratory,
}

impl std::fmt::Display for FacilityType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FacilityType::ManufacturingPlant => write!(f, "Manufacturing Plant"),
            FacilityType::DistributionCenter => write!(f, "Distribution Center"),
            FacilityType::RdLaboratory => write!(f, "R&D Laboratory"),
        }
    }
}

impl std::str::FromStr for FacilityType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Manufacturing Plant" => Ok(FacilityType::ManufacturingPlant),
            "Distribution Center" => Ok(FacilityType::DistributionCenter),
            "R&D Laboratory" => Ok(FacilityType::RdLaboratory),
            _ => Err(format!("Unknown facility type: {}", s)),
        }
    }
}

/// A plant, distribution center, or lab where equipment is deployed.
///
/// Immutable reference data: created by ingestion, never mutated by the
/// view builders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Facility {
    /// Unique identifier (e.g. "FAC-001")
    pub facility_id: String,

    /// Display name
    pub facility_name: String,

    pub city: String,
    pub state_province: String,
    pub country: String,

    /// Geographic region (North America, EMEA, APAC)
    pub region: String,

    pub facility_type: FacilityType,

    pub square_footage: u32,
    pub employee_count: u32,

    pub opened_date: NaiveDate,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Facility {
        Facility {
            facility_id: "FAC-001".to_string(),
            facility_name: "Chicago Manufacturing Complex".to_string(),
            city: "Chicago".to_string(),
            state_province: "IL".to_string(),
            country: "United States".to_string(),
            region: "North America".to_string(),
            facility_type: FacilityType::ManufacturingPlant,
            square_footage: 285_000,
            employee_count: 1420,
            opened_date: NaiveDate::from_ymd_opt(1998, 3, 15).unwrap(),
        }
    }

    #[test]
    fn test_facility_roundtrip() {
        let facility = sample();
        let yaml = serde_yml::to_string(&facility).unwrap();
        let parsed: Facility = serde_yml::from_str(&yaml).unwrap();
        assert_eq!(facility, parsed);
    }

    #[test]
    fn test_facility_type_serializes_with_spaces() {
        let yaml = serde_yml::to_string(&sample()).unwrap();
        assert!(yaml.contains("facility_type: Manufacturing Plant"));
    }
}
