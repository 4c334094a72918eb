//! Equipment inventory record type

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Operational state of a deployed asset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[derive(Default)]
pub enum OperationalStatus {
    #[default]
    Active,
    #[serde(rename = "Under Maintenance")]
    UnderMaintenance,
    Standby,
    Decommissioned,
}

impl std::fmt::Display for OperationalStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OperationalStatus::Active => write!(f, "Active"),
            OperationalStatus::UnderMaintenance => write!(f, "Under Maintenance"),
            OperationalStatus::Standby => write!(f, "Standby"),
            OperationalStatus::Decommissioned => write!(f, "Decommissioned"),
        }
    }
}

impl std::str::FromStr for OperationalStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Active" => Ok(OperationalStatus::Active),
            "Under Maintenance" => Ok(OperationalStatus::UnderMaintenance),
            "Standby" => Ok(OperationalStatus::Standby),
            "Decommissioned" => Ok(OperationalStatus::Decommissioned),
            _ => Err(format!("Unknown operational status: {}", s)),
        }
    }
}

/// An equipment inventory record.
///
/// `facility_id` must resolve to exactly one [`Facility`]; assets whose
/// facility cannot be resolved are dropped from the derived views entirely
/// (inner-join semantics), never null-padded.
///
/// [`Facility`]: crate::entities::Facility
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Asset {
    /// Unique identifier (e.g. "AST-000001")
    pub asset_id: String,

    pub model_number: String,

    /// Equipment category (e.g. "Programmable Logic Controller")
    pub equipment_type: String,

    /// Short type code (e.g. "PLC")
    pub equipment_type_code: String,

    pub manufacturer: String,

    /// Owning facility (foreign key, required)
    pub facility_id: String,

    pub serial_number: String,

    pub purchase_date: NaiveDate,
    pub purchase_price_usd: f64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warranty_expiration: Option<NaiveDate>,

    #[serde(default)]
    pub operational_status: OperationalStatus,

    pub voltage_rating: String,
    pub ip_rating: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_inspection_date: Option<NaiveDate>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_inspection_due: Option<NaiveDate>,

    pub install_location: String,
}
