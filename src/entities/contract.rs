//! Manufacturer contract record type

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Contract coverage classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContractType {
    #[serde(rename = "Service Agreement")]
    ServiceAgreement,
    #[serde(rename = "Parts Supply")]
    PartsSupply,
    #[serde(rename = "Extended Warranty")]
    ExtendedWarranty,
}

impl std::fmt::Display for ContractType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ContractType::ServiceAgreement => write!(f, "Service Agreement"),
            ContractType::PartsSupply => write!(f, "Parts Supply"),
            ContractType::ExtendedWarranty => write!(f, "Extended Warranty"),
        }
    }
}

impl std::str::FromStr for ContractType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Service Agreement" => Ok(ContractType::ServiceAgreement),
            "Parts Supply" => Ok(ContractType::PartsSupply),
            "Extended Warranty" => Ok(ContractType::ExtendedWarranty),
            _ => Err(format!("Unknown contract type: {}", s)),
        }
    }
}

/// Contract lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContractStatus {
    Active,
    #[serde(rename = "Expiring Soon")]
    ExpiringSoon,
    Expired,
}

impl std::fmt::Display for ContractStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ContractStatus::Active => write!(f, "Active"),
            ContractStatus::ExpiringSoon => write!(f, "Expiring Soon"),
            ContractStatus::Expired => write!(f, "Expired"),
        }
    }
}

impl std::str::FromStr for ContractStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Active" => Ok(ContractStatus::Active),
            "Expiring Soon" => Ok(ContractStatus::ExpiringSoon),
            "Expired" => Ok(ContractStatus::Expired),
            _ => Err(format!("Unknown contract status: {}", s)),
        }
    }
}

/// A supplier agreement with one manufacturer.
///
/// `manufacturer` is not unique: the model intends at most one active
/// contract per manufacturer but does not enforce it, and the asset join is
/// on manufacturer name alone, so duplicate rows fan out downstream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contract {
    /// Unique identifier (e.g. "CTR-0001")
    pub contract_id: String,

    pub manufacturer: String,

    pub contract_type: ContractType,

    pub start_date: NaiveDate,
    pub end_date: NaiveDate,

    pub annual_value_usd: f64,

    /// Contractual response SLA in hours
    pub sla_response_hours: u32,

    pub contract_status: ContractStatus,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_contact: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_email: Option<String>,
}
