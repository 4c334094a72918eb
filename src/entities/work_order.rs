//! Work order record type

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Maintenance activity classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorkOrderType {
    #[serde(rename = "Preventive Maintenance")]
    PreventiveMaintenance,
    #[serde(rename = "Corrective Repair")]
    CorrectiveRepair,
    Inspection,
    Calibration,
    #[serde(rename = "Emergency Repair")]
    EmergencyRepair,
}

impl std::fmt::Display for WorkOrderType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WorkOrderType::PreventiveMaintenance => write!(f, "Preventive Maintenance"),
            WorkOrderType::CorrectiveRepair => write!(f, "Corrective Repair"),
            WorkOrderType::Inspection => write!(f, "Inspection"),
            WorkOrderType::Calibration => write!(f, "Calibration"),
            WorkOrderType::EmergencyRepair => write!(f, "Emergency Repair"),
        }
    }
}

impl std::str::FromStr for WorkOrderType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Preventive Maintenance" => Ok(WorkOrderType::PreventiveMaintenance),
            "Corrective Repair" => Ok(WorkOrderType::CorrectiveRepair),
            "Inspection" => Ok(WorkOrderType::Inspection),
            "Calibration" => Ok(WorkOrderType::Calibration),
            "Emergency Repair" => Ok(WorkOrderType::EmergencyRepair),
            _ => Err(format!("Unknown work order type: {}", s)),
        }
    }
}

/// Work order priority
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[derive(Default)]
pub enum WorkOrderPriority {
    Low,
    #[default]
    Medium,
    High,
    Critical,
}

impl std::fmt::Display for WorkOrderPriority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WorkOrderPriority::Low => write!(f, "Low"),
            WorkOrderPriority::Medium => write!(f, "Medium"),
            WorkOrderPriority::High => write!(f, "High"),
            WorkOrderPriority::Critical => write!(f, "Critical"),
        }
    }
}

impl std::str::FromStr for WorkOrderPriority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Low" => Ok(WorkOrderPriority::Low),
            "Medium" => Ok(WorkOrderPriority::Medium),
            "High" => Ok(WorkOrderPriority::High),
            "Critical" => Ok(WorkOrderPriority::Critical),
            _ => Err(format!("Unknown priority: {}", s)),
        }
    }
}

/// Work order lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[derive(Default)]
pub enum WorkOrderStatus {
    #[default]
    Open,
    #[serde(rename = "In Progress")]
    InProgress,
    Completed,
    Cancelled,
}

impl WorkOrderStatus {
    /// Open and In Progress both count as outstanding work.
    pub fn is_open(self) -> bool {
        matches!(self, WorkOrderStatus::Open | WorkOrderStatus::InProgress)
    }
}

impl std::fmt::Display for WorkOrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WorkOrderStatus::Open => write!(f, "Open"),
            WorkOrderStatus::InProgress => write!(f, "In Progress"),
            WorkOrderStatus::Completed => write!(f, "Completed"),
            WorkOrderStatus::Cancelled => write!(f, "Cancelled"),
        }
    }
}

impl std::str::FromStr for WorkOrderStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Open" => Ok(WorkOrderStatus::Open),
            "In Progress" => Ok(WorkOrderStatus::InProgress),
            "Completed" => Ok(WorkOrderStatus::Completed),
            "Cancelled" => Ok(WorkOrderStatus::Cancelled),
            _ => Err(format!("Unknown work order status: {}", s)),
        }
    }
}

/// A maintenance or service event against a single asset.
///
/// Many-to-one with [`Asset`]; an asset may have zero work orders, in which
/// case downstream aggregates default every field to zero/None.
///
/// [`Asset`]: crate::entities::Asset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkOrder {
    /// Unique identifier (e.g. "WO-000001")
    pub work_order_id: String,

    /// Owning asset (foreign key, required)
    pub asset_id: String,

    pub work_order_type: WorkOrderType,

    #[serde(default)]
    pub priority: WorkOrderPriority,

    #[serde(default)]
    pub status: WorkOrderStatus,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scheduled_date: Option<NaiveDate>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_date: Option<NaiveDate>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub technician: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub labor_hours: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parts_cost_usd: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub downtime_hours: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_work_order_roundtrip() {
        let wo = WorkOrder {
            work_order_id: "WO-000042".to_string(),
            asset_id: "AST-000001".to_string(),
            work_order_type: WorkOrderType::EmergencyRepair,
            priority: WorkOrderPriority::Critical,
            status: WorkOrderStatus::Completed,
            created_at: None,
            scheduled_date: NaiveDate::from_ymd_opt(2025, 4, 2),
            completed_date: NaiveDate::from_ymd_opt(2025, 4, 3),
            technician: Some("Sarah Chen".to_string()),
            description: Some("Unit tripped on ground fault".to_string()),
            labor_hours: Some(6.5),
            parts_cost_usd: Some(1320.4),
            downtime_hours: Some(4.0),
        };

        let yaml = serde_yml::to_string(&wo).unwrap();
        assert!(yaml.contains("work_order_type: Emergency Repair"));
        let parsed: WorkOrder = serde_yml::from_str(&yaml).unwrap();
        assert_eq!(wo, parsed);
    }

    #[test]
    fn test_in_progress_counts_as_open() {
        assert!(WorkOrderStatus::Open.is_open());
        assert!(WorkOrderStatus::InProgress.is_open());
        assert!(!WorkOrderStatus::Completed.is_open());
        assert!(!WorkOrderStatus::Cancelled.is_open());
    }
}
