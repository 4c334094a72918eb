//! Per-asset work-order aggregation

use std::collections::HashMap;

use chrono::NaiveDate;
use serde::Serialize;

use crate::entities::{WorkOrder, WorkOrderPriority, WorkOrderStatus, WorkOrderType};
use crate::views::{round1, round2};

/// Lifetime maintenance summary for one asset.
///
/// Produced only for assets that appear in the work-order set; consumers
/// supply `WorkOrderSummary::default()` for assets with no history, which
/// zeroes every count/sum and leaves both dates unset.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct WorkOrderSummary {
    pub total_work_orders: u32,
    pub completed_work_orders: u32,
    /// Status Open or In Progress
    pub open_work_orders: u32,

    pub emergency_repairs: u32,
    pub corrective_repairs: u32,
    pub preventive_maintenance_count: u32,

    pub total_labor_hours: f64,
    pub total_parts_cost_usd: f64,
    pub total_downtime_hours: f64,
    /// Mean labor hours over every work order in the group, missing
    /// hours contributing 0.
    pub avg_labor_hours_per_wo: f64,

    /// Latest completion date among Completed work orders
    pub last_completed_wo: Option<NaiveDate>,
    /// Earliest scheduled date among work orders with status Open.
    /// In Progress rows are excluded here, asymmetric with
    /// `open_work_orders` - they are already underway, not awaiting a slot.
    pub next_scheduled_wo: Option<NaiveDate>,

    pub critical_priority_count: u32,
    pub high_priority_count: u32,
}

/// Group the full work-order set by `asset_id` and summarize each group.
pub fn summarize_by_asset(work_orders: &[WorkOrder]) -> HashMap<String, WorkOrderSummary> {
    let mut groups: HashMap<&str, Vec<&WorkOrder>> = HashMap::new();
    for wo in work_orders {
        groups.entry(wo.asset_id.as_str()).or_default().push(wo);
    }

    groups
        .into_iter()
        .map(|(asset_id, group)| (asset_id.to_string(), summarize(&group)))
        .collect()
}

fn summarize(group: &[&WorkOrder]) -> WorkOrderSummary {
    let mut summary = WorkOrderSummary::default();
    let mut labor_sum = 0.0;
    let mut parts_sum = 0.0;
    let mut downtime_sum = 0.0;

    for wo in group {
        summary.total_work_orders += 1;

        match wo.status {
            WorkOrderStatus::Completed => {
                summary.completed_work_orders += 1;
                if let Some(date) = wo.completed_date {
                    summary.last_completed_wo = Some(match summary.last_completed_wo {
                        Some(latest) => latest.max(date),
                        None => date,
                    });
                }
            }
            WorkOrderStatus::Open => {
                summary.open_work_orders += 1;
                if let Some(date) = wo.scheduled_date {
                    summary.next_scheduled_wo = Some(match summary.next_scheduled_wo {
                        Some(earliest) => earliest.min(date),
                        None => date,
                    });
                }
            }
            WorkOrderStatus::InProgress => summary.open_work_orders += 1,
            WorkOrderStatus::Cancelled => {}
        }

        match wo.work_order_type {
            WorkOrderType::EmergencyRepair => summary.emergency_repairs += 1,
            WorkOrderType::CorrectiveRepair => summary.corrective_repairs += 1,
            WorkOrderType::PreventiveMaintenance => summary.preventive_maintenance_count += 1,
            // Inspection and Calibration count toward none of the three
            WorkOrderType::Inspection | WorkOrderType::Calibration => {}
        }

        match wo.priority {
            WorkOrderPriority::Critical => summary.critical_priority_count += 1,
            WorkOrderPriority::High => summary.high_priority_count += 1,
            _ => {}
        }

        labor_sum += wo.labor_hours.unwrap_or(0.0);
        parts_sum += wo.parts_cost_usd.unwrap_or(0.0);
        downtime_sum += wo.downtime_hours.unwrap_or(0.0);
    }

    summary.total_labor_hours = round1(labor_sum);
    summary.total_parts_cost_usd = round2(parts_sum);
    summary.total_downtime_hours = round1(downtime_sum);
    summary.avg_labor_hours_per_wo = if summary.total_work_orders > 0 {
        round1(labor_sum / summary.total_work_orders as f64)
    } else {
        0.0
    };

    summary
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn wo(
        id: &str,
        asset: &str,
        wo_type: WorkOrderType,
        priority: WorkOrderPriority,
        status: WorkOrderStatus,
    ) -> WorkOrder {
        WorkOrder {
            work_order_id: id.to_string(),
            asset_id: asset.to_string(),
            work_order_type: wo_type,
            priority,
            status,
            created_at: None,
            scheduled_date: None,
            completed_date: None,
            technician: None,
            description: None,
            labor_hours: None,
            parts_cost_usd: None,
            downtime_hours: None,
        }
    }

    #[test]
    fn test_counts_by_status_type_and_priority() {
        let orders = vec![
            wo(
                "WO-1",
                "AST-1",
                WorkOrderType::EmergencyRepair,
                WorkOrderPriority::Critical,
                WorkOrderStatus::Completed,
            ),
            wo(
                "WO-2",
                "AST-1",
                WorkOrderType::CorrectiveRepair,
                WorkOrderPriority::High,
                WorkOrderStatus::Open,
            ),
            wo(
                "WO-3",
                "AST-1",
                WorkOrderType::PreventiveMaintenance,
                WorkOrderPriority::Medium,
                WorkOrderStatus::InProgress,
            ),
            wo(
                "WO-4",
                "AST-1",
                WorkOrderType::Inspection,
                WorkOrderPriority::Low,
                WorkOrderStatus::Cancelled,
            ),
        ];

        let summaries = summarize_by_asset(&orders);
        let s = &summaries["AST-1"];
        assert_eq!(s.total_work_orders, 4);
        assert_eq!(s.completed_work_orders, 1);
        assert_eq!(s.open_work_orders, 2);
        assert_eq!(s.emergency_repairs, 1);
        assert_eq!(s.corrective_repairs, 1);
        assert_eq!(s.preventive_maintenance_count, 1);
        assert_eq!(s.critical_priority_count, 1);
        assert_eq!(s.high_priority_count, 1);
    }

    #[test]
    fn test_sums_treat_missing_as_zero_and_round() {
        let mut a = wo(
            "WO-1",
            "AST-1",
            WorkOrderType::CorrectiveRepair,
            WorkOrderPriority::Medium,
            WorkOrderStatus::Completed,
        );
        a.labor_hours = Some(2.25);
        a.parts_cost_usd = Some(100.555);
        a.downtime_hours = Some(1.0);
        let b = wo(
            "WO-2",
            "AST-1",
            WorkOrderType::Inspection,
            WorkOrderPriority::Low,
            WorkOrderStatus::Open,
        );

        let summaries = summarize_by_asset(&[a, b]);
        let s = &summaries["AST-1"];
        assert_eq!(s.total_labor_hours, 2.3);
        assert_eq!(s.total_parts_cost_usd, 100.56);
        assert_eq!(s.total_downtime_hours, 1.0);
        // Mean over both rows, the second contributing 0: 2.25 / 2
        assert_eq!(s.avg_labor_hours_per_wo, 1.1);
    }

    #[test]
    fn test_last_completed_and_next_scheduled() {
        let mut a = wo(
            "WO-1",
            "AST-1",
            WorkOrderType::PreventiveMaintenance,
            WorkOrderPriority::Medium,
            WorkOrderStatus::Completed,
        );
        a.completed_date = Some(day(2025, 6, 1));
        let mut b = wo(
            "WO-2",
            "AST-1",
            WorkOrderType::PreventiveMaintenance,
            WorkOrderPriority::Medium,
            WorkOrderStatus::Completed,
        );
        b.completed_date = Some(day(2025, 9, 15));
        let mut c = wo(
            "WO-3",
            "AST-1",
            WorkOrderType::Inspection,
            WorkOrderPriority::Low,
            WorkOrderStatus::Open,
        );
        c.scheduled_date = Some(day(2026, 3, 10));
        let mut d = wo(
            "WO-4",
            "AST-1",
            WorkOrderType::Inspection,
            WorkOrderPriority::Low,
            WorkOrderStatus::Open,
        );
        d.scheduled_date = Some(day(2026, 3, 2));

        let summaries = summarize_by_asset(&[a, b, c, d]);
        let s = &summaries["AST-1"];
        assert_eq!(s.last_completed_wo, Some(day(2025, 9, 15)));
        assert_eq!(s.next_scheduled_wo, Some(day(2026, 3, 2)));
    }

    #[test]
    fn test_in_progress_excluded_from_next_scheduled() {
        let mut a = wo(
            "WO-1",
            "AST-1",
            WorkOrderType::CorrectiveRepair,
            WorkOrderPriority::High,
            WorkOrderStatus::InProgress,
        );
        a.scheduled_date = Some(day(2026, 1, 5));

        let summaries = summarize_by_asset(&[a]);
        let s = &summaries["AST-1"];
        assert_eq!(s.open_work_orders, 1);
        assert_eq!(s.next_scheduled_wo, None);
    }

    #[test]
    fn test_asset_without_work_orders_gets_no_row() {
        let orders = vec![wo(
            "WO-1",
            "AST-1",
            WorkOrderType::Calibration,
            WorkOrderPriority::Low,
            WorkOrderStatus::Completed,
        )];
        let summaries = summarize_by_asset(&orders);
        assert!(summaries.contains_key("AST-1"));
        assert!(!summaries.contains_key("AST-2"));
    }
}
