//! The maintenance-centric relation: same join base as the equipment
//! view, plus the per-asset work-order summary and the risk cascade.

use chrono::NaiveDate;
use serde::Serialize;

use crate::entities::{
    Asset, Certification, CertificationStatus, Contract, Facility, OperationalStatus, WorkOrder,
};
use crate::views::join::{CertificationIndex, ContractIndex, FacilityIndex};
use crate::views::risk::{classify_risk, RiskContext, RiskLevel};
use crate::views::status::{inspection_status, InspectionStatus};
use crate::views::workload::{summarize_by_asset, WorkOrderSummary};
use crate::views::round2;

/// Fixed hourly labor rate used for maintenance cost, in USD. Embedded
/// business constant, not configuration.
pub const HOURLY_LABOR_RATE_USD: f64 = 85.0;

/// One joined row of the maintenance view.
///
/// Work-order aggregate fields are flattened in with zero defaults, so an
/// asset with no history still carries a complete row of zeroes and null
/// dates rather than an absent summary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MaintenanceInsightsRow {
    pub asset_id: String,
    pub model_number: String,
    pub equipment_type: String,
    pub manufacturer: String,
    pub operational_status: OperationalStatus,
    pub purchase_price_usd: f64,

    pub facility_id: String,
    pub facility_name: String,
    pub city: String,
    pub region: String,

    pub certification_status: Option<CertificationStatus>,
    pub contract_id: Option<String>,

    pub next_inspection_due: Option<NaiveDate>,
    pub inspection_status: InspectionStatus,

    #[serde(flatten)]
    pub summary: WorkOrderSummary,

    /// `total_labor_hours * 85.0 + total_parts_cost_usd`, rounded to cents
    pub total_maintenance_cost_usd: f64,

    pub risk_level: RiskLevel,
}

/// Build the maintenance view from a snapshot of the record sets.
pub fn build_maintenance_insights(
    facilities: &[Facility],
    assets: &[Asset],
    work_orders: &[WorkOrder],
    certifications: &[Certification],
    contracts: &[Contract],
    as_of: NaiveDate,
) -> Vec<MaintenanceInsightsRow> {
    let facility_index = FacilityIndex::new(facilities);
    let cert_index = CertificationIndex::new(certifications);
    let contract_index = ContractIndex::new(contracts);
    let summaries = summarize_by_asset(work_orders);

    let mut rows = Vec::new();
    for asset in assets {
        let facility = match facility_index.get(&asset.facility_id) {
            Some(f) => f,
            None => continue,
        };

        let summary = summaries.get(&asset.asset_id).cloned().unwrap_or_default();

        let certs = cert_index.matches(&asset.manufacturer, &asset.equipment_type);
        let contracts = contract_index.matches(&asset.manufacturer);

        let cert_slots: Vec<Option<&Certification>> = if certs.is_empty() {
            vec![None]
        } else {
            certs.iter().map(|c| Some(*c)).collect()
        };
        let contract_slots: Vec<Option<&Contract>> = if contracts.is_empty() {
            vec![None]
        } else {
            contracts.iter().map(|c| Some(*c)).collect()
        };

        for cert in &cert_slots {
            for contract in &contract_slots {
                rows.push(make_row(asset, facility, *cert, *contract, &summary, as_of));
            }
        }
    }
    rows
}

fn make_row(
    asset: &Asset,
    facility: &Facility,
    cert: Option<&Certification>,
    contract: Option<&Contract>,
    summary: &WorkOrderSummary,
    as_of: NaiveDate,
) -> MaintenanceInsightsRow {
    let certification_status = cert.and_then(|c| c.certification_status);

    let risk_level = classify_risk(
        &RiskContext {
            certification_status,
            open_work_orders: summary.open_work_orders,
            next_inspection_due: asset.next_inspection_due,
            emergency_repairs: summary.emergency_repairs,
        },
        as_of,
    );

    MaintenanceInsightsRow {
        asset_id: asset.asset_id.clone(),
        model_number: asset.model_number.clone(),
        equipment_type: asset.equipment_type.clone(),
        manufacturer: asset.manufacturer.clone(),
        operational_status: asset.operational_status,
        purchase_price_usd: asset.purchase_price_usd,

        facility_id: facility.facility_id.clone(),
        facility_name: facility.facility_name.clone(),
        city: facility.city.clone(),
        region: facility.region.clone(),

        certification_status,
        contract_id: contract.map(|c| c.contract_id.clone()),

        next_inspection_due: asset.next_inspection_due,
        inspection_status: inspection_status(asset.next_inspection_due, as_of),

        total_maintenance_cost_usd: round2(
            summary.total_labor_hours * HOURLY_LABOR_RATE_USD + summary.total_parts_cost_usd,
        ),
        summary: summary.clone(),

        risk_level,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{
        FacilityType, WorkOrderPriority, WorkOrderStatus, WorkOrderType,
    };
    use chrono::Duration;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn facility(id: &str) -> Facility {
        Facility {
            facility_id: id.to_string(),
            facility_name: "Houston Energy Systems Plant".to_string(),
            city: "Houston".to_string(),
            state_province: "Texas".to_string(),
            country: "USA".to_string(),
            region: "North America".to_string(),
            facility_type: FacilityType::ManufacturingPlant,
            square_footage: 380_000,
            employee_count: 950,
            opened_date: day(2003, 7, 1),
        }
    }

    fn asset(id: &str, facility_id: &str) -> Asset {
        Asset {
            asset_id: id.to_string(),
            model_number: "VFD-2210-B7".to_string(),
            equipment_type: "Variable Frequency Drive".to_string(),
            equipment_type_code: "VFD".to_string(),
            manufacturer: "ABB Power Solutions".to_string(),
            facility_id: facility_id.to_string(),
            serial_number: "AB-2023-000042".to_string(),
            purchase_date: day(2023, 8, 10),
            purchase_price_usd: 9_800.0,
            warranty_expiration: Some(day(2026, 8, 10)),
            operational_status: OperationalStatus::Active,
            voltage_rating: "480V AC".to_string(),
            ip_rating: "IP55".to_string(),
            last_inspection_date: Some(day(2025, 10, 1)),
            next_inspection_due: Some(day(2026, 10, 1)),
            install_location: "Building C - Floor 1".to_string(),
        }
    }

    fn completed_wo(id: &str, asset_id: &str, labor: f64, parts: f64) -> WorkOrder {
        WorkOrder {
            work_order_id: id.to_string(),
            asset_id: asset_id.to_string(),
            work_order_type: WorkOrderType::CorrectiveRepair,
            priority: WorkOrderPriority::Medium,
            status: WorkOrderStatus::Completed,
            created_at: None,
            scheduled_date: None,
            completed_date: Some(day(2025, 6, 1)),
            technician: None,
            description: None,
            labor_hours: Some(labor),
            parts_cost_usd: Some(parts),
            downtime_hours: None,
        }
    }

    #[test]
    fn test_asset_without_work_orders_gets_zeroed_row() {
        let facilities = vec![facility("FAC-001")];
        let assets = vec![asset("AST-1", "FAC-001")];
        let rows =
            build_maintenance_insights(&facilities, &assets, &[], &[], &[], day(2026, 2, 17));
        assert_eq!(rows.len(), 1);
        let row = &rows[0];
        assert_eq!(row.summary.total_work_orders, 0);
        assert_eq!(row.summary.total_labor_hours, 0.0);
        assert_eq!(row.total_maintenance_cost_usd, 0.0);
        assert_eq!(row.summary.last_completed_wo, None);
        assert_eq!(row.summary.next_scheduled_wo, None);
        assert_eq!(row.risk_level, RiskLevel::Normal);
    }

    #[test]
    fn test_maintenance_cost_formula() {
        let facilities = vec![facility("FAC-001")];
        let assets = vec![asset("AST-1", "FAC-001")];
        let orders = vec![completed_wo("WO-1", "AST-1", 10.0, 200.0)];
        let rows =
            build_maintenance_insights(&facilities, &assets, &orders, &[], &[], day(2026, 2, 17));
        assert_eq!(rows[0].total_maintenance_cost_usd, 1050.0);
    }

    #[test]
    fn test_unresolved_facility_excluded() {
        let facilities = vec![facility("FAC-001")];
        let assets = vec![asset("AST-1", "FAC-404")];
        let rows =
            build_maintenance_insights(&facilities, &assets, &[], &[], &[], day(2026, 2, 17));
        assert!(rows.is_empty());
    }

    #[test]
    fn test_risk_uses_cert_and_open_work_orders() {
        let facilities = vec![facility("FAC-001")];
        let assets = vec![asset("AST-1", "FAC-001")];
        let mut open = completed_wo("WO-1", "AST-1", 1.0, 0.0);
        open.status = WorkOrderStatus::Open;
        let cert = Certification {
            source_file: "equipment_docs/cert.pdf".to_string(),
            manufacturer: "ABB Power Solutions".to_string(),
            equipment_type: "Variable Frequency Drive".to_string(),
            model_number: None,
            certification_id: Some("UL-2024-000009".to_string()),
            certification_status: Some(CertificationStatus::Conditional),
            safety_rating: None,
            material_type: None,
            weight_kg: None,
            voltage_rating: None,
            ip_rating: None,
            operating_temp_min_c: None,
            operating_temp_max_c: None,
            compliance_standards: None,
        };
        let rows = build_maintenance_insights(
            &facilities,
            &assets,
            &[open],
            &[cert],
            &[],
            day(2026, 2, 17),
        );
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].risk_level, RiskLevel::ConditionalWithOpenWork);
    }

    #[test]
    fn test_overdue_inspection_flagged_without_conditional_cert() {
        let as_of = day(2026, 2, 17);
        let facilities = vec![facility("FAC-001")];
        let mut a = asset("AST-1", "FAC-001");
        a.next_inspection_due = Some(as_of - Duration::days(30));
        let rows = build_maintenance_insights(&facilities, &[a], &[], &[], &[], as_of);
        assert_eq!(rows[0].inspection_status, InspectionStatus::Overdue);
        assert_eq!(rows[0].risk_level, RiskLevel::OverdueInspection);
    }

    #[test]
    fn test_idempotent_rebuild() {
        let facilities = vec![facility("FAC-001")];
        let assets = vec![asset("AST-1", "FAC-001")];
        let orders = vec![completed_wo("WO-1", "AST-1", 4.0, 55.5)];
        let as_of = day(2026, 2, 17);
        let first =
            build_maintenance_insights(&facilities, &assets, &orders, &[], &[], as_of);
        let second =
            build_maintenance_insights(&facilities, &assets, &orders, &[], &[], as_of);
        assert_eq!(first, second);
    }
}
