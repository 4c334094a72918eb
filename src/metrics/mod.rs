//! Declarative dimension/measure catalog over the derived views
//!
//! The equipment and maintenance relations are joined on `asset_id` into
//! one unified relation; every dimension is a field projection over it and
//! every measure a pure aggregate expression. Consumers asking for a named
//! metric get the same expression evaluated identically regardless of
//! caller. The catalog holds no state and no cache.

use std::collections::{BTreeMap, HashMap, HashSet};

use crate::views::{round1, round2, Equipment360Row, MaintenanceInsightsRow};

/// One row of the unified relation: an equipment row plus its maintenance
/// counterpart, absent when the maintenance view produced no row for the
/// asset (left join).
#[derive(Debug, Clone, Copy)]
pub struct UnifiedRow<'a> {
    pub equipment: &'a Equipment360Row,
    pub maintenance: Option<&'a MaintenanceInsightsRow>,
}

/// Join the two views on `asset_id`.
///
/// Both sides may already carry fan-out from the certification and
/// contract joins; the unified relation multiplies accordingly, exactly as
/// a relational join would. Output order follows equipment input order.
pub fn unify<'a>(
    equipment: &'a [Equipment360Row],
    maintenance: &'a [MaintenanceInsightsRow],
) -> Vec<UnifiedRow<'a>> {
    let mut by_asset: HashMap<&str, Vec<&MaintenanceInsightsRow>> = HashMap::new();
    for row in maintenance {
        by_asset.entry(row.asset_id.as_str()).or_default().push(row);
    }

    let mut unified = Vec::new();
    for eq in equipment {
        match by_asset.get(eq.asset_id.as_str()) {
            Some(matches) => {
                for m in matches {
                    unified.push(UnifiedRow {
                        equipment: eq,
                        maintenance: Some(m),
                    });
                }
            }
            None => unified.push(UnifiedRow {
                equipment: eq,
                maintenance: None,
            }),
        }
    }
    unified
}

/// A field projection over the unified relation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dimension {
    EquipmentType,
    Manufacturer,
    VoltageRating,
    CertificationStatus,
    CertifiedIpRating,
    SafetyRating,
    MaterialType,
    ComplianceStandards,
    FacilityName,
    City,
    Region,
    FacilityType,
    OperationalStatus,
    WarrantyStatus,
    InspectionStatus,
    ContractStatus,
    RiskLevel,
}

impl Dimension {
    pub const ALL: &'static [Dimension] = &[
        Dimension::EquipmentType,
        Dimension::Manufacturer,
        Dimension::VoltageRating,
        Dimension::CertificationStatus,
        Dimension::CertifiedIpRating,
        Dimension::SafetyRating,
        Dimension::MaterialType,
        Dimension::ComplianceStandards,
        Dimension::FacilityName,
        Dimension::City,
        Dimension::Region,
        Dimension::FacilityType,
        Dimension::OperationalStatus,
        Dimension::WarrantyStatus,
        Dimension::InspectionStatus,
        Dimension::ContractStatus,
        Dimension::RiskLevel,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Dimension::EquipmentType => "Equipment Type",
            Dimension::Manufacturer => "Manufacturer",
            Dimension::VoltageRating => "Voltage Rating",
            Dimension::CertificationStatus => "Certification Status",
            Dimension::CertifiedIpRating => "Certified IP Rating",
            Dimension::SafetyRating => "Safety Rating",
            Dimension::MaterialType => "Material Type",
            Dimension::ComplianceStandards => "Compliance Standards",
            Dimension::FacilityName => "Facility Name",
            Dimension::City => "City",
            Dimension::Region => "Region",
            Dimension::FacilityType => "Facility Type",
            Dimension::OperationalStatus => "Operational Status",
            Dimension::WarrantyStatus => "Warranty Status",
            Dimension::InspectionStatus => "Inspection Status",
            Dimension::ContractStatus => "Contract Status",
            Dimension::RiskLevel => "Risk Level",
        }
    }

    /// Case-insensitive catalog lookup by display name.
    pub fn from_name(name: &str) -> Option<Dimension> {
        Dimension::ALL
            .iter()
            .copied()
            .find(|d| d.name().eq_ignore_ascii_case(name))
    }

    /// Project this dimension from one row. `None` means the underlying
    /// field is null (left-join miss or missing extraction), which groups
    /// under its own bucket in grouped evaluation.
    pub fn extract(self, row: &UnifiedRow<'_>) -> Option<String> {
        let eq = row.equipment;
        match self {
            Dimension::EquipmentType => Some(eq.equipment_type.clone()),
            Dimension::Manufacturer => Some(eq.manufacturer.clone()),
            Dimension::VoltageRating => Some(eq.voltage_rating.clone()),
            Dimension::CertificationStatus => {
                eq.certification_status.map(|s| s.to_string())
            }
            Dimension::CertifiedIpRating => eq.certified_ip_rating.clone(),
            Dimension::SafetyRating => eq.safety_rating.clone(),
            Dimension::MaterialType => eq.material_type.clone(),
            Dimension::ComplianceStandards => eq.compliance_standards.clone(),
            Dimension::FacilityName => Some(eq.facility_name.clone()),
            Dimension::City => Some(eq.city.clone()),
            Dimension::Region => Some(eq.region.clone()),
            Dimension::FacilityType => Some(eq.facility_type.to_string()),
            Dimension::OperationalStatus => Some(eq.operational_status.to_string()),
            Dimension::WarrantyStatus => Some(eq.warranty_status.to_string()),
            Dimension::InspectionStatus => Some(eq.inspection_status.to_string()),
            Dimension::ContractStatus => eq.contract_status.map(|s| s.to_string()),
            Dimension::RiskLevel => row.maintenance.map(|m| m.risk_level.to_string()),
        }
    }
}

/// An aggregate expression over the unified relation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Measure {
    TotalAssets,
    ActiveAssets,
    AssetsUnderMaintenance,
    DecommissionedAssets,
    CertifiedAssets,
    UncertifiedAssets,
    CertificationPassCount,
    ConditionalCertificationCount,
    CertificationPassRate,
    TotalPurchaseValue,
    AvgPurchasePrice,
    TotalContractValue,
    ExpiredWarranties,
    WarrantiesExpiringSoon,
    OverdueInspections,
    InspectionsDueSoon,
    AverageWeightKg,
    AvgOperatingTempRangeC,
    DistinctFacilities,
    DistinctManufacturers,
    TotalWorkOrders,
    OpenWorkOrders,
    CompletedWorkOrders,
    EmergencyRepairs,
    CorrectiveRepairs,
    PreventiveMaintenanceCount,
    TotalMaintenanceCost,
    AvgMaintenanceCostPerAsset,
    TotalPartsCost,
    TotalLaborHours,
    AvgLaborHoursPerWorkOrder,
    TotalDowntimeHours,
    HighRiskAssets,
    MediumRiskAssets,
    ElevatedRiskAssets,
    CriticalPriorityWorkOrders,
    HighPriorityWorkOrders,
}

impl Measure {
    pub const ALL: &'static [Measure] = &[
        Measure::TotalAssets,
        Measure::ActiveAssets,
        Measure::AssetsUnderMaintenance,
        Measure::DecommissionedAssets,
        Measure::CertifiedAssets,
        Measure::UncertifiedAssets,
        Measure::CertificationPassCount,
        Measure::ConditionalCertificationCount,
        Measure::CertificationPassRate,
        Measure::TotalPurchaseValue,
        Measure::AvgPurchasePrice,
        Measure::TotalContractValue,
        Measure::ExpiredWarranties,
        Measure::WarrantiesExpiringSoon,
        Measure::OverdueInspections,
        Measure::InspectionsDueSoon,
        Measure::AverageWeightKg,
        Measure::AvgOperatingTempRangeC,
        Measure::DistinctFacilities,
        Measure::DistinctManufacturers,
        Measure::TotalWorkOrders,
        Measure::OpenWorkOrders,
        Measure::CompletedWorkOrders,
        Measure::EmergencyRepairs,
        Measure::CorrectiveRepairs,
        Measure::PreventiveMaintenanceCount,
        Measure::TotalMaintenanceCost,
        Measure::AvgMaintenanceCostPerAsset,
        Measure::TotalPartsCost,
        Measure::TotalLaborHours,
        Measure::AvgLaborHoursPerWorkOrder,
        Measure::TotalDowntimeHours,
        Measure::HighRiskAssets,
        Measure::MediumRiskAssets,
        Measure::ElevatedRiskAssets,
        Measure::CriticalPriorityWorkOrders,
        Measure::HighPriorityWorkOrders,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Measure::TotalAssets => "Total Assets",
            Measure::ActiveAssets => "Active Assets",
            Measure::AssetsUnderMaintenance => "Assets Under Maintenance",
            Measure::DecommissionedAssets => "Decommissioned Assets",
            Measure::CertifiedAssets => "Certified Assets",
            Measure::UncertifiedAssets => "Uncertified Assets",
            Measure::CertificationPassCount => "Certification Pass Count",
            Measure::ConditionalCertificationCount => "Conditional Certification Count",
            Measure::CertificationPassRate => "Certification Pass Rate",
            Measure::TotalPurchaseValue => "Total Purchase Value",
            Measure::AvgPurchasePrice => "Avg Purchase Price",
            Measure::TotalContractValue => "Total Contract Value",
            Measure::ExpiredWarranties => "Expired Warranties",
            Measure::WarrantiesExpiringSoon => "Warranties Expiring Soon",
            Measure::OverdueInspections => "Overdue Inspections",
            Measure::InspectionsDueSoon => "Inspections Due Soon",
            Measure::AverageWeightKg => "Average Weight (kg)",
            Measure::AvgOperatingTempRangeC => "Avg Operating Temp Range (C)",
            Measure::DistinctFacilities => "Distinct Facilities",
            Measure::DistinctManufacturers => "Distinct Manufacturers",
            Measure::TotalWorkOrders => "Total Work Orders",
            Measure::OpenWorkOrders => "Open Work Orders",
            Measure::CompletedWorkOrders => "Completed Work Orders",
            Measure::EmergencyRepairs => "Emergency Repairs",
            Measure::CorrectiveRepairs => "Corrective Repairs",
            Measure::PreventiveMaintenanceCount => "Preventive Maintenance Count",
            Measure::TotalMaintenanceCost => "Total Maintenance Cost",
            Measure::AvgMaintenanceCostPerAsset => "Avg Maintenance Cost Per Asset",
            Measure::TotalPartsCost => "Total Parts Cost",
            Measure::TotalLaborHours => "Total Labor Hours",
            Measure::AvgLaborHoursPerWorkOrder => "Avg Labor Hours Per Work Order",
            Measure::TotalDowntimeHours => "Total Downtime Hours",
            Measure::HighRiskAssets => "High Risk Assets",
            Measure::MediumRiskAssets => "Medium Risk Assets",
            Measure::ElevatedRiskAssets => "Elevated Risk Assets",
            Measure::CriticalPriorityWorkOrders => "Critical Priority Work Orders",
            Measure::HighPriorityWorkOrders => "High Priority Work Orders",
        }
    }

    /// Case-insensitive catalog lookup by display name.
    pub fn from_name(name: &str) -> Option<Measure> {
        Measure::ALL
            .iter()
            .copied()
            .find(|m| m.name().eq_ignore_ascii_case(name))
    }

    /// Evaluate this measure over a slice of the unified relation.
    ///
    /// `None` means the measure is undefined for the slice (a guarded
    /// ratio with zero denominator, or an average over zero rows), never
    /// an error.
    pub fn evaluate(self, rows: &[UnifiedRow<'_>]) -> Option<f64> {
        use crate::entities::OperationalStatus::*;
        use crate::views::status::{InspectionStatus, WarrantyStatus};

        match self {
            Measure::TotalAssets => Some(rows.len() as f64),
            Measure::ActiveAssets => Some(count_if(rows, |r| {
                r.equipment.operational_status == Active
            })),
            Measure::AssetsUnderMaintenance => Some(count_if(rows, |r| {
                r.equipment.operational_status == UnderMaintenance
            })),
            Measure::DecommissionedAssets => Some(count_if(rows, |r| {
                r.equipment.operational_status == Decommissioned
            })),
            Measure::CertifiedAssets => {
                Some(count_if(rows, |r| r.equipment.has_certification))
            }
            Measure::UncertifiedAssets => {
                Some(count_if(rows, |r| !r.equipment.has_certification))
            }
            Measure::CertificationPassCount => Some(count_if(rows, is_pass)),
            Measure::ConditionalCertificationCount => Some(count_if(rows, is_conditional)),
            Measure::CertificationPassRate => {
                let certified = count_if(rows, |r| r.equipment.has_certification);
                if certified == 0.0 {
                    return None;
                }
                Some(round1(count_if(rows, is_pass) * 100.0 / certified))
            }
            Measure::TotalPurchaseValue => Some(round2(
                rows.iter().map(|r| r.equipment.purchase_price_usd).sum(),
            )),
            Measure::AvgPurchasePrice => {
                avg(rows.iter().map(|r| r.equipment.purchase_price_usd)).map(round2)
            }
            Measure::TotalContractValue => {
                // SUM(DISTINCT): the contract fan-out repeats each annual
                // value once per joined row.
                let mut seen = HashSet::new();
                let mut total = 0.0;
                for row in rows {
                    if let Some(value) = row.equipment.contract_annual_value_usd {
                        if seen.insert(value.to_bits()) {
                            total += value;
                        }
                    }
                }
                Some(round2(total))
            }
            Measure::ExpiredWarranties => Some(count_if(rows, |r| {
                r.equipment.warranty_status == WarrantyStatus::Expired
            })),
            Measure::WarrantiesExpiringSoon => Some(count_if(rows, |r| {
                r.equipment.warranty_status == WarrantyStatus::ExpiringSoon
            })),
            Measure::OverdueInspections => Some(count_if(rows, |r| {
                r.equipment.inspection_status == InspectionStatus::Overdue
            })),
            Measure::InspectionsDueSoon => Some(count_if(rows, |r| {
                r.equipment.inspection_status == InspectionStatus::DueSoon
            })),
            Measure::AverageWeightKg => {
                avg(rows.iter().filter_map(|r| r.equipment.weight_kg)).map(round1)
            }
            Measure::AvgOperatingTempRangeC => avg(rows.iter().filter_map(|r| {
                match (
                    r.equipment.operating_temp_min_c,
                    r.equipment.operating_temp_max_c,
                ) {
                    (Some(min), Some(max)) => Some(max - min),
                    _ => None,
                }
            }))
            .map(round1),
            // COUNT(DISTINCT facility_name), not facility_id.
            Measure::DistinctFacilities => Some(
                rows.iter()
                    .map(|r| r.equipment.facility_name.as_str())
                    .collect::<HashSet<_>>()
                    .len() as f64,
            ),
            Measure::DistinctManufacturers => Some(
                rows.iter()
                    .map(|r| r.equipment.manufacturer.as_str())
                    .collect::<HashSet<_>>()
                    .len() as f64,
            ),
            Measure::TotalWorkOrders => Some(sum_summary(rows, |s| s.total_work_orders as f64)),
            Measure::OpenWorkOrders => Some(sum_summary(rows, |s| s.open_work_orders as f64)),
            Measure::CompletedWorkOrders => {
                Some(sum_summary(rows, |s| s.completed_work_orders as f64))
            }
            Measure::EmergencyRepairs => Some(sum_summary(rows, |s| s.emergency_repairs as f64)),
            Measure::CorrectiveRepairs => Some(sum_summary(rows, |s| s.corrective_repairs as f64)),
            Measure::PreventiveMaintenanceCount => {
                Some(sum_summary(rows, |s| s.preventive_maintenance_count as f64))
            }
            Measure::TotalMaintenanceCost => Some(round2(
                rows.iter()
                    .filter_map(|r| r.maintenance)
                    .map(|m| m.total_maintenance_cost_usd)
                    .sum(),
            )),
            Measure::AvgMaintenanceCostPerAsset => avg(rows
                .iter()
                .filter_map(|r| r.maintenance)
                .map(|m| m.total_maintenance_cost_usd))
            .map(round2),
            Measure::TotalPartsCost => {
                Some(round2(sum_summary(rows, |s| s.total_parts_cost_usd)))
            }
            Measure::TotalLaborHours => {
                Some(round1(sum_summary(rows, |s| s.total_labor_hours)))
            }
            Measure::AvgLaborHoursPerWorkOrder => avg(rows
                .iter()
                .filter_map(|r| r.maintenance)
                .map(|m| m.summary.avg_labor_hours_per_wo))
            .map(round1),
            Measure::TotalDowntimeHours => {
                Some(round1(sum_summary(rows, |s| s.total_downtime_hours)))
            }
            Measure::HighRiskAssets => Some(count_if(rows, |r| {
                r.maintenance.is_some_and(|m| m.risk_level.is_high())
            })),
            Measure::MediumRiskAssets => Some(count_if(rows, |r| {
                r.maintenance.is_some_and(|m| m.risk_level.is_medium())
            })),
            Measure::ElevatedRiskAssets => Some(count_if(rows, |r| {
                r.maintenance.is_some_and(|m| m.risk_level.is_elevated())
            })),
            Measure::CriticalPriorityWorkOrders => {
                Some(sum_summary(rows, |s| s.critical_priority_count as f64))
            }
            Measure::HighPriorityWorkOrders => {
                Some(sum_summary(rows, |s| s.high_priority_count as f64))
            }
        }
    }
}

fn is_pass(row: &UnifiedRow<'_>) -> bool {
    row.equipment.certification_status == Some(crate::entities::CertificationStatus::Pass)
}

fn is_conditional(row: &UnifiedRow<'_>) -> bool {
    row.equipment.certification_status == Some(crate::entities::CertificationStatus::Conditional)
}

fn count_if(rows: &[UnifiedRow<'_>], predicate: impl Fn(&UnifiedRow<'_>) -> bool) -> f64 {
    rows.iter().filter(|r| predicate(r)).count() as f64
}

fn sum_summary(
    rows: &[UnifiedRow<'_>],
    field: impl Fn(&crate::views::WorkOrderSummary) -> f64,
) -> f64 {
    rows.iter()
        .filter_map(|r| r.maintenance)
        .map(|m| field(&m.summary))
        .sum()
}

fn avg(values: impl Iterator<Item = f64>) -> Option<f64> {
    let mut sum = 0.0;
    let mut count = 0usize;
    for v in values {
        sum += v;
        count += 1;
    }
    if count == 0 {
        None
    } else {
        Some(sum / count as f64)
    }
}

/// Evaluate one measure per group of one dimension.
///
/// Rows whose dimension value is null fall into a `(null)` bucket. The
/// result is ordered by group label for stable output.
pub fn evaluate_grouped(
    rows: &[UnifiedRow<'_>],
    dimension: Dimension,
    measure: Measure,
) -> BTreeMap<String, Option<f64>> {
    let mut groups: BTreeMap<String, Vec<UnifiedRow<'_>>> = BTreeMap::new();
    for row in rows {
        let label = dimension
            .extract(row)
            .unwrap_or_else(|| "(null)".to_string());
        groups.entry(label).or_default().push(*row);
    }

    groups
        .into_iter()
        .map(|(label, group)| (label, measure.evaluate(&group)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{
        Asset, Certification, CertificationStatus, Facility, FacilityType, OperationalStatus,
    };
    use crate::views::{build_equipment_360, build_maintenance_insights};
    use chrono::NaiveDate;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn facility(id: &str) -> Facility {
        Facility {
            facility_id: id.to_string(),
            facility_name: "Atlanta Distribution Hub".to_string(),
            city: "Atlanta".to_string(),
            state_province: "Georgia".to_string(),
            country: "USA".to_string(),
            region: "North America".to_string(),
            facility_type: FacilityType::DistributionCenter,
            square_footage: 220_000,
            employee_count: 400,
            opened_date: day(2010, 1, 4),
        }
    }

    fn asset(id: &str, manufacturer: &str, equipment_type: &str, price: f64) -> Asset {
        Asset {
            asset_id: id.to_string(),
            model_number: "IMC-3001-A1".to_string(),
            equipment_type: equipment_type.to_string(),
            equipment_type_code: "IMC".to_string(),
            manufacturer: manufacturer.to_string(),
            facility_id: "FAC-001".to_string(),
            serial_number: format!("SI-2024-{id}"),
            purchase_date: day(2024, 2, 1),
            purchase_price_usd: price,
            warranty_expiration: None,
            operational_status: OperationalStatus::Active,
            voltage_rating: "240V AC".to_string(),
            ip_rating: "IP44".to_string(),
            last_inspection_date: None,
            next_inspection_due: None,
            install_location: "Dock 4".to_string(),
        }
    }

    fn cert(
        manufacturer: &str,
        equipment_type: &str,
        status: CertificationStatus,
        n: usize,
    ) -> Certification {
        Certification {
            source_file: format!("equipment_docs/cert_{n}.pdf"),
            manufacturer: manufacturer.to_string(),
            equipment_type: equipment_type.to_string(),
            model_number: None,
            certification_id: Some(format!("UL-2024-{n:06}")),
            certification_status: Some(status),
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

    // Ten assets, each with its own manufacturer so every asset matches
    // exactly one certification: six PASS, four CONDITIONAL.
    fn fixture() -> (Vec<Facility>, Vec<Asset>, Vec<Certification>) {
        let facilities = vec![facility("FAC-001")];
        let mut assets = Vec::new();
        let mut certs = Vec::new();
        for i in 0..10 {
            let mfr = format!("Manufacturer {i}");
            assets.push(asset(&format!("AST-{i}"), &mfr, "Industrial Motor Controller", 1000.0));
            let status = if i < 6 {
                CertificationStatus::Pass
            } else {
                CertificationStatus::Conditional
            };
            certs.push(cert(&mfr, "Industrial Motor Controller", status, i));
        }
        (facilities, assets, certs)
    }

    #[test]
    fn test_pass_rate_sixty_percent() {
        let (facilities, assets, certs) = fixture();
        let as_of = day(2026, 2, 17);
        let equipment = build_equipment_360(&facilities, &assets, &certs, &[], as_of);
        let maintenance =
            build_maintenance_insights(&facilities, &assets, &[], &certs, &[], as_of);
        let rows = unify(&equipment, &maintenance);
        assert_eq!(Measure::CertificationPassRate.evaluate(&rows), Some(60.0));
        assert_eq!(Measure::CertifiedAssets.evaluate(&rows), Some(10.0));
        assert_eq!(Measure::CertificationPassCount.evaluate(&rows), Some(6.0));
    }

    #[test]
    fn test_pass_rate_null_when_nothing_certified() {
        let facilities = vec![facility("FAC-001")];
        let assets = vec![asset("AST-1", "Siemens Industrial Systems", "PLC", 1000.0)];
        let as_of = day(2026, 2, 17);
        let equipment = build_equipment_360(&facilities, &assets, &[], &[], as_of);
        let maintenance =
            build_maintenance_insights(&facilities, &assets, &[], &[], &[], as_of);
        let rows = unify(&equipment, &maintenance);
        assert_eq!(Measure::CertificationPassRate.evaluate(&rows), None);
        assert_eq!(Measure::UncertifiedAssets.evaluate(&rows), Some(1.0));
    }

    #[test]
    fn test_avg_over_empty_relation_is_null() {
        assert_eq!(Measure::AvgPurchasePrice.evaluate(&[]), None);
        assert_eq!(Measure::TotalAssets.evaluate(&[]), Some(0.0));
    }

    #[test]
    fn test_grouped_evaluation() {
        let (facilities, assets, certs) = fixture();
        let as_of = day(2026, 2, 17);
        let equipment = build_equipment_360(&facilities, &assets, &certs, &[], as_of);
        let maintenance =
            build_maintenance_insights(&facilities, &assets, &[], &certs, &[], as_of);
        let rows = unify(&equipment, &maintenance);

        let by_status =
            evaluate_grouped(&rows, Dimension::CertificationStatus, Measure::TotalAssets);
        assert_eq!(by_status.get("PASS"), Some(&Some(6.0)));
        assert_eq!(by_status.get("CONDITIONAL"), Some(&Some(4.0)));
    }

    #[test]
    fn test_distinct_facilities_counts_names_not_ids() {
        // Two facility ids sharing one name collapse to a single site.
        let fac_a = facility("FAC-001");
        let mut fac_b = facility("FAC-002");
        fac_b.facility_name = fac_a.facility_name.clone();
        let facilities = vec![fac_a, fac_b];

        let asset_a = asset("AST-1", "Manufacturer A", "Industrial Motor Controller", 1000.0);
        let mut asset_b = asset("AST-2", "Manufacturer B", "Industrial Motor Controller", 1000.0);
        asset_b.facility_id = "FAC-002".to_string();
        let assets = vec![asset_a, asset_b];

        let as_of = day(2026, 2, 17);
        let equipment = build_equipment_360(&facilities, &assets, &[], &[], as_of);
        let maintenance =
            build_maintenance_insights(&facilities, &assets, &[], &[], &[], as_of);
        let rows = unify(&equipment, &maintenance);
        assert_eq!(Measure::DistinctFacilities.evaluate(&rows), Some(1.0));
    }

    #[test]
    fn test_catalog_lookup_by_name() {
        assert_eq!(
            Measure::from_name("certification pass rate"),
            Some(Measure::CertificationPassRate)
        );
        assert_eq!(Dimension::from_name("Risk Level"), Some(Dimension::RiskLevel));
        assert_eq!(Measure::from_name("No Such Measure"), None);
    }

    #[test]
    fn test_catalog_names_are_unique() {
        let mut names = HashSet::new();
        for d in Dimension::ALL {
            assert!(names.insert(d.name()));
        }
        for m in Measure::ALL {
            assert!(names.insert(m.name()));
        }
    }
}
