//! Derived views over the record sets
//!
//! Everything here is a pure function of an immutable snapshot of the five
//! record sets plus an injected `as_of` date. No IO, no shared state: given
//! the same inputs the builders produce identical output rows, so re-running
//! them is idempotent.
//!
//! Composition, leaf-first:
//! - [`status`] - warranty/inspection date classifiers
//! - [`risk`] - ordered risk cascade
//! - [`workload`] - per-asset work-order aggregation
//! - [`join`] - facility/certification/contract indexes
//! - [`equipment_360`] - the wide certification-centric relation
//! - [`insights`] - the maintenance-centric relation with risk levels

pub mod equipment_360;
pub mod insights;
pub mod join;
pub mod risk;
pub mod status;
pub mod workload;

pub use equipment_360::{build_equipment_360, Equipment360Row};
pub use insights::{build_maintenance_insights, MaintenanceInsightsRow, HOURLY_LABOR_RATE_USD};
pub use join::{CertificationIndex, ContractIndex, FacilityIndex};
pub use risk::{classify_risk, RiskContext, RiskLevel};
pub use status::{inspection_status, warranty_status, InspectionStatus, WarrantyStatus};
pub use workload::{summarize_by_asset, WorkOrderSummary};

/// Round to 1 decimal place (hour totals).
pub(crate) fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Round to 2 decimal places (monetary totals).
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rounding() {
        assert_eq!(round1(3.14), 3.1);
        assert_eq!(round1(3.15), 3.2);
        assert_eq!(round2(1050.004), 1050.0);
        assert_eq!(round2(199.999), 200.0);
    }
}
