//! Asset risk classification
//!
//! The cascade is an explicit ordered rule table evaluated first-match-wins,
//! not a set of independent flags. Ordering is the contract: an asset with
//! both a conditional certification and an overdue inspection classifies by
//! certification alone; inspection-based risk is only reachable when the
//! certification is not conditional.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::entities::CertificationStatus;

/// Emergency repairs at or above this count raise the Elevated flag.
pub const EMERGENCY_REPAIR_THRESHOLD: u32 = 3;

/// Inputs to the risk cascade, gathered per joined asset row.
#[derive(Debug, Clone, Copy, Default)]
pub struct RiskContext {
    pub certification_status: Option<CertificationStatus>,
    pub open_work_orders: u32,
    pub next_inspection_due: Option<NaiveDate>,
    pub emergency_repairs: u32,
}

/// Risk classification outcome.
///
/// Serializes to the exact label strings the metric layer matches on
/// (`HIGH RISK%`, `MEDIUM RISK%`, `ELEVATED%`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLevel {
    #[serde(rename = "HIGH RISK - Conditional cert with open work orders")]
    ConditionalWithOpenWork,
    #[serde(rename = "MEDIUM RISK - Conditional certification")]
    ConditionalCertification,
    #[serde(rename = "MEDIUM RISK - Overdue inspection")]
    OverdueInspection,
    #[serde(rename = "ELEVATED - Frequent emergency repairs")]
    FrequentEmergencyRepairs,
    #[serde(rename = "NORMAL")]
    Normal,
}

impl RiskLevel {
    pub fn is_high(self) -> bool {
        matches!(self, RiskLevel::ConditionalWithOpenWork)
    }

    pub fn is_medium(self) -> bool {
        matches!(
            self,
            RiskLevel::ConditionalCertification | RiskLevel::OverdueInspection
        )
    }

    pub fn is_elevated(self) -> bool {
        matches!(self, RiskLevel::FrequentEmergencyRepairs)
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            RiskLevel::ConditionalWithOpenWork => {
                "HIGH RISK - Conditional cert with open work orders"
            }
            RiskLevel::ConditionalCertification => "MEDIUM RISK - Conditional certification",
            RiskLevel::OverdueInspection => "MEDIUM RISK - Overdue inspection",
            RiskLevel::FrequentEmergencyRepairs => "ELEVATED - Frequent emergency repairs",
            RiskLevel::Normal => "NORMAL",
        };
        write!(f, "{}", label)
    }
}

type RiskRule = (fn(&RiskContext, NaiveDate) -> bool, RiskLevel);

/// The cascade, in precedence order. Reordering changes output for any
/// asset matching more than one predicate.
pub const RISK_RULES: &[RiskRule] = &[
    (
        |ctx, _| {
            ctx.certification_status == Some(CertificationStatus::Conditional)
                && ctx.open_work_orders > 0
        },
        RiskLevel::ConditionalWithOpenWork,
    ),
    (
        |ctx, _| ctx.certification_status == Some(CertificationStatus::Conditional),
        RiskLevel::ConditionalCertification,
    ),
    (
        // Missing due dates never count as overdue.
        |ctx, as_of| ctx.next_inspection_due.is_some_and(|due| due < as_of),
        RiskLevel::OverdueInspection,
    ),
    (
        |ctx, _| ctx.emergency_repairs >= EMERGENCY_REPAIR_THRESHOLD,
        RiskLevel::FrequentEmergencyRepairs,
    ),
];

/// Classify an asset: first matching rule wins, else Normal.
pub fn classify_risk(ctx: &RiskContext, as_of: NaiveDate) -> RiskLevel {
    RISK_RULES
        .iter()
        .find(|(predicate, _)| predicate(ctx, as_of))
        .map(|(_, level)| *level)
        .unwrap_or(RiskLevel::Normal)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 2, 17).unwrap()
    }

    #[test]
    fn test_rule_one_wins_over_all_others() {
        // Matches every predicate in the cascade; rule 1 must win.
        let ctx = RiskContext {
            certification_status: Some(CertificationStatus::Conditional),
            open_work_orders: 2,
            next_inspection_due: Some(today() - Duration::days(1)),
            emergency_repairs: 5,
        };
        assert_eq!(
            classify_risk(&ctx, today()),
            RiskLevel::ConditionalWithOpenWork
        );
    }

    #[test]
    fn test_conditional_without_open_work_is_medium() {
        let ctx = RiskContext {
            certification_status: Some(CertificationStatus::Conditional),
            open_work_orders: 0,
            next_inspection_due: Some(today() - Duration::days(10)),
            emergency_repairs: 0,
        };
        assert_eq!(
            classify_risk(&ctx, today()),
            RiskLevel::ConditionalCertification
        );
    }

    #[test]
    fn test_overdue_inspection_requires_non_conditional_cert() {
        let ctx = RiskContext {
            certification_status: Some(CertificationStatus::Pass),
            open_work_orders: 1,
            next_inspection_due: Some(today() - Duration::days(1)),
            emergency_repairs: 0,
        };
        assert_eq!(classify_risk(&ctx, today()), RiskLevel::OverdueInspection);
    }

    #[test]
    fn test_emergency_repairs_fallback() {
        let ctx = RiskContext {
            certification_status: None,
            open_work_orders: 0,
            next_inspection_due: Some(today() + Duration::days(31)),
            emergency_repairs: 3,
        };
        assert_eq!(
            classify_risk(&ctx, today()),
            RiskLevel::FrequentEmergencyRepairs
        );
    }

    #[test]
    fn test_normal_when_nothing_matches() {
        let ctx = RiskContext {
            certification_status: Some(CertificationStatus::Pass),
            open_work_orders: 4,
            next_inspection_due: Some(today() + Duration::days(200)),
            emergency_repairs: 2,
        };
        assert_eq!(classify_risk(&ctx, today()), RiskLevel::Normal);
    }

    #[test]
    fn test_missing_inspection_date_is_not_overdue() {
        let ctx = RiskContext {
            certification_status: None,
            open_work_orders: 1,
            next_inspection_due: None,
            emergency_repairs: 0,
        };
        assert_eq!(classify_risk(&ctx, today()), RiskLevel::Normal);
    }

    #[test]
    fn test_inspection_due_today_is_not_overdue() {
        let ctx = RiskContext {
            next_inspection_due: Some(today()),
            ..RiskContext::default()
        };
        assert_eq!(classify_risk(&ctx, today()), RiskLevel::Normal);
    }

    #[test]
    fn test_display_labels() {
        assert_eq!(
            RiskLevel::ConditionalWithOpenWork.to_string(),
            "HIGH RISK - Conditional cert with open work orders"
        );
        assert_eq!(RiskLevel::Normal.to_string(), "NORMAL");
    }
}
