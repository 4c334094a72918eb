//! Warranty and inspection date classifiers
//!
//! Pure functions of a single optional date against an injected `as_of`
//! date. Both use strict `<` comparisons: a date equal to `as_of` is not
//! yet expired/overdue, and a date exactly at the window boundary falls to
//! the next (safer) bucket. A missing date never trips either branch and
//! classifies to the terminal bucket (Active / Current).

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

/// Days before expiration at which a warranty counts as "Expiring Soon"
pub const WARRANTY_WINDOW_DAYS: i64 = 90;

/// Days before the due date at which an inspection counts as "Due Soon"
pub const INSPECTION_WINDOW_DAYS: i64 = 30;

/// Warranty state derived from `warranty_expiration`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WarrantyStatus {
    Expired,
    #[serde(rename = "Expiring Soon")]
    ExpiringSoon,
    Active,
}

impl std::fmt::Display for WarrantyStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WarrantyStatus::Expired => write!(f, "Expired"),
            WarrantyStatus::ExpiringSoon => write!(f, "Expiring Soon"),
            WarrantyStatus::Active => write!(f, "Active"),
        }
    }
}

/// Inspection state derived from `next_inspection_due`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InspectionStatus {
    Overdue,
    #[serde(rename = "Due Soon")]
    DueSoon,
    Current,
}

impl std::fmt::Display for InspectionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InspectionStatus::Overdue => write!(f, "Overdue"),
            InspectionStatus::DueSoon => write!(f, "Due Soon"),
            InspectionStatus::Current => write!(f, "Current"),
        }
    }
}

/// Classify a warranty expiration date against `as_of`.
pub fn warranty_status(expiration: Option<NaiveDate>, as_of: NaiveDate) -> WarrantyStatus {
    match expiration {
        Some(date) if date < as_of => WarrantyStatus::Expired,
        Some(date) if date < as_of + Duration::days(WARRANTY_WINDOW_DAYS) => {
            WarrantyStatus::ExpiringSoon
        }
        _ => WarrantyStatus::Active,
    }
}

/// Classify an inspection due date against `as_of`.
pub fn inspection_status(due: Option<NaiveDate>, as_of: NaiveDate) -> InspectionStatus {
    match due {
        Some(date) if date < as_of => InspectionStatus::Overdue,
        Some(date) if date < as_of + Duration::days(INSPECTION_WINDOW_DAYS) => {
            InspectionStatus::DueSoon
        }
        _ => InspectionStatus::Current,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_warranty_buckets() {
        let today = day(2026, 2, 17);
        assert_eq!(
            warranty_status(Some(day(2026, 2, 16)), today),
            WarrantyStatus::Expired
        );
        assert_eq!(
            warranty_status(Some(day(2026, 3, 1)), today),
            WarrantyStatus::ExpiringSoon
        );
        assert_eq!(
            warranty_status(Some(day(2027, 1, 1)), today),
            WarrantyStatus::Active
        );
    }

    #[test]
    fn test_warranty_date_equal_to_today_is_not_expired() {
        let today = day(2026, 2, 17);
        assert_eq!(
            warranty_status(Some(today), today),
            WarrantyStatus::ExpiringSoon
        );
    }

    #[test]
    fn test_warranty_window_boundary_is_strict() {
        let today = day(2026, 2, 17);
        // Exactly today + 90 days: not "Expiring Soon"
        assert_eq!(
            warranty_status(Some(today + Duration::days(90)), today),
            WarrantyStatus::Active
        );
        // One day inside the window
        assert_eq!(
            warranty_status(Some(today + Duration::days(89)), today),
            WarrantyStatus::ExpiringSoon
        );
    }

    #[test]
    fn test_inspection_buckets() {
        let today = day(2026, 2, 17);
        assert_eq!(
            inspection_status(Some(day(2026, 1, 1)), today),
            InspectionStatus::Overdue
        );
        assert_eq!(
            inspection_status(Some(today + Duration::days(29)), today),
            InspectionStatus::DueSoon
        );
        assert_eq!(
            inspection_status(Some(today + Duration::days(30)), today),
            InspectionStatus::Current
        );
    }

    #[test]
    fn test_missing_dates_classify_to_terminal_bucket() {
        let today = day(2026, 2, 17);
        assert_eq!(warranty_status(None, today), WarrantyStatus::Active);
        assert_eq!(inspection_status(None, today), InspectionStatus::Current);
    }
}
