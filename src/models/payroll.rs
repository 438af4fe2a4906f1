//! Payroll report models.
//!
//! This module contains the [`PayrollSummary`] type and the per-employee
//! [`PayrollEntry`] rows it is made of.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::PayPeriod;

/// Warning code raised when an employee has no resolvable display name.
pub const UNKNOWN_EMPLOYEE_WARNING: &str = "UNKNOWN_EMPLOYEE";

/// One employee's totals for a reporting period.
///
/// # Example
///
/// ```
/// use shift_engine::models::PayrollEntry;
/// use rust_decimal::Decimal;
///
/// let entry = PayrollEntry {
///     employee_id: "emp_001".to_string(),
///     name: "Avery".to_string(),
///     total_hours: Decimal::new(145, 1),
///     shift_count: 2,
/// };
/// assert_eq!(entry.total_hours.to_string(), "14.5");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollEntry {
    /// The employee the row is for.
    pub employee_id: String,
    /// Display name, or `"Unknown"` when none could be resolved.
    pub name: String,
    /// Sum of effective hours over the employee's shifts.
    pub total_hours: Decimal,
    /// Number of shifts counted.
    pub shift_count: u32,
}

/// A non-fatal problem found while building a payroll report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// The employee the warning concerns.
    pub employee_id: String,
    /// A human-readable description of the warning.
    pub message: String,
}

/// The payroll report for a period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollSummary {
    /// The reporting period.
    pub period: PayPeriod,
    /// One row per employee, sorted by name then employee ID.
    pub entries: Vec<PayrollEntry>,
    /// Sum of `total_hours` across all entries.
    pub total_hours: Decimal,
    /// Non-fatal warnings, such as unresolved employee names.
    pub warnings: Vec<PayrollWarning>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_payroll_summary_serialization() {
        let summary = PayrollSummary {
            period: PayPeriod::new(
                NaiveDate::from_ymd_opt(2026, 1, 5).unwrap(),
                NaiveDate::from_ymd_opt(2026, 1, 18).unwrap(),
            ),
            entries: vec![PayrollEntry {
                employee_id: "emp_001".to_string(),
                name: "Avery".to_string(),
                total_hours: Decimal::new(14, 0),
                shift_count: 2,
            }],
            total_hours: Decimal::new(14, 0),
            warnings: vec![],
        };

        let json = serde_json::to_string(&summary).unwrap();
        assert!(json.contains("\"start_date\":\"2026-01-05\""));
        assert!(json.contains("\"total_hours\":\"14\""));
        assert!(json.contains("\"shift_count\":2"));
        assert!(json.contains("\"warnings\":[]"));
    }

    #[test]
    fn test_payroll_warning_serialization() {
        let warning = PayrollWarning {
            code: UNKNOWN_EMPLOYEE_WARNING.to_string(),
            employee_id: "emp_404".to_string(),
            message: "No display name for employee 'emp_404'".to_string(),
        };

        let json = serde_json::to_string(&warning).unwrap();
        assert!(json.contains("\"code\":\"UNKNOWN_EMPLOYEE\""));
        assert!(json.contains("\"employee_id\":\"emp_404\""));
    }
}
