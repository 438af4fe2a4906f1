//! Payroll aggregation.
//!
//! Groups shifts by employee, sums effective hours and resolves display
//! names. Uses [`effective_hours`] so payroll totals always match the hours
//! shown on the schedule.

use std::collections::{BTreeMap, HashMap};

use rust_decimal::Decimal;
use tracing::warn;

use crate::models::{
    PayPeriod, PayrollEntry, PayrollSummary, PayrollWarning, Shift, UNKNOWN_EMPLOYEE_WARNING,
};

use super::hours_policy::effective_hours;

/// Display name used when an employee cannot be resolved.
pub const UNKNOWN_EMPLOYEE_NAME: &str = "Unknown";

/// Looks up employee display names.
pub trait EmployeeDirectory {
    /// Returns the display name for an employee, if one is known.
    fn display_name(&self, employee_id: &str) -> Option<&str>;
}

impl EmployeeDirectory for HashMap<String, String> {
    fn display_name(&self, employee_id: &str) -> Option<&str> {
        self.get(employee_id).map(String::as_str)
    }
}

impl EmployeeDirectory for BTreeMap<String, String> {
    fn display_name(&self, employee_id: &str) -> Option<&str> {
        self.get(employee_id).map(String::as_str)
    }
}

#[derive(Default)]
struct Tally {
    total_hours: Decimal,
    shift_count: u32,
}

/// Builds the payroll report for a period.
///
/// `shifts` should already be restricted to the period; any shift dated
/// outside it is still counted and a warning is logged. Employees with no
/// resolvable or a blank display name are reported as `"Unknown"` and get an
/// `UNKNOWN_EMPLOYEE` warning. Entries are sorted by name, then by employee
/// ID.
///
/// # Example
///
/// ```
/// use shift_engine::calculation::summarize_payroll;
/// use shift_engine::models::{ClockTime, PayPeriod, Shift};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
/// use std::collections::HashMap;
///
/// let date = NaiveDate::from_ymd_opt(2026, 1, 15).unwrap();
/// let shift = Shift {
///     id: "shift_001".to_string(),
///     employee_id: "emp_001".to_string(),
///     schedule_id: "sched_001".to_string(),
///     date,
///     start_time: ClockTime::parse("09:00").unwrap(),
///     end_time: ClockTime::parse("17:00").unwrap(),
///     actual_hours: None,
///     notes: None,
/// };
///
/// let mut names = HashMap::new();
/// names.insert("emp_001".to_string(), "Avery".to_string());
///
/// let summary = summarize_payroll(&[shift], &PayPeriod::new(date, date), &names);
/// assert_eq!(summary.entries[0].name, "Avery");
/// assert_eq!(summary.total_hours, Decimal::new(8, 0));
/// ```
pub fn summarize_payroll<D>(shifts: &[Shift], period: &PayPeriod, directory: &D) -> PayrollSummary
where
    D: EmployeeDirectory + ?Sized,
{
    let mut tallies: BTreeMap<&str, Tally> = BTreeMap::new();

    for shift in shifts {
        if !period.contains_date(shift.date) {
            warn!(
                shift_id = %shift.id,
                date = %shift.date,
                start_date = %period.start_date,
                end_date = %period.end_date,
                "Shift outside payroll period included in summary"
            );
        }

        let tally = tallies.entry(shift.employee_id.as_str()).or_default();
        tally.total_hours += effective_hours(shift);
        tally.shift_count += 1;
    }

    let mut warnings = Vec::new();
    let mut entries: Vec<PayrollEntry> = tallies
        .into_iter()
        .map(|(employee_id, tally)| {
            let name = match directory
                .display_name(employee_id)
                .map(str::trim)
                .filter(|name| !name.is_empty())
            {
                Some(name) => name.to_string(),
                None => {
                    warnings.push(PayrollWarning {
                        code: UNKNOWN_EMPLOYEE_WARNING.to_string(),
                        employee_id: employee_id.to_string(),
                        message: format!("No display name for employee '{employee_id}'"),
                    });
                    UNKNOWN_EMPLOYEE_NAME.to_string()
                }
            };

            PayrollEntry {
                employee_id: employee_id.to_string(),
                name,
                total_hours: tally.total_hours,
                shift_count: tally.shift_count,
            }
        })
        .collect();

    entries.sort_by(|a, b| {
        a.name
            .cmp(&b.name)
            .then_with(|| a.employee_id.cmp(&b.employee_id))
    });

    let total_hours = entries.iter().map(|entry| entry.total_hours).sum();

    PayrollSummary {
        period: *period,
        entries,
        total_hours,
        warnings,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculation::total_effective_hours;
    use crate::models::ClockTime;
    use chrono::NaiveDate;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 1, day).unwrap()
    }

    fn period() -> PayPeriod {
        PayPeriod::new(date(12), date(25))
    }

    fn make_shift(employee_id: &str, day: u32, start: &str, end: &str) -> Shift {
        Shift {
            id: format!("{employee_id}_{day}_{start}"),
            employee_id: employee_id.to_string(),
            schedule_id: "sched_001".to_string(),
            date: date(day),
            start_time: ClockTime::parse(start).unwrap(),
            end_time: ClockTime::parse(end).unwrap(),
            actual_hours: None,
            notes: None,
        }
    }

    fn directory(entries: &[(&str, &str)]) -> HashMap<String, String> {
        entries
            .iter()
            .map(|(id, name)| (id.to_string(), name.to_string()))
            .collect()
    }

    #[test]
    fn test_groups_by_employee() {
        let shifts = vec![
            make_shift("emp_001", 13, "09:00", "17:00"),
            make_shift("emp_001", 14, "09:00", "13:30"),
            make_shift("emp_002", 13, "22:00", "06:00"),
        ];
        let names = directory(&[("emp_001", "Avery"), ("emp_002", "Blake")]);

        let summary = summarize_payroll(&shifts, &period(), &names);

        assert_eq!(summary.entries.len(), 2);
        assert_eq!(summary.entries[0].name, "Avery");
        assert_eq!(summary.entries[0].total_hours, dec("12.5"));
        assert_eq!(summary.entries[0].shift_count, 2);
        assert_eq!(summary.entries[1].name, "Blake");
        assert_eq!(summary.entries[1].total_hours, dec("8"));
        assert_eq!(summary.total_hours, dec("20.5"));
        assert!(summary.warnings.is_empty());
    }

    #[test]
    fn test_uses_override_when_present() {
        let mut overridden = make_shift("emp_001", 13, "09:00", "17:00");
        overridden.actual_hours = Some(dec("6.75"));
        let shifts = vec![overridden, make_shift("emp_001", 14, "09:00", "17:00")];
        let names = directory(&[("emp_001", "Avery")]);

        let summary = summarize_payroll(&shifts, &period(), &names);
        assert_eq!(summary.entries[0].total_hours, dec("14.75"));
    }

    #[test]
    fn test_totals_match_schedule_hours() {
        let mut shifts = vec![
            make_shift("emp_001", 13, "09:00", "17:20"),
            make_shift("emp_002", 13, "23:15", "07:00"),
            make_shift("emp_003", 15, "10:00", "10:00"),
        ];
        shifts[1].actual_hours = Some(dec("7.5"));

        let summary = summarize_payroll(&shifts, &period(), &HashMap::new());
        assert_eq!(summary.total_hours, total_effective_hours(&shifts));
    }

    #[test]
    fn test_unknown_employee_gets_placeholder_and_warning() {
        let shifts = vec![make_shift("emp_404", 13, "09:00", "17:00")];
        let summary = summarize_payroll(&shifts, &period(), &HashMap::new());

        assert_eq!(summary.entries[0].name, UNKNOWN_EMPLOYEE_NAME);
        assert_eq!(summary.warnings.len(), 1);
        assert_eq!(summary.warnings[0].code, UNKNOWN_EMPLOYEE_WARNING);
        assert_eq!(summary.warnings[0].employee_id, "emp_404");
    }

    #[test]
    fn test_blank_name_is_unknown() {
        let shifts = vec![make_shift("emp_001", 13, "09:00", "17:00")];
        let names = directory(&[("emp_001", "   ")]);

        let summary = summarize_payroll(&shifts, &period(), &names);
        assert_eq!(summary.entries[0].name, "Unknown");
        assert_eq!(summary.warnings.len(), 1);
    }

    #[test]
    fn test_sorted_by_name_then_id() {
        let shifts = vec![
            make_shift("emp_003", 13, "09:00", "10:00"),
            make_shift("emp_002", 13, "09:00", "10:00"),
            make_shift("emp_001", 13, "09:00", "10:00"),
        ];
        let names = directory(&[("emp_001", "Sam"), ("emp_002", "Alex"), ("emp_003", "Sam")]);

        let summary = summarize_payroll(&shifts, &period(), &names);
        let order: Vec<&str> = summary
            .entries
            .iter()
            .map(|e| e.employee_id.as_str())
            .collect();
        assert_eq!(order, vec!["emp_002", "emp_001", "emp_003"]);
    }

    #[test]
    fn test_out_of_period_shift_is_still_counted() {
        let shifts = vec![make_shift("emp_001", 30, "09:00", "17:00")];
        let names = directory(&[("emp_001", "Avery")]);

        let summary = summarize_payroll(&shifts, &period(), &names);
        assert_eq!(summary.total_hours, dec("8"));
    }

    #[test]
    fn test_empty_period() {
        let summary = summarize_payroll(&[], &period(), &HashMap::new());
        assert!(summary.entries.is_empty());
        assert_eq!(summary.total_hours, Decimal::ZERO);
        assert_eq!(summary.period, period());
    }
}
