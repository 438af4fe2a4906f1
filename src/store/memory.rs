//! In-memory store for schedules, shifts and employee names.
//!
//! All state lives behind one mutex. [`InMemoryStore::transaction`] holds
//! the lock for the whole closure, so overlap checks and inserts cannot
//! interleave. Every mutation validates before it writes, so a failed
//! operation leaves the state untouched.

use std::collections::{BTreeMap, HashMap};
use std::sync::{Mutex, MutexGuard};

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::{debug, info};
use uuid::Uuid;

use crate::calculation::{EmployeeDirectory, summarize_payroll, validate_override};
use crate::config::OverlapConfig;
use crate::error::{EngineError, EngineResult};
use crate::models::{
    CacheView, PayPeriod, PayrollSummary, Schedule, ScheduleStatus, Shift, ShiftDraft,
    next_week_start,
};

use super::repository::{self, MutationOutcome, ShiftRepository};

/// The data held by an [`InMemoryStore`].
#[derive(Debug, Default)]
pub struct StoreState {
    schedules: BTreeMap<String, Schedule>,
    shifts: BTreeMap<String, Shift>,
    employees: HashMap<String, String>,
}

impl StoreState {
    /// Looks up a schedule.
    pub fn schedule(&self, schedule_id: &str) -> EngineResult<&Schedule> {
        self.schedules
            .get(schedule_id)
            .ok_or_else(|| EngineError::ScheduleNotFound {
                schedule_id: schedule_id.to_string(),
            })
    }

    fn schedule_mut(&mut self, schedule_id: &str) -> EngineResult<&mut Schedule> {
        self.schedules
            .get_mut(schedule_id)
            .ok_or_else(|| EngineError::ScheduleNotFound {
                schedule_id: schedule_id.to_string(),
            })
    }

    fn shift_mut(&mut self, shift_id: &str) -> EngineResult<&mut Shift> {
        self.shifts
            .get_mut(shift_id)
            .ok_or_else(|| EngineError::ShiftNotFound {
                shift_id: shift_id.to_string(),
            })
    }

    /// All schedules ordered by week start date.
    pub fn schedules(&self) -> Vec<Schedule> {
        let mut schedules: Vec<Schedule> = self.schedules.values().cloned().collect();
        schedules.sort_by_key(|s| s.week_start_date);
        schedules
    }
}

impl ShiftRepository for StoreState {
    fn find_shifts_by_employee_and_date(
        &self,
        employee_id: &str,
        date: NaiveDate,
    ) -> EngineResult<Vec<Shift>> {
        Ok(self
            .shifts
            .values()
            .filter(|s| s.employee_id == employee_id && s.date == date)
            .cloned()
            .collect())
    }

    fn persist_shift(&mut self, shift: Shift) -> EngineResult<Shift> {
        self.schedule(&shift.schedule_id)?;

        if self.shifts.contains_key(&shift.id) {
            return Err(EngineError::StorageError {
                message: format!("duplicate shift id '{}'", shift.id),
            });
        }

        self.shifts.insert(shift.id.clone(), shift.clone());
        Ok(shift)
    }
}

impl EmployeeDirectory for StoreState {
    fn display_name(&self, employee_id: &str) -> Option<&str> {
        self.employees.display_name(employee_id)
    }
}

/// The result of [`InMemoryStore::ensure_week_schedule`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnsuredSchedule {
    /// The schedule for the requested week.
    pub schedule: Schedule,
    /// Whether the schedule was created by this call.
    pub created: bool,
}

/// Thread-safe in-memory store.
///
/// # Example
///
/// ```
/// use shift_engine::config::OverlapConfig;
/// use shift_engine::models::ShiftDraft;
/// use shift_engine::store::InMemoryStore;
/// use chrono::NaiveDate;
///
/// let store = InMemoryStore::new();
/// let week = NaiveDate::from_ymd_opt(2026, 1, 12).unwrap();
/// let schedule = store.create_schedule(week).unwrap().value;
///
/// let draft = ShiftDraft {
///     schedule_id: Some(schedule.id.clone()),
///     employee_id: Some("emp_001".to_string()),
///     date: Some("2026-01-15".to_string()),
///     start_time: Some("09:00".to_string()),
///     end_time: Some("17:00".to_string()),
///     notes: None,
/// };
/// let shift = store.create_shift(&draft, &OverlapConfig::default()).unwrap().value;
/// assert_eq!(store.shifts_for_schedule(&schedule.id).unwrap(), vec![shift]);
/// ```
#[derive(Debug, Default)]
pub struct InMemoryStore {
    state: Mutex<StoreState>,
}

impl InMemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> EngineResult<MutexGuard<'_, StoreState>> {
        self.state.lock().map_err(|_| EngineError::StorageError {
            message: "store lock poisoned".to_string(),
        })
    }

    /// Runs `f` with exclusive access to the store state.
    ///
    /// Changes are applied in place with no rollback: `f` must finish every
    /// check that can fail before its first write.
    ///
    /// # Errors
    ///
    /// Returns the error from `f`, or [`EngineError::StorageError`] if a
    /// previous holder of the lock panicked.
    pub fn transaction<T, F>(&self, f: F) -> EngineResult<T>
    where
        F: FnOnce(&mut StoreState) -> EngineResult<T>,
    {
        let mut state = self.lock()?;
        f(&mut *state)
    }

    fn read<T, F>(&self, f: F) -> EngineResult<T>
    where
        F: FnOnce(&StoreState) -> EngineResult<T>,
    {
        let state = self.lock()?;
        f(&*state)
    }

    /// Records or replaces an employee's display name.
    pub fn register_employee(
        &self,
        employee_id: impl Into<String>,
        name: impl Into<String>,
    ) -> EngineResult<()> {
        self.transaction(|state| {
            state.employees.insert(employee_id.into(), name.into());
            Ok(())
        })
    }

    /// Creates a draft schedule for the week starting on `week_start_date`.
    pub fn create_schedule(&self, week_start_date: NaiveDate) -> EngineResult<MutationOutcome<Schedule>> {
        self.transaction(|state| Ok(insert_schedule(state, week_start_date)))
    }

    /// Marks a schedule as published.
    ///
    /// Publishing an already published schedule is a no-op.
    pub fn publish_schedule(&self, schedule_id: &str) -> EngineResult<MutationOutcome<Schedule>> {
        self.transaction(|state| {
            let schedule = state.schedule_mut(schedule_id)?;
            schedule.status = ScheduleStatus::Published;
            info!(schedule_id = %schedule_id, "Schedule published");
            Ok(MutationOutcome::for_schedule(schedule.clone(), schedule_id))
        })
    }

    /// Deletes a schedule and all of its shifts.
    ///
    /// Returns the number of shifts removed.
    pub fn delete_schedule(&self, schedule_id: &str) -> EngineResult<MutationOutcome<usize>> {
        self.transaction(|state| {
            state.schedule(schedule_id)?;
            state.schedules.remove(schedule_id);

            let before = state.shifts.len();
            state.shifts.retain(|_, shift| shift.schedule_id != schedule_id);
            let deleted = before - state.shifts.len();

            info!(schedule_id = %schedule_id, deleted_shifts = deleted, "Schedule deleted");
            Ok(MutationOutcome::for_schedule(deleted, schedule_id))
        })
    }

    /// Returns the schedule for the week after `today`'s week, creating a
    /// draft if none exists yet.
    pub fn ensure_week_schedule(&self, today: NaiveDate) -> EngineResult<MutationOutcome<EnsuredSchedule>> {
        let week_start = next_week_start(today).ok_or_else(|| EngineError::DateOutOfRange {
            date: today.to_string(),
        })?;

        self.transaction(|state| {
            let existing = state
                .schedules
                .values()
                .find(|s| s.week_start_date == week_start)
                .cloned();

            match existing {
                Some(schedule) => Ok(MutationOutcome {
                    value: EnsuredSchedule {
                        schedule,
                        created: false,
                    },
                    invalidate: Vec::new(),
                }),
                None => {
                    let outcome = insert_schedule(state, week_start);
                    Ok(MutationOutcome {
                        value: EnsuredSchedule {
                            schedule: outcome.value,
                            created: true,
                        },
                        invalidate: outcome.invalidate,
                    })
                }
            }
        })
    }

    /// Returns a copy of a schedule.
    pub fn schedule(&self, schedule_id: &str) -> EngineResult<Schedule> {
        self.read(|state| state.schedule(schedule_id).cloned())
    }

    /// All schedules ordered by week start date.
    pub fn schedules(&self) -> EngineResult<Vec<Schedule>> {
        self.read(|state| Ok(state.schedules()))
    }

    /// Returns a schedule's shifts ordered by date, then start time.
    pub fn shifts_for_schedule(&self, schedule_id: &str) -> EngineResult<Vec<Shift>> {
        self.read(|state| {
            state.schedule(schedule_id)?;
            let mut shifts: Vec<Shift> = state
                .shifts
                .values()
                .filter(|s| s.schedule_id == schedule_id)
                .cloned()
                .collect();
            shifts.sort_by_key(|s| (s.date, s.start_time));
            Ok(shifts)
        })
    }

    /// Validates and stores a new shift under the store lock.
    ///
    /// See [`repository::create_shift`] for the checks performed. The lookup
    /// of existing shifts and the insert happen in one transaction, so two
    /// overlapping requests cannot both succeed.
    pub fn create_shift(
        &self,
        draft: &ShiftDraft,
        config: &OverlapConfig,
    ) -> EngineResult<MutationOutcome<Shift>> {
        self.transaction(|state| repository::create_shift(state, draft, config))
    }

    /// Sets or clears a shift's manual hours override.
    ///
    /// `None` resets the shift to its scheduled hours.
    pub fn set_actual_hours(
        &self,
        shift_id: &str,
        actual_hours: Option<Decimal>,
        max_hours: Decimal,
    ) -> EngineResult<MutationOutcome<Shift>> {
        let actual_hours = validate_override(actual_hours, max_hours)?;

        self.transaction(|state| {
            let shift = state.shift_mut(shift_id)?;
            shift.actual_hours = actual_hours;
            debug!(shift_id = %shift_id, actual_hours = ?actual_hours, "Shift hours updated");

            let shift = shift.clone();
            let schedule_id = shift.schedule_id.clone();
            Ok(MutationOutcome::for_schedule(shift, &schedule_id))
        })
    }

    /// Deletes a shift and returns it.
    pub fn delete_shift(&self, shift_id: &str) -> EngineResult<MutationOutcome<Shift>> {
        self.transaction(|state| {
            let shift = state
                .shifts
                .remove(shift_id)
                .ok_or_else(|| EngineError::ShiftNotFound {
                    shift_id: shift_id.to_string(),
                })?;

            let schedule_id = shift.schedule_id.clone();
            Ok(MutationOutcome::for_schedule(shift, &schedule_id))
        })
    }

    /// Returns every shift dated within `start..=end`, ordered by date,
    /// employee, then start time.
    pub fn find_shifts_in_range(&self, start: NaiveDate, end: NaiveDate) -> EngineResult<Vec<Shift>> {
        self.read(|state| {
            let mut shifts: Vec<Shift> = state
                .shifts
                .values()
                .filter(|s| s.date >= start && s.date <= end)
                .cloned()
                .collect();
            shifts.sort_by(|a, b| {
                (a.date, &a.employee_id, a.start_time).cmp(&(b.date, &b.employee_id, b.start_time))
            });
            Ok(shifts)
        })
    }

    /// Builds the payroll report for a period from stored shifts and names.
    pub fn payroll_summary(&self, period: &PayPeriod) -> EngineResult<PayrollSummary> {
        self.read(|state| {
            let shifts: Vec<Shift> = state
                .shifts
                .values()
                .filter(|s| period.contains_date(s.date))
                .cloned()
                .collect();
            Ok(summarize_payroll(&shifts, period, state))
        })
    }
}

fn insert_schedule(state: &mut StoreState, week_start_date: NaiveDate) -> MutationOutcome<Schedule> {
    let schedule = Schedule {
        id: Uuid::new_v4().to_string(),
        week_start_date,
        status: ScheduleStatus::Draft,
    };
    state.schedules.insert(schedule.id.clone(), schedule.clone());
    info!(schedule_id = %schedule.id, week_start_date = %week_start_date, "Schedule created");

    MutationOutcome {
        invalidate: vec![CacheView::ScheduleIndex],
        value: schedule,
    }
}
