//! Storage seam for shift creation.
//!
//! [`ShiftRepository`] is the only persistence capability the creation
//! workflow needs. [`create_shift`] runs read-validate-write against it; the
//! caller is responsible for making that sequence atomic.

use chrono::NaiveDate;
use tracing::debug;

use crate::calculation::{ShiftCandidate, check_candidate, find_adjacent_day_overlap, overlap_error};
use crate::config::OverlapConfig;
use crate::error::EngineResult;
use crate::models::{CacheView, Shift, ShiftDraft};

/// Read and write access to persisted shifts.
pub trait ShiftRepository {
    /// Returns every shift for the employee that starts on `date`.
    fn find_shifts_by_employee_and_date(
        &self,
        employee_id: &str,
        date: NaiveDate,
    ) -> EngineResult<Vec<Shift>>;

    /// Stores a new shift and returns it as stored.
    fn persist_shift(&mut self, shift: Shift) -> EngineResult<Shift>;
}

/// The result of a successful mutation plus the views it made stale.
#[derive(Debug, Clone, PartialEq)]
pub struct MutationOutcome<T> {
    /// The mutated record.
    pub value: T,
    /// Views the caller should refresh.
    pub invalidate: Vec<CacheView>,
}

impl<T> MutationOutcome<T> {
    /// Wraps a value with the views of the schedule it belongs to.
    pub fn for_schedule(value: T, schedule_id: &str) -> Self {
        Self {
            value,
            invalidate: schedule_views(schedule_id),
        }
    }
}

/// The schedule index plus the given schedule's page.
pub fn schedule_views(schedule_id: &str) -> Vec<CacheView> {
    vec![
        CacheView::ScheduleIndex,
        CacheView::Schedule {
            schedule_id: schedule_id.to_string(),
        },
    ]
}

fn shifts_on<R>(repo: &R, employee_id: &str, date: Option<NaiveDate>) -> EngineResult<Vec<Shift>>
where
    R: ShiftRepository + ?Sized,
{
    match date {
        Some(date) => repo.find_shifts_by_employee_and_date(employee_id, date),
        None => Ok(Vec::new()),
    }
}

/// Validates a shift request against stored shifts and persists it.
///
/// Fetches the employee's shifts on the requested date (and on the previous
/// and next dates when `config.check_adjacent_dates` is set), rejects the
/// request on any conflict, and otherwise stores the new shift.
///
/// # Errors
///
/// Any error from [`validate_and_create_shift`](crate::calculation::validate_and_create_shift),
/// [`EngineError::OverlappingShift`](crate::error::EngineError::OverlappingShift)
/// for an adjacent-date collision, or a repository error.
pub fn create_shift<R>(
    repo: &mut R,
    draft: &ShiftDraft,
    config: &OverlapConfig,
) -> EngineResult<MutationOutcome<Shift>>
where
    R: ShiftRepository + ?Sized,
{
    let candidate = ShiftCandidate::from_draft(draft)?;

    let same_day = repo.find_shifts_by_employee_and_date(&candidate.employee_id, candidate.date)?;
    check_candidate(&candidate, &same_day, config)?;

    if config.check_adjacent_dates {
        let previous_day = shifts_on(repo, &candidate.employee_id, candidate.date.pred_opt())?;
        let next_day = shifts_on(repo, &candidate.employee_id, candidate.date.succ_opt())?;

        if let Some(conflict) =
            find_adjacent_day_overlap(&candidate.interval(), &previous_day, &next_day)
        {
            return Err(overlap_error(conflict));
        }
    }

    let shift = repo.persist_shift(candidate.into_shift())?;
    debug!(
        shift_id = %shift.id,
        employee_id = %shift.employee_id,
        date = %shift.date,
        "Shift persisted"
    );

    let schedule_id = shift.schedule_id.clone();
    Ok(MutationOutcome::for_schedule(shift, &schedule_id))
}
