//! Persistence for schedules and shifts.
//!
//! [`ShiftRepository`] is the seam the shift-creation workflow runs against;
//! [`InMemoryStore`] implements it with transactional, serialized access.
//! Every successful mutation reports the [`CacheView`](crate::models::CacheView)s
//! it made stale.

mod memory;
mod repository;

pub use memory::{EnsuredSchedule, InMemoryStore, StoreState};
pub use repository::{MutationOutcome, ShiftRepository, create_shift, schedule_views};
