//! Views whose cached rendering goes stale after a mutation.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A rendered view the caller should invalidate after a successful mutation.
///
/// The core only reports which views are affected; refreshing them is the
/// caller's job.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "view", rename_all = "snake_case")]
pub enum CacheView {
    /// The list of all schedules.
    ScheduleIndex,
    /// A single schedule and its shifts.
    Schedule {
        /// The schedule whose view is stale.
        schedule_id: String,
    },
}

impl CacheView {
    /// The dashboard path that renders this view.
    pub fn path(&self) -> String {
        match self {
            CacheView::ScheduleIndex => "/schedule".to_string(),
            CacheView::Schedule { schedule_id } => format!("/schedule/{schedule_id}"),
        }
    }
}

impl fmt::Display for CacheView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}
