//! Role checks for scheduling operations.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::{Principal, Role};

/// An operation that requires a role check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    /// Create, publish or delete schedules.
    ManageSchedules,
    /// Create or delete shifts.
    ManageShifts,
    /// Set or clear a shift's actual hours.
    OverrideHours,
    /// Read the payroll report.
    ViewPayroll,
    /// Read a schedule and its shifts.
    ViewSchedule,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Action::ManageSchedules => "manage schedules",
            Action::ManageShifts => "manage shifts",
            Action::OverrideHours => "override hours",
            Action::ViewPayroll => "view payroll",
            Action::ViewSchedule => "view schedules",
        };
        f.write_str(text)
    }
}

/// Returns true if the role may perform the action.
///
/// Admins and managers may do everything; employees may only view schedules.
pub fn is_permitted(role: Role, action: Action) -> bool {
    match role {
        Role::Admin | Role::Manager => true,
        Role::Employee => matches!(action, Action::ViewSchedule),
    }
}

/// Checks that the principal may perform the action.
///
/// # Errors
///
/// Returns [`EngineError::Unauthorized`] if the principal's role does not
/// permit the action.
///
/// # Example
///
/// ```
/// use shift_engine::calculation::{authorize, Action};
/// use shift_engine::models::{Principal, Role};
///
/// let manager = Principal::new("user_1", Role::Manager);
/// assert!(authorize(&manager, Action::OverrideHours).is_ok());
///
/// let employee = Principal::new("user_2", Role::Employee);
/// assert!(authorize(&employee, Action::ViewPayroll).is_err());
/// ```
pub fn authorize(principal: &Principal, action: Action) -> EngineResult<()> {
    if is_permitted(principal.role, action) {
        Ok(())
    } else {
        Err(EngineError::Unauthorized {
            principal_id: principal.id.clone(),
            action: action.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_ACTIONS: [Action; 5] = [
        Action::ManageSchedules,
        Action::ManageShifts,
        Action::OverrideHours,
        Action::ViewPayroll,
        Action::ViewSchedule,
    ];

    #[test]
    fn test_admin_and_manager_may_do_everything() {
        for action in ALL_ACTIONS {
            assert!(is_permitted(Role::Admin, action));
            assert!(is_permitted(Role::Manager, action));
        }
    }

    #[test]
    fn test_employee_may_only_view_schedules() {
        for action in ALL_ACTIONS {
            assert_eq!(
                is_permitted(Role::Employee, action),
                action == Action::ViewSchedule
            );
        }
    }

    #[test]
    fn test_authorize_error_names_principal_and_action() {
        let employee = Principal::new("user_7", Role::Employee);
        assert_eq!(
            authorize(&employee, Action::ManageShifts),
            Err(EngineError::Unauthorized {
                principal_id: "user_7".to_string(),
                action: "manage shifts".to_string(),
            })
        );
    }
}
