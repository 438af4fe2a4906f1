//! Configuration types for scheduling policy.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from `scheduling.yaml`. Every field has a default, so an
//! empty file is a valid configuration.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Overlap checks applied when a shift is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OverlapConfig {
    /// Also compare against the employee's shifts on the previous and next
    /// dates, so overnight shifts cannot collide across midnight.
    pub check_adjacent_dates: bool,
    /// Accept shifts whose start and end time are equal.
    pub allow_zero_length: bool,
}

impl Default for OverlapConfig {
    fn default() -> Self {
        Self {
            check_adjacent_dates: true,
            allow_zero_length: true,
        }
    }
}

/// Bounds on manual hours overrides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OverrideConfig {
    /// Largest accepted value for `actual_hours`.
    pub max_hours: Decimal,
}

impl Default for OverrideConfig {
    fn default() -> Self {
        Self {
            max_hours: Decimal::new(24, 0),
        }
    }
}

/// The complete scheduling configuration.
///
/// # Example
///
/// ```
/// use shift_engine::config::SchedulingConfig;
///
/// let config: SchedulingConfig = serde_yaml::from_str("overrides:\n  max_hours: 16\n").unwrap();
/// assert_eq!(config.overrides.max_hours.to_string(), "16");
/// assert!(config.overlap.check_adjacent_dates);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SchedulingConfig {
    /// Overlap policy.
    pub overlap: OverlapConfig,
    /// Override policy.
    pub overrides: OverrideConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SchedulingConfig::default();
        assert!(config.overlap.check_adjacent_dates);
        assert!(config.overlap.allow_zero_length);
        assert_eq!(config.overrides.max_hours, Decimal::new(24, 0));
    }

    #[test]
    fn test_partial_yaml_keeps_other_defaults() {
        let config: SchedulingConfig =
            serde_yaml::from_str("overlap:\n  allow_zero_length: false\n").unwrap();
        assert!(!config.overlap.allow_zero_length);
        assert!(config.overlap.check_adjacent_dates);
        assert_eq!(config.overrides, OverrideConfig::default());
    }

    #[test]
    fn test_decimal_max_hours() {
        let config: SchedulingConfig =
            serde_yaml::from_str("overrides:\n  max_hours: \"12.5\"\n").unwrap();
        assert_eq!(config.overrides.max_hours, Decimal::new(125, 1));
    }
}
