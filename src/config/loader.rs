//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the scheduling
//! configuration from a YAML file.

use rust_decimal::Decimal;
use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::SchedulingConfig;

/// Loads and provides access to the scheduling configuration.
///
/// # File Format
///
/// ```text
/// overlap:
///   check_adjacent_dates: true
///   allow_zero_length: true
/// overrides:
///   max_hours: 24
/// ```
///
/// # Example
///
/// ```no_run
/// use shift_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/scheduling.yaml").unwrap();
/// println!("Override limit: {}", loader.config().overrides.max_hours);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: SchedulingConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the YAML file (e.g., "./config/scheduling.yaml")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - The file is missing or unreadable
    /// - The file contains invalid YAML
    /// - A value is out of range
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        Self::parse(&content, &path_str)
    }

    /// Builds a loader from YAML text, e.g. for tests or embedded defaults.
    ///
    /// # Example
    ///
    /// ```
    /// use shift_engine::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::from_yaml_str("overlap:\n  check_adjacent_dates: false\n")?;
    /// assert!(!loader.config().overlap.check_adjacent_dates);
    /// # Ok::<(), shift_engine::error::EngineError>(())
    /// ```
    pub fn from_yaml_str(content: &str) -> EngineResult<Self> {
        Self::parse(content, "<inline>")
    }

    fn parse(content: &str, path: &str) -> EngineResult<Self> {
        // An empty document deserializes to unit, not to an empty mapping.
        let config = if content.trim().is_empty() {
            SchedulingConfig::default()
        } else {
            serde_yaml::from_str(content).map_err(|e| EngineError::ConfigParseError {
                path: path.to_string(),
                message: e.to_string(),
            })?
        };

        Self::validate(&config, path)?;
        Ok(Self { config })
    }

    fn validate(config: &SchedulingConfig, path: &str) -> EngineResult<()> {
        if config.overrides.max_hours < Decimal::ZERO {
            return Err(EngineError::ConfigParseError {
                path: path.to_string(),
                message: format!(
                    "overrides.max_hours must not be negative, got {}",
                    config.overrides.max_hours
                ),
            });
        }
        Ok(())
    }

    /// Returns the loaded configuration.
    pub fn config(&self) -> &SchedulingConfig {
        &self.config
    }

    /// Consumes the loader and returns the configuration.
    pub fn into_config(self) -> SchedulingConfig {
        self.config
    }
}
