//! Configuration loading for the shift engine.
//!
//! This module loads the scheduling policy (overlap rules and override
//! bounds) from a YAML file.
//!
//! # Example
//!
//! ```no_run
//! use shift_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/scheduling.yaml").unwrap();
//! println!("Adjacent-date checks: {}", config.config().overlap.check_adjacent_dates);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{OverlapConfig, OverrideConfig, SchedulingConfig};
