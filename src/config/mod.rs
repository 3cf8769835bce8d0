//! Configuration loading and management for the shift roster.
//!
//! This module provides functionality to load the scheduler configuration
//! from a YAML file: staffing policy, random seed, file defaults and the
//! API listen address.
//!
//! # Example
//!
//! ```no_run
//! use shift_roster::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/scheduler.yaml").unwrap();
//! println!("Weekly cap: {} days", config.policy().max_days_per_week);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{ExportMode, IoConfig, PolicyConfig, RandomConfig, SchedulerConfig, ServerConfig};
