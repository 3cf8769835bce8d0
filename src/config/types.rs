//! Configuration types for the shift roster.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from the YAML configuration file. Every section and
//! field has a default, so an empty file is a valid configuration.

use serde::{Deserialize, Serialize};

use crate::models::{DEFAULT_MAX_DAYS_PER_WEEK, DEFAULT_MIN_STAFF_PER_SHIFT};

/// Staffing rules applied by the scheduling engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PolicyConfig {
    /// How many employees each (day, shift) slot should hold.
    pub min_staff_per_shift: usize,
    /// The most days any employee may be assigned in the week.
    pub max_days_per_week: u32,
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            min_staff_per_shift: DEFAULT_MIN_STAFF_PER_SHIFT,
            max_days_per_week: DEFAULT_MAX_DAYS_PER_WEEK,
        }
    }
}

/// Random generator settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RandomConfig {
    /// Fixed seed for the backfill pass. A fresh seed is drawn when absent.
    pub seed: Option<u64>,
}

/// What the exported CSV records for each employee and day.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExportMode {
    /// The shift actually assigned, or `N` for a day off.
    #[default]
    Assignments,
    /// The first stated preference, or `N`; re-imports as the original input.
    Preferences,
}

/// File handling settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IoConfig {
    /// File offered when the user accepts the default import/export path.
    pub default_csv_path: String,
    /// What the export writes.
    pub export_mode: ExportMode,
}

impl Default for IoConfig {
    fn default() -> Self {
        Self {
            default_csv_path: "employee_schedule.csv".to_string(),
            export_mode: ExportMode::default(),
        }
    }
}

/// HTTP server settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Socket address the API listens on.
    pub addr: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: "127.0.0.1:3000".to_string(),
        }
    }
}

/// The complete scheduler configuration.
///
/// # Example
///
/// ```
/// use shift_roster::config::{ExportMode, SchedulerConfig};
///
/// let config: SchedulerConfig = serde_yaml::from_str(
///     "policy:\n  max_days_per_week: 4\nio:\n  export_mode: preferences\n",
/// )
/// .unwrap();
/// assert_eq!(config.policy.max_days_per_week, 4);
/// assert_eq!(config.policy.min_staff_per_shift, 2);
/// assert_eq!(config.io.export_mode, ExportMode::Preferences);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SchedulerConfig {
    /// Staffing rules.
    pub policy: PolicyConfig,
    /// Random generator settings.
    pub random: RandomConfig,
    /// File handling settings.
    pub io: IoConfig,
    /// HTTP server settings.
    pub server: ServerConfig,
}
