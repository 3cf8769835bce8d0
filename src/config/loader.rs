//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the scheduler
//! configuration from a YAML file.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{EngineError, EngineResult};

use super::types::{ExportMode, PolicyConfig, SchedulerConfig};

/// Loads and provides access to the scheduler configuration.
///
/// # Example
///
/// ```no_run
/// use shift_roster::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/scheduler.yaml")?;
/// println!("Slots need {} staff", loader.policy().min_staff_per_shift);
/// # Ok::<(), shift_roster::error::EngineError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: SchedulerConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified YAML file.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` on success, or an error if:
    /// - The file is missing
    /// - The file contains invalid YAML or unknown values
    /// - A policy value is out of range
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let config: SchedulerConfig =
            serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
                path: path_str.clone(),
                message: e.to_string(),
            })?;

        debug!(path = %path_str, "Loaded scheduler configuration");
        Self::from_config(config)
    }

    /// Wraps an in-memory configuration after validating it.
    pub fn from_config(config: SchedulerConfig) -> EngineResult<Self> {
        validate_policy(&config.policy)?;
        Ok(Self { config })
    }

    /// Returns the underlying configuration.
    pub fn config(&self) -> &SchedulerConfig {
        &self.config
    }

    /// Returns the staffing policy.
    pub fn policy(&self) -> PolicyConfig {
        self.config.policy
    }

    /// Returns the configured seed, if any.
    pub fn seed(&self) -> Option<u64> {
        self.config.random.seed
    }

    /// Returns the default CSV path for import and export prompts.
    pub fn default_csv_path(&self) -> &str {
        &self.config.io.default_csv_path
    }

    /// Returns what CSV export writes.
    pub fn export_mode(&self) -> ExportMode {
        self.config.io.export_mode
    }

    /// Returns the API listen address.
    pub fn server_addr(&self) -> &str {
        &self.config.server.addr
    }
}

fn validate_policy(policy: &PolicyConfig) -> EngineResult<()> {
    if policy.min_staff_per_shift == 0 {
        return Err(EngineError::InvalidConfig {
            field: "policy.min_staff_per_shift".to_string(),
            message: "must be at least 1".to_string(),
        });
    }
    if !(1..=7).contains(&policy.max_days_per_week) {
        return Err(EngineError::InvalidConfig {
            field: "policy.max_days_per_week".to_string(),
            message: format!("must be between 1 and 7, got {}", policy.max_days_per_week),
        });
    }
    Ok(())
}
