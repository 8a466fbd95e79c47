//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading a schedule
//! from a YAML file.

use std::fs;
use std::path::Path;

use rust_decimal::Decimal;
use tracing::{debug, info};

use crate::error::{EngineError, EngineResult};
use crate::models::Schedule;

use super::types::ScheduleConfig;

/// The latest hour a work window may open or close at.
pub const MAX_HOUR: u32 = 24;

/// Loads and validates a schedule file.
///
/// # Example
///
/// ```no_run
/// use salary_accrual::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/schedule.yaml").unwrap();
/// let schedule = loader.schedule();
/// println!("Annual salary: {}", schedule.annual_salary);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: ScheduleConfig,
}

impl ConfigLoader {
    /// Loads a schedule from the YAML file at `path`.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` on success, or an error if:
    /// - The file is missing or unreadable (`ConfigNotFound`)
    /// - The file is not valid YAML for a schedule (`ConfigParseError`)
    /// - An hour is past 24 or the salary is negative (`ConfigParseError`)
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let loader = Self::from_yaml_str(&content, &path_str)?;
        info!(path = %path_str, "loaded schedule file");
        Ok(loader)
    }

    /// Parses a schedule from YAML text. `source` names it in errors.
    pub fn from_yaml_str(content: &str, source: &str) -> EngineResult<Self> {
        let config: ScheduleConfig =
            serde_yaml::from_str(content).map_err(|e| EngineError::ConfigParseError {
                path: source.to_string(),
                message: e.to_string(),
            })?;

        Self::validate(&config, source)?;
        debug!(
            source,
            start_hour = config.start_hour,
            end_hour = config.end_hour,
            working_days = config.working_days.len(),
            "parsed schedule config"
        );
        Ok(Self { config })
    }

    fn validate(config: &ScheduleConfig, source: &str) -> EngineResult<()> {
        let parse_error = |message: String| EngineError::ConfigParseError {
            path: source.to_string(),
            message,
        };

        for (field, hour) in [("start_hour", config.start_hour), ("end_hour", config.end_hour)] {
            if hour > MAX_HOUR {
                return Err(parse_error(format!(
                    "{} must be between 0 and {}, got {}",
                    field, MAX_HOUR, hour
                )));
            }
        }

        if config.annual_salary < Decimal::ZERO {
            return Err(parse_error(format!(
                "annual_salary must not be negative, got {}",
                config.annual_salary
            )));
        }

        Ok(())
    }

    /// Returns the schedule described by the file.
    pub fn schedule(&self) -> Schedule {
        Schedule::from(&self.config)
    }
}
