//! Key-value settings persistence.
//!
//! The presenter saves the schedule between sessions through a
//! [`SettingsStore`]. Each schedule field lives under a fixed string key and
//! is stored as text. Restoring never fails: missing keys fall back to the
//! defaults and unreadable values are coerced the same way user input is.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::error::{EngineError, EngineResult};
use crate::models::{Currency, Schedule, WorkingDays};

use super::loader::MAX_HOUR;

/// Key of the annual salary.
pub const SALARY_KEY: &str = "salary";
/// Key of the work window start hour.
pub const START_HOUR_KEY: &str = "startHour";
/// Key of the work window end hour.
pub const END_HOUR_KEY: &str = "endHour";
/// Key of the display currency code.
pub const CURRENCY_KEY: &str = "currency";
/// Key of the working day flags (seven `0`/`1` characters, Sunday first).
pub const WORKING_DAYS_KEY: &str = "workingDays";

/// A string key-value store for presenter settings.
pub trait SettingsStore {
    /// Returns the value stored under `key`, if any.
    fn get(&self, key: &str) -> Option<String>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: String) -> EngineResult<()>;

    /// Stores several values at once.
    ///
    /// The default implementation calls [`SettingsStore::set`] for each pair.
    fn set_many(&mut self, entries: Vec<(&str, String)>) -> EngineResult<()> {
        for (key, value) in entries {
            self.set(key, value)?;
        }
        Ok(())
    }
}

/// A settings store that lives only as long as the process.
#[derive(Debug, Clone, Default)]
pub struct MemorySettingsStore {
    values: BTreeMap<String, String>,
}

impl MemorySettingsStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl SettingsStore for MemorySettingsStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) -> EngineResult<()> {
        self.values.insert(key.to_string(), value);
        Ok(())
    }
}

/// A settings store backed by a JSON object on disk.
///
/// The file is read once on open and rewritten after every change.
#[derive(Debug, Clone)]
pub struct JsonFileSettingsStore {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl JsonFileSettingsStore {
    /// Opens the store at `path`. A missing file is an empty store.
    ///
    /// # Returns
    ///
    /// Returns an error if the file exists but cannot be read (`SettingsIo`)
    /// or does not contain a JSON object of strings (`SettingsParse`).
    pub fn open<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref().to_path_buf();

        if !path.exists() {
            debug!(path = %path.display(), "settings file absent, starting empty");
            return Ok(Self {
                path,
                values: BTreeMap::new(),
            });
        }

        let content = fs::read_to_string(&path).map_err(|e| EngineError::SettingsIo {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        let values = serde_json::from_str(&content).map_err(|e| EngineError::SettingsParse {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        Ok(Self { path, values })
    }

    /// Returns the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> EngineResult<()> {
        let io_error = |message: String| EngineError::SettingsIo {
            path: self.path.display().to_string(),
            message,
        };

        let content = serde_json::to_string_pretty(&self.values).map_err(|e| io_error(e.to_string()))?;
        fs::write(&self.path, content).map_err(|e| io_error(e.to_string()))?;

        debug!(path = %self.path.display(), keys = self.values.len(), "settings saved");
        Ok(())
    }
}

impl SettingsStore for JsonFileSettingsStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) -> EngineResult<()> {
        self.values.insert(key.to_string(), value);
        self.flush()
    }

    fn set_many(&mut self, entries: Vec<(&str, String)>) -> EngineResult<()> {
        for (key, value) in entries {
            self.values.insert(key.to_string(), value);
        }
        self.flush()
    }
}

/// Parses a stored number, coercing anything unreadable to zero.
fn coerce_number<T: FromStr + Default>(key: &str, raw: &str) -> T {
    match raw.trim().parse() {
        Ok(value) => value,
        Err(_) => {
            warn!(key, value = raw, "non-numeric setting coerced to 0");
            T::default()
        }
    }
}

/// Rebuilds a schedule from the store, field by field.
///
/// - a missing key keeps the value from `defaults`
/// - a non-numeric salary or hour becomes 0, and a negative salary becomes 0
/// - an hour past [`MAX_HOUR`] is clamped to it
/// - an unknown currency code or malformed day flags keep the default
///
/// # Example
///
/// ```
/// use salary_accrual::config::{MemorySettingsStore, SettingsStore, restore_schedule};
/// use salary_accrual::models::Schedule;
/// use rust_decimal::Decimal;
///
/// let mut store = MemorySettingsStore::new();
/// store.set("salary", "abc".to_string()).unwrap();
/// store.set("startHour", "9".to_string()).unwrap();
///
/// let schedule = restore_schedule(&store, &Schedule::default());
/// assert_eq!(schedule.annual_salary, Decimal::ZERO);
/// assert_eq!(schedule.start_hour, 9);
/// assert_eq!(schedule.end_hour, 18);
/// ```
pub fn restore_schedule<S: SettingsStore + ?Sized>(store: &S, defaults: &Schedule) -> Schedule {
    let mut schedule = defaults.clone();

    if let Some(raw) = store.get(SALARY_KEY) {
        schedule.annual_salary = coerce_number::<Decimal>(SALARY_KEY, &raw).max(Decimal::ZERO);
    }
    if let Some(raw) = store.get(START_HOUR_KEY) {
        schedule.start_hour = coerce_number::<u32>(START_HOUR_KEY, &raw).min(MAX_HOUR);
    }
    if let Some(raw) = store.get(END_HOUR_KEY) {
        schedule.end_hour = coerce_number::<u32>(END_HOUR_KEY, &raw).min(MAX_HOUR);
    }
    if let Some(raw) = store.get(CURRENCY_KEY) {
        match raw.parse::<Currency>() {
            Ok(currency) => schedule.currency = currency,
            Err(e) => warn!(error = %e, "keeping default currency"),
        }
    }
    if let Some(raw) = store.get(WORKING_DAYS_KEY) {
        match WorkingDays::from_flag_string(&raw) {
            Some(days) => schedule.working_days = days,
            None => warn!(value = %raw, "malformed working day flags, keeping defaults"),
        }
    }

    schedule
}

/// Writes every schedule field to the store.
pub fn persist_schedule<S: SettingsStore + ?Sized>(store: &mut S, schedule: &Schedule) -> EngineResult<()> {
    store.set_many(vec![
        (SALARY_KEY, schedule.annual_salary.to_string()),
        (START_HOUR_KEY, schedule.start_hour.to_string()),
        (END_HOUR_KEY, schedule.end_hour.to_string()),
        (CURRENCY_KEY, schedule.currency.code().to_string()),
        (WORKING_DAYS_KEY, schedule.working_days.to_flag_string()),
    ])
}
