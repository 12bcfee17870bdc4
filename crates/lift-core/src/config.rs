//! Configuration of a lift system.
//!
//! Loaded from environment variables or a JSON file; anything not given falls
//! back to `LiftConfig::default()`.
//!
//! | Env Var                | Default |
//! |------------------------|---------|
//! | `LIFT_UNITS`           | `3`     |
//! | `LIFT_CAPACITY`        | `5`     |
//! | `LIFT_MIN_FLOOR`       | `1`     |
//! | `LIFT_MAX_FLOOR`       | `20`    |
//! | `LIFT_INITIAL_FLOOR`   | `1`     |
//! | `LIFT_FLOOR_TRAVEL_MS` | `1000`  |

use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::domain::{Floor, FloorRange};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{key} must be a valid {expected}, got {value:?}")]
    InvalidVar {
        key: &'static str,
        expected: &'static str,
        value: String,
    },

    #[error("failed to read config file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config json: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LiftConfig {
    pub units: usize,
    pub capacity: usize,
    pub min_floor: Floor,
    pub max_floor: Floor,
    pub initial_floor: Floor,
    pub floor_travel_ms: u64,
}

impl Default for LiftConfig {
    fn default() -> Self {
        let floors = FloorRange::default();
        Self {
            units: 3,
            capacity: 5,
            min_floor: floors.min,
            max_floor: floors.max,
            initial_floor: 1,
            floor_travel_ms: 1000,
        }
    }
}

impl LiftConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Like `from_env`, with variables resolved through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let config = Self {
            units: parse_var(&lookup, "LIFT_UNITS", "usize", defaults.units)?,
            capacity: parse_var(&lookup, "LIFT_CAPACITY", "usize", defaults.capacity)?,
            min_floor: parse_var(&lookup, "LIFT_MIN_FLOOR", "i32", defaults.min_floor)?,
            max_floor: parse_var(&lookup, "LIFT_MAX_FLOOR", "i32", defaults.max_floor)?,
            initial_floor: parse_var(
                &lookup,
                "LIFT_INITIAL_FLOOR",
                "i32",
                defaults.initial_floor,
            )?,
            floor_travel_ms: parse_var(
                &lookup,
                "LIFT_FLOOR_TRAVEL_MS",
                "u64",
                defaults.floor_travel_ms,
            )?,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&contents)
    }

    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.capacity == 0 {
            return Err(ConfigError::Invalid("capacity must be at least 1".into()));
        }
        let floors = self.floors();
        if floors.is_empty() {
            return Err(ConfigError::Invalid(format!("floor range {floors} is empty")));
        }
        if !floors.contains(self.initial_floor) {
            return Err(ConfigError::Invalid(format!(
                "initial floor {} is outside {floors}",
                self.initial_floor
            )));
        }
        Ok(())
    }

    pub fn floors(&self) -> FloorRange {
        FloorRange::new(self.min_floor, self.max_floor)
    }

    pub fn floor_travel(&self) -> Duration {
        Duration::from_millis(self.floor_travel_ms)
    }
}

fn parse_var<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
    expected: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match lookup(key) {
        None => Ok(default),
        Some(value) => value.trim().parse().map_err(|_| ConfigError::InvalidVar {
            key,
            expected,
            value,
        }),
    }
}
