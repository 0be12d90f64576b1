use std::path::PathBuf;

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Wall-clock format used for work hours, slots and booking times.
pub const TIME_FORMAT: &str = "%H:%M";

/// Serde adapter for `NaiveTime` values written as `HH:MM`.
pub mod hh_mm {
    use chrono::NaiveTime;
    use serde::{de, Deserialize, Deserializer, Serializer};

    use super::TIME_FORMAT;

    pub fn serialize<S>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(&time.format(TIME_FORMAT))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        NaiveTime::parse_from_str(raw.trim(), TIME_FORMAT)
            .map_err(|e| de::Error::custom(format!("invalid time '{}': {}", raw, e)))
    }
}

/// Daily half-open interval `[start, end)` in which a doctor takes bookings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkHours {
    #[serde(with = "hh_mm")]
    pub start: NaiveTime,
    #[serde(with = "hh_mm")]
    pub end: NaiveTime,
}

impl WorkHours {
    pub fn new(start: NaiveTime, end: NaiveTime) -> Self {
        Self { start, end }
    }

    pub fn contains(&self, time: NaiveTime) -> bool {
        self.start <= time && time < self.end
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Doctor {
    /// Filled from the directory key when loading; the key already carries it on output.
    #[serde(default, skip_serializing)]
    pub id: String,
    pub name: String,
    pub work_hours: WorkHours,
}

#[derive(Error, Debug)]
pub enum DoctorError {
    #[error("Doctor not found")]
    NotFound(String),

    #[error("Doctor {id} has work hours starting after they end ({start} > {end})")]
    InvalidWorkHours {
        id: String,
        start: String,
        end: String,
    },

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Failed to read doctor file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse doctor data: {0}")]
    Parse(#[from] serde_json::Error),
}
