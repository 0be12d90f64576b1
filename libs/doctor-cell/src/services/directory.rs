use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use tracing::{debug, info};

use crate::models::{Doctor, DoctorError, TIME_FORMAT};

/// Read-only doctor lookup table, loaded once before any booking traffic.
#[derive(Debug, Clone, Default)]
pub struct DoctorDirectory {
    doctors: BTreeMap<String, Doctor>,
}

impl DoctorDirectory {
    pub fn new(doctors: impl IntoIterator<Item = Doctor>) -> Result<Self, DoctorError> {
        let mut map = BTreeMap::new();

        for doctor in doctors {
            Self::validate(&doctor)?;
            if map.insert(doctor.id.clone(), doctor).is_some() {
                return Err(DoctorError::ValidationError("duplicate doctor id".to_string()));
            }
        }

        Ok(Self { doctors: map })
    }

    /// Parses a JSON object mapping doctor id to `{name, work_hours}`.
    pub fn from_json_str(raw: &str) -> Result<Self, DoctorError> {
        let entries: BTreeMap<String, Doctor> = serde_json::from_str(raw)?;

        Self::new(entries.into_iter().map(|(id, mut doctor)| {
            doctor.id = id;
            doctor
        }))
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, DoctorError> {
        let path = path.as_ref();
        debug!("Loading doctor directory from {}", path.display());

        let raw = fs::read_to_string(path).map_err(|source| DoctorError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let directory = Self::from_json_str(&raw)?;
        info!("Loaded {} doctors from {}", directory.len(), path.display());

        Ok(directory)
    }

    fn validate(doctor: &Doctor) -> Result<(), DoctorError> {
        if doctor.id.trim().is_empty() {
            return Err(DoctorError::ValidationError("doctor id must not be empty".to_string()));
        }
        if doctor.name.trim().is_empty() {
            return Err(DoctorError::ValidationError(format!(
                "doctor {} has an empty name",
                doctor.id
            )));
        }
        // start == end is allowed and simply offers nothing.
        if doctor.work_hours.start > doctor.work_hours.end {
            return Err(DoctorError::InvalidWorkHours {
                id: doctor.id.clone(),
                start: doctor.work_hours.start.format(TIME_FORMAT).to_string(),
                end: doctor.work_hours.end.format(TIME_FORMAT).to_string(),
            });
        }
        Ok(())
    }

    pub fn get_doctor(&self, id: &str) -> Result<&Doctor, DoctorError> {
        debug!("Looking up doctor: {}", id);
        self.doctors
            .get(id)
            .ok_or_else(|| DoctorError::NotFound(id.to_string()))
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.doctors.keys().map(String::as_str)
    }

    pub fn as_map(&self) -> &BTreeMap<String, Doctor> {
        &self.doctors
    }

    pub fn len(&self) -> usize {
        self.doctors.len()
    }
}
