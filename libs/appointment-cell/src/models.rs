use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use shared_models::error::AppError;

/// A committed reservation. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: Uuid,
    /// Canonical `HH:MM`.
    pub time: String,
    pub patient_name: String,
    pub created_at: DateTime<Utc>,
}

/// Booking request as received from the client. Every field is optional here
/// so that a missing field becomes `MissingFields` rather than a decode error.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookAppointmentRequest {
    pub doctor_id: Option<String>,
    pub time: Option<String>,
    pub patient_name: Option<String>,
}

/// A booking request with all required fields present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBooking {
    pub doctor_id: String,
    pub time: String,
    pub patient_name: String,
}

impl BookAppointmentRequest {
    pub fn new(
        doctor_id: impl Into<String>,
        time: impl Into<String>,
        patient_name: impl Into<String>,
    ) -> Self {
        Self {
            doctor_id: Some(doctor_id.into()),
            time: Some(time.into()),
            patient_name: Some(patient_name.into()),
        }
    }

    pub fn validate(self) -> Result<NewBooking, AppointmentError> {
        fn present(value: Option<String>) -> Option<String> {
            value
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        }

        let doctor_id = present(self.doctor_id);
        let time = present(self.time);
        let patient_name = present(self.patient_name);

        match (doctor_id, time, patient_name) {
            (Some(doctor_id), Some(time), Some(patient_name)) => Ok(NewBooking {
                doctor_id,
                time,
                patient_name,
            }),
            (doctor_id, time, patient_name) => {
                let mut missing = Vec::new();
                if doctor_id.is_none() {
                    missing.push("doctorId");
                }
                if time.is_none() {
                    missing.push("time");
                }
                if patient_name.is_none() {
                    missing.push("patientName");
                }
                Err(AppointmentError::MissingFields(missing))
            }
        }
    }
}

#[derive(Debug, Serialize)]
pub struct BookingConfirmation {
    pub message: String,
    pub booking: Booking,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AppointmentError {
    #[error("Missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),

    #[error("Doctor not found")]
    DoctorNotFound,

    #[error("Invalid time '{0}', expected HH:MM")]
    InvalidTime(String),

    #[error("Time is outside of work hours")]
    OutsideWorkHours,

    #[error("Time slot already booked")]
    SlotAlreadyBooked,
}

impl From<AppointmentError> for AppError {
    fn from(err: AppointmentError) -> Self {
        match err {
            AppointmentError::MissingFields(_) => AppError::BadRequest(err.to_string()),
            AppointmentError::DoctorNotFound => AppError::NotFound(err.to_string()),
            AppointmentError::InvalidTime(_) => AppError::ValidationError(err.to_string()),
            AppointmentError::OutsideWorkHours => AppError::ValidationError(err.to_string()),
            AppointmentError::SlotAlreadyBooked => AppError::Conflict(err.to_string()),
        }
    }
}
