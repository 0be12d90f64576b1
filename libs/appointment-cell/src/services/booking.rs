use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info, warn};
use uuid::Uuid;

use doctor_cell::DoctorDirectory;

use crate::models::{AppointmentError, BookAppointmentRequest, Booking};
use crate::services::slots::{check_booking, enumerate_slots, format_time_of_day};
use crate::services::store::BookingStore;

/// Resolves doctors through the directory and runs slot enumeration and
/// booking against the shared store.
#[derive(Debug, Clone)]
pub struct BookingService {
    directory: Arc<DoctorDirectory>,
    store: Arc<BookingStore>,
}

impl BookingService {
    pub fn new(directory: Arc<DoctorDirectory>) -> Self {
        let store = Arc::new(BookingStore::new(directory.ids()));
        Self { directory, store }
    }

    /// Open slots for a doctor as `HH:MM` strings, ascending.
    pub async fn available_slots(&self, doctor_id: &str) -> Result<Vec<String>, AppointmentError> {
        let doctor = self
            .directory
            .get_doctor(doctor_id)
            .map_err(|_| AppointmentError::DoctorNotFound)?;

        let bookings = self
            .store
            .lock(doctor_id)
            .await
            .ok_or(AppointmentError::DoctorNotFound)?;

        let slots: Vec<String> = enumerate_slots(&doctor.work_hours, &bookings)
            .into_iter()
            .map(format_time_of_day)
            .collect();

        debug!("Doctor {} has {} open slots", doctor_id, slots.len());
        Ok(slots)
    }

    /// Validates and commits a booking. Checks run in order and the first
    /// failure wins: missing fields, unknown doctor, unparsable time, outside
    /// work hours, already booked.
    pub async fn book(&self, request: BookAppointmentRequest) -> Result<Booking, AppointmentError> {
        let new_booking = request.validate().map_err(|e| {
            warn!("Rejected booking request: {}", e);
            e
        })?;

        let doctor = self
            .directory
            .get_doctor(&new_booking.doctor_id)
            .map_err(|_| {
                warn!("Booking for unknown doctor {}", new_booking.doctor_id);
                AppointmentError::DoctorNotFound
            })?;

        // Held until the append so check-then-commit is atomic per doctor.
        let mut bookings = self
            .store
            .lock(&doctor.id)
            .await
            .ok_or(AppointmentError::DoctorNotFound)?;

        let time = check_booking(&doctor.work_hours, &bookings, &new_booking.time).map_err(|e| {
            warn!(
                "Rejected booking for doctor {} at {}: {}",
                doctor.id, new_booking.time, e
            );
            e
        })?;

        let booking = Booking {
            id: Uuid::new_v4(),
            time: format_time_of_day(time),
            patient_name: new_booking.patient_name,
            created_at: Utc::now(),
        };
        bookings.push(booking.clone());

        info!(
            "Booked {} with doctor {} (booking {})",
            booking.time, doctor.id, booking.id
        );

        Ok(booking)
    }

    /// Copy of a doctor's bookings in insertion order.
    pub async fn bookings_for(&self, doctor_id: &str) -> Result<Vec<Booking>, AppointmentError> {
        self.store
            .snapshot(doctor_id)
            .await
            .ok_or(AppointmentError::DoctorNotFound)
    }
}
