use std::collections::HashMap;

use tokio::sync::{Mutex, MutexGuard};

use crate::models::Booking;

/// Per-doctor booking lists, one lock per doctor.
///
/// The set of doctors is fixed at construction, so the outer map is never
/// written afterwards and bookings for different doctors never contend.
#[derive(Debug, Default)]
pub struct BookingStore {
    bookings: HashMap<String, Mutex<Vec<Booking>>>,
}

impl BookingStore {
    pub fn new<I, S>(doctor_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let bookings = doctor_ids
            .into_iter()
            .map(|id| (id.into(), Mutex::new(Vec::new())))
            .collect();

        Self { bookings }
    }

    /// Locks one doctor's list. `None` for ids the store was not built with.
    pub async fn lock(&self, doctor_id: &str) -> Option<MutexGuard<'_, Vec<Booking>>> {
        match self.bookings.get(doctor_id) {
            Some(list) => Some(list.lock().await),
            None => None,
        }
    }

    pub async fn snapshot(&self, doctor_id: &str) -> Option<Vec<Booking>> {
        self.lock(doctor_id).await.map(|list| list.clone())
    }
}
