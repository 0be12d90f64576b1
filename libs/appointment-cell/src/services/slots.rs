//! Slot enumeration and booking validation over a doctor's work hours.
//!
//! Everything here is pure: results depend only on the work hours and the
//! bookings passed in, never on the current time.

use chrono::{Duration, NaiveTime};

use doctor_cell::{WorkHours, TIME_FORMAT};

use crate::models::{AppointmentError, Booking};

/// Grid step between offered slots.
pub const SLOT_MINUTES: i64 = 30;

pub fn parse_time_of_day(raw: &str) -> Result<NaiveTime, AppointmentError> {
    NaiveTime::parse_from_str(raw.trim(), TIME_FORMAT)
        .map_err(|_| AppointmentError::InvalidTime(raw.to_string()))
}

pub fn format_time_of_day(time: NaiveTime) -> String {
    time.format(TIME_FORMAT).to_string()
}

/// The full slot grid for `hours`: `start`, `start + 30m`, ... strictly before `end`.
pub fn slot_grid(hours: &WorkHours) -> Vec<NaiveTime> {
    let step = Duration::minutes(SLOT_MINUTES);
    let mut grid = Vec::new();
    let mut current = hours.start;

    while current < hours.end {
        grid.push(current);
        let (next, wrapped) = current.overflowing_add_signed(step);
        if wrapped != 0 {
            break;
        }
        current = next;
    }

    grid
}

/// Grid slots that no existing booking occupies, in ascending order.
///
/// Off-grid bookings (e.g. `09:15`) never remove a grid slot.
pub fn enumerate_slots(hours: &WorkHours, bookings: &[Booking]) -> Vec<NaiveTime> {
    let booked: Vec<NaiveTime> = bookings
        .iter()
        .filter_map(|booking| parse_time_of_day(&booking.time).ok())
        .collect();

    slot_grid(hours)
        .into_iter()
        .filter(|slot| !booked.contains(slot))
        .collect()
}

/// Checks a requested time against the work hours and existing bookings.
///
/// The time is not required to sit on the slot grid. Returns the parsed time
/// on success.
pub fn check_booking(
    hours: &WorkHours,
    bookings: &[Booking],
    time: &str,
) -> Result<NaiveTime, AppointmentError> {
    let requested = parse_time_of_day(time)?;

    if !hours.contains(requested) {
        return Err(AppointmentError::OutsideWorkHours);
    }

    let taken = bookings
        .iter()
        .any(|booking| parse_time_of_day(&booking.time).ok() == Some(requested));
    if taken {
        return Err(AppointmentError::SlotAlreadyBooked);
    }

    Ok(requested)
}
