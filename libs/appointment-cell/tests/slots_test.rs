use assert_matches::assert_matches;
use chrono::{NaiveTime, Utc};
use uuid::Uuid;

use appointment_cell::services::slots::{
    check_booking, enumerate_slots, format_time_of_day, parse_time_of_day, slot_grid,
};
use appointment_cell::{AppointmentError, Booking};
use doctor_cell::WorkHours;

fn t(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap()
}

fn booking(time: &str) -> Booking {
    Booking {
        id: Uuid::new_v4(),
        time: time.to_string(),
        patient_name: "Jane Doe".to_string(),
        created_at: Utc::now(),
    }
}

fn formatted(slots: Vec<NaiveTime>) -> Vec<String> {
    slots.into_iter().map(format_time_of_day).collect()
}

#[test]
fn test_grid_excludes_end_boundary() {
    let hours = WorkHours::new(t(9, 0), t(11, 0));

    assert_eq!(
        formatted(enumerate_slots(&hours, &[])),
        vec!["09:00", "09:30", "10:00", "10:30"]
    );
}

#[test]
fn test_booked_slot_is_removed() {
    let hours = WorkHours::new(t(9, 0), t(11, 0));

    assert_eq!(
        formatted(enumerate_slots(&hours, &[booking("09:30")])),
        vec!["09:00", "10:00", "10:30"]
    );
}

#[test]
fn test_off_grid_booking_does_not_remove_grid_slots() {
    let hours = WorkHours::new(t(9, 0), t(11, 0));

    assert_eq!(
        formatted(enumerate_slots(&hours, &[booking("09:15")])),
        vec!["09:00", "09:30", "10:00", "10:30"]
    );
}

#[test]
fn test_grid_is_anchored_at_start() {
    let hours = WorkHours::new(t(9, 15), t(10, 30));

    assert_eq!(formatted(slot_grid(&hours)), vec!["09:15", "09:45", "10:15"]);
}

#[test]
fn test_empty_window_has_no_slots() {
    let hours = WorkHours::new(t(9, 0), t(9, 0));

    assert!(enumerate_slots(&hours, &[]).is_empty());
}

#[test]
fn test_grid_stops_at_midnight() {
    let hours = WorkHours::new(t(23, 0), t(23, 59));

    assert_eq!(formatted(slot_grid(&hours)), vec!["23:00", "23:30"]);
}

#[test]
fn test_enumeration_is_deterministic() {
    let hours = WorkHours::new(t(8, 0), t(12, 0));
    let bookings = vec![booking("08:30"), booking("10:00")];

    let first = enumerate_slots(&hours, &bookings);
    let second = enumerate_slots(&hours, &bookings);
    assert_eq!(first, second);
    assert!(first.windows(2).all(|pair| pair[0] < pair[1]));
}

#[test]
fn test_check_booking_accepts_start_and_off_grid_times() {
    let hours = WorkHours::new(t(9, 0), t(11, 0));

    assert_eq!(check_booking(&hours, &[], "09:00"), Ok(t(9, 0)));
    assert_eq!(check_booking(&hours, &[], "09:15"), Ok(t(9, 15)));
    assert_eq!(check_booking(&hours, &[], "10:59"), Ok(t(10, 59)));
}

#[test]
fn test_check_booking_rejects_end_boundary_and_outside() {
    let hours = WorkHours::new(t(9, 0), t(11, 0));

    assert_eq!(check_booking(&hours, &[], "11:00"), Err(AppointmentError::OutsideWorkHours));
    assert_eq!(check_booking(&hours, &[], "08:59"), Err(AppointmentError::OutsideWorkHours));
    assert_eq!(check_booking(&hours, &[], "23:30"), Err(AppointmentError::OutsideWorkHours));
}

#[test]
fn test_check_booking_rejects_taken_time() {
    let hours = WorkHours::new(t(9, 0), t(11, 0));
    let bookings = vec![booking("09:30")];

    assert_eq!(
        check_booking(&hours, &bookings, "09:30"),
        Err(AppointmentError::SlotAlreadyBooked)
    );
}

#[test]
fn test_work_hours_are_checked_before_conflicts() {
    let hours = WorkHours::new(t(9, 0), t(9, 0));

    assert_eq!(check_booking(&hours, &[], "09:00"), Err(AppointmentError::OutsideWorkHours));
}

#[test]
fn test_unparsable_time_is_invalid() {
    let hours = WorkHours::new(t(9, 0), t(11, 0));

    assert_matches!(check_booking(&hours, &[], "half past nine"), Err(AppointmentError::InvalidTime(raw)) if raw == "half past nine");
    assert_matches!(parse_time_of_day("25:00"), Err(AppointmentError::InvalidTime(_)));
    assert_matches!(parse_time_of_day("09:30:00"), Err(AppointmentError::InvalidTime(_)));
}
