use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};
use tracing::warn;

use shared_models::error::AppError;

use crate::models::{AppointmentError, BookAppointmentRequest, BookingConfirmation};
use crate::services::BookingService;

#[axum::debug_handler]
pub async fn get_availability(
    State(service): State<BookingService>,
    Path(doctor_id): Path<String>,
) -> Result<Json<Vec<String>>, AppError> {
    let slots = service.available_slots(&doctor_id).await?;
    Ok(Json(slots))
}

#[axum::debug_handler]
pub async fn book_appointment(
    State(service): State<BookingService>,
    payload: Result<Json<BookAppointmentRequest>, JsonRejection>,
) -> Result<Json<BookingConfirmation>, AppError> {
    let Json(request) = payload.map_err(booking_body_error)?;
    let booking = service.book(request).await?;

    Ok(Json(BookingConfirmation {
        message: "Appointment booked successfully".to_string(),
        booking,
    }))
}

/// A body that is not declared as JSON carries none of the required fields.
fn booking_body_error(rejection: JsonRejection) -> AppError {
    warn!("Rejected booking body: {}", rejection.body_text());

    match rejection {
        JsonRejection::MissingJsonContentType(_) => {
            AppointmentError::MissingFields(vec!["doctorId", "time", "patientName"]).into()
        }
        other => AppError::BadRequest(other.body_text()),
    }
}
