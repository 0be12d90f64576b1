use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers;
use crate::services::BookingService;

pub fn appointment_routes(service: BookingService) -> Router {
    Router::new()
        .route("/availability/{doctor_id}", get(handlers::get_availability))
        .route("/book", post(handlers::book_appointment))
        .with_state(service)
}
