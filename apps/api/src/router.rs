use std::sync::Arc;

use axum::{
    Router,
    routing::get,
};

use appointment_cell::{router::appointment_routes, BookingService};
use doctor_cell::{router::doctor_routes, DoctorDirectory};

pub fn create_router(directory: Arc<DoctorDirectory>, bookings: BookingService) -> Router {
    Router::new()
        .route("/", get(|| async { "Clinic scheduler API is running!" }))
        .nest("/doctors", doctor_routes(directory))
        .merge(appointment_routes(bookings))
}
