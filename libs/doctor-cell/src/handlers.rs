use std::collections::BTreeMap;
use std::sync::Arc;

use axum::{extract::State, Json};

use crate::models::Doctor;
use crate::services::DoctorDirectory;

/// Returns the whole directory as an id -> doctor mapping.
#[axum::debug_handler]
pub async fn list_doctors(
    State(directory): State<Arc<DoctorDirectory>>,
) -> Json<BTreeMap<String, Doctor>> {
    Json(directory.as_map().clone())
}
