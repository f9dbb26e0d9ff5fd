// libs/appointment-cell/src/router.rs
use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};

use shared_utils::AppState;

use crate::handlers;

pub fn appointment_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(handlers::list_appointments))
        // {id} is the doctor for POST and the per-day listing, the appointment for DELETE
        .route("/{id}", post(handlers::create_appointment).delete(handlers::delete_appointment))
        .route("/{id}/{month}/{day}/{year}", get(handlers::get_doctor_appointments_on_day))
        .with_state(state)
}
