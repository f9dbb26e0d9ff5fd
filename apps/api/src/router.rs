use std::sync::Arc;

use axum::{
    Router,
    http::{header, StatusCode},
    response::IntoResponse,
    routing::get,
};

use appointment_cell::router::appointment_routes;
use doctor_cell::router::doctor_routes;
use shared_utils::AppState;

async fn index() -> impl IntoResponse {
    (StatusCode::FOUND, [(header::LOCATION, "/doctors")])
}

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(index))
        .nest("/doctors", doctor_routes(state.clone()))
        .nest("/appointments", appointment_routes(state))
}
