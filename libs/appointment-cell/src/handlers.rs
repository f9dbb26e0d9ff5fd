// libs/appointment-cell/src/handlers.rs
use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};

use shared_models::error::AppError;
use shared_utils::AppState;

use crate::models::{AppointmentError, CreateAppointmentRequest};
use crate::services::{AppointmentAdmission, AppointmentService};

impl From<AppointmentError> for AppError {
    fn from(e: AppointmentError) -> Self {
        match e {
            AppointmentError::DoctorNotFound => AppError::NotFound("Doctor not found".to_string()),
            AppointmentError::NotFound => AppError::NotFound("Appointment not found".to_string()),
            AppointmentError::InvalidPatientName(msg) => AppError::BadRequest(msg),
            AppointmentError::DatabaseError(msg) => AppError::Database(msg),
            rejection => AppError::Rejected(rejection.to_string()),
        }
    }
}

#[axum::debug_handler]
pub async fn list_appointments(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Value>, AppError> {
    let appointment_service = AppointmentService::new(&state.database);
    let appointments = appointment_service.list_appointments().await?;

    Ok(Json(json!(appointments)))
}

#[axum::debug_handler]
pub async fn get_doctor_appointments_on_day(
    State(state): State<Arc<AppState>>,
    Path((doctor_id, month, day, year)): Path<(i64, String, String, String)>,
) -> Result<Json<Value>, AppError> {
    let appointment_service = AppointmentService::new(&state.database);
    let appointments = appointment_service
        .filter_by_doctor_and_date(doctor_id, &month, &day, &year)
        .await?;

    Ok(Json(json!({ "appointments": appointments })))
}

#[axum::debug_handler]
pub async fn create_appointment(
    State(state): State<Arc<AppState>>,
    Path(doctor_id): Path<i64>,
    Json(request): Json<CreateAppointmentRequest>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let admission = AppointmentAdmission::new(&state.database);
    let appointment = admission.admit(doctor_id, request).await?;

    Ok((StatusCode::CREATED, Json(json!({ "posted_appointment": appointment }))))
}

#[axum::debug_handler]
pub async fn delete_appointment(
    State(state): State<Arc<AppState>>,
    Path(appointment_id): Path<i64>,
) -> Result<Json<Value>, AppError> {
    let appointment_service = AppointmentService::new(&state.database);
    let deleted = appointment_service.delete_appointment(appointment_id).await?;

    Ok(Json(json!({ "deleted": deleted })))
}
