// libs/appointment-cell/src/models.rs
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use shared_models::{Appointment, AppointmentKind, NewAppointment};

// ==============================================================================
// REQUEST MODELS
// ==============================================================================

/// Body of `POST /appointments/{doctor_id}`. Date, time and kind arrive as
/// raw strings; admission normalizes and validates them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateAppointmentRequest {
    pub patient_first_name: String,
    pub patient_last_name: String,
    pub date: String,
    pub time: String,
    pub kind: String,
}

// ==============================================================================
// NORMALIZED TIME
// ==============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Meridiem {
    Am,
    Pm,
}

/// A clock string taken apart. `canonical` is the exact text that gets
/// stored and compared; hour and minute are not range-checked here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedTime {
    pub hour: i32,
    pub minute: i32,
    pub meridiem: Meridiem,
    pub canonical: String,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unparseable time '{raw}': {reason}")]
pub struct TimeFormatError {
    pub raw: String,
    pub reason: &'static str,
}

// ==============================================================================
// VALIDATION RULES
// ==============================================================================

#[derive(Debug, Clone)]
pub struct AppointmentValidationRules {
    pub min_hour: i32,
    pub max_hour: i32,
    pub minute_interval: i32,
    pub max_appointments_per_slot: usize,
}

impl Default for AppointmentValidationRules {
    fn default() -> Self {
        Self {
            min_hour: 1,
            max_hour: 12,
            minute_interval: 15,
            max_appointments_per_slot: 3,
        }
    }
}

// ==============================================================================
// ERROR TYPES
// ==============================================================================

#[derive(Error, Debug)]
pub enum AppointmentError {
    #[error("Doctor not found")]
    DoctorNotFound,

    #[error("Appointment not found")]
    NotFound,

    #[error("Invalid time. Please use the format H:MMAM or H:MMPM.")]
    InvalidTime(#[from] TimeFormatError),

    #[error("Invalid kind. Must be New Patient or Follow-up.")]
    InvalidKind,

    #[error("Invalid time. Please provide valid hour.")]
    InvalidHour,

    #[error("Invalid time. Please ensure minutes are a 15 min interval.")]
    InvalidMinuteInterval,

    #[error("{0}")]
    InvalidPatientName(String),

    #[error("Doctor already has {capacity} appointments on {date} at {time}. Choose another day please.")]
    SlotFull {
        date: String,
        time: String,
        capacity: usize,
    },

    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl AppointmentError {
    /// Input the admission rules refused, as opposed to a missing record or
    /// a backend failure.
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            AppointmentError::InvalidTime(_)
                | AppointmentError::InvalidKind
                | AppointmentError::InvalidHour
                | AppointmentError::InvalidMinuteInterval
                | AppointmentError::SlotFull { .. }
        )
    }
}
