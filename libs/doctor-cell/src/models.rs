use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use shared_models::{Doctor, NewDoctor};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateDoctorRequest {
    pub first_name: String,
    pub last_name: String,
}

impl From<CreateDoctorRequest> for NewDoctor {
    fn from(request: CreateDoctorRequest) -> Self {
        NewDoctor {
            first_name: request.first_name,
            last_name: request.last_name,
        }
    }
}

#[derive(Error, Debug)]
pub enum DoctorError {
    #[error("Doctor not found")]
    NotFound,

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}
