use std::sync::Arc;

use tracing::{debug, info};

use shared_database::{Database, DoctorStore};
use shared_models::check_name;

use crate::models::{CreateDoctorRequest, Doctor, DoctorError, NewDoctor};

pub struct DoctorService {
    doctors: Arc<dyn DoctorStore>,
}

impl DoctorService {
    pub fn new(database: &Database) -> Self {
        Self {
            doctors: Arc::clone(&database.doctors),
        }
    }

    pub async fn list_doctors(&self) -> Result<Vec<Doctor>, DoctorError> {
        debug!("Listing all doctors");

        self.doctors.list_all().await
            .map_err(|e| DoctorError::DatabaseError(e.to_string()))
    }

    pub async fn get_doctor(&self, doctor_id: i64) -> Result<Doctor, DoctorError> {
        debug!("Fetching doctor {}", doctor_id);

        self.doctors.find_by_id(doctor_id).await
            .map_err(|e| DoctorError::DatabaseError(e.to_string()))?
            .ok_or(DoctorError::NotFound)
    }

    pub async fn create_doctor(&self, request: CreateDoctorRequest) -> Result<Doctor, DoctorError> {
        let new_doctor = NewDoctor::from(request);
        validate_name("first_name", &new_doctor.first_name)?;
        validate_name("last_name", &new_doctor.last_name)?;

        let doctor = self.doctors.insert(new_doctor).await
            .map_err(|e| DoctorError::DatabaseError(e.to_string()))?;

        info!("Created doctor {} ({} {})", doctor.id, doctor.first_name, doctor.last_name);
        Ok(doctor)
    }
}

fn validate_name(field: &str, value: &str) -> Result<(), DoctorError> {
    check_name(field, value).map_err(DoctorError::ValidationError)
}
