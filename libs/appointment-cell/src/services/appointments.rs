use std::sync::Arc;

use tracing::{debug, info};

use shared_database::{AppointmentStore, Database, DoctorStore};

use crate::models::{Appointment, AppointmentError};
use crate::services::normalize::normalize_date;

/// Read and delete operations on booked appointments.
pub struct AppointmentService {
    doctors: Arc<dyn DoctorStore>,
    appointments: Arc<dyn AppointmentStore>,
}

impl AppointmentService {
    pub fn new(database: &Database) -> Self {
        Self {
            doctors: Arc::clone(&database.doctors),
            appointments: Arc::clone(&database.appointments),
        }
    }

    pub async fn list_appointments(&self) -> Result<Vec<Appointment>, AppointmentError> {
        self.appointments.list_all().await
            .map_err(|e| AppointmentError::DatabaseError(e.to_string()))
    }

    /// A doctor's appointments on one day. The path pieces are joined as
    /// `month/day/year` and normalized the same way booked dates are.
    pub async fn filter_by_doctor_and_date(
        &self,
        doctor_id: i64,
        month: &str,
        day: &str,
        year: &str,
    ) -> Result<Vec<Appointment>, AppointmentError> {
        self.doctors.find_by_id(doctor_id).await
            .map_err(|e| AppointmentError::DatabaseError(e.to_string()))?
            .ok_or(AppointmentError::DoctorNotFound)?;

        let date = normalize_date(&format!("{}/{}/{}", month, day, year));
        debug!("Listing appointments for doctor {} on {}", doctor_id, date);

        self.appointments.find_by_doctor_and_date(doctor_id, &date).await
            .map_err(|e| AppointmentError::DatabaseError(e.to_string()))
    }

    pub async fn delete_appointment(&self, appointment_id: i64) -> Result<i64, AppointmentError> {
        let deleted = self.appointments.delete_by_id(appointment_id).await
            .map_err(|e| AppointmentError::DatabaseError(e.to_string()))?;

        if !deleted {
            return Err(AppointmentError::NotFound);
        }

        info!("Deleted appointment {}", appointment_id);
        Ok(appointment_id)
    }
}
