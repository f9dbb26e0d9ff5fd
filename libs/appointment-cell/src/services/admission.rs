// libs/appointment-cell/src/services/admission.rs
use std::sync::Arc;

use tracing::{debug, info, warn};

use shared_database::{AppointmentStore, Database, DoctorLocks, DoctorStore};
use shared_models::check_name;

use crate::models::{
    Appointment, AppointmentError, AppointmentValidationRules, CreateAppointmentRequest,
    NewAppointment,
};
use crate::services::capacity::SlotCapacityChecker;
use crate::services::normalize::{normalize_date, normalize_time};

/// Decides whether a proposed booking becomes an appointment.
///
/// A request moves through doctor lookup, normalization, rule checks and the
/// slot capacity check; the first failing stage rejects it and nothing is
/// written. Capacity check and insert run under the doctor's write lock, so
/// concurrent bookings for one doctor cannot both see a free seat.
pub struct AppointmentAdmission {
    doctors: Arc<dyn DoctorStore>,
    appointments: Arc<dyn AppointmentStore>,
    doctor_locks: Arc<DoctorLocks>,
    capacity_checker: SlotCapacityChecker,
    validation_rules: AppointmentValidationRules,
}

impl AppointmentAdmission {
    pub fn new(database: &Database) -> Self {
        Self::with_rules(database, AppointmentValidationRules::default())
    }

    pub fn with_rules(database: &Database, validation_rules: AppointmentValidationRules) -> Self {
        let capacity_checker = SlotCapacityChecker::new(
            Arc::clone(&database.appointments),
            validation_rules.max_appointments_per_slot,
        );

        Self {
            doctors: Arc::clone(&database.doctors),
            appointments: Arc::clone(&database.appointments),
            doctor_locks: Arc::clone(&database.doctor_locks),
            capacity_checker,
            validation_rules,
        }
    }

    pub async fn admit(
        &self,
        doctor_id: i64,
        request: CreateAppointmentRequest,
    ) -> Result<Appointment, AppointmentError> {
        info!("Admitting appointment for doctor {} on {} at {}",
              doctor_id, request.date, request.time);

        self.doctors.find_by_id(doctor_id).await
            .map_err(|e| AppointmentError::DatabaseError(e.to_string()))?
            .ok_or(AppointmentError::DoctorNotFound)?;

        let date = normalize_date(&request.date);
        let time = normalize_time(&request.time).inspect_err(|e| warn!("Rejected booking: {}", e))?;
        debug!("Normalized {} {} to {} {}", request.date, request.time, date, time.canonical);

        let kind = self.validation_rules.validate(&request.kind, &time)
            .inspect_err(|e| warn!("Rejected booking for doctor {}: {}", doctor_id, e))?;

        check_name("patient_first_name", &request.patient_first_name)
            .and_then(|_| check_name("patient_last_name", &request.patient_last_name))
            .map_err(AppointmentError::InvalidPatientName)
            .inspect_err(|e| warn!("Rejected booking for doctor {}: {}", doctor_id, e))?;

        let new_appointment = NewAppointment {
            patient_first_name: request.patient_first_name,
            patient_last_name: request.patient_last_name,
            date,
            time: time.canonical,
            kind,
            doctor_id,
        };

        let _write_guard = self.doctor_locks.lock(doctor_id).await;

        self.capacity_checker.ensure_capacity(
            doctor_id,
            &new_appointment.date,
            &new_appointment.time,
        ).await?;

        let appointment = self.appointments.insert(new_appointment).await
            .map_err(|e| AppointmentError::DatabaseError(e.to_string()))?;

        info!("Appointment {} booked for doctor {} on {} at {}",
              appointment.id, doctor_id, appointment.date, appointment.time);

        Ok(appointment)
    }
}
