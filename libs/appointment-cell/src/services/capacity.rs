use std::sync::Arc;

use tracing::{debug, warn};

use shared_database::AppointmentStore;

use crate::models::AppointmentError;

/// Counts bookings in one exact (doctor, date, time) slot and refuses a new
/// one once the slot holds `capacity` of them.
pub struct SlotCapacityChecker {
    appointments: Arc<dyn AppointmentStore>,
    capacity: usize,
}

impl SlotCapacityChecker {
    pub fn new(appointments: Arc<dyn AppointmentStore>, capacity: usize) -> Self {
        Self { appointments, capacity }
    }

    /// `date` and `time` must be normalized; matching is string equality.
    pub async fn count_conflicts(
        &self,
        doctor_id: i64,
        date: &str,
        time: &str,
    ) -> Result<usize, AppointmentError> {
        let existing = self.appointments
            .find_by_doctor_date_time(doctor_id, date, time)
            .await
            .map_err(|e| AppointmentError::DatabaseError(e.to_string()))?;

        debug!("Doctor {} has {} appointments on {} at {}", doctor_id, existing.len(), date, time);
        Ok(existing.len())
    }

    pub async fn ensure_capacity(
        &self,
        doctor_id: i64,
        date: &str,
        time: &str,
    ) -> Result<(), AppointmentError> {
        let booked = self.count_conflicts(doctor_id, date, time).await?;

        if booked >= self.capacity {
            warn!("Slot full for doctor {} on {} at {} ({} booked)", doctor_id, date, time, booked);
            return Err(AppointmentError::SlotFull {
                date: date.to_string(),
                time: time.to_string(),
                capacity: self.capacity,
            });
        }

        Ok(())
    }
}
