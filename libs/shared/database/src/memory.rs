use std::collections::BTreeMap;

use anyhow::{Result, anyhow};
use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use shared_models::{Appointment, Doctor, NewAppointment, NewDoctor};

use crate::store::{AppointmentStore, DoctorStore};

#[derive(Debug, Default)]
struct Tables {
    doctors: BTreeMap<i64, Doctor>,
    appointments: BTreeMap<i64, Appointment>,
    last_doctor_id: i64,
    last_appointment_id: i64,
}

/// Process-local backend holding both tables behind one lock. Ids start at 1
/// and are never reused.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    tables: RwLock<Tables>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DoctorStore for InMemoryStore {
    async fn list_all(&self) -> Result<Vec<Doctor>> {
        let tables = self.tables.read().await;
        Ok(tables.doctors.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Doctor>> {
        let tables = self.tables.read().await;
        Ok(tables.doctors.get(&id).cloned())
    }

    async fn insert(&self, doctor: NewDoctor) -> Result<Doctor> {
        let mut tables = self.tables.write().await;
        tables.last_doctor_id += 1;

        let doctor = Doctor {
            id: tables.last_doctor_id,
            first_name: doctor.first_name,
            last_name: doctor.last_name,
        };
        tables.doctors.insert(doctor.id, doctor.clone());

        debug!("Stored doctor {}", doctor.id);
        Ok(doctor)
    }
}

#[async_trait]
impl AppointmentStore for InMemoryStore {
    async fn list_all(&self) -> Result<Vec<Appointment>> {
        let tables = self.tables.read().await;
        Ok(tables.appointments.values().cloned().collect())
    }

    async fn find_by_doctor_and_date(&self, doctor_id: i64, date: &str) -> Result<Vec<Appointment>> {
        let tables = self.tables.read().await;
        Ok(tables
            .appointments
            .values()
            .filter(|apt| apt.doctor_id == doctor_id && apt.date == date)
            .cloned()
            .collect())
    }

    async fn find_by_doctor_date_time(
        &self,
        doctor_id: i64,
        date: &str,
        time: &str,
    ) -> Result<Vec<Appointment>> {
        let tables = self.tables.read().await;
        Ok(tables
            .appointments
            .values()
            .filter(|apt| apt.occupies_slot(doctor_id, date, time))
            .cloned()
            .collect())
    }

    async fn insert(&self, appointment: NewAppointment) -> Result<Appointment> {
        let mut tables = self.tables.write().await;

        if !tables.doctors.contains_key(&appointment.doctor_id) {
            return Err(anyhow!(
                "doctor {} does not exist; appointment rejected",
                appointment.doctor_id
            ));
        }

        tables.last_appointment_id += 1;
        let appointment = appointment.with_id(tables.last_appointment_id);
        tables.appointments.insert(appointment.id, appointment.clone());

        debug!("Stored appointment {} for doctor {}", appointment.id, appointment.doctor_id);
        Ok(appointment)
    }

    async fn delete_by_id(&self, id: i64) -> Result<bool> {
        let mut tables = self.tables.write().await;
        Ok(tables.appointments.remove(&id).is_some())
    }
}
