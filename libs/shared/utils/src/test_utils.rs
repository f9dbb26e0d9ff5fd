use serde_json::{json, Value};
use tracing::debug;

use shared_database::Database;
use shared_models::{Appointment, AppointmentKind, Doctor, NewAppointment, NewDoctor};

/// Writes a doctor straight into the store.
pub async fn seed_doctor(database: &Database, first_name: &str, last_name: &str) -> Doctor {
    let doctor = database.doctors
        .insert(NewDoctor {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
        })
        .await
        .expect("seeding a doctor should succeed");

    debug!("Seeded doctor {}", doctor.id);
    doctor
}

/// Writes an appointment straight into the store, skipping admission. Date
/// and time must already be in normalized form.
pub async fn seed_appointment(
    database: &Database,
    doctor_id: i64,
    patient_first_name: &str,
    patient_last_name: &str,
    date: &str,
    time: &str,
) -> Appointment {
    database.appointments
        .insert(NewAppointment {
            patient_first_name: patient_first_name.to_string(),
            patient_last_name: patient_last_name.to_string(),
            date: date.to_string(),
            time: time.to_string(),
            kind: AppointmentKind::NewPatient,
            doctor_id,
        })
        .await
        .expect("seeding an appointment should succeed")
}

/// JSON rows as PostgREST returns them.
pub struct MockSupabaseResponses;

impl MockSupabaseResponses {
    pub fn doctor_response(id: i64, first_name: &str, last_name: &str) -> Value {
        json!({
            "id": id,
            "first_name": first_name,
            "last_name": last_name
        })
    }

    pub fn appointment_response(id: i64, doctor_id: i64, date: &str, time: &str, kind: &str) -> Value {
        json!({
            "id": id,
            "patient_first_name": "test_fn",
            "patient_last_name": "test_ln",
            "date": date,
            "time": time,
            "kind": kind,
            "doctor_id": doctor_id
        })
    }

    /// Body for `POST /appointments/{doctor_id}`.
    pub fn booking_body(date: &str, time: &str, kind: &str) -> Value {
        json!({
            "patient_first_name": "Test_fn",
            "patient_last_name": "Test_ln",
            "date": date,
            "time": time,
            "kind": kind
        })
    }
}
