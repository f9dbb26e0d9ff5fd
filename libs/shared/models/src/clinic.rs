use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ==============================================================================
// NAMES
// ==============================================================================

/// Name columns on both tables are varchar(40) and non-null.
pub const MAX_NAME_LENGTH: usize = 40;

/// Why `value` cannot go into the name column `field`, if it cannot.
pub fn check_name(field: &str, value: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        return Err(format!("{} is required", field));
    }
    if value.chars().count() > MAX_NAME_LENGTH {
        return Err(format!("{} must be at most {} characters", field, MAX_NAME_LENGTH));
    }
    Ok(())
}

// ==============================================================================
// DOCTORS
// ==============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Doctor {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
}

/// A doctor that has not been assigned an id by the store yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewDoctor {
    pub first_name: String,
    pub last_name: String,
}

// ==============================================================================
// APPOINTMENTS
// ==============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AppointmentKind {
    #[serde(rename = "New Patient")]
    NewPatient,
    #[serde(rename = "Follow-up")]
    FollowUp,
}

impl AppointmentKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            AppointmentKind::NewPatient => "New Patient",
            AppointmentKind::FollowUp => "Follow-up",
        }
    }
}

impl fmt::Display for AppointmentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownAppointmentKind(pub String);

impl fmt::Display for UnknownAppointmentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown appointment kind: {}", self.0)
    }
}

impl std::error::Error for UnknownAppointmentKind {}

impl FromStr for AppointmentKind {
    type Err = UnknownAppointmentKind;

    /// Exact, case-sensitive match on the wire names.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "New Patient" => Ok(AppointmentKind::NewPatient),
            "Follow-up" => Ok(AppointmentKind::FollowUp),
            other => Err(UnknownAppointmentKind(other.to_string())),
        }
    }
}

/// A persisted appointment. `date` and `time` always hold the normalized
/// strings (`M/D/YYYY`, `H:MMAM`), which are also the slot matching keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Appointment {
    pub id: i64,
    pub patient_first_name: String,
    pub patient_last_name: String,
    pub date: String,
    pub time: String,
    pub kind: AppointmentKind,
    pub doctor_id: i64,
}

impl Appointment {
    pub fn occupies_slot(&self, doctor_id: i64, date: &str, time: &str) -> bool {
        self.doctor_id == doctor_id && self.date == date && self.time == time
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewAppointment {
    pub patient_first_name: String,
    pub patient_last_name: String,
    pub date: String,
    pub time: String,
    pub kind: AppointmentKind,
    pub doctor_id: i64,
}

impl NewAppointment {
    pub fn with_id(self, id: i64) -> Appointment {
        Appointment {
            id,
            patient_first_name: self.patient_first_name,
            patient_last_name: self.patient_last_name,
            date: self.date,
            time: self.time,
            kind: self.kind,
            doctor_id: self.doctor_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn kind_uses_display_names_on_the_wire() {
        assert_eq!(json!(AppointmentKind::NewPatient), json!("New Patient"));
        assert_eq!(json!(AppointmentKind::FollowUp), json!("Follow-up"));
        let kind: AppointmentKind = serde_json::from_value(json!("Follow-up")).unwrap();
        assert_eq!(kind, AppointmentKind::FollowUp);
    }

    #[test]
    fn names_must_fit_the_column() {
        assert_eq!(check_name("first_name", "Ada"), Ok(()));
        assert_eq!(check_name("first_name", &"a".repeat(40)), Ok(()));
        assert_eq!(check_name("last_name", "  "), Err("last_name is required".to_string()));
        assert_eq!(
            check_name("last_name", &"a".repeat(41)),
            Err("last_name must be at most 40 characters".to_string())
        );
    }

    #[test]
    fn kind_parsing_is_exact() {
        assert_eq!("New Patient".parse(), Ok(AppointmentKind::NewPatient));
        assert!("new patient".parse::<AppointmentKind>().is_err());
        assert!("Follow-up ".parse::<AppointmentKind>().is_err());
        assert!("Invalid".parse::<AppointmentKind>().is_err());
    }

    #[test]
    fn appointment_serializes_flat() {
        let appointment = NewAppointment {
            patient_first_name: "test_fn".to_string(),
            patient_last_name: "test_ln".to_string(),
            date: "1/11/2000".to_string(),
            time: "8:00AM".to_string(),
            kind: AppointmentKind::NewPatient,
            doctor_id: 4,
        }
        .with_id(9);

        assert_eq!(
            json!(appointment),
            json!({
                "id": 9,
                "patient_first_name": "test_fn",
                "patient_last_name": "test_ln",
                "date": "1/11/2000",
                "time": "8:00AM",
                "kind": "New Patient",
                "doctor_id": 4
            })
        );
        assert!(appointment.occupies_slot(4, "1/11/2000", "8:00AM"));
        assert!(!appointment.occupies_slot(4, "1/11/2000", "08:00AM"));
    }
}
