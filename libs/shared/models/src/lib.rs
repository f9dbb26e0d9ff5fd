pub mod clinic;
pub mod error;

pub use clinic::{check_name, Appointment, AppointmentKind, Doctor, NewAppointment, NewDoctor};
pub use error::AppError;
