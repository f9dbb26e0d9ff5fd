pub mod admission;
pub mod appointments;
pub mod capacity;
pub mod normalize;
pub mod rules;

pub use admission::AppointmentAdmission;
pub use appointments::AppointmentService;
pub use capacity::SlotCapacityChecker;
pub use normalize::{normalize_date, normalize_time};
