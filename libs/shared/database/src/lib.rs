pub mod locks;
pub mod memory;
pub mod postgrest;
pub mod store;
pub mod supabase;

pub use locks::DoctorLocks;
pub use memory::InMemoryStore;
pub use postgrest::SupabaseStore;
pub use store::{AppointmentStore, Database, DoctorStore};
