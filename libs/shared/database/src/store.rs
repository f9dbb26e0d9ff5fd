use std::sync::Arc;

use anyhow::{Result, anyhow};
use async_trait::async_trait;
use tracing::info;

use shared_config::{AppConfig, StorageBackend};
use shared_models::{Appointment, Doctor, NewAppointment, NewDoctor};

use crate::locks::DoctorLocks;
use crate::memory::InMemoryStore;
use crate::postgrest::SupabaseStore;

#[async_trait]
pub trait DoctorStore: Send + Sync {
    async fn list_all(&self) -> Result<Vec<Doctor>>;

    async fn find_by_id(&self, id: i64) -> Result<Option<Doctor>>;

    async fn insert(&self, doctor: NewDoctor) -> Result<Doctor>;
}

/// Appointment persistence. `date` and `time` arguments are compared by exact
/// string equality, so callers must pass the normalized forms.
#[async_trait]
pub trait AppointmentStore: Send + Sync {
    async fn list_all(&self) -> Result<Vec<Appointment>>;

    async fn find_by_doctor_and_date(&self, doctor_id: i64, date: &str) -> Result<Vec<Appointment>>;

    async fn find_by_doctor_date_time(
        &self,
        doctor_id: i64,
        date: &str,
        time: &str,
    ) -> Result<Vec<Appointment>>;

    async fn insert(&self, appointment: NewAppointment) -> Result<Appointment>;

    /// Returns `false` when no appointment had that id.
    async fn delete_by_id(&self, id: i64) -> Result<bool>;
}

/// Store handles shared by every request, plus the per-doctor write locks
/// that serialize admissions.
#[derive(Clone)]
pub struct Database {
    pub doctors: Arc<dyn DoctorStore>,
    pub appointments: Arc<dyn AppointmentStore>,
    pub doctor_locks: Arc<DoctorLocks>,
}

impl Database {
    pub fn new(doctors: Arc<dyn DoctorStore>, appointments: Arc<dyn AppointmentStore>) -> Self {
        Self {
            doctors,
            appointments,
            doctor_locks: Arc::new(DoctorLocks::default()),
        }
    }

    pub fn in_memory() -> Self {
        let store = Arc::new(InMemoryStore::new());
        Self::new(store.clone(), store)
    }

    pub fn from_config(config: &AppConfig) -> Result<Self> {
        match config.storage_backend {
            StorageBackend::Memory => {
                info!("Using in-memory storage backend");
                Ok(Self::in_memory())
            }
            StorageBackend::Supabase => {
                if !config.is_configured() {
                    return Err(anyhow!(
                        "Supabase backend selected but SUPABASE_URL or SUPABASE_ANON_PUBLIC_KEY is missing"
                    ));
                }
                info!("Using Supabase storage backend at {}", config.supabase_url);
                let store = Arc::new(SupabaseStore::new(config));
                Ok(Self::new(store.clone(), store))
            }
        }
    }
}
