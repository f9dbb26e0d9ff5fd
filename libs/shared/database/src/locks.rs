use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::{Mutex, OwnedMutexGuard};
use tracing::debug;

/// One async mutex per doctor id. Holding the guard gives exclusive write
/// access to that doctor's appointment book; other doctors are unaffected.
#[derive(Debug, Default)]
pub struct DoctorLocks {
    locks: Mutex<HashMap<i64, Arc<Mutex<()>>>>,
}

impl DoctorLocks {
    pub async fn lock(&self, doctor_id: i64) -> OwnedMutexGuard<()> {
        let lock = {
            let mut locks = self.locks.lock().await;
            locks.entry(doctor_id).or_default().clone()
        };

        debug!("Waiting for write lock on doctor {}", doctor_id);
        lock.lock_owned().await
    }
}
