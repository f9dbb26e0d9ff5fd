use std::sync::Arc;

use shared_database::Database;

/// Router state shared by every cell.
#[derive(Clone)]
pub struct AppState {
    pub database: Database,
}

impl AppState {
    pub fn new(database: Database) -> Self {
        Self { database }
    }

    /// A fresh in-memory backend.
    pub fn in_memory() -> Arc<Self> {
        Arc::new(Self::new(Database::in_memory()))
    }
}
