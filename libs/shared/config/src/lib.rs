use std::env;
use thiserror::Error;
use tracing::warn;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Unknown STORAGE_BACKEND '{0}', expected 'memory' or 'supabase'")]
    UnknownBackend(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    Memory,
    Supabase,
}

impl StorageBackend {
    fn from_env_value(value: &str) -> Result<Self, ConfigError> {
        match value.trim().to_ascii_lowercase().as_str() {
            "supabase" | "postgrest" => Ok(StorageBackend::Supabase),
            "memory" | "in-memory" | "" => Ok(StorageBackend::Memory),
            _ => Err(ConfigError::UnknownBackend(value.to_string())),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub storage_backend: StorageBackend,
    pub supabase_url: String,
    pub supabase_anon_key: String,
    pub port: u16,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            storage_backend: StorageBackend::Memory,
            supabase_url: String::new(),
            supabase_anon_key: String::new(),
            port: 3000,
        }
    }
}

impl AppConfig {
    /// Reads the process environment. A misspelled `STORAGE_BACKEND` is an
    /// error rather than a silent switch to the in-memory store.
    pub fn from_env() -> Result<Self, ConfigError> {
        let storage_backend = match env::var("STORAGE_BACKEND") {
            Ok(value) => StorageBackend::from_env_value(&value)?,
            Err(_) => StorageBackend::Memory,
        };

        let port = match env::var("PORT") {
            Ok(raw) => raw.parse().unwrap_or_else(|_| {
                warn!("PORT '{}' is not a valid port, using 3000", raw);
                3000
            }),
            Err(_) => 3000,
        };

        let config = Self {
            storage_backend,
            supabase_url: env::var("SUPABASE_URL")
                .unwrap_or_else(|_| {
                    if storage_backend == StorageBackend::Supabase {
                        warn!("SUPABASE_URL not set, using empty value");
                    }
                    String::new()
                }),
            supabase_anon_key: env::var("SUPABASE_ANON_PUBLIC_KEY")
                .unwrap_or_else(|_| {
                    if storage_backend == StorageBackend::Supabase {
                        warn!("SUPABASE_ANON_PUBLIC_KEY not set, using empty value");
                    }
                    String::new()
                }),
            port,
        };

        if !config.is_configured() {
            warn!("Application not fully configured - missing environment variables");
        }

        Ok(config)
    }

    /// Settings for a PostgREST backend at `url`.
    pub fn supabase(url: impl Into<String>, anon_key: impl Into<String>) -> Self {
        Self {
            storage_backend: StorageBackend::Supabase,
            supabase_url: url.into(),
            supabase_anon_key: anon_key.into(),
            ..Self::default()
        }
    }

    pub fn is_configured(&self) -> bool {
        match self.storage_backend {
            StorageBackend::Memory => true,
            StorageBackend::Supabase => {
                !self.supabase_url.is_empty() && !self.supabase_anon_key.is_empty()
            }
        }
    }
}
