use anyhow::{Result, anyhow};
use async_trait::async_trait;
use reqwest::Method;
use serde_json::{json, Value};
use tracing::debug;
use urlencoding::encode;

use shared_config::AppConfig;
use shared_models::{Appointment, Doctor, NewAppointment, NewDoctor};

use crate::store::{AppointmentStore, DoctorStore};
use crate::supabase::{return_representation, SupabaseClient};

/// Stores doctors and appointments in the `doctors` and `appointments`
/// tables behind a PostgREST endpoint.
pub struct SupabaseStore {
    supabase: SupabaseClient,
}

impl SupabaseStore {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            supabase: SupabaseClient::new(config),
        }
    }

    async fn select<T>(&self, path: &str) -> Result<Vec<T>>
    where
        T: serde::de::DeserializeOwned,
    {
        let rows: Vec<Value> = self.supabase.request(Method::GET, path, None).await?;

        rows.into_iter()
            .map(serde_json::from_value)
            .collect::<std::result::Result<Vec<T>, _>>()
            .map_err(|e| anyhow!("Failed to parse rows from {}: {}", path, e))
    }

    async fn insert_returning<T>(&self, table: &str, body: Value) -> Result<T>
    where
        T: serde::de::DeserializeOwned,
    {
        let path = format!("/rest/v1/{}", table);
        let rows: Vec<Value> = self.supabase.request_with_headers(
            Method::POST,
            &path,
            Some(body),
            Some(return_representation()),
        ).await?;

        let row = rows.into_iter()
            .next()
            .ok_or_else(|| anyhow!("Insert into {} returned no rows", table))?;

        Ok(serde_json::from_value(row)?)
    }
}

#[async_trait]
impl DoctorStore for SupabaseStore {
    async fn list_all(&self) -> Result<Vec<Doctor>> {
        self.select("/rest/v1/doctors?order=id.asc").await
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Doctor>> {
        debug!("Fetching doctor {}", id);
        let path = format!("/rest/v1/doctors?id=eq.{}", id);
        let doctors: Vec<Doctor> = self.select(&path).await?;
        Ok(doctors.into_iter().next())
    }

    async fn insert(&self, doctor: NewDoctor) -> Result<Doctor> {
        self.insert_returning("doctors", json!(doctor)).await
    }
}

#[async_trait]
impl AppointmentStore for SupabaseStore {
    async fn list_all(&self) -> Result<Vec<Appointment>> {
        self.select("/rest/v1/appointments?order=id.asc").await
    }

    async fn find_by_doctor_and_date(&self, doctor_id: i64, date: &str) -> Result<Vec<Appointment>> {
        let path = format!(
            "/rest/v1/appointments?doctor_id=eq.{}&date=eq.{}&order=id.asc",
            doctor_id,
            encode(date),
        );
        self.select(&path).await
    }

    async fn find_by_doctor_date_time(
        &self,
        doctor_id: i64,
        date: &str,
        time: &str,
    ) -> Result<Vec<Appointment>> {
        let path = format!(
            "/rest/v1/appointments?doctor_id=eq.{}&date=eq.{}&time=eq.{}&order=id.asc",
            doctor_id,
            encode(date),
            encode(time),
        );
        self.select(&path).await
    }

    async fn insert(&self, appointment: NewAppointment) -> Result<Appointment> {
        self.insert_returning("appointments", json!(appointment)).await
    }

    async fn delete_by_id(&self, id: i64) -> Result<bool> {
        let path = format!("/rest/v1/appointments?id=eq.{}", id);
        let deleted: Vec<Value> = self.supabase.request_with_headers(
            Method::DELETE,
            &path,
            None,
            Some(return_representation()),
        ).await?;

        Ok(!deleted.is_empty())
    }
}
