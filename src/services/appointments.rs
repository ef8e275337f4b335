use std::sync::Arc;

use chrono::{DateTime, Utc};
use tokio::sync::{Mutex, MutexGuard};

use crate::db::KeyValueStore;
use crate::errors::AppError;
use crate::models::Appointment;

pub const APPOINTMENTS_KEY: &str = "appointments";
pub const LAST_ID_KEY: &str = "appointments_last_id";

/// The appointment list, persisted as one JSON array.
///
/// Every mutation reads the whole collection, changes it in memory and writes
/// it back. `writer` serializes those read-modify-write cycles inside this
/// process; separate processes sharing one database are not coordinated.
#[derive(Clone)]
pub struct AppointmentStore {
    kv: Arc<dyn KeyValueStore>,
    writer: Arc<Mutex<()>>,
}

/// Proof that the caller holds the single-writer lock.
pub struct WriteGuard<'a> {
    _guard: MutexGuard<'a, ()>,
}

impl AppointmentStore {
    pub fn new(kv: Arc<dyn KeyValueStore>) -> Self {
        Self {
            kv,
            writer: Arc::new(Mutex::new(())),
        }
    }

    /// Waits for exclusive write access. Hold the guard across several steps
    /// to keep them atomic with respect to other writers.
    pub async fn lock(&self) -> WriteGuard<'_> {
        WriteGuard {
            _guard: self.writer.lock().await,
        }
    }

    /// Lenient read for display. Read failures are logged and show as an
    /// empty book; mutations go through [`Self::try_load_all`] instead.
    pub fn load_all(&self) -> Vec<Appointment> {
        self.try_load_all().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "failed to read stored appointments");
            Vec::new()
        })
    }

    /// A missing or malformed document reads as an empty list. Storage
    /// errors are returned so that no write is built on a partial read.
    pub fn try_load_all(&self) -> Result<Vec<Appointment>, AppError> {
        let Some(raw) = self.kv.get(APPOINTMENTS_KEY)? else {
            return Ok(Vec::new());
        };

        Ok(serde_json::from_str(&raw).unwrap_or_else(|e| {
            tracing::warn!(error = %e, "stored appointments are malformed, starting empty");
            Vec::new()
        }))
    }

    pub fn save_all(&self, appointments: &[Appointment]) -> Result<(), AppError> {
        let raw = serde_json::to_string(appointments)?;
        self.kv.set(APPOINTMENTS_KEY, &raw)?;
        Ok(())
    }

    pub async fn append(&self, appointment: Appointment) -> Result<(), AppError> {
        let guard = self.lock().await;
        self.append_locked(&guard, appointment)
    }

    pub fn append_locked(
        &self,
        _guard: &WriteGuard<'_>,
        appointment: Appointment,
    ) -> Result<(), AppError> {
        let mut all = self.try_load_all()?;
        let id = appointment.id;
        tracing::debug!(id, count = all.len() + 1, "appending appointment");
        all.push(appointment);
        self.save_all(&all)?;

        if id > self.last_issued_id()? {
            self.kv.set(LAST_ID_KEY, &id.to_string())?;
        }
        Ok(())
    }

    /// Removing an id that is not stored still rewrites the collection.
    pub async fn remove(&self, id: u64) -> Result<(), AppError> {
        let _guard = self.lock().await;
        let mut all = self.try_load_all()?;
        let before = all.len();
        all.retain(|apt| apt.id != id);
        if all.len() == before {
            tracing::debug!(id, "no appointment with this id");
        }
        self.save_all(&all)
    }

    // Survives cancellation of the newest appointment.
    fn last_issued_id(&self) -> Result<u64, AppError> {
        let Some(raw) = self.kv.get(LAST_ID_KEY)? else {
            return Ok(0);
        };
        Ok(raw.trim().parse().unwrap_or_else(|_| {
            tracing::warn!(value = %raw, "stored appointment id counter is malformed, ignoring");
            0
        }))
    }

    /// Millisecond timestamp id, bumped past every id ever issued when the
    /// clock has not moved beyond it.
    pub fn next_id(&self, _guard: &WriteGuard<'_>, now: DateTime<Utc>) -> Result<u64, AppError> {
        let candidate = u64::try_from(now.timestamp_millis()).unwrap_or(0);
        let stored_max = self
            .try_load_all()?
            .iter()
            .map(|apt| apt.id)
            .max()
            .unwrap_or(0);
        let last = stored_max.max(self.last_issued_id()?);

        Ok(if candidate <= last { last + 1 } else { candidate })
    }
}
