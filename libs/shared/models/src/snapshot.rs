// libs/shared/models/src/snapshot.rs
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::domain::{Appointment, Doctor, Specialty, User};

/// The persisted session snapshot and the read-only seed file share one
/// shape: four named sequences, any of which may be absent in older blobs.
/// Role spellings are normalized during deserialization (see `UserRole`).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DataSnapshot {
    #[serde(default)]
    pub users: Vec<User>,
    #[serde(default)]
    pub appointments: Vec<Appointment>,
    #[serde(default)]
    pub specialties: Vec<Specialty>,
    #[serde(default)]
    pub doctors: Vec<Doctor>,
}

impl DataSnapshot {
    pub fn from_json(text: &str) -> Result<Self, BootstrapError> {
        let snapshot: DataSnapshot =
            serde_json::from_str(text).map_err(|e| BootstrapError::Parse(e.to_string()))?;
        debug!(
            "Parsed snapshot: {} users, {} appointments, {} specialties, {} doctors",
            snapshot.users.len(),
            snapshot.appointments.len(),
            snapshot.specialties.len(),
            snapshot.doctors.len()
        );
        Ok(snapshot)
    }

    pub fn to_json(&self) -> Result<String, BootstrapError> {
        serde_json::to_string(self).map_err(|e| BootstrapError::Serialize(e.to_string()))
    }
}

/// Startup data failures are fatal: the app stays on the entry screen rather
/// than operating on partial data. There is no retry path.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BootstrapError {
    #[error("failed to parse bootstrap data: {0}")]
    Parse(String),

    #[error("failed to serialize snapshot: {0}")]
    Serialize(String),
}
