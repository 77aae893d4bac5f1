// libs/shared/models/src/domain.rs
use serde::{Deserialize, Serialize};
use std::fmt;

// ==============================================================================
// CORE DOMAIN RECORDS
// ==============================================================================

/// Account role. Stored data may carry either historical spelling
/// ("admin" or "administrador", any case, possibly padded); everything
/// else is treated as a patient account.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    #[default]
    Patient,
}

impl UserRole {
    pub fn normalize(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "admin" | "administrador" => UserRole::Admin,
            _ => UserRole::Patient,
        }
    }

    pub fn is_admin(&self) -> bool {
        matches!(self, UserRole::Admin)
    }
}

impl From<String> for UserRole {
    fn from(raw: String) -> Self {
        UserRole::normalize(&raw)
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UserRole::Admin => write!(f, "admin"),
            UserRole::Patient => write!(f, "patient"),
        }
    }
}

/// Registered account. Passwords are stored and compared in plaintext: the
/// whole system runs inside a single trusted client session, so this is
/// explicitly not a security boundary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub rut: String,
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub role: UserRole,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppointmentStatus {
    Confirmed,
    Cancelled,
}

impl fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppointmentStatus::Confirmed => write!(f, "confirmed"),
            AppointmentStatus::Cancelled => write!(f, "cancelled"),
        }
    }
}

/// A booked slot. `date` is a plain "YYYY-MM-DD" string and `time` a plain
/// "HH:MM" string; both are compared as strings throughout so ordering and
/// conflict checks never depend on the viewer's timezone.
///
/// `doctor` and `specialty` reference the catalog records by name. Renaming
/// a doctor orphans the display text of historical appointments; accepted
/// for this scope.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    pub id: String,
    pub patient_name: String,
    pub patient_rut: String,
    pub specialty: String,
    pub doctor: String,
    pub date: String,
    pub time: String,
    pub status: AppointmentStatus,
}

/// Catalog entry, read-only at runtime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Specialty {
    pub name: String,
}

/// Catalog entry, read-only at runtime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Doctor {
    pub name: String,
    pub specialty: String,
}
