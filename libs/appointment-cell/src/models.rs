// libs/appointment-cell/src/models.rs
use serde::{Deserialize, Serialize};
use thiserror::Error;

use shared_models::{AppointmentStatus, FieldErrors};

// ==============================================================================
// REQUEST MODELS
// ==============================================================================

/// Form data for booking a new appointment or replacing the fields of an
/// existing one. `date` must be "YYYY-MM-DD" and `time` canonical "HH:MM";
/// both are treated as opaque strings past validation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentRequest {
    pub patient_name: String,
    pub patient_rut: String,
    pub specialty: String,
    pub doctor: String,
    pub date: String,
    pub time: String,
}

// ==============================================================================
// FILTER / SORT MODELS
// ==============================================================================

/// Filter selection for the appointments list. `None` or an empty string
/// means no constraint for that dimension; everything else is an exact
/// match.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppointmentFilter {
    pub specialty: Option<String>,
    pub doctor: Option<String>,
    pub status: Option<AppointmentStatus>,
    pub date: Option<String>,
}

/// Sort selection. Any stored value other than the two time orders (the
/// sort dropdown's "time-asc" / "time-desc") leaves the filtered list in
/// the canonical insertion order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", rename_all = "kebab-case")]
pub enum SortOrder {
    TimeAsc,
    TimeDesc,
    #[default]
    Unsorted,
}

impl From<String> for SortOrder {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "time-asc" => SortOrder::TimeAsc,
            "time-desc" => SortOrder::TimeDesc,
            _ => SortOrder::Unsorted,
        }
    }
}

// ==============================================================================
// ERROR TYPES
// ==============================================================================

#[derive(Debug, Clone, PartialEq, Error)]
pub enum AppointmentError {
    #[error("appointment not found")]
    NotFound,

    #[error("the doctor already has a confirmed appointment at that time")]
    Conflict,

    #[error("validation failed: {0}")]
    Validation(FieldErrors),

    #[error("appointment cannot move from {0} to {1}")]
    InvalidStatusTransition(AppointmentStatus, AppointmentStatus),
}

impl AppointmentError {
    /// The form field this error should be attached to, when it maps to a
    /// single input. Conflicts are reported on the time field, matching
    /// where the collision is actionable for the user.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            AppointmentError::Conflict => Some("time"),
            _ => None,
        }
    }

    pub fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            AppointmentError::Validation(errors) => Some(errors),
            _ => None,
        }
    }
}
