// libs/appointment-cell/src/services/conflict.rs
use tracing::{debug, warn};

use shared_models::{Appointment, AppointmentStatus};

/// Detects doctor/date/time collisions among confirmed appointments.
///
/// The invariant this service protects: among appointments with status
/// `Confirmed`, the (doctor, date, time) triple is unique. Cancelled
/// appointments never conflict.
#[derive(Debug)]
pub struct ConflictDetectionService;

impl ConflictDetectionService {
    pub fn new() -> Self {
        Self
    }

    /// Checks a candidate slot against every confirmed appointment.
    ///
    /// Equality on `date` and `time` is exact string equality ("9:00" and
    /// "09:00" are different slots); callers supply canonical values
    /// straight from the form controls. `exclude_id` carries the id of the
    /// appointment being edited so an unmodified booking never conflicts
    /// with itself.
    pub fn has_conflict(
        &self,
        appointments: &[Appointment],
        doctor: &str,
        date: &str,
        time: &str,
        exclude_id: Option<&str>,
    ) -> bool {
        debug!("Checking conflicts for {} on {} at {}", doctor, date, time);

        let conflict = appointments.iter().any(|apt| {
            apt.status == AppointmentStatus::Confirmed
                && exclude_id != Some(apt.id.as_str())
                && apt.doctor == doctor
                && apt.date == date
                && apt.time == time
        });

        if conflict {
            warn!("Conflict detected for {} on {} at {}", doctor, date, time);
        }
        conflict
    }
}
