// libs/appointment-cell/src/services/filters.rs
use tracing::debug;

use shared_models::{Appointment, User};

use crate::models::{AppointmentFilter, SortOrder};

/// Derives the ordered appointment view a user is allowed to see. Never
/// mutates the canonical list; every call returns a fresh sequence.
#[derive(Debug)]
pub struct AppointmentQueryService;

impl AppointmentQueryService {
    pub fn new() -> Self {
        Self
    }

    /// Visibility, then filters, then sort.
    ///
    /// Non-admin users only ever see appointments whose patient RUT equals
    /// their own; admins see all. Each filter dimension is an exact match
    /// when selected. The two time orders compare (date, time) as plain
    /// strings, which is correct because both are zero-padded; any other
    /// sort mode keeps the insertion order of the canonical list.
    pub fn visible_appointments(
        &self,
        appointments: &[Appointment],
        acting_user: &User,
        filter: &AppointmentFilter,
        sort: SortOrder,
    ) -> Vec<Appointment> {
        let specialty = selected(&filter.specialty);
        let doctor = selected(&filter.doctor);
        let date = selected(&filter.date);

        let mut visible: Vec<Appointment> = appointments
            .iter()
            .filter(|apt| {
                if !acting_user.role.is_admin() && apt.patient_rut != acting_user.rut {
                    return false;
                }
                if specialty.is_some_and(|s| apt.specialty != s) {
                    return false;
                }
                if doctor.is_some_and(|d| apt.doctor != d) {
                    return false;
                }
                if filter.status.is_some_and(|s| apt.status != s) {
                    return false;
                }
                if date.is_some_and(|d| apt.date != d) {
                    return false;
                }
                true
            })
            .cloned()
            .collect();

        match sort {
            SortOrder::TimeAsc => visible.sort_by(|a, b| {
                (a.date.as_str(), a.time.as_str()).cmp(&(b.date.as_str(), b.time.as_str()))
            }),
            SortOrder::TimeDesc => visible.sort_by(|a, b| {
                (b.date.as_str(), b.time.as_str()).cmp(&(a.date.as_str(), a.time.as_str()))
            }),
            SortOrder::Unsorted => {}
        }

        debug!(
            "Derived {} visible appointments of {} for user {}",
            visible.len(),
            appointments.len(),
            acting_user.id
        );
        visible
    }
}

// Empty string means "no selection", same as an absent filter.
fn selected(choice: &Option<String>) -> Option<&str> {
    choice.as_deref().filter(|s| !s.is_empty())
}
