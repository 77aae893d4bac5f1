// libs/appointment-cell/src/services/lifecycle.rs
use tracing::warn;

use shared_models::AppointmentStatus;

use crate::models::AppointmentError;

/// The appointment status state machine: `Confirmed -> Cancelled`, one-way.
/// Cancellation is terminal; nothing re-confirms a cancelled appointment.
#[derive(Debug)]
pub struct AppointmentLifecycleService;

impl AppointmentLifecycleService {
    pub fn new() -> Self {
        Self
    }

    pub fn validate_status_transition(
        &self,
        current: AppointmentStatus,
        next: AppointmentStatus,
    ) -> Result<(), AppointmentError> {
        if self.valid_transitions(current).contains(&next) {
            Ok(())
        } else {
            warn!("Invalid status transition attempted: {} -> {}", current, next);
            Err(AppointmentError::InvalidStatusTransition(current, next))
        }
    }

    pub fn valid_transitions(&self, current: AppointmentStatus) -> Vec<AppointmentStatus> {
        match current {
            AppointmentStatus::Confirmed => vec![AppointmentStatus::Cancelled],
            // Terminal state
            AppointmentStatus::Cancelled => vec![],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cancellation_is_the_only_transition() {
        let service = AppointmentLifecycleService::new();
        assert!(service
            .validate_status_transition(AppointmentStatus::Confirmed, AppointmentStatus::Cancelled)
            .is_ok());
    }

    #[test]
    fn cancelled_is_terminal() {
        let service = AppointmentLifecycleService::new();
        let err = service
            .validate_status_transition(AppointmentStatus::Cancelled, AppointmentStatus::Confirmed)
            .unwrap_err();
        assert_eq!(
            err,
            AppointmentError::InvalidStatusTransition(
                AppointmentStatus::Cancelled,
                AppointmentStatus::Confirmed
            )
        );
    }

    #[test]
    fn self_transitions_are_rejected() {
        let service = AppointmentLifecycleService::new();
        assert!(service
            .validate_status_transition(AppointmentStatus::Confirmed, AppointmentStatus::Confirmed)
            .is_err());
        assert!(service
            .validate_status_transition(AppointmentStatus::Cancelled, AppointmentStatus::Cancelled)
            .is_err());
    }
}
