// libs/appointment-cell/src/services/booking.rs
use tracing::{debug, info};
use uuid::Uuid;

use shared_models::{Appointment, AppointmentStatus, FieldErrors};
use shared_utils::{dates, rut};

use crate::models::{AppointmentError, AppointmentRequest};
use crate::services::conflict::ConflictDetectionService;
use crate::services::lifecycle::AppointmentLifecycleService;

/// Booking lifecycle over the session's canonical appointment list: book,
/// edit, cancel. Every mutation either fully applies or is fully rejected;
/// validation failures and conflicts leave the list untouched.
#[derive(Debug)]
pub struct AppointmentBookingService {
    conflict_service: ConflictDetectionService,
    lifecycle_service: AppointmentLifecycleService,
}

impl AppointmentBookingService {
    pub fn new() -> Self {
        Self {
            conflict_service: ConflictDetectionService::new(),
            lifecycle_service: AppointmentLifecycleService::new(),
        }
    }

    /// Books a new appointment. Field validation first, then the conflict
    /// check; on success the appointment is appended with status
    /// `Confirmed` and a fresh id.
    pub fn book(
        &self,
        appointments: &mut Vec<Appointment>,
        request: AppointmentRequest,
    ) -> Result<Appointment, AppointmentError> {
        let request = normalize(request);
        self.validate_request(&request)?;

        if self.conflict_service.has_conflict(
            appointments,
            &request.doctor,
            &request.date,
            &request.time,
            None,
        ) {
            return Err(AppointmentError::Conflict);
        }

        let appointment = Appointment {
            id: Uuid::new_v4().to_string(),
            patient_name: request.patient_name,
            patient_rut: request.patient_rut,
            specialty: request.specialty,
            doctor: request.doctor,
            date: request.date,
            time: request.time,
            status: AppointmentStatus::Confirmed,
        };
        info!(
            "Booked appointment {} with {} on {} at {}",
            appointment.id, appointment.doctor, appointment.date, appointment.time
        );
        appointments.push(appointment.clone());
        Ok(appointment)
    }

    /// Replaces every field of an existing appointment except its id and
    /// status. The conflict check excludes the appointment itself, so
    /// saving it unchanged never collides with its own slot.
    pub fn edit(
        &self,
        appointments: &mut Vec<Appointment>,
        id: &str,
        request: AppointmentRequest,
    ) -> Result<Appointment, AppointmentError> {
        let index = appointments
            .iter()
            .position(|apt| apt.id == id)
            .ok_or(AppointmentError::NotFound)?;

        let request = normalize(request);
        self.validate_request(&request)?;

        if self.conflict_service.has_conflict(
            appointments,
            &request.doctor,
            &request.date,
            &request.time,
            Some(id),
        ) {
            return Err(AppointmentError::Conflict);
        }

        let appointment = &mut appointments[index];
        appointment.patient_name = request.patient_name;
        appointment.patient_rut = request.patient_rut;
        appointment.specialty = request.specialty;
        appointment.doctor = request.doctor;
        appointment.date = request.date;
        appointment.time = request.time;

        info!("Updated appointment {}", appointment.id);
        Ok(appointment.clone())
    }

    /// Cancels an appointment: status becomes `Cancelled`, nothing else
    /// changes, and there is no way back. Safe to retry: repeating the
    /// cancel of an already-cancelled appointment is a no-op, not a
    /// transition.
    pub fn cancel(
        &self,
        appointments: &mut Vec<Appointment>,
        id: &str,
    ) -> Result<(), AppointmentError> {
        let appointment = appointments
            .iter_mut()
            .find(|apt| apt.id == id)
            .ok_or(AppointmentError::NotFound)?;

        if appointment.status == AppointmentStatus::Cancelled {
            debug!("Appointment {} already cancelled, nothing to do", appointment.id);
            return Ok(());
        }

        self.lifecycle_service
            .validate_status_transition(appointment.status, AppointmentStatus::Cancelled)?;

        appointment.status = AppointmentStatus::Cancelled;
        info!("Cancelled appointment {}", appointment.id);
        Ok(())
    }

    fn validate_request(&self, request: &AppointmentRequest) -> Result<(), AppointmentError> {
        let mut errors = FieldErrors::new();

        if request.patient_name.is_empty() {
            errors.push("patientName", "Patient name is required");
        }
        if request.patient_rut.is_empty() {
            errors.push("patientRut", "RUT is required");
        } else if !rut::validate(&request.patient_rut) {
            errors.push("patientRut", "Invalid RUT");
        }
        if request.specialty.is_empty() {
            errors.push("specialty", "Select a specialty");
        }
        if request.doctor.is_empty() {
            errors.push("doctor", "Select a doctor");
        }
        if request.date.is_empty() {
            errors.push("date", "Select a date");
        } else if !dates::is_today_or_future(&request.date) {
            errors.push("date", "Date must be today or later");
        }
        if request.time.is_empty() {
            errors.push("time", "Select a time");
        }

        if !errors.is_empty() {
            debug!("Appointment request rejected with {} field errors", errors.len());
            return Err(AppointmentError::Validation(errors));
        }
        Ok(())
    }
}

// Patient name and RUT are free-text inputs; the dropdown and picker fields
// arrive canonical already.
fn normalize(request: AppointmentRequest) -> AppointmentRequest {
    AppointmentRequest {
        patient_name: request.patient_name.trim().to_string(),
        patient_rut: request.patient_rut.trim().to_string(),
        ..request
    }
}
