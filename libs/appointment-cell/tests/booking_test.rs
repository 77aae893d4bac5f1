// libs/appointment-cell/tests/booking_test.rs
use assert_matches::assert_matches;

use appointment_cell::models::{AppointmentError, AppointmentRequest};
use appointment_cell::services::booking::AppointmentBookingService;
use appointment_cell::services::conflict::ConflictDetectionService;
use shared_models::{Appointment, AppointmentStatus};

// ==============================================================================
// TEST FIXTURES
// ==============================================================================

fn request(doctor: &str, date: &str, time: &str) -> AppointmentRequest {
    AppointmentRequest {
        patient_name: "Ana Soto".to_string(),
        patient_rut: "12.345.678-5".to_string(),
        specialty: "Cardiología".to_string(),
        doctor: doctor.to_string(),
        date: date.to_string(),
        time: time.to_string(),
    }
}

// ==============================================================================
// BOOKING
// ==============================================================================

#[test]
fn book_appends_a_confirmed_appointment() {
    let service = AppointmentBookingService::new();
    let mut appointments = Vec::new();

    let appointment = service
        .book(&mut appointments, request("Dr. X", "2030-05-01", "10:00"))
        .unwrap();

    assert_eq!(appointment.status, AppointmentStatus::Confirmed);
    assert!(!appointment.id.is_empty());
    assert_eq!(appointments.len(), 1);
}

#[test]
fn double_booking_the_same_slot_is_a_time_conflict() {
    let service = AppointmentBookingService::new();
    let mut appointments = Vec::new();

    service
        .book(&mut appointments, request("Dr. X", "2030-05-01", "10:00"))
        .unwrap();
    let err = service
        .book(&mut appointments, request("Dr. X", "2030-05-01", "10:00"))
        .unwrap_err();

    assert_matches!(err, AppointmentError::Conflict);
    assert_eq!(err.field(), Some("time"));
    assert_eq!(appointments.len(), 1);
}

#[test]
fn same_time_with_another_doctor_is_fine() {
    let service = AppointmentBookingService::new();
    let mut appointments = Vec::new();

    service
        .book(&mut appointments, request("Dr. X", "2030-05-01", "10:00"))
        .unwrap();
    service
        .book(&mut appointments, request("Dr. Y", "2030-05-01", "10:00"))
        .unwrap();

    assert_eq!(appointments.len(), 2);
}

#[test]
fn time_equality_is_exact_string_equality() {
    let service = AppointmentBookingService::new();
    let mut appointments = Vec::new();

    service
        .book(&mut appointments, request("Dr. X", "2030-05-01", "09:00"))
        .unwrap();
    // "9:00" is a different string, hence a different slot by contract.
    service
        .book(&mut appointments, request("Dr. X", "2030-05-01", "9:00"))
        .unwrap();

    assert_eq!(appointments.len(), 2);
}

#[test]
fn cancelling_frees_the_slot_for_rebooking() {
    let service = AppointmentBookingService::new();
    let mut appointments = Vec::new();

    let first = service
        .book(&mut appointments, request("Dr. X", "2030-05-01", "10:00"))
        .unwrap();
    service.cancel(&mut appointments, &first.id).unwrap();

    service
        .book(&mut appointments, request("Dr. X", "2030-05-01", "10:00"))
        .unwrap();
    assert_eq!(appointments.len(), 2);
}

#[test]
fn book_collects_field_errors_without_mutating() {
    let service = AppointmentBookingService::new();
    let mut appointments = Vec::new();

    let err = service
        .book(
            &mut appointments,
            AppointmentRequest {
                patient_name: String::new(),
                patient_rut: "12345678-4".to_string(),
                specialty: String::new(),
                doctor: String::new(),
                date: "2000-01-01".to_string(),
                time: String::new(),
            },
        )
        .unwrap_err();

    let errors = err.field_errors().unwrap();
    assert_eq!(errors.get("patientName"), Some("Patient name is required"));
    assert_eq!(errors.get("patientRut"), Some("Invalid RUT"));
    assert_eq!(errors.get("specialty"), Some("Select a specialty"));
    assert_eq!(errors.get("doctor"), Some("Select a doctor"));
    assert_eq!(errors.get("date"), Some("Date must be today or later"));
    assert_eq!(errors.get("time"), Some("Select a time"));
    assert!(appointments.is_empty());
}

// ==============================================================================
// EDITING
// ==============================================================================

#[test]
fn edit_replaces_fields_but_keeps_id_and_status() {
    let service = AppointmentBookingService::new();
    let mut appointments = Vec::new();

    let original = service
        .book(&mut appointments, request("Dr. X", "2030-05-01", "10:00"))
        .unwrap();
    let updated = service
        .edit(&mut appointments, &original.id, request("Dr. Y", "2030-06-02", "11:30"))
        .unwrap();

    assert_eq!(updated.id, original.id);
    assert_eq!(updated.status, AppointmentStatus::Confirmed);
    assert_eq!(updated.doctor, "Dr. Y");
    assert_eq!(updated.date, "2030-06-02");
    assert_eq!(appointments.len(), 1);
}

#[test]
fn edit_does_not_conflict_with_itself() {
    let service = AppointmentBookingService::new();
    let mut appointments = Vec::new();

    let original = service
        .book(&mut appointments, request("Dr. X", "2030-05-01", "10:00"))
        .unwrap();
    // Saving the booking unchanged must succeed.
    service
        .edit(&mut appointments, &original.id, request("Dr. X", "2030-05-01", "10:00"))
        .unwrap();
}

#[test]
fn edit_into_an_occupied_slot_is_a_conflict() {
    let service = AppointmentBookingService::new();
    let mut appointments = Vec::new();

    service
        .book(&mut appointments, request("Dr. X", "2030-05-01", "10:00"))
        .unwrap();
    let second = service
        .book(&mut appointments, request("Dr. X", "2030-05-01", "11:00"))
        .unwrap();

    let err = service
        .edit(&mut appointments, &second.id, request("Dr. X", "2030-05-01", "10:00"))
        .unwrap_err();
    assert_matches!(err, AppointmentError::Conflict);
    assert_eq!(appointments[1].time, "11:00");
}

#[test]
fn moving_an_appointment_frees_its_old_slot() {
    let service = AppointmentBookingService::new();
    let mut appointments = Vec::new();

    let first = service
        .book(&mut appointments, request("Dr. X", "2030-05-01", "10:00"))
        .unwrap();
    assert_matches!(
        service.book(&mut appointments, request("Dr. X", "2030-05-01", "10:00")),
        Err(AppointmentError::Conflict)
    );

    service
        .edit(&mut appointments, &first.id, request("Dr. X", "2030-05-01", "12:00"))
        .unwrap();
    service
        .book(&mut appointments, request("Dr. X", "2030-05-01", "10:00"))
        .unwrap();
}

#[test]
fn edit_of_unknown_id_is_not_found() {
    let service = AppointmentBookingService::new();
    let mut appointments = Vec::new();

    let err = service
        .edit(&mut appointments, "missing", request("Dr. X", "2030-05-01", "10:00"))
        .unwrap_err();
    assert_matches!(err, AppointmentError::NotFound);
}

// ==============================================================================
// CANCELLATION
// ==============================================================================

#[test]
fn cancel_only_touches_the_status() {
    let service = AppointmentBookingService::new();
    let mut appointments = Vec::new();

    let booked = service
        .book(&mut appointments, request("Dr. X", "2030-05-01", "10:00"))
        .unwrap();
    service.cancel(&mut appointments, &booked.id).unwrap();

    let cancelled = &appointments[0];
    assert_eq!(cancelled.status, AppointmentStatus::Cancelled);
    assert_eq!(cancelled.id, booked.id);
    assert_eq!(cancelled.doctor, booked.doctor);
    assert_eq!(cancelled.time, booked.time);
}

#[test]
fn cancel_of_unknown_id_is_not_found() {
    let service = AppointmentBookingService::new();
    let mut appointments = Vec::new();

    let err = service.cancel(&mut appointments, "missing").unwrap_err();
    assert_matches!(err, AppointmentError::NotFound);
}

#[test]
fn cancel_is_safe_to_retry() {
    let service = AppointmentBookingService::new();
    let mut appointments = Vec::new();

    let booked = service
        .book(&mut appointments, request("Dr. X", "2030-05-01", "10:00"))
        .unwrap();
    service.cancel(&mut appointments, &booked.id).unwrap();

    // Repeating the cancel is a no-op, and the appointment stays cancelled.
    service.cancel(&mut appointments, &booked.id).unwrap();
    assert_eq!(appointments.len(), 1);
    assert_eq!(appointments[0].status, AppointmentStatus::Cancelled);
}

// ==============================================================================
// CONFLICT SERVICE DIRECTLY
// ==============================================================================

#[test]
fn cancelled_appointments_never_conflict() {
    let appointments = vec![Appointment {
        id: "a-1".to_string(),
        patient_name: "Ana Soto".to_string(),
        patient_rut: "12.345.678-5".to_string(),
        specialty: "Cardiología".to_string(),
        doctor: "Dr. X".to_string(),
        date: "2030-05-01".to_string(),
        time: "10:00".to_string(),
        status: AppointmentStatus::Cancelled,
    }];

    let service = ConflictDetectionService::new();
    assert!(!service.has_conflict(&appointments, "Dr. X", "2030-05-01", "10:00", None));
}
