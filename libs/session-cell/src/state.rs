// libs/session-cell/src/state.rs
use tracing::info;

use appointment_cell::models::{
    AppointmentError, AppointmentFilter, AppointmentRequest, SortOrder,
};
use appointment_cell::services::booking::AppointmentBookingService;
use appointment_cell::services::filters::AppointmentQueryService;
use auth_cell::models::{AuthError, RegisterRequest};
use auth_cell::AuthService;
use shared_models::{
    Appointment, BootstrapError, DataSnapshot, Doctor, Specialty, User,
};

/// The single in-memory session: canonical users, appointments and catalog
/// data plus the logged-in user, with every core operation going through
/// this context rather than any hidden global.
///
/// The storage collaborator persists and restores the session as an opaque
/// `DataSnapshot`; this type never touches storage itself.
#[derive(Debug)]
pub struct SessionState {
    users: Vec<User>,
    appointments: Vec<Appointment>,
    specialties: Vec<Specialty>,
    doctors: Vec<Doctor>,
    current_user: Option<User>,

    auth_service: AuthService,
    booking_service: AppointmentBookingService,
    query_service: AppointmentQueryService,
}

impl SessionState {
    /// One-shot startup load. A persisted snapshot wins over the seed file;
    /// a parse failure of whichever source was chosen is fatal and leaves
    /// the app on the entry screen — there is no retry and no partial
    /// state.
    pub fn bootstrap(
        snapshot_json: Option<&str>,
        seed_json: &str,
    ) -> Result<Self, BootstrapError> {
        let data = match snapshot_json {
            Some(text) => {
                info!("Restoring session from persisted snapshot");
                DataSnapshot::from_json(text)?
            }
            None => {
                info!("No snapshot present, loading seed data");
                DataSnapshot::from_json(seed_json)?
            }
        };
        Ok(Self::from_snapshot(data))
    }

    pub fn from_snapshot(data: DataSnapshot) -> Self {
        Self {
            users: data.users,
            appointments: data.appointments,
            specialties: data.specialties,
            doctors: data.doctors,
            current_user: None,
            auth_service: AuthService::new(),
            booking_service: AppointmentBookingService::new(),
            query_service: AppointmentQueryService::new(),
        }
    }

    /// The four sequences for the storage collaborator to persist.
    pub fn snapshot(&self) -> DataSnapshot {
        DataSnapshot {
            users: self.users.clone(),
            appointments: self.appointments.clone(),
            specialties: self.specialties.clone(),
            doctors: self.doctors.clone(),
        }
    }

    // ==========================================================================
    // AUTH
    // ==========================================================================

    pub fn login(&mut self, rut: &str, password: &str) -> Result<User, AuthError> {
        let user = self.auth_service.login(&self.users, rut, password)?;
        self.current_user = Some(user.clone());
        Ok(user)
    }

    pub fn logout(&mut self) {
        self.current_user = None;
    }

    pub fn register(&mut self, request: RegisterRequest) -> Result<User, AuthError> {
        self.auth_service.register(&mut self.users, request)
    }

    pub fn current_user(&self) -> Option<&User> {
        self.current_user.as_ref()
    }

    // ==========================================================================
    // APPOINTMENTS
    // ==========================================================================

    pub fn book(&mut self, request: AppointmentRequest) -> Result<Appointment, AppointmentError> {
        self.booking_service.book(&mut self.appointments, request)
    }

    pub fn edit(
        &mut self,
        id: &str,
        request: AppointmentRequest,
    ) -> Result<Appointment, AppointmentError> {
        self.booking_service.edit(&mut self.appointments, id, request)
    }

    pub fn cancel(&mut self, id: &str) -> Result<(), AppointmentError> {
        self.booking_service.cancel(&mut self.appointments, id)
    }

    pub fn find_appointment(&self, id: &str) -> Option<&Appointment> {
        self.appointments.iter().find(|apt| apt.id == id)
    }

    /// The ordered view for the logged-in user. Without a login there is
    /// nothing to show.
    pub fn visible_appointments(
        &self,
        filter: &AppointmentFilter,
        sort: SortOrder,
    ) -> Vec<Appointment> {
        match &self.current_user {
            Some(user) => {
                self.query_service
                    .visible_appointments(&self.appointments, user, filter, sort)
            }
            None => Vec::new(),
        }
    }

    // ==========================================================================
    // CATALOG
    // ==========================================================================

    pub fn specialties(&self) -> &[Specialty] {
        &self.specialties
    }

    pub fn doctors(&self) -> &[Doctor] {
        &self.doctors
    }

    /// Doctors offering the given specialty, in catalog order. Feeds the
    /// dependent doctor dropdown on the booking forms.
    pub fn doctors_for_specialty(&self, specialty: &str) -> Vec<&Doctor> {
        self.doctors
            .iter()
            .filter(|d| d.specialty == specialty)
            .collect()
    }
}
