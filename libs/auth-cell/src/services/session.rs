// libs/auth-cell/src/services/session.rs
use std::sync::OnceLock;

use regex::Regex;
use tracing::{debug, info, warn};
use uuid::Uuid;

use shared_models::{FieldErrors, User, UserRole};
use shared_utils::rut;

use crate::models::{AuthError, RegisterRequest};

const MIN_PASSWORD_LEN: usize = 6;

static EMAIL_RE: OnceLock<Regex> = OnceLock::new();

fn email_regex() -> &'static Regex {
    EMAIL_RE.get_or_init(|| {
        Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
    })
}

/// Credential checks and account registration against the session's user
/// list. Passwords are compared by plain equality: the client-trust model
/// has no hashing layer, and this must not be carried into any networked
/// deployment.
#[derive(Debug)]
pub struct AuthService;

impl AuthService {
    pub fn new() -> Self {
        Self
    }

    /// Validates the login form, then looks the user up by exact RUT and
    /// password equality. The failure message never reveals which of the
    /// two was wrong.
    pub fn login(&self, users: &[User], rut_input: &str, password: &str) -> Result<User, AuthError> {
        let rut_input = rut_input.trim();
        let password = password.trim();

        let mut errors = FieldErrors::new();
        if rut_input.is_empty() {
            errors.push("rut", "RUT is required");
        } else if !rut::validate(rut_input) {
            errors.push("rut", "Invalid RUT");
        }
        if password.is_empty() {
            errors.push("password", "Password is required");
        }
        errors.into_result().map_err(AuthError::Validation)?;

        match users
            .iter()
            .find(|u| u.rut == rut_input && u.password == password)
        {
            Some(user) => {
                info!("User {} logged in as {}", user.id, user.role);
                Ok(user.clone())
            }
            None => {
                warn!("Login rejected: no matching credentials");
                Err(AuthError::InvalidCredentials)
            }
        }
    }

    /// Registers a new patient account. Every field problem is collected
    /// before returning so the form can show all of them at once.
    pub fn register(
        &self,
        users: &mut Vec<User>,
        request: RegisterRequest,
    ) -> Result<User, AuthError> {
        let name = request.name.trim().to_string();
        let rut_input = request.rut.trim().to_string();
        let email = request.email.trim().to_string();
        let password = request.password.trim().to_string();
        let confirm_password = request.confirm_password.trim().to_string();

        let mut errors = FieldErrors::new();

        if name.is_empty() {
            errors.push("name", "Name is required");
        }

        if rut_input.is_empty() {
            errors.push("rut", "RUT is required");
        } else if !rut::validate(&rut_input) {
            errors.push("rut", "Invalid RUT");
        } else if users.iter().any(|u| u.rut == rut_input) {
            errors.push("rut", "This RUT is already registered");
        }

        if email.is_empty() {
            errors.push("email", "Email is required");
        } else if !email_regex().is_match(&email) {
            errors.push("email", "Invalid email");
        }

        if password.is_empty() {
            errors.push("password", "Password is required");
        } else if password.len() < MIN_PASSWORD_LEN {
            errors.push("password", "Minimum 6 characters");
        }

        if confirm_password.is_empty() {
            errors.push("confirmPassword", "Confirm your password");
        } else if password != confirm_password {
            errors.push("confirmPassword", "Passwords do not match");
        }

        if !errors.is_empty() {
            debug!("Registration rejected with {} field errors", errors.len());
            return Err(AuthError::Validation(errors));
        }

        let user = User {
            id: Uuid::new_v4().to_string(),
            name,
            rut: rut_input,
            email,
            password,
            role: UserRole::Patient,
        };
        info!("Registered new patient account {}", user.id);
        users.push(user.clone());
        Ok(user)
    }
}
