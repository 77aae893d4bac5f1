// libs/auth-cell/src/models.rs
use serde::{Deserialize, Serialize};
use thiserror::Error;

use shared_models::FieldErrors;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub rut: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub name: String,
    pub rut: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum AuthError {
    /// Deliberately does not say whether the RUT or the password was wrong.
    #[error("invalid credentials")]
    InvalidCredentials,

    #[error("validation failed: {0}")]
    Validation(FieldErrors),
}

impl AuthError {
    /// The collected field errors, when this is a validation failure.
    pub fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            AuthError::Validation(errors) => Some(errors),
            _ => None,
        }
    }
}
