use serde::{Deserialize, Serialize};

use shared_models::{Role, User};
use shared_validation::{
    require_non_empty, validate_email, validate_password_confirmation, ValidationResult,
};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterPayload {
    pub name: String,
    pub email: String,
    pub password: String,
    pub password_confirmation: String,
}

impl RegisterPayload {
    pub fn validate(&self) -> ValidationResult<()> {
        for value in [&self.name, &self.email, &self.password, &self.password_confirmation] {
            require_non_empty(value, "Todos los campos son obligatorios")?;
        }
        validate_email(&self.email)?;
        validate_password_confirmation(&self.password, &self.password_confirmation)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct RegisterResponse {
    pub user: Option<User>,
    pub token: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfilePayload {
    pub name: String,
    pub email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PasswordPayload {
    pub current_password: String,
    pub password: String,
    pub password_confirmation: String,
}

impl PasswordPayload {
    pub fn validate(&self) -> ValidationResult<()> {
        for value in [&self.current_password, &self.password, &self.password_confirmation] {
            require_non_empty(value, "Todos los campos son obligatorios")?;
        }
        validate_password_confirmation(&self.password, &self.password_confirmation)
    }
}

/// Admin resetting another user's password.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminPasswordPayload {
    pub password: String,
    pub password_confirmation: String,
}

impl AdminPasswordPayload {
    pub fn validate(&self) -> ValidationResult<()> {
        require_non_empty(&self.password, "Todos los campos son obligatorios")?;
        validate_password_confirmation(&self.password, &self.password_confirmation)
    }
}

/// Submitted from the reset-password deep-link screen.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResetPasswordPayload {
    pub token: String,
    pub email: String,
    pub password: String,
    pub password_confirmation: String,
}

impl ResetPasswordPayload {
    pub fn validate(&self) -> ValidationResult<()> {
        for value in [&self.token, &self.email, &self.password, &self.password_confirmation] {
            require_non_empty(value, "Todos los campos son obligatorios")?;
        }
        validate_password_confirmation(&self.password, &self.password_confirmation)
    }
}

/// Admin user management body for `/users`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserPayload {
    pub name: String,
    pub email: String,
    pub role: Role,
    pub password: Option<String>,
}
