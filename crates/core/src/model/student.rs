use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum RegistrationError {
    #[error("name cannot be empty")]
    EmptyName,

    #[error("email cannot be empty")]
    EmptyEmail,
}

/// Name and email that passed the client-side checks.
///
/// Only emptiness is checked; the values are sent exactly as typed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registration {
    name: String,
    email: String,
}

impl Registration {
    /// # Errors
    ///
    /// Returns `RegistrationError` when either field is blank after trimming.
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Result<Self, RegistrationError> {
        let name = name.into();
        let email = email.into();
        if name.trim().is_empty() {
            return Err(RegistrationError::EmptyName);
        }
        if email.trim().is_empty() {
            return Err(RegistrationError::EmptyEmail);
        }
        Ok(Self { name, email })
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }
}
