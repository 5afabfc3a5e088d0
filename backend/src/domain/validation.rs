//! # Name Validation
//!
//! The single rule guarding every mutation: `nombre` must be present, must be
//! a string, and must be at least [`MIN_NOMBRE_LEN`] characters long.

use tracing::debug;

/// Minimum accepted length of `nombre`, counted in characters
pub const MIN_NOMBRE_LEN: usize = 3;

/// Reasons a candidate request body or name is rejected.
///
/// The `Display` text is returned verbatim to HTTP clients.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("\"nombre\" is required")]
    Required,
    #[error("\"nombre\" is not allowed to be empty")]
    Empty,
    #[error("\"nombre\" length must be at least {min} characters long")]
    TooShort { min: usize, actual: usize },
    #[error("\"nombre\" must be a string")]
    NotAString,
    #[error("\"{0}\" is not allowed")]
    UnknownField(String),
    #[error("\"value\" must be of type object")]
    NotAnObject,
    #[error("{0}")]
    MalformedBody(String),
}

/// A name that passed [`validate_nombre`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NombreValidado(String);

impl NombreValidado {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Check a candidate name. The accepted value is returned unchanged.
pub fn validate_nombre(nombre: Option<&str>) -> Result<NombreValidado, ValidationError> {
    let nombre = nombre.ok_or(ValidationError::Required)?;

    if nombre.is_empty() {
        return Err(ValidationError::Empty);
    }

    let len = nombre.chars().count();
    if len < MIN_NOMBRE_LEN {
        debug!("Rejected nombre of length {}", len);
        return Err(ValidationError::TooShort {
            min: MIN_NOMBRE_LEN,
            actual: len,
        });
    }

    Ok(NombreValidado(nombre.to_string()))
}
