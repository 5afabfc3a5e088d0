//! Domain-level command types.
//! The REST layer maps incoming requests onto these; they are not part of
//! the wire format.
//!
//! Request bodies arrive already shape-checked. A body that failed those
//! checks is carried as `Err` so the service decides when the failure
//! surfaces: an update against an unknown id reports not-found first.

use shared::UsuarioPayload;

use super::validation::ValidationError;

/// Input for creating a new usuario
#[derive(Debug, Clone)]
pub struct CreateUsuarioCommand {
    pub payload: Result<UsuarioPayload, ValidationError>,
}

/// Input for renaming an existing usuario.
/// `id` is the raw path segment; the service parses it.
#[derive(Debug, Clone)]
pub struct UpdateUsuarioCommand {
    pub id: String,
    pub payload: Result<UsuarioPayload, ValidationError>,
}
