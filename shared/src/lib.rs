use serde::{Deserialize, Serialize};

/// A user record as it travels over the wire: `{"id": 1, "nombre": "Juan"}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Usuario {
    pub id: u64,
    pub nombre: String,
}

/// Request body accepted by `POST /api/usuarios` and `PUT /api/usuarios/:id`.
///
/// `nombre` stays optional at the wire level so that a missing name is
/// reported by the validator instead of failing deserialization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsuarioPayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nombre: Option<String>,
}

impl UsuarioPayload {
    pub fn with_nombre(nombre: impl Into<String>) -> Self {
        Self {
            nombre: Some(nombre.into()),
        }
    }
}
