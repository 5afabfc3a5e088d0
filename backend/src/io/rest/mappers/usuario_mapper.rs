//! backend/src/io/rest/mappers/usuario_mapper.rs

use axum::extract::rejection::JsonRejection;
use serde_json::Value;
use shared::{Usuario as SharedUsuario, UsuarioPayload};

use crate::domain::models::usuario::Usuario as DomainUsuario;
use crate::domain::{validate_nombre, ValidationError};

/// Field accepted in request bodies
const NOMBRE_FIELD: &str = "nombre";

/// Mapper between shared Usuario DTOs, raw request bodies and domain models.
pub struct UsuarioMapper;

impl UsuarioMapper {
    /// Converts a domain Usuario to a shared Usuario DTO.
    pub fn to_dto(domain: DomainUsuario) -> SharedUsuario {
        SharedUsuario {
            id: domain.id,
            nombre: domain.nombre,
        }
    }

    pub fn to_dto_list(domain: Vec<DomainUsuario>) -> Vec<SharedUsuario> {
        domain.into_iter().map(Self::to_dto).collect()
    }

    /// Turns the extracted JSON body into a payload.
    ///
    /// Checks run in order: the body must be an object, `nombre` must pass
    /// [`validate_nombre`], and only then are unknown fields rejected, the
    /// first one reported in request order.
    pub fn payload_from_body(
        body: Result<Value, JsonRejection>,
    ) -> Result<UsuarioPayload, ValidationError> {
        let value = match body {
            Ok(value) => value,
            // No JSON content type means no parsed body at all
            Err(JsonRejection::MissingJsonContentType(_)) => Value::Object(Default::default()),
            Err(rejection) => return Err(ValidationError::MalformedBody(rejection.body_text())),
        };

        let Value::Object(fields) = value else {
            return Err(ValidationError::NotAnObject);
        };

        let nombre = match fields.get(NOMBRE_FIELD) {
            None => None,
            Some(Value::String(nombre)) => Some(nombre.clone()),
            Some(_) => return Err(ValidationError::NotAString),
        };
        validate_nombre(nombre.as_deref())?;

        if let Some(unknown) = fields.keys().find(|key| key.as_str() != NOMBRE_FIELD) {
            return Err(ValidationError::UnknownField(unknown.clone()));
        }

        Ok(UsuarioPayload { nombre })
    }
}
