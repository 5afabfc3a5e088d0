use std::sync::Arc;

use tracing::{info, warn};

use super::commands::{CreateUsuarioCommand, UpdateUsuarioCommand};
use super::models::usuario::Usuario;
use super::validation::{validate_nombre, ValidationError};
use crate::storage::UsuarioStorage;

/// Failures surfaced by [`UsuarioService`]
#[derive(Debug, thiserror::Error)]
pub enum UsuarioError {
    #[error("El usuario no fue encontrado")]
    NotFound { id: String },
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}

/// Service for managing usuario records
#[derive(Clone)]
pub struct UsuarioService {
    storage: Arc<dyn UsuarioStorage>,
}

impl UsuarioService {
    pub fn new(storage: Arc<dyn UsuarioStorage>) -> Self {
        Self { storage }
    }

    /// List every record in insertion order
    pub async fn list_usuarios(&self) -> Result<Vec<Usuario>, UsuarioError> {
        let usuarios = self.storage.list_usuarios().await?;
        info!("Found {} usuarios", usuarios.len());
        Ok(usuarios)
    }

    /// Get a usuario by its raw path id
    pub async fn get_usuario(&self, raw_id: &str) -> Result<Usuario, UsuarioError> {
        let usuario = self.find_existing(raw_id).await?;
        info!("Found usuario: {}", usuario.id);
        Ok(usuario)
    }

    /// Validate and store a new usuario
    pub async fn create_usuario(
        &self,
        command: CreateUsuarioCommand,
    ) -> Result<Usuario, UsuarioError> {
        let payload = command.payload?;
        let nombre = validate_nombre(payload.nombre.as_deref())?;

        let usuario = self.storage.create(nombre.as_str()).await?;
        info!("Created usuario: {} with ID: {}", usuario.nombre, usuario.id);
        Ok(usuario)
    }

    /// Rename an existing usuario.
    /// The id is checked before the body, so an unknown id wins over an invalid body.
    pub async fn update_usuario(
        &self,
        command: UpdateUsuarioCommand,
    ) -> Result<Usuario, UsuarioError> {
        let existing = self.find_existing(&command.id).await?;

        let payload = command.payload?;
        let nombre = validate_nombre(payload.nombre.as_deref())?;

        let usuario = self
            .storage
            .update(existing.id, nombre.as_str())
            .await?
            .ok_or_else(|| {
                // Removed between lookup and write
                warn!("Usuario {} disappeared during update", existing.id);
                UsuarioError::NotFound { id: command.id.clone() }
            })?;

        info!("Updated usuario: {} with ID: {}", usuario.nombre, usuario.id);
        Ok(usuario)
    }

    /// Remove a usuario and return the removed record
    pub async fn delete_usuario(&self, raw_id: &str) -> Result<Usuario, UsuarioError> {
        let existing = self.find_existing(raw_id).await?;

        let usuario = self
            .storage
            .delete(existing.id)
            .await?
            .ok_or_else(|| UsuarioError::NotFound { id: raw_id.to_string() })?;

        info!("Deleted usuario: {} with ID: {}", usuario.nombre, usuario.id);
        Ok(usuario)
    }

    async fn find_existing(&self, raw_id: &str) -> Result<Usuario, UsuarioError> {
        let not_found = || {
            warn!("Usuario not found: {}", raw_id);
            UsuarioError::NotFound { id: raw_id.to_string() }
        };

        let id = Usuario::parse_id(raw_id).ok_or_else(not_found)?;
        self.storage.find_by_id(id).await?.ok_or_else(not_found)
    }
}
