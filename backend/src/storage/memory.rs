//! In-memory usuario repository.
//!
//! Records live in a `Vec` in insertion order. Ids come from a counter that
//! only moves forward, so an id is never handed out twice even after
//! deletions.

use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use crate::domain::models::usuario::Usuario;
use crate::storage::traits::UsuarioStorage;

#[derive(Debug)]
struct Inner {
    usuarios: Vec<Usuario>,
    next_id: u64,
}

/// Process-lifetime store shared between handlers
#[derive(Debug, Clone)]
pub struct InMemoryUsuarioRepository {
    inner: Arc<RwLock<Inner>>,
}

impl InMemoryUsuarioRepository {
    /// A store holding the given records.
    /// The counter starts past the highest existing id.
    pub fn new(usuarios: Vec<Usuario>) -> Self {
        let next_id = usuarios.iter().map(|u| u.id).max().unwrap_or(0) + 1;
        Self {
            inner: Arc::new(RwLock::new(Inner { usuarios, next_id })),
        }
    }

    /// A store holding the four startup records
    pub fn seeded() -> Self {
        Self::new(Usuario::seed())
    }
}

#[async_trait]
impl UsuarioStorage for InMemoryUsuarioRepository {
    async fn list_usuarios(&self) -> Result<Vec<Usuario>> {
        Ok(self.inner.read().await.usuarios.clone())
    }

    async fn find_by_id(&self, id: u64) -> Result<Option<Usuario>> {
        let inner = self.inner.read().await;
        Ok(inner.usuarios.iter().find(|u| u.id == id).cloned())
    }

    async fn create(&self, nombre: &str) -> Result<Usuario> {
        let mut inner = self.inner.write().await;
        let usuario = Usuario::new(inner.next_id, nombre);
        inner.next_id += 1;
        inner.usuarios.push(usuario.clone());
        debug!("Stored usuario {} (next id {})", usuario.id, inner.next_id);
        Ok(usuario)
    }

    async fn update(&self, id: u64, nombre: &str) -> Result<Option<Usuario>> {
        let mut inner = self.inner.write().await;
        Ok(inner.usuarios.iter_mut().find(|u| u.id == id).map(|usuario| {
            usuario.nombre = nombre.to_string();
            usuario.clone()
        }))
    }

    async fn delete(&self, id: u64) -> Result<Option<Usuario>> {
        let mut inner = self.inner.write().await;
        let Some(index) = inner.usuarios.iter().position(|u| u.id == id) else {
            return Ok(None);
        };
        Ok(Some(inner.usuarios.remove(index)))
    }
}
