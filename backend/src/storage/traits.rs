//! # Storage Traits
//!
//! The storage abstraction the domain layer talks to. Only an in-memory
//! implementation exists; the trait keeps the service testable against a
//! failing store.

use anyhow::Result;
use async_trait::async_trait;

use crate::domain::models::usuario::Usuario;

/// Interface for usuario storage operations
#[async_trait]
pub trait UsuarioStorage: Send + Sync {
    /// All records in insertion order
    async fn list_usuarios(&self) -> Result<Vec<Usuario>>;

    /// Retrieve a record by id
    async fn find_by_id(&self, id: u64) -> Result<Option<Usuario>>;

    /// Append a new record with a freshly assigned id
    async fn create(&self, nombre: &str) -> Result<Usuario>;

    /// Rename a record in place.
    /// Returns `None` if no record has that id.
    async fn update(&self, id: u64, nombre: &str) -> Result<Option<Usuario>>;

    /// Remove the first record with that id and return it
    async fn delete(&self, id: u64) -> Result<Option<Usuario>>;
}
