//! # Storage Module
//!
//! Holds the application's only state: the usuario records. The domain layer
//! depends on the [`UsuarioStorage`] trait, not on the concrete store.
//!
//! ## Current Implementation
//!
//! - **In-memory**: a `Vec` behind an async `RwLock`, seeded on startup and
//!   discarded on exit
//! - **Ids**: assigned from a monotonic counter, never reused

pub mod memory;
pub mod traits;

pub use memory::InMemoryUsuarioRepository;
pub use traits::UsuarioStorage;
