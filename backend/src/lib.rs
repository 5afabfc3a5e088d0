//! # Usuarios Backend
//!
//! In-memory CRUD over usuario records, served over HTTP/JSON.
//!
//! ## Architecture
//!
//! The backend follows a layered architecture:
//! ```text
//! HTTP clients
//!     ↓
//! IO Layer (REST handlers, mappers)
//!     ↓
//! Domain Layer (validation, UsuarioService)
//!     ↓
//! Storage Layer (in-memory repository)
//! ```
//!
//! ## Key Responsibilities
//!
//! - Build the application state; the store is owned here, not global
//! - Set up the router with CORS, request tracing and static files

pub mod config;
pub mod domain;
pub mod io;
pub mod storage;

use std::sync::Arc;

use anyhow::{Context, Result};
use axum::{
    http::{HeaderValue, Method},
    routing::get,
    Router,
};
use tower::Layer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::info;

pub use config::ServerConfig;

use crate::domain::UsuarioService;
use crate::storage::InMemoryUsuarioRepository;

/// Main application state that holds all services
#[derive(Clone)]
pub struct AppState {
    pub usuario_service: UsuarioService,
}

impl AppState {
    pub fn new(usuario_service: UsuarioService) -> Self {
        Self { usuario_service }
    }
}

/// Build the application state around a freshly seeded store
pub fn initialize_backend() -> AppState {
    info!("Setting up in-memory store");
    let repository = InMemoryUsuarioRepository::seeded();

    info!("Setting up domain services");
    let usuario_service = UsuarioService::new(Arc::new(repository));

    AppState::new(usuario_service)
}

/// The served application: the router behind trailing-slash trimming
pub type App = NormalizePath<Router>;

/// Create the Axum router with all routes configured.
///
/// Trailing slashes are trimmed before routing, so `/api/usuarios/` reaches
/// the same handlers as `/api/usuarios`.
pub fn create_router(app_state: AppState, config: &ServerConfig) -> Result<App> {
    let cors = cors_layer(config)?;

    let router = Router::new()
        .route("/", get(io::root_apis::greeting))
        .nest("/api/usuarios", io::usuario_apis::router())
        .fallback_service(ServeDir::new(&config.static_dir))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(app_state);

    // Must wrap the router; a Router::layer runs after routing
    Ok(NormalizePathLayer::trim_trailing_slash().layer(router))
}

fn cors_layer(config: &ServerConfig) -> Result<CorsLayer> {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers(Any);

    match &config.cors_origin {
        Some(origin) => {
            let origin = origin
                .parse::<HeaderValue>()
                .with_context(|| format!("Invalid CORS origin: {}", origin))?;
            Ok(cors.allow_origin(origin))
        }
        None => Ok(cors.allow_origin(Any)),
    }
}
