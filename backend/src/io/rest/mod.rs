//! # REST API Interface Layer
//!
//! HTTP endpoints for the usuarios service. This layer handles:
//! - JSON request/response serialization
//! - Request body shape checks before the domain layer sees a payload
//! - Error translation from domain failures to HTTP status codes
//! - Request logging
//!
//! It holds no business rules; validation and id handling live in the
//! domain layer.

pub mod error;
pub mod mappers;
pub mod root_apis;
pub mod usuario_apis;
