//! # Domain Module
//!
//! Business rules for the usuario records: the name validator, the command
//! types the REST layer builds, and the service that ties validation to
//! storage.
//!
//! ## Business Rules
//!
//! - `nombre` is required and at least three characters long
//! - Ids are positive, unique, and never reused
//! - An update looks up the id before it validates the body

pub mod commands;
pub mod models;
pub mod usuario_service;
pub mod validation;

pub use commands::*;
pub use usuario_service::*;
pub use validation::*;
