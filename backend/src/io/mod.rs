//! # IO Module
//!
//! Adapter layer between HTTP clients and the domain services. The only
//! protocol is the REST API in [`rest`].

pub mod rest;

pub use rest::*;
