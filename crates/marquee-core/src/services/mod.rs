//! Core services - the catalog's business logic layer.
//!
//! Services orchestrate between ports (trait interfaces) and domain logic.
//! They don't know about concrete store implementations.

mod movie_service;

pub use movie_service::{MovieService, result_summary};
