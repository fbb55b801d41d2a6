//! Data Transfer Objects (DTOs) for the HTTP API contract.
//!
//! These types define the stable HTTP contract with explicit serialization
//! control. They decouple the core's types from the external representation.

pub mod query;
pub mod search;

pub use query::MovieQuery;
pub use search::{CriteriaEcho, SearchFailure, SearchResponse};
