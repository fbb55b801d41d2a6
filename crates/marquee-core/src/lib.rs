//! Core domain types, ports and the catalog search engine for marquee.
//!
//! This crate holds everything that does not depend on a delivery mechanism:
//!
//! - `domain` - `Movie`, `Review` and `SearchCriteria` plus criteria validation
//! - `ports` - trait seams (`MovieCatalog`, `ReviewSource`) adapters and tests implement
//! - `store` - the read-only in-memory movie store and the JSON reviews source
//! - `services` - `MovieService`, the search engine the adapters call into
//!
//! Adapters (`marquee-axum`, `marquee-cli`) own HTTP, rendering and process
//! wiring; nothing here knows about them.

#![deny(unused_crate_dependencies)]

pub mod domain;
pub mod ports;
pub mod services;
pub mod store;

// Re-export commonly used types for convenience
pub use domain::{
    MAX_GENRE_LEN, MAX_NAME_LEN, Movie, Review, SearchCriteria, SearchError, validate_criteria,
};
pub use ports::{MovieCatalog, NoReviews, ReviewError, ReviewSource};
pub use services::{MovieService, result_summary};
pub use store::{DataSource, JsonReviewSource, LoadError, MovieStore};
