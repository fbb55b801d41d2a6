//! Port definitions (trait abstractions) for the catalog's collaborators.
//!
//! Ports define the interfaces that the core expects from infrastructure.
//! They contain no implementation details and use only domain types.
//!
//! # Design Rules
//!
//! - `MovieCatalog` is read-only: there is no insert/update/delete
//! - Absence is `Option`, never an error
//! - Filtering and validation belong in `MovieService`, not here

mod movie_catalog;
mod review_source;

pub use movie_catalog::MovieCatalog;
pub use review_source::{NoReviews, ReviewError, ReviewSource};

#[cfg(test)]
pub use movie_catalog::MockMovieCatalog;
#[cfg(test)]
pub use review_source::MockReviewSource;
