//! Read-only in-memory stores.
//!
//! Both stores are populated once at startup and never mutated afterwards,
//! so they can be shared across request tasks behind an `Arc` without locks.
//! Load failures degrade to an empty store and are logged, never propagated.

mod error;
mod movies;
mod reviews;

pub use error::LoadError;
pub use movies::{BUNDLED_MOVIES, DataSource, MovieStore};
pub use reviews::JsonReviewSource;
