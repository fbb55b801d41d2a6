//! Core domain types.
//!
//! These types represent the pure domain model, independent of any
//! infrastructure concerns (files, HTTP, rendering).
//!
//! # Structure
//!
//! - `movie` - the immutable `Movie` record
//! - `review` - reviews attached to a movie by the reviews collaborator
//! - `criteria` - per-request `SearchCriteria` and their validation

mod criteria;
mod movie;
mod review;

pub use criteria::{MAX_GENRE_LEN, MAX_NAME_LEN, SearchCriteria, SearchError, validate_criteria};
pub use movie::Movie;
pub use review::Review;
