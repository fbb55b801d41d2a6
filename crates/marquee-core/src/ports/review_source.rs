//! Reviews collaborator port.
//!
//! Reviews live outside the catalog. The detail view asks this port for the
//! reviews of one movie and treats the result as opaque.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::Review;

/// Errors a review source may report.
#[derive(Debug, Error)]
pub enum ReviewError {
    /// The backing source could not be reached or read.
    #[error("Review source unavailable: {0}")]
    Unavailable(String),
}

/// Source of reviews keyed by movie ID.
///
/// # Implementations
///
/// - `NoReviews` - for contexts that do not show reviews
/// - `JsonReviewSource` - reviews file loaded once at startup
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReviewSource: Send + Sync {
    /// Reviews for the given movie, in source order. Unknown ids yield an empty list.
    async fn reviews_for(&self, movie_id: i64) -> Result<Vec<Review>, ReviewError>;
}

/// A review source that never has any reviews.
#[derive(Debug, Clone, Default)]
pub struct NoReviews;

impl NoReviews {
    /// Create a new empty review source.
    pub const fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ReviewSource for NoReviews {
    async fn reviews_for(&self, _movie_id: i64) -> Result<Vec<Review>, ReviewError> {
        Ok(Vec::new())
    }
}
