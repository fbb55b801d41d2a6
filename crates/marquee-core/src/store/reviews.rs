//! Reviews file loaded once and grouped by movie.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use async_trait::async_trait;

use super::error::LoadError;
use crate::domain::Review;
use crate::ports::{ReviewError, ReviewSource};

/// Review source backed by a JSON array of review records.
#[derive(Debug, Clone, Default)]
pub struct JsonReviewSource {
    by_movie: HashMap<i64, Vec<Review>>,
}

impl JsonReviewSource {
    /// Group reviews by movie ID, keeping source order within each movie.
    pub fn from_reviews(reviews: Vec<Review>) -> Self {
        let mut by_movie: HashMap<i64, Vec<Review>> = HashMap::new();
        for review in reviews {
            by_movie.entry(review.movie_id).or_default().push(review);
        }
        Self { by_movie }
    }

    /// Parse a JSON array of review records.
    pub fn from_json_str(json: &str) -> Result<Self, LoadError> {
        let reviews: Vec<Review> = serde_json::from_str(json)?;
        Ok(Self::from_reviews(reviews))
    }

    /// Load from `path`, reporting failures to the caller.
    pub fn try_load(path: &Path) -> Result<Self, LoadError> {
        let json = fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// Load from `path`, degrading to no reviews on failure.
    pub fn load(path: &Path) -> Self {
        match Self::try_load(path) {
            Ok(source) => {
                tracing::info!(
                    movies = source.by_movie.len(),
                    path = %path.display(),
                    "Loaded reviews"
                );
                source
            }
            Err(e) => {
                tracing::error!(path = %path.display(), "Failed to load reviews: {}", e);
                Self::default()
            }
        }
    }
}

#[async_trait]
impl ReviewSource for JsonReviewSource {
    async fn reviews_for(&self, movie_id: i64) -> Result<Vec<Review>, ReviewError> {
        Ok(self.by_movie.get(&movie_id).cloned().unwrap_or_default())
    }
}
