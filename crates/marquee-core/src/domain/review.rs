//! Review domain type.

use serde::{Deserialize, Serialize};

/// A single audience review for a movie.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    /// ID of the reviewed movie.
    pub movie_id: i64,
    /// Display name of the reviewer.
    pub reviewer: String,
    /// Rating on a five point scale.
    pub rating: f64,
    pub comment: String,
}
