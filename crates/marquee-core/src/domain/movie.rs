//! Movie domain type.

use serde::{Deserialize, Serialize};

/// A movie in the catalog.
///
/// Movies are created once when the store is loaded and never mutated.
/// The serialized field names follow the bundled data file
/// (`movieName`, `imdbRating`), which is also the shape the JSON API returns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    /// Catalog ID. Expected to be positive and unique, neither is enforced.
    pub id: i64,
    /// Display title.
    #[serde(rename = "movieName")]
    pub name: String,
    pub director: String,
    /// Release year.
    pub year: i32,
    /// Genre label, possibly compound (e.g. "Crime/Drama").
    pub genre: String,
    pub description: String,
    /// Running time in minutes.
    pub duration: u32,
    /// Rating on a five point scale.
    #[serde(rename = "imdbRating")]
    pub rating: f64,
}

impl Movie {
    /// Case-insensitive substring match against the title.
    ///
    /// `needle` must already be lowercased.
    pub(crate) fn name_contains(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
    }

    /// Case-insensitive substring match against the genre.
    ///
    /// `needle` must already be lowercased.
    pub(crate) fn genre_contains(&self, needle: &str) -> bool {
        self.genre.to_lowercase().contains(needle)
    }
}
