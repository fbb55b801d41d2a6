//! Query string parameters shared by the listing and search endpoints.

use marquee_core::{SearchCriteria, SearchError};
use serde::Deserialize;

/// Raw `name`, `id` and `genre` query parameters.
///
/// `id` is taken as text so a malformed value can be reported with the same
/// message on both the HTML and JSON paths.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MovieQuery {
    pub name: Option<String>,
    pub id: Option<String>,
    pub genre: Option<String>,
}

impl MovieQuery {
    /// Convert into core search criteria.
    ///
    /// A blank `id` counts as not supplied.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::MalformedId`] when `id` is not a whole number.
    pub fn into_criteria(self) -> Result<SearchCriteria, SearchError> {
        let id = match self.id.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(raw) => Some(
                raw.parse::<i64>()
                    .map_err(|_| SearchError::MalformedId(raw.to_string()))?,
            ),
        };
        Ok(SearchCriteria::new(self.name, id, self.genre))
    }
}
