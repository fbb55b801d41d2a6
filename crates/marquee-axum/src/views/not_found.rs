//! Page shown for movie ids with no match.

use super::layout::{escape, page};

/// Page shown when a movie id has no match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotFoundPage {
    /// The id as it appeared in the path.
    pub requested: String,
}

impl NotFoundPage {
    pub fn render(&self) -> String {
        let body = format!(
            "<h1>Movie not found</h1>\n<p>No movie with id \"{}\" exists in the catalog.</p>\n",
            escape(&self.requested)
        );
        page("Movie not found", &body)
    }
}
