//! Movie catalog trait definition.
//!
//! This port is the narrow read-only interface the search engine needs from
//! a movie store. The in-memory `MovieStore` is the production implementation;
//! tests substitute their own by construction.

use crate::domain::Movie;

/// Read-only access to the loaded movie collection.
///
/// # Contract
///
/// - `all` returns every movie in load order, duplicates included
/// - `by_id` returns `None` for non-positive or unknown ids, never an error
#[cfg_attr(test, mockall::automock)]
pub trait MovieCatalog: Send + Sync {
    /// Every movie in load order.
    fn all(&self) -> Vec<Movie>;

    /// Look up a movie by its catalog ID.
    fn by_id(&self, id: i64) -> Option<Movie>;
}
