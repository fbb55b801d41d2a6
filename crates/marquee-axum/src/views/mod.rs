//! Server-rendered HTML pages.
//!
//! Each page is a plain model struct with a `render` method returning the
//! full document. Handlers build the model; nothing here touches the
//! catalog.

mod detail;
mod layout;
mod movies;
mod not_found;

pub use detail::DetailPage;
pub use layout::escape;
pub use movies::MoviesPage;
pub use not_found::NotFoundPage;
