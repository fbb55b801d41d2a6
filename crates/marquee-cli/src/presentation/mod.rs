//! Terminal output formatting.

pub mod movie_display;
pub mod tables;

pub use movie_display::{format_movie_details, format_movie_table};
pub use tables::{separator, truncate_string};
