//! Axum web server adapter for marquee.
//!
//! Serves the movie catalog as server-rendered HTML pages and a JSON search
//! API. Handlers are thin: they turn query parameters into
//! [`marquee_core::SearchCriteria`], call [`marquee_core::MovieService`] and
//! shape the result into a page model or a JSON envelope.
//!
//! | route                    | handler                     | output          |
//! |--------------------------|-----------------------------|-----------------|
//! | `GET /health`            | [`routes::health_check`]    | `OK`            |
//! | `GET /movies`            | [`handlers::movies::browse`]     | HTML listing    |
//! | `GET /movies/search`     | [`handlers::movies::search_api`] | JSON envelope   |
//! | `GET /movies/genres`     | [`handlers::movies::genres`]     | JSON array      |
//! | `GET /movies/{id}/details` | [`handlers::movies::details`]  | HTML detail page |

#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

// Silence unused dev-dependency warnings; these are used by tests/ only
#[cfg(test)]
use async_trait as _;
#[cfg(test)]
use http_body_util as _;
#[cfg(test)]
use mockall as _;
#[cfg(test)]
use tower as _;

pub mod bootstrap;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;
pub mod views;

// Re-export primary types
pub use bootstrap::{AxumContext, CorsConfig, ServerConfig, bootstrap, start_server};
pub use error::HttpError;
pub use routes::create_router;
pub use state::AppState;
