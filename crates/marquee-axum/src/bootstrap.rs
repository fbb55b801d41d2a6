//! Axum server bootstrap - the composition root.
//!
//! This module is the ONLY place where the catalog is wired together for the
//! web adapter. The movie store and review source are loaded here, once,
//! before the listener starts.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use marquee_core::{
    DataSource, JsonReviewSource, MovieCatalog, MovieService, MovieStore, NoReviews, ReviewSource,
};

/// Default HTTP port.
pub const DEFAULT_PORT: u16 = 8080;

/// Default bind address.
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// CORS configuration for the web server.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CorsConfig {
    /// Allow all origins (development mode).
    #[default]
    AllowAll,
    /// Allow specific origins (production mode).
    AllowOrigins(Vec<String>),
}

/// Server configuration for the Axum adapter.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind.
    pub host: String,
    /// Port for the HTTP server.
    pub port: u16,
    /// Movie data file. `None` serves the bundled data set.
    pub data_file: Option<PathBuf>,
    /// Reviews file. `None` serves no reviews.
    pub reviews_file: Option<PathBuf>,
    /// CORS configuration.
    pub cors: CorsConfig,
}

impl ServerConfig {
    /// Create config with default values.
    pub fn with_defaults() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            data_file: None,
            reviews_file: None,
            cors: CorsConfig::default(),
        }
    }

    /// Serve movies from a data file instead of the bundled set.
    #[must_use]
    pub fn with_data_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.data_file = Some(path.into());
        self
    }

    /// Serve reviews from a reviews file.
    #[must_use]
    pub fn with_reviews_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.reviews_file = Some(path.into());
        self
    }

    /// Set CORS to allow specific origins.
    #[must_use]
    pub fn with_allowed_origins(mut self, origins: Vec<String>) -> Self {
        self.cors = CorsConfig::AllowOrigins(origins);
        self
    }

    /// The `host:port` string to bind.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self::with_defaults()
    }
}

/// Application context for the Axum adapter.
///
/// Holds the initialized services shared by every handler.
pub struct AxumContext {
    /// The catalog search engine.
    pub movies: Arc<MovieService>,
    /// The reviews collaborator used by the detail page.
    pub reviews: Arc<dyn ReviewSource>,
}

impl AxumContext {
    /// Assemble a context from already-built collaborators.
    ///
    /// Tests use this to plug in their own catalog or review source.
    pub fn new(catalog: Arc<dyn MovieCatalog>, reviews: Arc<dyn ReviewSource>) -> Self {
        Self {
            movies: Arc::new(MovieService::new(catalog)),
            reviews,
        }
    }
}

/// Load the catalog and reviews described by `config`.
///
/// Never fails: unreadable data files degrade to empty data and are logged by
/// the stores themselves.
pub fn bootstrap(config: &ServerConfig) -> AxumContext {
    let source = DataSource::from_optional_path(config.data_file.clone());
    let store = MovieStore::load(&source);
    if store.is_empty() {
        tracing::warn!(source = ?source, "Movie catalog is empty");
    }

    let reviews: Arc<dyn ReviewSource> = match &config.reviews_file {
        Some(path) => Arc::new(JsonReviewSource::load(path)),
        None => Arc::new(NoReviews::new()),
    };

    AxumContext::new(Arc::new(store), reviews)
}

/// Start the web server and run until Ctrl+C.
pub async fn start_server(config: ServerConfig) -> Result<()> {
    use tokio::net::TcpListener;
    use tracing::info;

    let ctx = bootstrap(&config);
    let app = crate::routes::create_router(ctx, &config.cors);

    let addr = config.bind_addr();
    let listener = TcpListener::bind(&addr).await?;
    info!("marquee web server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("marquee web server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ServerConfig::with_defaults();
        assert_eq!(config.bind_addr(), "127.0.0.1:8080");
        assert!(config.data_file.is_none());
        assert_eq!(config.cors, CorsConfig::AllowAll);
    }

    #[test]
    fn test_builders() {
        let config = ServerConfig::with_defaults()
            .with_data_file("/tmp/movies.json")
            .with_reviews_file("/tmp/reviews.json")
            .with_allowed_origins(vec!["http://localhost:3000".to_string()]);

        assert_eq!(config.data_file, Some(PathBuf::from("/tmp/movies.json")));
        assert_eq!(config.reviews_file, Some(PathBuf::from("/tmp/reviews.json")));
        assert_eq!(
            config.cors,
            CorsConfig::AllowOrigins(vec!["http://localhost:3000".to_string()])
        );
    }

    #[test]
    fn test_bootstrap_with_missing_data_file_serves_empty_catalog() {
        let config = ServerConfig::with_defaults().with_data_file("/nonexistent/movies.json");
        let ctx = bootstrap(&config);
        assert!(ctx.movies.all().is_empty());
    }

    #[test]
    fn test_bootstrap_defaults_to_bundled_catalog() {
        let ctx = bootstrap(&ServerConfig::with_defaults());
        assert!(ctx.movies.get_by_id(1).is_some());
    }
}
