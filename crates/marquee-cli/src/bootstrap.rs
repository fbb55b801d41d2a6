//! CLI bootstrap - the composition root.
//!
//! Loads the catalog and reviews once and hands the composed services to
//! the command handlers. The `serve` command bypasses this and lets the
//! web adapter compose its own context.

use std::path::PathBuf;
use std::sync::Arc;

use marquee_core::{
    DataSource, JsonReviewSource, MovieCatalog, MovieService, MovieStore, NoReviews, ReviewSource,
};

/// Bootstrap configuration for the CLI.
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    /// Movie data file. `None` uses the bundled catalog.
    pub data_file: Option<PathBuf>,
    /// Reviews file. `None` means no reviews.
    pub reviews_file: Option<PathBuf>,
}

/// Fully composed application context for CLI commands.
pub struct CliContext {
    pub movies: MovieService,
    pub reviews: Arc<dyn ReviewSource>,
}

impl CliContext {
    pub fn new(catalog: Arc<dyn MovieCatalog>, reviews: Arc<dyn ReviewSource>) -> Self {
        Self {
            movies: MovieService::new(catalog),
            reviews,
        }
    }
}

/// Compose the CLI context from configuration.
pub fn bootstrap(config: &CliConfig) -> CliContext {
    let source = DataSource::from_optional_path(config.data_file.clone());
    let store = MovieStore::load(&source);

    let reviews: Arc<dyn ReviewSource> = match &config.reviews_file {
        Some(path) => Arc::new(JsonReviewSource::load(path)),
        None => Arc::new(NoReviews::new()),
    };

    CliContext::new(Arc::new(store), reviews)
}
