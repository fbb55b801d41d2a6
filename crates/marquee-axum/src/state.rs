//! Shared application state type.

use crate::bootstrap::AxumContext;
use std::sync::Arc;

/// Application state shared across all handlers.
///
/// An Arc-wrapped `AxumContext` holding the movie service and the reviews
/// collaborator. Both are read-only, so handlers never lock.
pub type AppState = Arc<AxumContext>;
