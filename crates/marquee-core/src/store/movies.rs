//! The in-memory movie store.

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use super::error::LoadError;
use crate::domain::Movie;
use crate::ports::MovieCatalog;

/// The movie data set shipped with the crate.
pub const BUNDLED_MOVIES: &str = include_str!("../../../../data/movies.json");

/// Where the movie records come from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DataSource {
    /// The data set compiled into the binary.
    #[default]
    Bundled,
    /// A JSON file on disk in the same format.
    File(PathBuf),
}

impl DataSource {
    /// Use `path` when given, otherwise the bundled data set.
    pub fn from_optional_path(path: Option<PathBuf>) -> Self {
        path.map_or(Self::Bundled, Self::File)
    }

    fn read(&self) -> Result<String, LoadError> {
        match self {
            Self::Bundled => Ok(BUNDLED_MOVIES.to_string()),
            Self::File(path) => fs::read_to_string(path).map_err(|source| LoadError::Io {
                path: path.clone(),
                source,
            }),
        }
    }
}

/// Ordered, read-only collection of movies plus an ID index.
///
/// # Duplicate IDs
///
/// IDs are not required to be unique. Every record stays in the ordered list,
/// while the index points at the last record seen for each ID.
#[derive(Debug, Clone, Default)]
pub struct MovieStore {
    movies: Vec<Movie>,
    index: HashMap<i64, usize>,
}

impl MovieStore {
    /// An empty store.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a store from already-parsed movies, keeping their order.
    pub fn from_movies(movies: Vec<Movie>) -> Self {
        let mut index = HashMap::with_capacity(movies.len());
        for (pos, movie) in movies.iter().enumerate() {
            if let Some(previous) = index.insert(movie.id, pos) {
                tracing::warn!(
                    id = movie.id,
                    previous_name = %movies[previous].name,
                    name = %movie.name,
                    "Duplicate movie id, lookups will return the later record"
                );
            }
        }
        Self { movies, index }
    }

    /// Parse a JSON array of movie records.
    pub fn from_json_str(json: &str) -> Result<Self, LoadError> {
        let movies: Vec<Movie> = serde_json::from_str(json)?;
        Ok(Self::from_movies(movies))
    }

    /// Load from `source`, reporting failures to the caller.
    pub fn try_load(source: &DataSource) -> Result<Self, LoadError> {
        Self::from_json_str(&source.read()?)
    }

    /// Load from `source`, degrading to an empty store on failure.
    pub fn load(source: &DataSource) -> Self {
        match Self::try_load(source) {
            Ok(store) => {
                tracing::info!(count = store.len(), source = ?source, "Loaded movie catalog");
                store
            }
            Err(e) => {
                tracing::error!(source = ?source, "Failed to load movies: {}", e);
                Self::empty()
            }
        }
    }

    /// Movies in load order.
    pub fn movies(&self) -> &[Movie] {
        &self.movies
    }

    /// Look up a movie without cloning it.
    pub fn get(&self, id: i64) -> Option<&Movie> {
        if id <= 0 {
            return None;
        }
        self.index.get(&id).map(|&pos| &self.movies[pos])
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }
}

impl MovieCatalog for MovieStore {
    fn all(&self) -> Vec<Movie> {
        self.movies.clone()
    }

    fn by_id(&self, id: i64) -> Option<Movie> {
        self.get(id).cloned()
    }
}
