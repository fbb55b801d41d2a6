//! Search API envelopes.

use marquee_core::{Movie, SearchCriteria};
use serde::Serialize;

/// Successful search response.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    /// Always `true`.
    pub success: bool,
    /// Human-readable count summary.
    pub message: String,
    pub count: usize,
    pub movies: Vec<Movie>,
    /// The criteria as supplied, absent values rendered as empty strings.
    pub search_criteria: CriteriaEcho,
}

impl SearchResponse {
    pub fn new(movies: Vec<Movie>, criteria: &SearchCriteria) -> Self {
        Self {
            success: true,
            message: marquee_core::result_summary(movies.len()),
            count: movies.len(),
            movies,
            search_criteria: CriteriaEcho::from(criteria),
        }
    }
}

/// Echo of the criteria a search was run with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CriteriaEcho {
    pub name: String,
    /// The numeric id, or `""` when none was supplied.
    #[serde(serialize_with = "id_or_empty")]
    pub id: Option<i64>,
    pub genre: String,
}

impl From<&SearchCriteria> for CriteriaEcho {
    fn from(criteria: &SearchCriteria) -> Self {
        Self {
            name: criteria.name.clone().unwrap_or_default(),
            id: criteria.id,
            genre: criteria.genre.clone().unwrap_or_default(),
        }
    }
}

#[allow(clippy::ref_option)]
fn id_or_empty<S: serde::Serializer>(id: &Option<i64>, serializer: S) -> Result<S::Ok, S::Error> {
    match id {
        Some(id) => serializer.serialize_i64(*id),
        None => serializer.serialize_str(""),
    }
}

/// Failed search response, for both client and server errors.
#[derive(Debug, Clone, Serialize)]
pub struct SearchFailure {
    /// Always `false`.
    pub success: bool,
    pub error: String,
    /// Always `0`.
    pub count: usize,
    /// Always empty.
    pub movies: Vec<Movie>,
}

impl SearchFailure {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
            count: 0,
            movies: Vec::new(),
        }
    }
}
