//! Search criteria and their validation.
//!
//! `SearchCriteria` is the optional (name, id, genre) triple a caller
//! supplies per request. Blank strings and non-positive ids count as
//! "not supplied" everywhere criteria are interpreted.

use serde::{Deserialize, Serialize};

/// Maximum accepted length of a trimmed name term, in characters.
pub const MAX_NAME_LEN: usize = 100;

/// Maximum accepted length of a trimmed genre term, in characters.
pub const MAX_GENRE_LEN: usize = 50;

/// Per-request search criteria.
///
/// All fields are optional. Values are kept exactly as supplied so they can
/// be echoed back to the caller; use the accessor methods to read the
/// normalized form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchCriteria {
    /// Title substring to match, case-insensitively.
    pub name: Option<String>,
    /// Exact catalog ID. Takes precedence over the other fields when positive.
    pub id: Option<i64>,
    /// Genre substring to match, case-insensitively.
    pub genre: Option<String>,
}

impl SearchCriteria {
    /// Create criteria from the raw optional parts.
    pub fn new(name: Option<String>, id: Option<i64>, genre: Option<String>) -> Self {
        Self { name, id, genre }
    }

    /// Criteria matching a title substring only.
    pub fn by_name(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    /// Criteria selecting a single ID only.
    pub const fn by_id(id: i64) -> Self {
        Self {
            name: None,
            id: Some(id),
            genre: None,
        }
    }

    /// Criteria matching a genre substring only.
    pub fn by_genre(genre: impl Into<String>) -> Self {
        Self {
            genre: Some(genre.into()),
            ..Self::default()
        }
    }

    /// The trimmed name term, or `None` if absent or blank.
    pub fn name_term(&self) -> Option<&str> {
        non_blank(self.name.as_deref())
    }

    /// The trimmed genre term, or `None` if absent or blank.
    pub fn genre_term(&self) -> Option<&str> {
        non_blank(self.genre.as_deref())
    }

    /// The ID if present and positive.
    pub fn valid_id(&self) -> Option<i64> {
        self.id.filter(|id| *id > 0)
    }

    /// Whether at least one field carries a usable value.
    ///
    /// Adapters use this to tell a browse request from a search request.
    pub fn has_usable_value(&self) -> bool {
        self.name_term().is_some() || self.valid_id().is_some() || self.genre_term().is_some()
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Criteria validation error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    #[error("Movie ID must be a positive number, got {0}")]
    InvalidId(i64),

    /// The id was supplied as text that is not a whole number.
    #[error("Movie ID must be a whole number, got \"{0}\"")]
    MalformedId(String),

    #[error("Provide at least one search parameter: name, id or genre")]
    MissingCriteria,

    #[error("Movie name must be at most 100 characters, got {0}")]
    NameTooLong(usize),

    #[error("Genre must be at most 50 characters, got {0}")]
    GenreTooLong(usize),
}

/// Validate criteria before searching on behalf of an external caller.
///
/// Checks run in a fixed order and the first failure wins: ID sign, then
/// presence of any usable value, then name length, then genre length.
pub fn validate_criteria(criteria: &SearchCriteria) -> Result<(), SearchError> {
    if let Some(id) = criteria.id {
        if id <= 0 {
            return Err(SearchError::InvalidId(id));
        }
    }

    if !criteria.has_usable_value() {
        return Err(SearchError::MissingCriteria);
    }

    if let Some(name) = criteria.name_term() {
        let len = name.chars().count();
        if len > MAX_NAME_LEN {
            return Err(SearchError::NameTooLong(len));
        }
    }

    if let Some(genre) = criteria.genre_term() {
        let len = genre.chars().count();
        if len > MAX_GENRE_LEN {
            return Err(SearchError::GenreTooLong(len));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_values_are_not_usable() {
        let criteria = SearchCriteria::new(Some("   ".into()), None, Some(String::new()));
        assert_eq!(criteria.name_term(), None);
        assert_eq!(criteria.genre_term(), None);
        assert!(!criteria.has_usable_value());
    }

    #[test]
    fn test_terms_are_trimmed() {
        let criteria = SearchCriteria::new(Some("  prison ".into()), None, Some(" Drama".into()));
        assert_eq!(criteria.name_term(), Some("prison"));
        assert_eq!(criteria.genre_term(), Some("Drama"));
    }

    #[test]
    fn test_malformed_id_message_quotes_input() {
        assert_eq!(
            SearchError::MalformedId("abc".to_string()).to_string(),
            "Movie ID must be a whole number, got \"abc\""
        );
    }

    #[test]
    fn test_non_positive_id_is_not_usable() {
        assert_eq!(SearchCriteria::by_id(0).valid_id(), None);
        assert_eq!(SearchCriteria::by_id(-4).valid_id(), None);
        assert_eq!(SearchCriteria::by_id(3).valid_id(), Some(3));
        assert!(!SearchCriteria::by_id(-1).has_usable_value());
    }

    #[test]
    fn test_validate_accepts_single_usable_value() {
        assert!(validate_criteria(&SearchCriteria::by_name("x")).is_ok());
        assert!(validate_criteria(&SearchCriteria::by_id(1)).is_ok());
        assert!(validate_criteria(&SearchCriteria::by_genre("Drama")).is_ok());
    }

    #[test]
    fn test_validate_rejects_negative_id() {
        assert_eq!(
            validate_criteria(&SearchCriteria::by_id(-1)),
            Err(SearchError::InvalidId(-1))
        );
    }

    #[test]
    fn test_validate_rejects_zero_id_even_with_name() {
        let criteria = SearchCriteria::new(Some("prison".into()), Some(0), None);
        assert_eq!(validate_criteria(&criteria), Err(SearchError::InvalidId(0)));
    }

    #[test]
    fn test_validate_requires_some_criteria() {
        assert_eq!(
            validate_criteria(&SearchCriteria::default()),
            Err(SearchError::MissingCriteria)
        );
        let blanks = SearchCriteria::new(Some(String::new()), None, Some("  ".into()));
        assert_eq!(validate_criteria(&blanks), Err(SearchError::MissingCriteria));
    }

    #[test]
    fn test_validate_name_length_boundary() {
        assert!(validate_criteria(&SearchCriteria::by_name("a".repeat(100))).is_ok());
        assert_eq!(
            validate_criteria(&SearchCriteria::by_name("a".repeat(101))),
            Err(SearchError::NameTooLong(101))
        );
    }

    #[test]
    fn test_validate_genre_length_boundary() {
        assert!(validate_criteria(&SearchCriteria::by_genre("a".repeat(50))).is_ok());
        assert_eq!(
            validate_criteria(&SearchCriteria::by_genre("a".repeat(51))),
            Err(SearchError::GenreTooLong(51))
        );
    }

    #[test]
    fn test_validate_measures_trimmed_length() {
        let padded = format!("   {}   ", "a".repeat(100));
        assert!(validate_criteria(&SearchCriteria::by_name(padded)).is_ok());
    }

    #[test]
    fn test_validate_counts_characters_not_bytes() {
        // 100 two-byte characters are still within the limit
        assert!(validate_criteria(&SearchCriteria::by_name("é".repeat(100))).is_ok());
    }

    #[test]
    fn test_error_messages_are_readable() {
        assert_eq!(
            SearchError::NameTooLong(120).to_string(),
            "Movie name must be at most 100 characters, got 120"
        );
        assert!(SearchError::MissingCriteria.to_string().contains("at least one"));
    }
}
