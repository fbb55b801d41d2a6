//! Movie service - the catalog search engine.

use std::collections::BTreeSet;
use std::sync::Arc;

use crate::domain::{Movie, SearchCriteria, SearchError, validate_criteria};
use crate::ports::MovieCatalog;

/// Search, lookup and aggregate operations over a `MovieCatalog`.
///
/// # Validation
///
/// `search` performs no validation: all-blank criteria return the whole
/// catalog. Callers serving external requests must call `validate` first.
pub struct MovieService {
    catalog: Arc<dyn MovieCatalog>,
}

impl MovieService {
    /// Create a new movie service over the given catalog.
    pub fn new(catalog: Arc<dyn MovieCatalog>) -> Self {
        Self { catalog }
    }

    /// Every movie in load order.
    pub fn all(&self) -> Vec<Movie> {
        self.catalog.all()
    }

    /// Look up a single movie. Non-positive and unknown ids yield `None`.
    pub fn get_by_id(&self, id: i64) -> Option<Movie> {
        if id <= 0 {
            return None;
        }
        self.catalog.by_id(id)
    }

    /// Find movies matching `criteria`.
    ///
    /// A positive ID wins outright and the other fields are ignored. Otherwise
    /// the name and genre terms narrow the catalog in turn, each as a
    /// case-insensitive substring match. Store order is preserved.
    pub fn search(&self, criteria: &SearchCriteria) -> Vec<Movie> {
        tracing::info!(
            name = ?criteria.name,
            id = ?criteria.id,
            genre = ?criteria.genre,
            "Searching movies"
        );

        if let Some(id) = criteria.valid_id() {
            return self.get_by_id(id).into_iter().collect();
        }

        let mut results = self.catalog.all();

        if let Some(name) = criteria.name_term() {
            let needle = name.to_lowercase();
            results.retain(|movie| movie.name_contains(&needle));
        }

        if let Some(genre) = criteria.genre_term() {
            let needle = genre.to_lowercase();
            results.retain(|movie| movie.genre_contains(&needle));
        }

        tracing::info!(count = results.len(), "Search complete");
        results
    }

    /// Distinct genres in ascending order, compared by exact string.
    pub fn genres(&self) -> Vec<String> {
        self.catalog
            .all()
            .into_iter()
            .map(|movie| movie.genre)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Check criteria supplied by an external caller.
    pub fn validate(&self, criteria: &SearchCriteria) -> Result<(), SearchError> {
        validate_criteria(criteria)
    }
}

/// Human-readable summary of a search result count.
pub fn result_summary(count: usize) -> String {
    match count {
        0 => "No movies found matching your search criteria. Try different keywords.".to_string(),
        1 => "Found 1 movie matching your search.".to_string(),
        n => format!("Found {n} movies matching your search."),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::MockMovieCatalog;
    use crate::store::{DataSource, MovieStore};

    fn movie(id: i64, name: &str, genre: &str) -> Movie {
        Movie {
            id,
            name: name.to_string(),
            director: "Director".to_string(),
            year: 2000,
            genre: genre.to_string(),
            description: String::new(),
            duration: 120,
            rating: 4.0,
        }
    }

    fn small_service() -> MovieService {
        MovieService::new(Arc::new(MovieStore::from_movies(vec![
            movie(1, "Test Movie", "Drama"),
            movie(2, "Action Movie", "Action"),
            movie(3, "Comedy Film", "Comedy"),
            movie(4, "Action Drama Night", "Action/Drama"),
        ])))
    }

    fn bundled_service() -> MovieService {
        MovieService::new(Arc::new(MovieStore::load(&DataSource::Bundled)))
    }

    fn ids(movies: &[Movie]) -> Vec<i64> {
        movies.iter().map(|m| m.id).collect()
    }

    #[test]
    fn test_id_takes_precedence_over_name_and_genre() {
        let service = small_service();
        let criteria = SearchCriteria::new(Some("Some Name".into()), Some(2), Some("Nope".into()));
        assert_eq!(ids(&service.search(&criteria)), vec![2]);
    }

    #[test]
    fn test_unknown_id_returns_empty() {
        assert!(small_service().search(&SearchCriteria::by_id(999)).is_empty());
        assert!(small_service().search(&SearchCriteria::by_id(i64::MAX)).is_empty());
    }

    #[test]
    fn test_non_positive_id_falls_through_to_filters() {
        let service = small_service();
        let criteria = SearchCriteria::new(Some("movie".into()), Some(0), None);
        assert_eq!(ids(&service.search(&criteria)), vec![1, 2]);

        // On its own a zero id behaves like no criteria at all
        assert_eq!(service.search(&SearchCriteria::by_id(0)).len(), 4);
    }

    #[test]
    fn test_blank_criteria_return_everything_in_order() {
        let service = small_service();
        let blank = SearchCriteria::new(Some(String::new()), None, Some(String::new()));
        assert_eq!(ids(&service.search(&blank)), vec![1, 2, 3, 4]);

        let spaces = SearchCriteria::new(Some("   ".into()), None, Some("   ".into()));
        assert_eq!(ids(&service.search(&spaces)), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_name_filter_is_case_insensitive_substring() {
        let service = small_service();
        assert_eq!(ids(&service.search(&SearchCriteria::by_name("MOVIE"))), vec![1, 2]);
        assert_eq!(ids(&service.search(&SearchCriteria::by_name("  film "))), vec![3]);
    }

    #[test]
    fn test_genre_filter_is_case_insensitive_substring() {
        let service = small_service();
        assert_eq!(ids(&service.search(&SearchCriteria::by_genre("drama"))), vec![1, 4]);
        assert!(service.search(&SearchCriteria::by_genre("Horror")).is_empty());
    }

    #[test]
    fn test_name_and_genre_combine_with_and() {
        let service = small_service();
        let criteria = SearchCriteria::new(Some("action".into()), None, Some("drama".into()));
        assert_eq!(ids(&service.search(&criteria)), vec![4]);
    }

    #[test]
    fn test_special_characters_match_nothing() {
        assert!(small_service().search(&SearchCriteria::by_name("@#$%")).is_empty());
    }

    #[test]
    fn test_results_are_ordered_subset_of_all() {
        let service = bundled_service();
        let all = service.all();
        for criteria in [
            SearchCriteria::by_name("the"),
            SearchCriteria::by_genre("sci"),
            SearchCriteria::new(Some("e".into()), None, Some("a".into())),
        ] {
            let results = service.search(&criteria);
            assert!(results.len() <= all.len());
            let mut cursor = all.iter();
            for found in &results {
                assert!(cursor.any(|m| m == found), "{} out of order", found.name);
            }
        }
    }

    #[test]
    fn test_genres_sorted_distinct_and_present() {
        let service = bundled_service();
        let genres = service.genres();
        assert!(genres.windows(2).all(|w| w[0] < w[1]));
        for genre in &genres {
            assert!(service.all().iter().any(|m| &m.genre == genre));
        }
        assert!(genres.contains(&"Drama".to_string()));
        assert!(genres.contains(&"Action/Crime".to_string()));
    }

    #[test]
    fn test_genres_are_not_case_folded() {
        let service = MovieService::new(Arc::new(MovieStore::from_movies(vec![
            movie(1, "A", "drama"),
            movie(2, "B", "Drama"),
            movie(3, "C", "Drama"),
        ])));
        assert_eq!(service.genres(), vec!["Drama", "drama"]);
    }

    #[test]
    fn test_get_by_id_short_circuits_non_positive_ids() {
        let mut catalog = MockMovieCatalog::new();
        catalog.expect_by_id().never();
        let service = MovieService::new(Arc::new(catalog));

        assert!(service.get_by_id(0).is_none());
        assert!(service.get_by_id(-7).is_none());
    }

    #[test]
    fn test_id_search_does_not_scan_catalog() {
        let mut catalog = MockMovieCatalog::new();
        catalog.expect_all().never();
        catalog
            .expect_by_id()
            .withf(|id| *id == 3)
            .times(1)
            .returning(|id| Some(movie(id, "Third", "Drama")));
        let service = MovieService::new(Arc::new(catalog));

        let results = service.search(&SearchCriteria::by_id(3));
        assert_eq!(ids(&results), vec![3]);
    }

    #[test]
    fn test_validate_delegates_to_criteria_rules() {
        let service = small_service();
        assert_eq!(
            service.validate(&SearchCriteria::by_id(-1)),
            Err(SearchError::InvalidId(-1))
        );
        assert_eq!(
            service.validate(&SearchCriteria::default()),
            Err(SearchError::MissingCriteria)
        );
        assert!(service.validate(&SearchCriteria::by_name("x")).is_ok());
    }

    #[test]
    fn test_bundled_catalog_end_to_end() {
        let service = bundled_service();
        assert!(service.all().len() >= 10);

        let the = service.search(&SearchCriteria::by_name("the"));
        assert!(the.len() > 1);
        assert!(the.iter().any(|m| m.id == 1));
        assert!(the.iter().all(|m| m.name.to_lowercase().contains("the")));

        let prison = service.search(&SearchCriteria::by_name("PRISON"));
        assert_eq!(prison.len(), 1);
        assert_eq!(prison[0].name, "The Prison Escape");

        let by_id = service.search(&SearchCriteria::by_id(1));
        assert_eq!(by_id.len(), 1);
        assert_eq!(by_id[0].genre, "Drama");

        let family_crime =
            service.search(&SearchCriteria::new(Some("Family".into()), None, Some("Crime".into())));
        assert!(family_crime.iter().all(|m| {
            m.name.to_lowercase().contains("family") && m.genre.to_lowercase().contains("crime")
        }));
        assert!(!family_crime.is_empty());

        assert!(service.get_by_id(999).is_none());
    }

    #[test]
    fn test_result_summary_wording() {
        assert_eq!(result_summary(1), "Found 1 movie matching your search.");
        assert_eq!(result_summary(3), "Found 3 movies matching your search.");
        assert!(result_summary(0).starts_with("No movies found"));
    }
}
