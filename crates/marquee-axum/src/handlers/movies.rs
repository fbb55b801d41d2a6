//! Movie handlers - listing, search API, genres and detail pages.

use axum::Json;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use marquee_core::{MovieService, SearchCriteria, result_summary};

use crate::dto::{MovieQuery, SearchResponse};
use crate::error::HttpError;
use crate::state::AppState;
use crate::views::{DetailPage, MoviesPage, NotFoundPage};

/// List or search movies as an HTML page.
///
/// Never fails: a query string that cannot be read is shown as a rejected
/// search over the full catalog.
pub async fn browse(
    State(state): State<AppState>,
    query: Result<Query<MovieQuery>, QueryRejection>,
) -> Html<String> {
    let criteria = query
        .map_err(|rejection| rejection.body_text())
        .and_then(|Query(query)| query.into_criteria().map_err(|e| e.to_string()));

    let page = match criteria {
        Ok(criteria) => build_movies_page(&state.movies, criteria),
        Err(message) => {
            tracing::warn!("Rejected search parameters: {}", message);
            rejected_search_page(&state.movies, message)
        }
    };
    Html(page.render())
}

/// Listing page for a search whose parameters could not be read at all.
pub fn rejected_search_page(service: &MovieService, message: String) -> MoviesPage {
    MoviesPage {
        movies: service.all(),
        genres: service.genres(),
        search_performed: true,
        search_error: Some(message),
        ..MoviesPage::default()
    }
}

/// Build the listing page model for the given criteria.
///
/// Criteria without any usable value are a plain browse and skip
/// validation. A rejected search still lists the whole catalog, with the
/// validation message attached.
pub fn build_movies_page(service: &MovieService, criteria: SearchCriteria) -> MoviesPage {
    let genres = service.genres();

    if !criteria.has_usable_value() {
        let movies = service.all();
        tracing::info!(count = movies.len(), "Browsing all movies");
        return MoviesPage {
            movies,
            genres,
            ..MoviesPage::default()
        };
    }

    let SearchCriteria { name, id, genre } = criteria.clone();
    let mut page = MoviesPage {
        genres,
        search_performed: true,
        search_name: name,
        search_id: id,
        search_genre: genre,
        ..MoviesPage::default()
    };

    match service.validate(&criteria) {
        Ok(()) => {
            let movies = service.search(&criteria);
            page.search_message = Some(result_summary(movies.len()));
            page.search_result_count = Some(movies.len());
            page.movies = movies;
        }
        Err(e) => {
            tracing::warn!(criteria = ?criteria, "Rejected search: {}", e);
            page.search_error = Some(e.to_string());
            page.movies = service.all();
        }
    }
    page
}

/// JSON search API.
pub async fn search_api(
    State(state): State<AppState>,
    query: Result<Query<MovieQuery>, QueryRejection>,
) -> Result<Json<SearchResponse>, HttpError> {
    let Query(query) = query?;
    let criteria = query.into_criteria()?;
    state.movies.validate(&criteria)?;
    let movies = state.movies.search(&criteria);
    Ok(Json(SearchResponse::new(movies, &criteria)))
}

/// Get all distinct genres.
pub async fn genres(State(state): State<AppState>) -> Json<Vec<String>> {
    Json(state.movies.genres())
}

/// Detail page for one movie.
///
/// The id is read leniently: anything that is not a known positive id
/// renders the not-found page with a 404 status.
pub async fn details(State(state): State<AppState>, Path(raw_id): Path<String>) -> Response {
    let movie = raw_id
        .trim()
        .parse::<i64>()
        .ok()
        .and_then(|id| state.movies.get_by_id(id));

    let Some(movie) = movie else {
        tracing::info!(id = %raw_id, "Movie not found");
        let page = NotFoundPage { requested: raw_id };
        return (StatusCode::NOT_FOUND, Html(page.render())).into_response();
    };

    let reviews = match state.reviews.reviews_for(movie.id).await {
        Ok(reviews) => reviews,
        Err(e) => {
            tracing::error!(movie_id = movie.id, "Failed to load reviews: {}", e);
            Vec::new()
        }
    };

    Html(DetailPage { movie, reviews }.render()).into_response()
}
