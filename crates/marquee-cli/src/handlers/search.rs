//! Search command handler.

use anyhow::Result;
use marquee_axum::dto::SearchResponse;
use marquee_core::{Movie, SearchCriteria, result_summary};

use crate::bootstrap::CliContext;
use crate::error::CliError;
use crate::presentation::format_movie_table;

/// Validate the criteria and run the search.
///
/// # Errors
///
/// Returns [`CliError::InvalidCriteria`] when validation fails.
pub fn run(ctx: &CliContext, criteria: &SearchCriteria) -> Result<Vec<Movie>, CliError> {
    ctx.movies.validate(criteria)?;
    Ok(ctx.movies.search(criteria))
}

/// Execute the search command.
///
/// Prints a table, or the same JSON envelope the web API returns when
/// `json` is set.
pub fn execute(ctx: &CliContext, criteria: &SearchCriteria, json: bool) -> Result<()> {
    let movies = run(ctx, criteria)?;

    if json {
        let response = SearchResponse::new(movies, criteria);
        println!("{}", serde_json::to_string_pretty(&response)?);
        return Ok(());
    }

    println!("{}\n", result_summary(movies.len()));
    if !movies.is_empty() {
        print!("{}", format_movie_table(&movies));
    }
    Ok(())
}
