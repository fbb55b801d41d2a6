//! Show command handler.
//!
//! Prints a single movie with its reviews.

use anyhow::Result;
use marquee_core::{Movie, Review};

use crate::bootstrap::CliContext;
use crate::error::CliError;
use crate::presentation::format_movie_details;

/// Look up a movie and its reviews.
///
/// A failing review source is logged and treated as "no reviews".
///
/// # Errors
///
/// Returns [`CliError::NotFound`] when no movie has `id`.
pub async fn lookup(ctx: &CliContext, id: i64) -> Result<(Movie, Vec<Review>), CliError> {
    let movie = ctx.movies.get_by_id(id).ok_or(CliError::NotFound(id))?;

    let reviews = match ctx.reviews.reviews_for(movie.id).await {
        Ok(reviews) => reviews,
        Err(e) => {
            tracing::error!(movie_id = movie.id, "Failed to load reviews: {}", e);
            Vec::new()
        }
    };
    Ok((movie, reviews))
}

/// Execute the show command.
pub async fn execute(ctx: &CliContext, id: i64) -> Result<()> {
    let (movie, reviews) = lookup(ctx, id).await?;
    print!("{}", format_movie_details(&movie, &reviews));
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use crate::bootstrap::{CliConfig, bootstrap};

    #[tokio::test]
    async fn test_lookup_with_reviews_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"movieId": 2, "reviewer": "Lee", "rating": 4.5, "comment": "Great."}},
               {{"movieId": 3, "reviewer": "Max", "rating": 2.0, "comment": "Meh."}}]"#
        )
        .unwrap();
        let ctx = bootstrap(&CliConfig {
            data_file: None,
            reviews_file: Some(file.path().to_path_buf()),
        });

        let (movie, reviews) = lookup(&ctx, 2).await.unwrap();
        assert_eq!(movie.name, "The Family Boss");
        assert_eq!(reviews.len(), 1);
        assert_eq!(reviews[0].reviewer, "Lee");
    }

    #[tokio::test]
    async fn test_lookup_unknown_id() {
        let ctx = bootstrap(&CliConfig::default());

        assert!(matches!(
            lookup(&ctx, 999).await,
            Err(CliError::NotFound(999))
        ));
        assert!(matches!(lookup(&ctx, -1).await, Err(CliError::NotFound(-1))));
    }
}
