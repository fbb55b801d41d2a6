//! Movie formatting for the terminal.

use std::fmt::Write;

use marquee_core::{Movie, Review};

use super::tables::{separator, truncate_string};

const TABLE_WIDTH: usize = 92;

/// Format movies as a fixed-width table.
pub fn format_movie_table(movies: &[Movie]) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<4} {:<32} {:<22} {:<6} {:<18} {:>6}",
        "ID", "Title", "Director", "Year", "Genre", "Rating"
    );
    let _ = writeln!(out, "{}", separator(TABLE_WIDTH));
    for movie in movies {
        let _ = writeln!(
            out,
            "{:<4} {:<32} {:<22} {:<6} {:<18} {:>6.1}",
            movie.id,
            truncate_string(&movie.name, 31),
            truncate_string(&movie.director, 21),
            movie.year,
            truncate_string(&movie.genre, 17),
            movie.rating,
        );
    }
    out
}

/// Format one movie with its reviews.
pub fn format_movie_details(movie: &Movie, reviews: &[Review]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} ({})", movie.name, movie.year);
    let _ = writeln!(out, "{}", separator(TABLE_WIDTH));
    let _ = writeln!(out, "ID:        {}", movie.id);
    let _ = writeln!(out, "Director:  {}", movie.director);
    let _ = writeln!(out, "Genre:     {}", movie.genre);
    let _ = writeln!(out, "Duration:  {} min", movie.duration);
    let _ = writeln!(out, "Rating:    {:.1}", movie.rating);
    if !movie.description.is_empty() {
        let _ = writeln!(out, "\n{}", movie.description);
    }

    let _ = writeln!(out, "\nReviews ({}):", reviews.len());
    if reviews.is_empty() {
        out.push_str("  No reviews yet.\n");
    }
    for review in reviews {
        let _ = writeln!(
            out,
            "  {} ({:.1}/5): {}",
            review.reviewer, review.rating, review.comment
        );
    }
    out
}
