//! Single movie detail page.

use std::fmt::Write;

use marquee_core::{Movie, Review};

use super::layout::{escape, page};

/// Model for `GET /movies/{id}/details`.
#[derive(Debug, Clone, PartialEq)]
pub struct DetailPage {
    pub movie: Movie,
    pub reviews: Vec<Review>,
}

impl DetailPage {
    pub fn render(&self) -> String {
        let movie = &self.movie;
        let mut body = String::new();

        let _ = writeln!(body, "<h1>{}</h1>", escape(&movie.name));
        let _ = writeln!(
            body,
            "<dl>\n<dt>Director</dt><dd>{}</dd>\n<dt>Year</dt><dd>{}</dd>\n\
             <dt>Genre</dt><dd>{}</dd>\n<dt>Duration</dt><dd>{} min</dd>\n\
             <dt>Rating</dt><dd>{:.1}</dd>\n</dl>",
            escape(&movie.director),
            movie.year,
            escape(&movie.genre),
            movie.duration,
            movie.rating,
        );
        let _ = writeln!(body, "<p>{}</p>", escape(&movie.description));

        body.push_str("<h2>Reviews</h2>\n");
        if self.reviews.is_empty() {
            body.push_str("<p>No reviews yet.</p>\n");
        } else {
            body.push_str("<ul class=\"reviews\">\n");
            for review in &self.reviews {
                let _ = writeln!(
                    body,
                    "<li><strong>{}</strong> ({:.1}/5): {}</li>",
                    escape(&review.reviewer),
                    review.rating,
                    escape(&review.comment),
                );
            }
            body.push_str("</ul>\n");
        }

        page(&movie.name, &body)
    }
}
