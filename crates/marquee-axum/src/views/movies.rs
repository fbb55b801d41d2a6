//! The movie listing page, used for both browsing and searching.

use std::fmt::Write;

use marquee_core::Movie;

use super::layout::{escape, movie_table, page};

/// Model for `GET /movies`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MoviesPage {
    /// Movies to list.
    pub movies: Vec<Movie>,
    /// Distinct genres for the genre picker.
    pub genres: Vec<String>,
    /// `false` for a plain browse.
    pub search_performed: bool,
    /// Submitted name, echoed back into the form.
    pub search_name: Option<String>,
    /// Submitted id, echoed back into the form.
    pub search_id: Option<i64>,
    /// Submitted genre, echoed back into the form.
    pub search_genre: Option<String>,
    /// Count summary for a successful search.
    pub search_message: Option<String>,
    /// Number of results for a successful search.
    pub search_result_count: Option<usize>,
    /// Validation message when the search was rejected.
    pub search_error: Option<String>,
}

impl MoviesPage {
    pub fn render(&self) -> String {
        let mut body = String::new();
        body.push_str("<h1>Movies</h1>\n");
        self.render_form(&mut body);

        if let Some(error) = &self.search_error {
            let _ = writeln!(body, "<p class=\"error\">{}</p>", escape(error));
        }
        if let Some(message) = &self.search_message {
            let _ = writeln!(body, "<p class=\"summary\">{}</p>", escape(message));
        }

        if self.movies.is_empty() {
            body.push_str("<p>No movies to show.</p>\n");
        } else {
            movie_table(&mut body, &self.movies);
        }

        let title = if self.search_performed {
            "Search results"
        } else {
            "All movies"
        };
        page(title, &body)
    }

    fn render_form(&self, out: &mut String) {
        let name = self.search_name.as_deref().unwrap_or_default();
        let id = self.search_id.map(|id| id.to_string()).unwrap_or_default();
        let selected_genre = self.search_genre.as_deref().unwrap_or_default();

        out.push_str("<form method=\"get\" action=\"/movies\">\n");
        let _ = writeln!(
            out,
            "<label>Title <input type=\"text\" name=\"name\" value=\"{}\"></label>",
            escape(name)
        );
        let _ = writeln!(
            out,
            "<label>ID <input type=\"number\" name=\"id\" value=\"{}\"></label>",
            escape(&id)
        );
        out.push_str("<label>Genre <select name=\"genre\">\n<option value=\"\">Any</option>\n");
        for genre in &self.genres {
            let selected = if genre == selected_genre { " selected" } else { "" };
            let _ = writeln!(
                out,
                "<option value=\"{g}\"{selected}>{g}</option>",
                g = escape(genre)
            );
        }
        out.push_str("</select></label>\n<button type=\"submit\">Search</button>\n</form>\n");
    }
}
