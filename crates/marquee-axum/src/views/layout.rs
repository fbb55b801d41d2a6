//! Shared page chrome and escaping.

use std::fmt::Write;

use marquee_core::Movie;

const STYLE: &str = "body{font-family:sans-serif;margin:2rem;max-width:960px}\
table{border-collapse:collapse;width:100%}\
th,td{border-bottom:1px solid #ddd;padding:.4rem;text-align:left}\
.error{color:#b00020}.summary{color:#2e7d32}";

/// Escape text for use in HTML element content and quoted attributes.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

/// Wrap `body` in a complete HTML document.
pub(super) fn page(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{title} - Marquee</title>\n<style>{STYLE}</style>\n</head>\n\
         <body>\n<nav><a href=\"/movies\">All movies</a></nav>\n{body}</body>\n</html>\n",
        title = escape(title),
    )
}

/// Render the movie table used by the listing page.
pub(super) fn movie_table(out: &mut String, movies: &[Movie]) {
    out.push_str(
        "<table>\n<tr><th>ID</th><th>Title</th><th>Director</th><th>Year</th>\
         <th>Genre</th><th>Rating</th></tr>\n",
    );
    for movie in movies {
        let _ = writeln!(
            out,
            "<tr><td>{id}</td><td><a href=\"/movies/{id}/details\">{name}</a></td>\
             <td>{director}</td><td>{year}</td><td>{genre}</td><td>{rating:.1}</td></tr>",
            id = movie.id,
            name = escape(&movie.name),
            director = escape(&movie.director),
            year = movie.year,
            genre = escape(&movie.genre),
            rating = movie.rating,
        );
    }
    out.push_str("</table>\n");
}
