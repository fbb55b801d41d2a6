//! Genres command handler.

use anyhow::Result;

use crate::bootstrap::CliContext;

/// Execute the genres command.
pub fn execute(ctx: &CliContext) -> Result<()> {
    let genres = ctx.movies.genres();
    if genres.is_empty() {
        println!("The catalog is empty.");
        return Ok(());
    }

    for genre in genres {
        println!("{genre}");
    }
    Ok(())
}
