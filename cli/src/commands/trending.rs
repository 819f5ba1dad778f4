use std::{io::Write, path::Path};

use anyhow::Result;
use omega_news_shared::views;

use super::{open_newsroom, Outcome};

/// Print the most viewed articles.
pub fn run(data_dir: &Path, limit: usize, out: &mut dyn Write) -> Result<Outcome> {
    let room = open_newsroom(data_dir)?;
    for (rank, article) in views::trending(room.store().articles())
        .iter()
        .take(limit)
        .enumerate()
    {
        writeln!(
            out,
            "{:>2}. {:>7} views  {}  ({})",
            rank + 1,
            article.views,
            article.title,
            article.id
        )?;
    }
    Ok(Outcome::Done)
}
