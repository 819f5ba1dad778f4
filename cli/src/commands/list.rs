use std::{io::Write, path::Path};

use anyhow::Result;
use omega_news_shared::config::Collection;

use super::{open_newsroom, Outcome};

/// Print one line per record.
pub fn run(data_dir: &Path, collection: Collection, out: &mut dyn Write) -> Result<Outcome> {
    let room = open_newsroom(data_dir)?;
    let store = room.store();

    let rows: Vec<(String, String)> = match collection {
        Collection::Articles => store
            .articles()
            .iter()
            .map(|a| (a.id.clone(), format!("{} [{}] {} views", a.title, a.category, a.views)))
            .collect(),
        Collection::Categories => store
            .categories()
            .iter()
            .map(|c| (c.id.clone(), format!("{} ({})", c.name, c.slug)))
            .collect(),
        Collection::Comments => store
            .comments()
            .iter()
            .map(|c| (c.id.clone(), format!("{} [{}]", c.author, c.effective_status())))
            .collect(),
        Collection::Pages => store
            .pages()
            .iter()
            .map(|p| (p.id.clone(), format!("{} /page/{} [{}]", p.title, p.slug, p.status.as_str())))
            .collect(),
        Collection::Authors => store
            .authors()
            .iter()
            .map(|a| (a.id.clone(), a.name.clone()))
            .collect(),
        Collection::Media => store
            .media()
            .iter()
            .map(|m| (m.id.clone(), format!("{} {}", m.name, m.url)))
            .collect(),
        Collection::Settings => {
            writeln!(out, "{}", serde_json::to_string_pretty(store.settings())?)?;
            return Ok(Outcome::Done);
        },
    };

    for (id, label) in &rows {
        writeln!(out, "{id}\t{label}")?;
    }
    tracing::debug!(%collection, count = rows.len(), "listed collection");
    Ok(Outcome::Done)
}
