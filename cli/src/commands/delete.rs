use std::{io::Write, path::Path};

use anyhow::{bail, Result};
use omega_news_shared::config::Collection;

use super::{announce, open_newsroom, Outcome};

/// Delete by id. An unknown id changes nothing and still succeeds.
pub fn run(data_dir: &Path, collection: Collection, id: &str, out: &mut dyn Write) -> Result<Outcome> {
    if collection == Collection::Settings {
        bail!("settings cannot be deleted");
    }

    let mut room = open_newsroom(data_dir)?;

    let removed = match collection {
        Collection::Articles => room.delete_article(id)?,
        Collection::Categories => room.delete_category(id)?,
        Collection::Comments => room.delete_comment(id)?,
        Collection::Pages => room.delete_page(id)?,
        Collection::Authors => room.delete_author(id)?,
        Collection::Media => room.delete_media(id)?,
        Collection::Settings => 0,
    };

    tracing::info!(%collection, %id, removed, "deleted records");
    if removed == 0 {
        writeln!(out, "No {collection} record with id `{id}`; nothing removed.")?;
        return Ok(Outcome::Done);
    }
    announce(&room, out)?;
    Ok(Outcome::Done)
}
