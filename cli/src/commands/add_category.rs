use std::{io::Write, path::Path};

use anyhow::{bail, Result};
use omega_news_shared::{config::Collection, models::Category, text::slug_or_derive};

use super::{announce, open_newsroom, Outcome};

/// Append a category and persist it.
pub fn run(data_dir: &Path, name: &str, slug: Option<&str>, out: &mut dyn Write) -> Result<Outcome> {
    let name = name.trim();
    if name.is_empty() {
        bail!("category name must not be empty");
    }

    let mut room = open_newsroom(data_dir)?;
    let category = Category {
        id: room.new_id(Collection::Categories),
        name: name.to_string(),
        slug: slug_or_derive(slug.unwrap_or_default(), name),
    };
    let id = category.id.clone();
    room.add_category(category)?;

    announce(&room, out)?;
    writeln!(out, "id: {id}")?;
    Ok(Outcome::Done)
}
