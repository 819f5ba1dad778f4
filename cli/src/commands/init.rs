use std::{io::Write, path::Path};

use anyhow::{bail, Context, Result};
use omega_news_shared::{
    clock::SystemClock,
    config::{Collection, StoreConfig},
    newsroom::Newsroom,
    storage::MemoryStorage,
};

use super::{open_newsroom, Outcome};
use crate::storage::DirectoryStorage;

/// Write the seed dataset. `force` overwrites, even over corrupt files.
pub fn run(data_dir: &Path, force: bool, out: &mut dyn Write) -> Result<Outcome> {
    let storage = DirectoryStorage::new(data_dir);
    if storage.has_collections(&StoreConfig::default()) && !force {
        bail!(
            "{} already holds collections; pass --force to overwrite them",
            data_dir.display()
        );
    }

    // A forced reset must get past collections that no longer parse.
    let mut room = if force {
        Newsroom::open_or_seed(storage, MemoryStorage::new(), StoreConfig::default(), SystemClock)
    } else {
        open_newsroom(data_dir)?
    };
    room.reset_to_seed()
        .context("failed to write seed dataset")?;

    tracing::info!("Seeded content store at {}", data_dir.display());
    writeln!(
        out,
        "Seeded {} collections into {}",
        Collection::ALL.len(),
        data_dir.display()
    )?;
    Ok(Outcome::Done)
}
