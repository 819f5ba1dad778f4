/// `add-category`.
pub mod add_category;
/// `delete`.
pub mod delete;
/// `init`.
pub mod init;
/// `list`.
pub mod list;
/// `login`.
pub mod login;
/// `moderate`.
pub mod moderate;
/// `stats`.
pub mod stats;
/// `trending`.
pub mod trending;

use std::{io::Write, path::Path};

use anyhow::{Context, Result};
use omega_news_shared::{
    clock::SystemClock, config::StoreConfig, newsroom::Newsroom, storage::MemoryStorage,
};

use crate::{
    cli::{Cli, Commands},
    storage::DirectoryStorage,
};

/// The CLI keeps collections on disk and its admin session in memory: a
/// session lasts as long as one invocation.
pub type CliNewsroom = Newsroom<DirectoryStorage, MemoryStorage, SystemClock>;

/// How a command ended when it did not fail outright.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The command did what was asked.
    Done,
    /// Credentials were refused.
    Rejected,
}

/// Open the data directory, failing on unreadable collections.
pub fn open_newsroom(data_dir: &Path) -> Result<CliNewsroom> {
    Newsroom::open(
        DirectoryStorage::new(data_dir),
        MemoryStorage::new(),
        StoreConfig::default(),
        SystemClock,
    )
    .with_context(|| format!("failed to open content store at {}", data_dir.display()))
}

/// Print the notification the last action raised, if any.
pub(crate) fn announce(room: &CliNewsroom, out: &mut dyn Write) -> Result<()> {
    if let Some(toast) = room.toasts().last() {
        writeln!(out, "{}", toast.message)?;
    }
    Ok(())
}

/// Dispatch a parsed command line.
pub fn run(cli: Cli, out: &mut dyn Write) -> Result<Outcome> {
    let data_dir = cli.data_dir.as_path();
    match cli.command {
        Commands::Init { force } => init::run(data_dir, force, out),
        Commands::List { collection } => list::run(data_dir, collection, out),
        Commands::Stats => stats::run(data_dir, out),
        Commands::Trending { limit } => trending::run(data_dir, limit, out),
        Commands::AddCategory { name, slug } => {
            add_category::run(data_dir, &name, slug.as_deref(), out)
        },
        Commands::Delete { collection, id } => delete::run(data_dir, collection, &id, out),
        Commands::Moderate { id, status } => moderate::run(data_dir, &id, status, out),
        Commands::Login { email, password } => login::run(data_dir, &email, &password, out),
    }
}
