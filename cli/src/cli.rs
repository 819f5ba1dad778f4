use std::path::PathBuf;

use clap::{Parser, Subcommand};
use omega_news_shared::{config::Collection, models::CommentStatus};

/// Top-level arguments.
#[derive(Parser)]
#[command(name = "omega-cli", version, about = "OmegaNews content store CLI")]
pub struct Cli {
    /// Directory holding one JSON file per collection.
    #[arg(long, env = "OMEGA_DATA_DIR", default_value = "./data/omega", global = true)]
    pub data_dir: PathBuf,

    /// What to do.
    #[command(subcommand)]
    pub command: Commands,
}

/// Subcommands.
#[derive(Subcommand)]
pub enum Commands {
    /// Write the bundled seed dataset into the data directory.
    Init {
        /// Overwrite collections that already exist.
        #[arg(long)]
        force: bool,
    },
    /// Print the records of one collection.
    List {
        /// articles, categories, comments, pages, settings, authors or media.
        #[arg(value_parser = parse_collection)]
        collection: Collection,
    },
    /// Print the dashboard counters.
    Stats,
    /// Print the most viewed articles.
    Trending {
        /// How many articles to print.
        #[arg(long, default_value_t = 5)]
        limit: usize,
    },
    /// Append a category. The slug is derived from the name when omitted.
    AddCategory {
        /// Display name.
        #[arg(long)]
        name: String,
        /// URL segment.
        #[arg(long)]
        slug: Option<String>,
    },
    /// Remove every record with the given id from a collection.
    Delete {
        /// Collection to delete from.
        #[arg(value_parser = parse_collection)]
        collection: Collection,
        /// Record id.
        id: String,
    },
    /// Set the moderation status of a comment.
    Moderate {
        /// Comment id.
        id: String,
        /// approve, reject or pending.
        #[arg(value_parser = parse_status)]
        status: CommentStatus,
    },
    /// Check an admin email/password pair. Exits non-zero when rejected.
    Login {
        /// Admin email.
        #[arg(long)]
        email: String,
        /// Admin password.
        #[arg(long)]
        password: String,
    },
}

fn parse_collection(raw: &str) -> Result<Collection, String> {
    Collection::parse(raw).ok_or_else(|| {
        let names = Collection::ALL
            .iter()
            .map(|collection| collection.name())
            .collect::<Vec<_>>()
            .join(", ");
        format!("unknown collection `{raw}` (expected one of: {names})")
    })
}

fn parse_status(raw: &str) -> Result<CommentStatus, String> {
    CommentStatus::parse(raw)
        .ok_or_else(|| format!("unknown status `{raw}` (expected approve, reject or pending)"))
}
