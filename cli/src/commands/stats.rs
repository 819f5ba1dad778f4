use std::{io::Write, path::Path};

use anyhow::Result;
use omega_news_shared::views::{comment_status_counts, DashboardStats};

use super::{open_newsroom, Outcome};

/// Print the dashboard counters.
pub fn run(data_dir: &Path, out: &mut dyn Write) -> Result<Outcome> {
    let room = open_newsroom(data_dir)?;
    let store = room.store();
    let stats = DashboardStats::collect(
        store.articles(),
        store.pages(),
        store.comments(),
        store.categories(),
        store.media(),
    );
    let comments = comment_status_counts(store.comments());

    writeln!(out, "posts:      {}", stats.posts)?;
    writeln!(out, "pages:      {}", stats.pages)?;
    writeln!(
        out,
        "comments:   {} ({} pending, {} approved, {} rejected)",
        stats.comments, comments.pending, comments.approved, comments.rejected
    )?;
    writeln!(out, "categories: {}", stats.categories)?;
    writeln!(out, "media:      {}", stats.media)?;
    Ok(Outcome::Done)
}
