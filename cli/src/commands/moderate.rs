use std::{io::Write, path::Path};

use anyhow::Result;
use omega_news_shared::models::CommentStatus;

use super::{announce, open_newsroom, Outcome};

/// Set a comment's status. An unknown id changes nothing.
pub fn run(data_dir: &Path, id: &str, status: CommentStatus, out: &mut dyn Write) -> Result<Outcome> {
    let mut room = open_newsroom(data_dir)?;
    if !room.update_comment_status(id, status)? {
        writeln!(out, "No comment with id `{id}`; nothing changed.")?;
        return Ok(Outcome::Done);
    }
    announce(&room, out)?;
    Ok(Outcome::Done)
}
