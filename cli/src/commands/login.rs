use std::{io::Write, path::Path};

use anyhow::Result;

use super::{announce, open_newsroom, Outcome};

/// Check a credential pair.
pub fn run(data_dir: &Path, email: &str, password: &str, out: &mut dyn Write) -> Result<Outcome> {
    let mut room = open_newsroom(data_dir)?;
    let accepted = room.login(email, password)?;
    announce(&room, out)?;
    Ok(if accepted { Outcome::Done } else { Outcome::Rejected })
}
