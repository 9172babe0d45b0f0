//! Per-line authorship extraction from `git blame` porcelain output.
//!
//! `git blame --line-porcelain` repeats the full commit header for every
//! attributed line. Only three header fields matter here: `author`,
//! `author-mail` and `author-time` (plus `filename` for the attributed
//! path). Contiguous runs of lines carrying the same author, mail and
//! timestamp collapse into a single [`Contribution`].

use std::path::{Path, PathBuf};

use anyhow::{Result, bail};
use chrono::{Datelike, TimeZone, Utc};

/// One contiguous block of lines attributed to a single author at a single
/// commit time. Consumed immediately by aggregation; never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contribution {
    pub author: String,
    pub email: String,
    pub year: i32,
    pub path: PathBuf,
}

/// Parses `--line-porcelain` output into contributions for one file.
///
/// `path` is the queried path, used when the porcelain stream carries no
/// `filename` field. Fails if any attributed content line arrives without a
/// preceding author/mail/time triple, which would mean the upstream format
/// changed under us.
pub fn parse_porcelain(path: &Path, output: &str) -> Result<Vec<Contribution>> {
    let mut contributions: Vec<Contribution> = Vec::new();
    let mut author: Option<&str> = None;
    let mut email: Option<&str> = None;
    let mut time: Option<i64> = None;
    let mut filename: Option<&str> = None;
    let mut last_block: Option<(String, String, i64)> = None;

    for line in output.lines() {
        if line.starts_with('\t') {
            let (Some(who), Some(mail), Some(seconds)) = (author, email, time) else {
                bail!(
                    "malformed blame output for {}: attributed line without \
                     author/mail/time header",
                    path.display()
                );
            };
            let block = (who.to_string(), mail.to_string(), seconds);
            if last_block.as_ref() != Some(&block) {
                contributions.push(Contribution {
                    author: who.to_string(),
                    email: mail.to_string(),
                    year: year_of(seconds, path)?,
                    path: filename.map_or_else(|| path.to_path_buf(), PathBuf::from),
                });
                last_block = Some(block);
            }
            // --line-porcelain repeats the header before every line
            (author, email, time) = (None, None, None);
        } else if let Some(value) = line.strip_prefix("author ") {
            author = Some(value);
        } else if let Some(value) = line.strip_prefix("author-mail ") {
            email = Some(value.trim_start_matches('<').trim_end_matches('>'));
        } else if let Some(value) = line.strip_prefix("author-time ") {
            match value.parse() {
                Ok(seconds) => time = Some(seconds),
                Err(_) => bail!(
                    "malformed blame output for {}: bad author-time {value:?}",
                    path.display()
                ),
            }
        } else if let Some(value) = line.strip_prefix("filename ") {
            filename = Some(value);
        }
    }
    Ok(contributions)
}

// Timezone is dropped deliberately; only the calendar year is relevant.
fn year_of(epoch: i64, path: &Path) -> Result<i32> {
    match Utc.timestamp_opt(epoch, 0).single() {
        Some(timestamp) => Ok(timestamp.year()),
        None => bail!(
            "malformed blame output for {}: author-time {epoch} out of range",
            path.display()
        ),
    }
}
