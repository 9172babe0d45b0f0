//! Narrow seam over the version-control system.
//!
//! Only two queries are needed: the set of tracked paths at HEAD, and
//! line-level attribution for one path at HEAD. Keeping them behind a trait
//! lets an in-process library binding replace the subprocess plumbing
//! without touching extraction, aggregation or rewriting.

use std::path::{Path, PathBuf};
use std::process::Command;

use anyhow::{Context, Result, bail};

use crate::blame::{Contribution, parse_porcelain};

pub trait Vcs {
    /// All paths tracked at the current revision.
    fn tracked_paths(&self) -> Result<Vec<PathBuf>>;

    /// Line-level attribution for `path` at the current revision.
    fn blame(&self, path: &Path) -> Result<Vec<Contribution>>;
}

/// The `git` command-line client.
pub struct GitCli;

impl GitCli {
    fn run(&self, args: &[&str]) -> Result<Vec<u8>> {
        let output = Command::new("git")
            .args(args)
            .output()
            .with_context(|| format!("failed to launch git {}", args.join(" ")))?;
        if !output.status.success() {
            bail!(
                "git {} exited with {}: {}",
                args.join(" "),
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            );
        }
        Ok(output.stdout)
    }
}

impl Vcs for GitCli {
    fn tracked_paths(&self) -> Result<Vec<PathBuf>> {
        let stdout = self.run(&["ls-files", "-z"])?;
        Ok(String::from_utf8_lossy(&stdout)
            .split('\0')
            .filter(|path| !path.is_empty())
            .map(PathBuf::from)
            .collect())
    }

    fn blame(&self, path: &Path) -> Result<Vec<Contribution>> {
        let path_str = path.to_string_lossy();
        let stdout = self.run(&["blame", "--line-porcelain", "HEAD", "--", &path_str])?;
        parse_porcelain(path, &String::from_utf8_lossy(&stdout))
    }
}
