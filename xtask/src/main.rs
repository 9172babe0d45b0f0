//! `copyrights`: rewrites every tracked source file's copyright header from
//! its git history.
//!
//! The run is a single sequential pipeline: enumerate tracked paths, blame
//! each one, collapse the attribution into per-owner year ranges, then
//! rewrite the file's leading comment block in place. Each file is fully
//! processed before the next begins; the first failure halts the run with
//! every earlier file rewritten and the failing file untouched.

use anyhow::Result;
use clap::Parser;
use log::{debug, info};

use crate::cli::Cli;
use crate::config::Settings;
use crate::rewrite::HeaderRewriter;
use crate::vcs::{GitCli, Vcs};

mod aggregate;
mod blame;
mod cli;
mod config;
mod enumerate;
mod license;
mod rewrite;
mod vcs;

#[cfg(test)]
mod aggregate_test;
#[cfg(test)]
mod blame_test;

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let settings = Settings::new(&cli)?;
    let license = license::load(&settings.license, &settings.spdx_prefix)?;

    let git = GitCli;
    let tracked = git.tracked_paths()?;
    let paths = enumerate::enumerate(&tracked, &settings.include, &settings.exclude);
    info!(
        "rewriting headers in {} of {} tracked files",
        paths.len(),
        tracked.len()
    );

    for path in &paths {
        let contributions = git.blame(path)?;
        let mut grouped = aggregate::aggregate(contributions, &settings.additional);
        // Renames aside, blame reports the path we asked about
        let copyrights = match grouped.remove(path) {
            Some(copyrights) => copyrights,
            None => match grouped.into_values().next() {
                Some(copyrights) => copyrights,
                None => {
                    debug!("{}: no attributable lines, skipping", path.display());
                    continue;
                }
            },
        };
        let marker = config::comment_marker(path);
        let rewriter = HeaderRewriter::new(&settings, marker, &copyrights, &license);
        rewriter.rewrite_file(path)?;
        info!("rewrote {}", path.display());
    }
    Ok(())
}
