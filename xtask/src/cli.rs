use std::path::PathBuf;

use clap::Parser;

/// Rewrites the copyright header of every tracked source file from the
/// file's git history. Defaults come from [package.metadata.copyrights] in
/// the workspace manifest.
#[derive(Parser, Debug, Default)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Only rewrite tracked paths matching GLOB (repeatable; default all)
    #[arg(long, value_name = "GLOB")]
    pub include: Vec<String>,

    /// Skip tracked paths matching GLOB (repeatable)
    #[arg(long, value_name = "GLOB")]
    pub exclude: Vec<String>,

    /// Extra owner, "Name <email>" or bare "Name", credited on every file
    /// across its full year range (repeatable)
    #[arg(long, value_name = "OWNER")]
    pub additional: Vec<String>,

    /// License file providing the header's SPDX tag or full text
    #[arg(long, value_name = "PATH")]
    pub license: Option<PathBuf>,

    /// Project description line placed above the copyright lines
    /// (repeatable)
    #[arg(long, value_name = "STR")]
    pub preamble: Vec<String>,

    /// Tag prefix identifying short-form license lines
    #[arg(long, value_name = "STR")]
    pub spdx_prefix: Option<String>,

    /// Prefix of generated and recognized copyright lines
    #[arg(long, value_name = "STR")]
    pub copy_prefix: Option<String>,

    /// Drop preamble lines from rewritten headers
    #[arg(long, overrides_with = "no_strip_preamble")]
    pub strip_preamble: bool,

    /// Keep emitting preamble lines (negates --strip-preamble)
    #[arg(long, overrides_with = "strip_preamble")]
    pub no_strip_preamble: bool,
}
