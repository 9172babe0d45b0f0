//! Run configuration: manifest defaults, CLI overrides, and the
//! comment-style table.
//!
//! Defaults live in `[package.metadata.copyrights]` of the workspace root
//! manifest and every one of them can be overridden per invocation. The
//! resulting [`Settings`] value is immutable for the whole run.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use glob::Pattern;
use lazy_static::lazy_static;
use regex::Regex;
use serde::Deserialize;

use crate::cli::Cli;
use crate::enumerate::compile_patterns;

lazy_static! {
    static ref OWNER_PATTERN: Regex =
        Regex::new(r"^\s*([^<>]+?)\s*(?:<([^<>]*)>)?\s*$").expect("Invalid owner regex");
}

/// An owner named on the command line or in the manifest. Corporate owners
/// commonly have no email address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Owner {
    pub name: String,
    pub email: String,
}

/// Parses `"Name <email>"` or a bare `"Name"`.
pub fn parse_owner(value: &str) -> Result<Owner> {
    let Some(captures) = OWNER_PATTERN.captures(value) else {
        bail!("malformed owner {value:?}; expected \"Name <email>\"");
    };
    Ok(Owner {
        name: captures[1].to_string(),
        email: captures
            .get(2)
            .map(|email| email.as_str().to_string())
            .unwrap_or_default(),
    })
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct ManifestDefaults {
    include: Vec<String>,
    exclude: Vec<String>,
    additional: Vec<String>,
    license: Option<PathBuf>,
    preamble: Vec<String>,
    spdx_prefix: Option<String>,
    copy_prefix: Option<String>,
    strip_preamble: Option<bool>,
}

impl ManifestDefaults {
    fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        Self::parse(&content).with_context(|| format!("invalid {}", path.display()))
    }

    fn parse(content: &str) -> Result<Self> {
        let manifest: toml::Value = toml::from_str(content)?;
        let Some(section) = manifest
            .get("package")
            .and_then(|package| package.get("metadata"))
            .and_then(|metadata| metadata.get("copyrights"))
        else {
            return Ok(Self::default());
        };
        section
            .clone()
            .try_into()
            .context("invalid [package.metadata.copyrights] section")
    }
}

/// Immutable configuration threaded through the whole run.
#[derive(Debug)]
pub struct Settings {
    pub include: Vec<Pattern>,
    pub exclude: Vec<Pattern>,
    pub additional: Vec<Owner>,
    pub license: PathBuf,
    pub preamble: Vec<String>,
    pub spdx_prefix: String,
    pub copy_prefix: String,
    pub strip_preamble: bool,
}

impl Settings {
    pub fn new(cli: &Cli) -> Result<Self> {
        Self::with_manifest(cli, Path::new("Cargo.toml"))
    }

    fn with_manifest(cli: &Cli, manifest: &Path) -> Result<Self> {
        let defaults = ManifestDefaults::load(manifest)?;
        let include = pick_list(&cli.include, defaults.include);
        let exclude = pick_list(&cli.exclude, defaults.exclude);
        let additional = pick_list(&cli.additional, defaults.additional)
            .iter()
            .map(|owner| parse_owner(owner))
            .collect::<Result<Vec<_>>>()?;
        let strip_preamble = if cli.strip_preamble {
            true
        } else if cli.no_strip_preamble {
            false
        } else {
            defaults.strip_preamble.unwrap_or(false)
        };
        Ok(Settings {
            include: compile_patterns(&include)?,
            exclude: compile_patterns(&exclude)?,
            additional,
            license: cli
                .license
                .clone()
                .or(defaults.license)
                .unwrap_or_else(|| PathBuf::from("LICENSE")),
            preamble: pick_list(&cli.preamble, defaults.preamble),
            spdx_prefix: cli
                .spdx_prefix
                .clone()
                .or(defaults.spdx_prefix)
                .unwrap_or_else(|| "SPDX-License-Identifier:".to_string()),
            copy_prefix: cli
                .copy_prefix
                .clone()
                .or(defaults.copy_prefix)
                .unwrap_or_else(|| "Copyright (c)".to_string()),
            strip_preamble,
        })
    }
}

fn pick_list(from_cli: &[String], from_manifest: Vec<String>) -> Vec<String> {
    if from_cli.is_empty() {
        from_manifest
    } else {
        from_cli.to_vec()
    }
}

/// Single-line comment marker for the target file, chosen by extension.
/// Unmapped extensions fall back to `#`. Block-comment styles are not
/// supported.
pub fn comment_marker(path: &Path) -> &'static str {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(
            "c" | "cc" | "cpp" | "cs" | "go" | "h" | "hpp" | "java" | "js" | "rs" | "ts",
        ) => "//",
        Some("rst") => "..",
        Some("hs" | "lua" | "sql") => "--",
        _ => "#",
    }
}
