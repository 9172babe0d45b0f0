//! License file parsing.
//!
//! The license file is plain text containing at most one short-form tag line
//! (by default beginning with `SPDX-License-Identifier:`); the remaining
//! lines form the license body. When a tag line is present, generated
//! headers carry just that line; otherwise they embed the full body.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};

/// Parsed once per run and shared read-only across every file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct License {
    /// Short-form tag line, e.g. `SPDX-License-Identifier: MIT`.
    pub identifier: Option<String>,
    /// License body with tag lines removed and leading/trailing blank lines
    /// stripped.
    pub text: Vec<String>,
}

pub fn load(path: &Path, spdx_prefix: &str) -> Result<License> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read license file {}", path.display()))?;
    parse(&content, spdx_prefix)
        .with_context(|| format!("invalid license file {}", path.display()))
}

pub fn parse(content: &str, spdx_prefix: &str) -> Result<License> {
    let mut identifier = None;
    let mut text: Vec<String> = Vec::new();
    for line in content.lines() {
        let line = line.trim_end();
        if line.starts_with(spdx_prefix) {
            if identifier.is_some() {
                bail!("more than one line begins with {spdx_prefix:?}");
            }
            identifier = Some(line.to_string());
        } else {
            text.push(line.to_string());
        }
    }
    while text.first().is_some_and(|line| line.is_empty()) {
        text.remove(0);
    }
    while text.last().is_some_and(|line| line.is_empty()) {
        text.pop();
    }
    Ok(License { identifier, text })
}
