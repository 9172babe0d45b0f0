//! Header rewriting as an explicit line-by-line state machine.
//!
//! Scanning from the top of the file, the machine recognizes and strips
//! whatever header variant is already present (bare comment markers, stale
//! SPDX tags, stale copyright lines, stale preamble lines, or an entire
//! legacy full-license-text block), emits a freshly generated header in its
//! place, then passes the rest of the file through verbatim:
//!
//! ```text
//! Header -> License -> Blank -> Body
//! ```
//!
//! `License` skips a legacy full-text block; `Blank` guarantees exactly one
//! separating blank line before the body. Because the machine recognizes
//! its own output as an existing header, the rewrite is idempotent.
//!
//! Replacement is atomic: the new content is staged in a temporary file in
//! the target's directory, given the target's permission bits, and renamed
//! over it only once fully written. Any failure discards the staged file
//! and leaves the original untouched.

use std::fs;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use lazy_static::lazy_static;
use regex::Regex;
use tempfile::NamedTempFile;

use crate::aggregate::Copyright;
use crate::config::Settings;
use crate::license::License;

lazy_static! {
    // PEP 263 style encoding declaration, valid on the first two lines
    static ref CODING_PATTERN: Regex =
        Regex::new(r"coding[:=]\s*[-\w.]+").expect("Invalid coding regex");
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Header,
    License,
    Blank,
    Body,
}

/// One-file rewriter over an immutable configuration and a pre-sorted
/// copyright list.
pub struct HeaderRewriter<'a> {
    marker: &'a str,
    copyrights: &'a [Copyright],
    license: &'a License,
    preamble: &'a [String],
    spdx_prefix: &'a str,
    copy_prefix: &'a str,
    strip_preamble: bool,
}

impl<'a> HeaderRewriter<'a> {
    pub fn new(
        settings: &'a Settings,
        marker: &'a str,
        copyrights: &'a [Copyright],
        license: &'a License,
    ) -> Self {
        HeaderRewriter {
            marker,
            copyrights,
            license,
            preamble: &settings.preamble,
            spdx_prefix: &settings.spdx_prefix,
            copy_prefix: &settings.copy_prefix,
            strip_preamble: settings.strip_preamble,
        }
    }

    /// Produces the rewritten content for one file.
    pub fn rewrite(&self, content: &str) -> String {
        let mut lines: Vec<&str> = if content.is_empty() {
            Vec::new()
        } else {
            content.split('\n').collect()
        };
        let had_newline = content.ends_with('\n') || content.is_empty();
        if content.ends_with('\n') {
            lines.pop();
        }

        let mut out: Vec<String> = Vec::new();
        let mut state = State::Header;
        let mut prefixed = false;
        for (index, line) in lines.iter().enumerate() {
            state = self.step(state, index, line, &mut prefixed, &mut out);
        }
        // A file that never reached its body still gets a header
        if matches!(state, State::Header | State::License) {
            self.emit_header(prefixed, &mut out);
        }

        let mut result = out.join("\n");
        if had_newline && !result.is_empty() {
            result.push('\n');
        }
        result
    }

    fn step(
        &self,
        state: State,
        index: usize,
        line: &str,
        prefixed: &mut bool,
        out: &mut Vec<String>,
    ) -> State {
        match state {
            State::Header => {
                if index == 0 && line.starts_with("#!") {
                    out.push(line.to_string());
                    *prefixed = true;
                    return State::Header;
                }
                if index < 2 && line.starts_with(self.marker) && CODING_PATTERN.is_match(line)
                {
                    out.push(line.to_string());
                    *prefixed = true;
                    return State::Header;
                }
                let trimmed = line.trim_end();
                if trimmed == self.marker {
                    return State::Header;
                }
                if let Some(payload) = comment_payload(trimmed, self.marker) {
                    if payload.starts_with(self.spdx_prefix)
                        || payload.starts_with(self.copy_prefix)
                        || self.preamble.iter().any(|preamble| payload == preamble.as_str())
                    {
                        return State::Header;
                    }
                    if self
                        .license
                        .text
                        .first()
                        .is_some_and(|first| payload == first.as_str())
                    {
                        return State::License;
                    }
                }
                // First line of real content
                self.emit_header(*prefixed, out);
                self.step(State::Blank, index, line, prefixed, out)
            }
            State::License => {
                let payload = comment_payload(line.trim_end(), self.marker);
                let ends_block = payload
                    .zip(self.license.text.last())
                    .is_some_and(|(payload, last)| payload == last.as_str());
                if ends_block {
                    self.emit_header(*prefixed, out);
                    State::Blank
                } else {
                    State::License
                }
            }
            State::Blank => {
                if !line.trim().is_empty() {
                    out.push(String::new());
                }
                out.push(line.to_string());
                State::Body
            }
            State::Body => {
                out.push(line.to_string());
                State::Body
            }
        }
    }

    fn emit_header(&self, prefixed: bool, out: &mut Vec<String>) {
        let marker = self.marker;
        if prefixed {
            out.push(marker.to_string());
        }
        if !self.strip_preamble && !self.preamble.is_empty() {
            for line in self.preamble {
                out.push(format!("{marker} {line}"));
            }
            out.push(marker.to_string());
        }
        for copyright in self.copyrights {
            out.push(format!("{marker} {} {copyright}", self.copy_prefix));
        }
        out.push(marker.to_string());
        match &self.license.identifier {
            Some(identifier) => out.push(format!("{marker} {identifier}")),
            None => {
                for line in &self.license.text {
                    if line.is_empty() {
                        out.push(marker.to_string());
                    } else {
                        out.push(format!("{marker} {line}"));
                    }
                }
            }
        }
    }

    /// Rewrites `path` in place via a same-directory temporary file so the
    /// target is never observed half-written. Permission bits carry over;
    /// on any error the original is left untouched.
    pub fn rewrite_file(&self, path: &Path) -> Result<()> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let rewritten = self.rewrite(&content);

        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let mut staged = NamedTempFile::new_in(dir)
            .with_context(|| format!("failed to stage replacement in {}", dir.display()))?;
        staged
            .write_all(rewritten.as_bytes())
            .with_context(|| format!("failed to write replacement for {}", path.display()))?;
        let permissions = fs::metadata(path)
            .with_context(|| format!("failed to stat {}", path.display()))?
            .permissions();
        staged
            .as_file()
            .set_permissions(permissions)
            .with_context(|| format!("failed to set mode on replacement for {}", path.display()))?;
        staged
            .persist(path)
            .map_err(|err| err.error)
            .with_context(|| format!("failed to replace {}", path.display()))?;
        Ok(())
    }
}

// Strips the comment marker (and one following space, if any) from a header
// line; None if the line is not a comment.
fn comment_payload<'a>(line: &'a str, marker: &str) -> Option<&'a str> {
    let payload = line.strip_prefix(marker)?;
    Some(payload.strip_prefix(' ').unwrap_or(payload))
}
