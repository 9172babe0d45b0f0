//! Selects which tracked paths are candidates for header rewriting.

use std::path::PathBuf;

use anyhow::{Context, Result};
use glob::Pattern;

pub fn compile_patterns(globs: &[String]) -> Result<Vec<Pattern>> {
    globs
        .iter()
        .map(|glob| {
            Pattern::new(glob).with_context(|| format!("invalid glob pattern {glob:?}"))
        })
        .collect()
}

/// Filters the tracked paths down to those matching at least one include
/// pattern (an empty include set matches everything) and no exclude
/// pattern. Patterns match against the whole path as a flat string, not per
/// path segment.
pub fn enumerate(
    tracked: &[PathBuf],
    include: &[Pattern],
    exclude: &[Pattern],
) -> Vec<PathBuf> {
    tracked
        .iter()
        .filter(|path| {
            let path = path.to_string_lossy();
            (include.is_empty() || include.iter().any(|pattern| pattern.matches(&path)))
                && !exclude.iter().any(|pattern| pattern.matches(&path))
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tracked() -> Vec<PathBuf> {
        ["src/main.rs", "src/lib.rs", "README.md", "docs/index.rst"]
            .iter()
            .map(PathBuf::from)
            .collect()
    }

    #[test]
    fn test_default_includes_everything() {
        assert_eq!(enumerate(&tracked(), &[], &[]), tracked());
    }

    #[test]
    fn test_include_filter() {
        let include = compile_patterns(&["*.rs".to_string()]).unwrap();
        assert_eq!(
            enumerate(&tracked(), &include, &[]),
            vec![PathBuf::from("src/main.rs"), PathBuf::from("src/lib.rs")]
        );
    }

    #[test]
    fn test_exclude_wins() {
        let include = compile_patterns(&["*.rs".to_string()]).unwrap();
        let exclude = compile_patterns(&["*lib*".to_string()]).unwrap();
        assert_eq!(
            enumerate(&tracked(), &include, &exclude),
            vec![PathBuf::from("src/main.rs")]
        );
    }

    #[test]
    fn test_flat_string_matching() {
        // `*` crosses path separators because matching is not segment-aware
        let include = compile_patterns(&["*index*".to_string()]).unwrap();
        assert_eq!(
            enumerate(&tracked(), &include, &[]),
            vec![PathBuf::from("docs/index.rst")]
        );
    }

    #[test]
    fn test_bad_pattern_rejected() {
        assert!(compile_patterns(&["[".to_string()]).is_err());
    }
}
