//! Warning suppression via XDG inhibit files.
//!
//! A warning is suppressed when a file named after it exists under
//! `pemmican/` in any XDG configuration directory, e.g.
//! `~/.config/pemmican/brownout.inhibit`.

use std::env;
use std::path::{Path, PathBuf};

/// Suppresses the brownout-reset warning.
pub const BROWNOUT_INHIBIT: &str = "brownout.inhibit";
/// Suppresses the weak-PSU warning.
pub const MAX_CURRENT_INHIBIT: &str = "max_current.inhibit";

/// The XDG configuration search path: `$XDG_CONFIG_HOME` (default
/// `~/.config`) followed by the entries of `$XDG_CONFIG_DIRS` (default
/// `/etc/xdg`).
pub fn config_dirs() -> Vec<PathBuf> {
    let home = env::var_os("HOME").map(PathBuf::from).unwrap_or_default();
    let config_home = env::var_os("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|| home.join(".config"));
    let mut dirs = vec![config_home];
    match env::var("XDG_CONFIG_DIRS") {
        Ok(value) if !value.is_empty() => {
            dirs.extend(value.split(':').map(PathBuf::from));
        }
        _ => dirs.push(PathBuf::from("/etc/xdg")),
    }
    dirs
}

/// Returns `true` if `<dir>/pemmican/<name>` exists for any of the given
/// configuration directories.
pub fn is_inhibited(dirs: &[PathBuf], name: &str) -> bool {
    dirs.iter()
        .any(|dir| dir.join(env!("CARGO_PKG_NAME")).join(name).exists())
}

/// Convenience wrapper over [`is_inhibited`] for an explicit single root,
/// used by tests and callers that already resolved the search path.
pub fn is_inhibited_under(root: &Path, name: &str) -> bool {
    is_inhibited(&[root.to_path_buf()], name)
}
