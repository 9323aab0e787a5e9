//! Helpers for lsgrid.
//!
//! Provides the small pieces of glue around the listing pipeline:
//! - Resolving directory arguments against the working directory
//! - The header line printed above each listing when several directories are given
//! - Querying the terminal width
//! - Locating the home directory for the config path

use std::path::{Path, PathBuf};

/// Home directory of the current user, if it can be determined.
pub fn get_home() -> Option<PathBuf> {
    dirs::home_dir()
}

/// Resolves a directory argument. Absolute paths are kept, relative ones are joined onto `cwd`.
pub fn resolve_path(arg: &str, cwd: &Path) -> PathBuf {
    let path = Path::new(arg);
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        cwd.join(path)
    }
}

/// Header printed above a directory's listing when several are given.
///
/// Bare `.`, `..` and `/` print as-is, anything else is single-quoted.
pub fn header_label(arg: &str) -> String {
    match arg {
        "." | ".." | "/" => format!("{}:", arg),
        _ => format!("'{}':", arg),
    }
}

/// Current terminal width in columns, or `None` when no terminal answers.
pub fn terminal_width() -> Option<usize> {
    match crossterm::terminal::size() {
        Ok((cols, _)) if cols > 0 => Some(cols as usize),
        _ => None,
    }
}
