//! Miscellaneous utility functions for lsgrid.
//!
//! - [cli]: command-line flag parsing and help text
//! - [helpers]: path resolution, directory headers, terminal width

pub mod cli;
pub mod helpers;

pub use helpers::{get_home, header_label, resolve_path, terminal_width};
