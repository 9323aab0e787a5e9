//! Configuration module for lsgrid.
//!
//! Loads optional defaults from `lsgrid.toml` and merges them with the command-line flags.
//!
//! Module overview:
//! - [load]: Loads and deserializes the main configuration file.
//! - [general]: Listing defaults such as show-all, classify or quoting.
//! - [display]: Width handling and the timestamp window.
//! - [options]: The merged, read-only [ListOptions] every listing phase consumes.

pub mod display;
pub mod general;
pub mod load;
pub mod options;

pub use display::Display;
pub use general::General;
pub use load::Config;
pub use options::ListOptions;
