//! Internal library crate for lsgrid.
//!
//! The shipped application is the `lsg` binary (`src/main.rs`).
//!
//! This library exists to share code between targets (binary, tests) and to keep modules organized.
//! It is not considered a library for external use.

pub mod app;
pub mod config;
pub mod core;
pub mod error;
pub mod utils;
