//! Core listing logic for lsgrid.
//!
//! This module contains the enumerate-then-render pipeline:
//! - [entry]: the [Entry] model, its metadata snapshot and name decoration.
//! - [collect]: directory enumeration into a per-directory [Session].
//! - [owner]: user and group name lookup behind the [OwnerLookup] trait.
//! - [sort]: name ordering and the reversed display view.
//! - [layout]: the multi-column grid search.
//! - [render]: long-format and grid output.
//! - [formatter]: digit counts, permission strings, timestamps and sizes.

pub mod collect;
pub mod entry;
pub mod formatter;
pub mod layout;
pub mod owner;
pub mod render;
pub mod sort;

pub use collect::{FieldWidths, Session, StatFn, collect, collect_with, lstat};
pub use entry::{Entry, EntryKind, EntryStat, NameStyle};
pub use formatter::{count_digits, format_attributes, format_file_size, format_file_time};
pub use layout::{COL_MAX, ColumnLayout, ColumnWidth, Decorations, layout, layout_with_limit};
pub use owner::{NumericOwners, OwnerLookup, SystemOwners};
pub use render::{render, render_grid, render_long};
pub use sort::{display_order, sort_entries};
