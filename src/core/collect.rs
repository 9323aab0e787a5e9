//! Directory enumeration for lsgrid.
//!
//! [collect] reads one directory into a [Session]: the visible entries with their
//! decorated names, the block total, and the widest value of every long-format field.
//! A session belongs to a single directory argument and is never reused.

use crate::config::ListOptions;
use crate::core::entry::{Entry, EntryStat};
use crate::core::formatter::{count_digits, format_file_size};
use crate::core::owner::OwnerLookup;
use crate::error::ListError;

use std::fs::{self, Metadata};
use std::io;
use std::path::Path;

use unicode_width::UnicodeWidthStr;

/// Widest value of each field across a session, used to right-justify columns.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FieldWidths {
    pub name: usize,
    pub inode: usize,
    pub blocks: usize,
    pub links: usize,
    pub size: usize,
    pub owner: usize,
    pub group: usize,
}

/// The full state of one directory's listing.
#[derive(Debug, Default)]
pub struct Session {
    entries: Vec<Entry>,
    widths: FieldWidths,
    total_blocks: u64,
    failures: Vec<ListError>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an entry and folds its fields into the running maxima.
    pub fn record(&mut self, entry: Entry, opts: &ListOptions, owners: &dyn OwnerLookup) {
        let stat = *entry.stat();
        let w = &mut self.widths;

        // numeric ids count digits, resolved names count columns
        if opts.numeric_ids() {
            w.owner = w.owner.max(count_digits(stat.owner_id as u64));
            w.group = w.group.max(count_digits(stat.group_id as u64));
        } else {
            w.owner = w.owner.max(owners.user_label(stat.owner_id).width());
            w.group = w.group.max(owners.group_label(stat.group_id).width());
        }

        if opts.human_readable() {
            w.size = w.size.max(format_file_size(stat.size_bytes, true).width());
        } else {
            w.size = w.size.max(count_digits(stat.size_bytes));
        }

        w.name = w.name.max(entry.display_width());
        w.links = w.links.max(count_digits(stat.link_count));
        w.blocks = w.blocks.max(count_digits(stat.blocks));
        w.inode = w.inode.max(count_digits(stat.inode));

        self.total_blocks += stat.blocks;
        self.entries.push(entry);
    }

    /// Sorts the entries by name. See [crate::core::sort::sort_entries].
    pub fn sort(&mut self) {
        crate::core::sort::sort_entries(&mut self.entries);
    }

    // Accessors

    #[inline]
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    #[inline]
    pub fn widths(&self) -> &FieldWidths {
        &self.widths
    }

    #[inline]
    pub fn total_blocks(&self) -> u64 {
        self.total_blocks
    }

    /// Per-entry failures absorbed while collecting.
    #[inline]
    pub fn failures(&self) -> &[ListError] {
        &self.failures
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

/// Whether a directory member with this name is listed.
pub fn is_visible(name: &str, opts: &ListOptions) -> bool {
    if name == "." || name == ".." {
        return opts.show_implied();
    }
    !name.starts_with('.') || opts.show_hidden()
}

/// Reads a member's metadata without following a final symlink.
pub type StatFn = fn(&Path) -> io::Result<Metadata>;

/// The default [StatFn].
pub fn lstat(path: &Path) -> io::Result<Metadata> {
    fs::symlink_metadata(path)
}

/// Reads the directory at `path` into a new [Session], in directory order.
///
/// # Returns
/// [ListError::Access] if the directory cannot be opened. Members that cannot be
/// `lstat`ed are skipped and kept in [Session::failures].
pub fn collect(
    path: &Path,
    opts: &ListOptions,
    owners: &dyn OwnerLookup,
) -> Result<Session, ListError> {
    collect_with(path, opts, owners, lstat)
}

/// Same as [collect], reading member metadata through `stat`.
pub fn collect_with(
    path: &Path,
    opts: &ListOptions,
    owners: &dyn OwnerLookup,
    stat: StatFn,
) -> Result<Session, ListError> {
    let read_dir = fs::read_dir(path).map_err(|source| ListError::Access {
        path: path.to_path_buf(),
        source,
    })?;

    let mut session = Session::new();
    let style = opts.name_style();

    // the platform reader never yields the implied entries
    if opts.show_implied() {
        for implied in [".", ".."] {
            let full = path.join(implied);
            match stat(&full) {
                Ok(md) => session.record(
                    Entry::decorated(implied, EntryStat::from_metadata(&md), style),
                    opts,
                    owners,
                ),
                Err(source) => session.failures.push(ListError::Stat { path: full, source }),
            }
        }
    }

    for entry in read_dir {
        let entry = match entry {
            Ok(e) => e,
            Err(source) => {
                session.failures.push(ListError::Stat {
                    path: path.to_path_buf(),
                    source,
                });
                continue;
            }
        };

        let file_name = entry.file_name();
        let name = file_name.to_string_lossy();
        if !is_visible(&name, opts) {
            continue;
        }

        let full = entry.path();
        match stat(&full) {
            Ok(md) => session.record(
                Entry::decorated(&name, EntryStat::from_metadata(&md), style),
                opts,
                owners,
            ),
            Err(source) => session.failures.push(ListError::Stat { path: full, source }),
        }
    }

    Ok(session)
}
