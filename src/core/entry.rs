//! The entry model for lsgrid.
//!
//! Provides the [Entry] struct which every later phase (sorting, layout, rendering) works on,
//! together with [EntryStat], the metadata snapshot copied from `lstat`,
//! and [EntryKind], the file type decoded from the mode bits.

use std::fs::Metadata;

use unicode_width::UnicodeWidthStr;

/// File type decoded from the `S_IFMT` bits of a mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Directory,
    Symlink,
    Fifo,
    CharDevice,
    BlockDevice,
    Socket,
    Regular,
}

impl EntryKind {
    // S_IFMT and the type values it masks
    pub(crate) const TYPE_MASK: u32 = 0o170000;
    pub(crate) const SOCKET: u32 = 0o140000;
    pub(crate) const SYMLINK: u32 = 0o120000;
    pub(crate) const REGULAR: u32 = 0o100000;
    pub(crate) const BLOCK: u32 = 0o060000;
    pub(crate) const DIRECTORY: u32 = 0o040000;
    pub(crate) const CHAR: u32 = 0o020000;
    pub(crate) const FIFO: u32 = 0o010000;

    pub fn from_mode(mode: u32) -> Self {
        match mode & Self::TYPE_MASK {
            Self::DIRECTORY => EntryKind::Directory,
            Self::SYMLINK => EntryKind::Symlink,
            Self::FIFO => EntryKind::Fifo,
            Self::CHAR => EntryKind::CharDevice,
            Self::BLOCK => EntryKind::BlockDevice,
            Self::SOCKET => EntryKind::Socket,
            _ => EntryKind::Regular,
        }
    }

    /// First character of the permission string.
    pub fn type_char(self) -> char {
        match self {
            EntryKind::Directory => 'd',
            EntryKind::Symlink => 'l',
            EntryKind::Fifo => 'p',
            EntryKind::CharDevice => 'c',
            EntryKind::BlockDevice => 'b',
            EntryKind::Socket => 's',
            EntryKind::Regular => '-',
        }
    }
}

/// Metadata snapshot of one directory member, taken at collection time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EntryStat {
    pub inode: u64,
    pub owner_id: u32,
    pub group_id: u32,
    pub size_bytes: u64,
    /// Modification time in seconds since the unix epoch.
    pub mtime: i64,
    pub link_count: u64,
    pub mode: u32,
    /// Allocated blocks, in the 512-byte units `lstat` reports.
    pub blocks: u64,
}

impl EntryStat {
    /// Owner, group and other execute bits.
    pub(crate) const EXEC_FLAG: u32 = 0o111;

    #[cfg(unix)]
    pub fn from_metadata(md: &Metadata) -> Self {
        use std::os::unix::fs::MetadataExt;

        EntryStat {
            inode: md.ino(),
            owner_id: md.uid(),
            group_id: md.gid(),
            size_bytes: md.size(),
            mtime: md.mtime(),
            link_count: md.nlink(),
            mode: md.mode(),
            blocks: md.blocks(),
        }
    }

    #[cfg(not(unix))]
    pub fn from_metadata(md: &Metadata) -> Self {
        let kind = if md.is_dir() {
            EntryKind::DIRECTORY
        } else if md.file_type().is_symlink() {
            EntryKind::SYMLINK
        } else {
            EntryKind::REGULAR
        };
        let perms = if md.permissions().readonly() { 0o444 } else { 0o644 };
        let mtime = md
            .modified()
            .ok()
            .and_then(|t| t.duration_since(std::time::UNIX_EPOCH).ok())
            .map(|d| d.as_secs() as i64)
            .unwrap_or_default();

        EntryStat {
            size_bytes: md.len(),
            mtime,
            link_count: 1,
            mode: kind | perms,
            blocks: md.len().div_ceil(512),
            ..EntryStat::default()
        }
    }

    #[inline]
    pub fn kind(&self) -> EntryKind {
        EntryKind::from_mode(self.mode)
    }

    #[inline]
    pub fn is_executable(&self) -> bool {
        self.mode & Self::EXEC_FLAG != 0
    }
}

/// How names are decorated before they are stored on an [Entry].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NameStyle {
    /// `-F`: append one of `/ @ | = *`
    pub classify: bool,
    /// `-p`: append one of `/ @ | =`
    pub indicator: bool,
    /// `-Q`: wrap in double quotes
    pub quote: bool,
}

impl NameStyle {
    /// Type indicator appended to a name of the given metadata, if any.
    pub fn indicator_for(&self, stat: &EntryStat) -> Option<char> {
        if !self.classify && !self.indicator {
            return None;
        }
        match stat.kind() {
            EntryKind::Directory => Some('/'),
            EntryKind::Symlink => Some('@'),
            EntryKind::Fifo => Some('|'),
            EntryKind::Socket => Some('='),
            EntryKind::Regular if self.classify && stat.is_executable() => Some('*'),
            _ => None,
        }
    }

    /// Applies the suffix first, then the quotes around the whole thing.
    pub fn decorate(&self, name: &str, stat: &EntryStat) -> String {
        let mut out = String::with_capacity(name.len() + 3);
        if self.quote {
            out.push('"');
        }
        out.push_str(name);
        if let Some(suffix) = self.indicator_for(stat) {
            out.push(suffix);
        }
        if self.quote {
            out.push('"');
        }
        out
    }
}

/// Represents a single entry in a directory listing.
/// Holds the decorated display name, its cached width and the metadata snapshot.
/// Created by the collector; immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    name: Box<str>,
    display_width: usize,
    stat: EntryStat,
}

impl Entry {
    pub fn new(name: impl Into<Box<str>>, stat: EntryStat) -> Self {
        let name = name.into();
        let display_width = UnicodeWidthStr::width(&*name);
        Entry {
            name,
            display_width,
            stat,
        }
    }

    /// Builds an entry whose name is decorated according to `style`.
    pub fn decorated(raw_name: &str, stat: EntryStat, style: NameStyle) -> Self {
        Entry::new(style.decorate(raw_name, &stat), stat)
    }

    // Accessors

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn display_width(&self) -> usize {
        self.display_width
    }

    #[inline]
    pub fn stat(&self) -> &EntryStat {
        &self.stat
    }

    #[inline]
    pub fn inode(&self) -> u64 {
        self.stat.inode
    }

    #[inline]
    pub fn blocks(&self) -> u64 {
        self.stat.blocks
    }
}
