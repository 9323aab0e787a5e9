//! Listing driver for lsgrid.
//!
//! [Lister] runs the collect, sort, layout and render pipeline once per directory
//! argument and writes the result. Every argument gets a fresh [Session];
//! nothing carries over from one directory to the next.

use crate::config::ListOptions;
use crate::core::{OwnerLookup, Session, StatFn, collect_with, lstat, render};
use crate::error::ListError;
use crate::utils::{header_label, resolve_path};

use std::io::Write;
use std::path::{Path, PathBuf};

/// Lists directories with a fixed set of options.
///
/// Holds the options, the owner lookup and the clock reading as references,
/// so a single instance serves every directory argument of a run.
pub struct Lister<'a> {
    opts: &'a ListOptions,
    owners: &'a dyn OwnerLookup,
    cwd: PathBuf,
    now: i64,
    stat: StatFn,
}

impl<'a> Lister<'a> {
    pub fn new(opts: &'a ListOptions, owners: &'a dyn OwnerLookup, cwd: PathBuf, now: i64) -> Self {
        Self {
            opts,
            owners,
            cwd,
            now,
            stat: lstat,
        }
    }

    /// Reads member metadata through `stat` instead of `lstat`.
    pub fn with_stat(mut self, stat: StatFn) -> Self {
        self.stat = stat;
        self
    }

    /// Lists every directory argument, or the working directory when there are none.
    ///
    /// With several arguments each listing gets a header and a blank line separates listings.
    /// Entries that could not be stat'ed are reported on `diag` and skipped.
    ///
    /// # Returns
    /// [ListError::Access] as soon as a directory cannot be opened; later arguments are not listed.
    pub fn run<W: Write, E: Write>(
        &self,
        args: &[String],
        out: &mut W,
        diag: &mut E,
    ) -> Result<(), ListError> {
        if args.is_empty() {
            return self.list_dir(&self.cwd, out, diag);
        }

        let with_headers = args.len() > 1;
        for (idx, arg) in args.iter().enumerate() {
            if with_headers {
                writeln!(out, "{}", header_label(arg))?;
            }
            let path = resolve_path(arg, &self.cwd);
            self.list_dir(&path, out, diag)?;
            if idx + 1 < args.len() {
                writeln!(out)?;
            }
        }
        Ok(())
    }

    /// Collects, sorts and renders one directory.
    pub fn list_dir<W: Write, E: Write>(
        &self,
        path: &Path,
        out: &mut W,
        diag: &mut E,
    ) -> Result<(), ListError> {
        let session = self.session_for(path)?;
        for failure in session.failures() {
            writeln!(diag, "{}", failure)?;
        }
        for line in render(&session, self.opts, self.owners, self.now) {
            writeln!(out, "{}", line)?;
        }
        Ok(())
    }

    /// A fresh, sorted session for `path`.
    pub fn session_for(&self, path: &Path) -> Result<Session, ListError> {
        let mut session = collect_with(path, self.opts, self.owners, self.stat)?;
        session.sort();
        Ok(session)
    }
}
