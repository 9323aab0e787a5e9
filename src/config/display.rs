//! Display configuration options for lsgrid.
//!
//! Defines the `[display]` table of lsgrid.toml: a fixed width override,
//! the width used when no terminal is attached, and the recent-timestamp window.

use serde::Deserialize;

/// Width used when the terminal size cannot be queried.
pub const DEFAULT_FALLBACK_WIDTH: usize = 80;
/// Files younger than this many days show a time of day instead of a year.
pub const DEFAULT_RECENT_DAYS: i64 = 180;
/// Largest window whose length in seconds still fits an `i64`.
pub const MAX_RECENT_DAYS: i64 = i64::MAX / (24 * 60 * 60);

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Display {
    width: Option<usize>,
    fallback_width: usize,
    recent_days: i64,
}

impl Default for Display {
    fn default() -> Self {
        Display {
            width: None,
            fallback_width: DEFAULT_FALLBACK_WIDTH,
            recent_days: DEFAULT_RECENT_DAYS,
        }
    }
}

impl Display {
    #[inline]
    pub fn width(&self) -> Option<usize> {
        self.width
    }

    #[inline]
    pub fn fallback_width(&self) -> usize {
        self.fallback_width
    }

    #[inline]
    pub fn recent_days(&self) -> i64 {
        self.recent_days
    }

    /// Replaces values that cannot be used with their defaults, warning on stderr.
    pub(crate) fn sanitized(mut self) -> Self {
        if self.fallback_width == 0 {
            eprintln!(
                "[lsgrid] Warning: display.fallback_width must be positive, using {}",
                DEFAULT_FALLBACK_WIDTH
            );
            self.fallback_width = DEFAULT_FALLBACK_WIDTH;
        }
        if self.recent_days < 0 {
            eprintln!(
                "[lsgrid] Warning: display.recent_days={} is negative, using {}",
                self.recent_days, DEFAULT_RECENT_DAYS
            );
            self.recent_days = DEFAULT_RECENT_DAYS;
        } else if self.recent_days > MAX_RECENT_DAYS {
            eprintln!(
                "[lsgrid] Warning: display.recent_days={} is too large, using {}",
                self.recent_days, MAX_RECENT_DAYS
            );
            self.recent_days = MAX_RECENT_DAYS;
        }
        self
    }
}
