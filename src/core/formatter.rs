//! Formatting helpers for displaying entry attributes.
//!
//! Digit counting for column padding, the unix permission string,
//! long-format timestamps and byte sizes.

use crate::core::entry::EntryKind;

use chrono::{DateTime, Local};
use humansize::{DECIMAL, format_size};
use unicode_width::UnicodeWidthStr;

const SECS_PER_DAY: i64 = 24 * 60 * 60;

/// Number of decimal digits needed to print `num`.
pub fn count_digits(mut num: u64) -> usize {
    let mut digits = 1;
    while num >= 10 {
        num /= 10;
        digits += 1;
    }
    digits
}

/// Formats the mode bits in the unix-like `drwxr-xr-x` form.
///
/// # Returns
/// A 10 character string: the type character followed by the owner, group and other triples.
pub fn format_attributes(mode: u32) -> String {
    let mut chars = [EntryKind::from_mode(mode).type_char(), '-', '-', '-', '-', '-', '-', '-', '-', '-'];
    let shifts = [6, 3, 0];
    for (i, &shift) in shifts.iter().enumerate() {
        let base = 1 + i * 3;
        if (mode >> (shift + 2)) & 1u32 != 0 {
            chars[base] = 'r';
        }
        if (mode >> (shift + 1)) & 1u32 != 0 {
            chars[base + 1] = 'w';
        }
        if (mode >> shift) & 1u32 != 0 {
            chars[base + 2] = 'x';
        }
    }
    chars.iter().collect()
}

/// Formats a modification time for the long listing.
///
/// Files modified less than `recent_days` before `now` show the time of day,
/// older ones show the year instead.
/// # Returns
/// `"Mon DD HH:MM"`, `"Mon DD  YYYY"`, or "-" if the timestamp is out of range.
pub fn format_file_time(mtime: i64, now: i64, recent_days: i64) -> String {
    let Some(utc) = DateTime::from_timestamp(mtime, 0) else {
        return "-".to_string();
    };
    let dt: DateTime<Local> = utc.with_timezone(&Local);
    if now.saturating_sub(mtime) < recent_days.saturating_mul(SECS_PER_DAY) {
        dt.format("%b %e %H:%M").to_string()
    } else {
        dt.format("%b %e  %Y").to_string()
    }
}

/// Formats the byte size column.
/// # Returns
/// The plain byte count, or a human-readable size like "4.10 kB" when `human` is set.
pub fn format_file_size(size: u64, human: bool) -> String {
    if human {
        format_size(size, DECIMAL)
    } else {
        size.to_string()
    }
}

/// Pads `text` on the left to `width` terminal columns.
pub fn right_justify(text: &str, width: usize) -> String {
    let w = UnicodeWidthStr::width(text);
    if w >= width {
        return text.to_string();
    }
    let mut out = String::with_capacity(text.len() + width - w);
    out.push_str(&" ".repeat(width - w));
    out.push_str(text);
    out
}

/// Pads `text` on the right to `width` terminal columns.
pub fn left_justify(text: &str, text_width: usize, width: usize) -> String {
    let mut out = String::with_capacity(text.len() + width.saturating_sub(text_width));
    out.push_str(text);
    if text_width < width {
        out.push_str(&" ".repeat(width - text_width));
    }
    out
}
