//! Rendering of a collected [Session].
//!
//! Two modes:
//! - long format, one entry per line after a `total` header
//! - grid format, column-major over the shape chosen by [crate::core::layout]
//!
//! Both walk the same display order, so `-r` reads identically in either mode.

use crate::config::ListOptions;
use crate::core::collect::Session;
use crate::core::entry::Entry;
use crate::core::formatter::{
    format_attributes, format_file_size, format_file_time, left_justify, right_justify,
};
use crate::core::layout::{ColumnLayout, Decorations, layout, layout_with_limit};
use crate::core::owner::OwnerLookup;
use crate::core::sort::display_order;

/// Renders `session` into output lines (without trailing newlines).
///
/// `now` is the current time in seconds since the unix epoch, used for the timestamp window.
pub fn render(
    session: &Session,
    opts: &ListOptions,
    owners: &dyn OwnerLookup,
    now: i64,
) -> Vec<String> {
    if session.is_empty() && !opts.long_format() {
        return Vec::new();
    }

    let ordered = display_order(session.entries(), opts.reverse());
    if opts.long_format() {
        return render_long(session, &ordered, opts, owners, now);
    }

    let deco = opts.decorations();
    let grid = if opts.one_per_line() {
        layout_with_limit(&ordered, opts.width(), deco, 1)
    } else {
        layout(&ordered, opts.width(), deco)
    };
    render_grid(&ordered, &grid, deco)
}

/// One line per entry, preceded by `total <blocks>`.
pub fn render_long(
    session: &Session,
    ordered: &[&Entry],
    opts: &ListOptions,
    owners: &dyn OwnerLookup,
    now: i64,
) -> Vec<String> {
    let widths = session.widths();
    let mut lines = Vec::with_capacity(ordered.len() + 1);
    lines.push(format!("total {}", session.total_blocks()));

    for entry in ordered {
        let stat = entry.stat();
        let mut line = String::with_capacity(64 + entry.name().len());

        if opts.show_inode() {
            line.push_str(&format!("{:>w$} ", stat.inode, w = widths.inode));
        }
        if opts.show_blocks() {
            line.push_str(&format!("{:>w$} ", stat.blocks, w = widths.blocks));
        }
        line.push_str(&format_attributes(stat.mode));
        line.push_str(&format!(" {:>w$} ", stat.link_count, w = widths.links));

        if opts.show_owner() {
            if opts.numeric_ids() {
                line.push_str(&format!("{:>w$} ", stat.owner_id, w = widths.owner));
            } else {
                line.push_str(&right_justify(&owners.user_label(stat.owner_id), widths.owner));
                line.push(' ');
            }
        }
        if opts.show_group() {
            if opts.numeric_ids() {
                line.push_str(&format!("{:>w$} ", stat.group_id, w = widths.group));
            } else {
                line.push_str(&right_justify(&owners.group_label(stat.group_id), widths.group));
                line.push(' ');
            }
        }

        let size = format_file_size(stat.size_bytes, opts.human_readable());
        line.push_str(&right_justify(&size, widths.size));
        line.push(' ');
        line.push_str(&format_file_time(stat.mtime, now, opts.recent_days()));
        line.push(' ');
        line.push_str(entry.name());
        lines.push(line);
    }
    lines
}

/// Grid rows, column-major. The last cell of each row is left unpadded.
pub fn render_grid(ordered: &[&Entry], grid: &ColumnLayout, deco: Decorations) -> Vec<String> {
    let total = ordered.len();
    let rows = grid.row_count();
    let mut lines = Vec::with_capacity(rows);

    for row in 0..rows {
        let mut line = String::new();
        for (col, width) in grid.columns().iter().enumerate() {
            let pos = row + col * rows;
            if pos >= total {
                break;
            }
            let entry = ordered[pos];
            if col > 0 {
                line.push_str("  ");
            }

            if deco.show_inode {
                line.push_str(&format!("{:>w$} ", entry.inode(), w = width.inode));
            }
            if deco.show_blocks {
                line.push_str(&format!("{:>w$} ", entry.blocks(), w = width.blocks));
            }

            let last_in_row = pos + rows >= total || col + 1 == grid.column_count();
            if grid.is_unbounded() || last_in_row {
                line.push_str(entry.name());
            } else {
                line.push_str(&left_justify(entry.name(), entry.display_width(), width.name));
            }
        }
        lines.push(line);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::core::entry::EntryStat;
    use crate::core::owner::NumericOwners;
    use crate::utils::cli::Flags;

    const DAY: i64 = 24 * 60 * 60;
    const NOW: i64 = 1_750_000_000;

    fn session_of(names: &[&str], opts: &ListOptions) -> Session {
        let mut session = Session::new();
        for (i, name) in names.iter().enumerate() {
            let stat = EntryStat {
                inode: 100 + i as u64,
                blocks: 8,
                size_bytes: 10 * (i as u64 + 1),
                link_count: 1,
                mode: 0o100644,
                mtime: NOW - DAY,
                owner_id: 1000,
                group_id: 100,
            };
            session.record(Entry::new(*name, stat), opts, &NumericOwners);
        }
        session.sort();
        session
    }

    fn opts(flags: Flags) -> ListOptions {
        ListOptions::new(&Config::default(), &flags, Some(80))
    }

    #[test]
    fn grid_is_column_major() {
        let o = opts(Flags { width: Some(12), ..Flags::default() });
        let session = session_of(&["aa", "bb", "cc", "dd", "ee"], &o);
        // 5 cols: 18, 4 cols -> 3 cols of 2 rows: 10
        let lines = render(&session, &o, &NumericOwners, NOW);
        assert_eq!(lines, vec!["aa  cc  ee", "bb  dd"]);
    }

    #[test]
    fn reverse_walks_back_to_front() {
        let o = opts(Flags { reverse: true, width: Some(0), ..Flags::default() });
        let session = session_of(&["b", "a", "c"], &o);
        let lines = render(&session, &o, &NumericOwners, NOW);
        assert_eq!(lines, vec!["c  b  a"]);
    }

    #[test]
    fn pads_all_but_last_cell() {
        let o = opts(Flags { width: Some(20), ..Flags::default() });
        let session = session_of(&["a", "bbbb", "cc"], &o);
        let lines = render(&session, &o, &NumericOwners, NOW);
        assert_eq!(lines, vec!["a  bbbb  cc"]);

        let narrow = opts(Flags { width: Some(9), ..Flags::default() });
        let session = session_of(&["a", "bbbb", "cc"], &narrow);
        // 3 cols need 11, 2 cols of 2 rows need 4 + 2 + 2 = 8
        let lines = render(&session, &narrow, &NumericOwners, NOW);
        assert_eq!(lines, vec!["a     cc", "bbbb"]);
    }

    #[test]
    fn inode_prefix_in_grid() {
        let o = opts(Flags { inode: true, width: Some(80), ..Flags::default() });
        let session = session_of(&["x", "y"], &o);
        let lines = render(&session, &o, &NumericOwners, NOW);
        assert_eq!(lines, vec!["100 x  101 y"]);
    }

    #[test]
    fn one_per_line() {
        let o = opts(Flags { one_per_line: true, ..Flags::default() });
        let session = session_of(&["b", "a"], &o);
        assert_eq!(render(&session, &o, &NumericOwners, NOW), vec!["a", "b"]);
    }

    #[test]
    fn empty_grid_prints_nothing() {
        let o = opts(Flags::default());
        let session = Session::new();
        assert!(render(&session, &o, &NumericOwners, NOW).is_empty());
    }

    #[test]
    fn long_format_numeric() {
        let o = opts(Flags { numeric: true, ..Flags::default() });
        let session = session_of(&["a", "b"], &o);
        let lines = render(&session, &o, &NumericOwners, NOW);

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "total 16");
        assert!(lines[1].starts_with("-rw-r--r-- 1 1000 100 10 "), "{:?}", lines[1]);
        assert!(lines[1].ends_with(" a"));
        assert!(lines[2].starts_with("-rw-r--r-- 1 1000 100 20 "), "{:?}", lines[2]);
    }

    #[test]
    fn long_format_column_suppression() {
        let g = opts(Flags { no_owner: true, no_group: true, ..Flags::default() });
        let session = session_of(&["a"], &g);
        let lines = render(&session, &g, &NumericOwners, NOW);
        assert!(lines[1].starts_with("-rw-r--r-- 1 10 "), "{:?}", lines[1]);

        let o = opts(Flags { no_group_long: true, inode: true, blocks: true, ..Flags::default() });
        let session = session_of(&["a"], &o);
        let lines = render(&session, &o, &NumericOwners, NOW);
        assert!(lines[1].starts_with("100 8 -rw-r--r-- 1 1000 10 "), "{:?}", lines[1]);
    }

    #[test]
    fn long_format_reverse() {
        let o = opts(Flags { long: true, reverse: true, ..Flags::default() });
        let session = session_of(&["a", "b", "c"], &o);
        let lines = render(&session, &o, &NumericOwners, NOW);
        let last: Vec<char> = lines[1..]
            .iter()
            .filter_map(|l| l.chars().last())
            .collect();
        assert_eq!(last, vec!['c', 'b', 'a']);
    }
}
