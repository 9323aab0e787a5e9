//! Multi-column grid layout.
//!
//! [layout] picks how many columns a grid listing uses. Entries fill the grid
//! column-major: with `row_count` rows, the entry at position `i` lands in column
//! `i / row_count`. Each column is as wide as its widest name (plus the inode and
//! block prefixes when shown), and columns are separated by two spaces.
//!
//! The search starts at `min(COL_MAX, N)` columns and walks down one at a time until
//! the total line width is strictly less than the terminal width, or a single column
//! remains. The first fit is taken, so no larger achievable column count fits.

use crate::core::entry::Entry;
use crate::core::formatter::count_digits;

/// Upper bound on the number of grid columns.
pub const COL_MAX: usize = 20;
/// Spaces between two grid columns.
pub const COLUMN_GAP: usize = 2;

/// Optional prefixes printed in front of every grid name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Decorations {
    pub show_inode: bool,
    pub show_blocks: bool,
}

/// Field widths of one grid column.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ColumnWidth {
    pub name: usize,
    pub inode: usize,
    pub blocks: usize,
}

impl ColumnWidth {
    fn of(entry: &Entry) -> Self {
        let mut width = ColumnWidth::default();
        width.absorb(entry);
        width
    }

    fn absorb(&mut self, entry: &Entry) {
        self.name = self.name.max(entry.display_width());
        self.inode = self.inode.max(count_digits(entry.inode()));
        self.blocks = self.blocks.max(count_digits(entry.blocks()));
    }

    /// Printed width of the column: name plus any prefix and the space after it.
    pub fn total(&self, deco: Decorations) -> usize {
        let mut total = self.name;
        if deco.show_inode {
            total += self.inode + 1;
        }
        if deco.show_blocks {
            total += self.blocks + 1;
        }
        total
    }
}

/// The chosen grid shape for one listing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnLayout {
    column_count: usize,
    row_count: usize,
    columns: Vec<ColumnWidth>,
    unbounded: bool,
}

impl ColumnLayout {
    #[inline]
    pub fn column_count(&self) -> usize {
        self.column_count
    }

    #[inline]
    pub fn row_count(&self) -> usize {
        self.row_count
    }

    #[inline]
    pub fn columns(&self) -> &[ColumnWidth] {
        &self.columns
    }

    /// `true` for the single-row layout of a zero terminal width, which is never padded.
    #[inline]
    pub fn is_unbounded(&self) -> bool {
        self.unbounded
    }

    /// Width of a full row: every column plus the gaps between them.
    pub fn line_width(&self, deco: Decorations) -> usize {
        let columns: usize = self.columns.iter().map(|c| c.total(deco)).sum();
        columns + COLUMN_GAP * self.column_count.saturating_sub(1)
    }
}

/// Lays out `entries` (in display order) for a terminal `terminal_width` columns wide.
pub fn layout(entries: &[&Entry], terminal_width: usize, deco: Decorations) -> ColumnLayout {
    layout_with_limit(entries, terminal_width, deco, COL_MAX)
}

/// Same as [layout] with a custom column ceiling; a ceiling of 1 gives one entry per line.
pub fn layout_with_limit(
    entries: &[&Entry],
    terminal_width: usize,
    deco: Decorations,
    max_columns: usize,
) -> ColumnLayout {
    let total = entries.len();

    if terminal_width == 0 && max_columns > 1 {
        return ColumnLayout {
            column_count: total,
            row_count: usize::from(total > 0),
            columns: entries.iter().map(|e| ColumnWidth::of(e)).collect(),
            unbounded: true,
        };
    }

    let mut column_count = max_columns.clamp(1, COL_MAX).min(total);
    if column_count == 0 {
        return ColumnLayout::default();
    }

    loop {
        let row_count = total.div_ceil(column_count);
        // an uneven split may need fewer columns for the same number of rows
        column_count = column_count.min(total.div_ceil(row_count));

        let candidate = ColumnLayout {
            column_count,
            row_count,
            columns: measure_columns(entries, row_count, column_count),
            unbounded: false,
        };
        if column_count == 1 || candidate.line_width(deco) < terminal_width {
            return candidate;
        }
        column_count -= 1;
    }
}

/// Widths of each column when `entries` are split column-major into `row_count` rows.
pub(crate) fn measure_columns(
    entries: &[&Entry],
    row_count: usize,
    column_count: usize,
) -> Vec<ColumnWidth> {
    let mut columns = vec![ColumnWidth::default(); column_count];
    for (i, entry) in entries.iter().enumerate() {
        columns[i / row_count].absorb(entry);
    }
    columns
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::entry::EntryStat;

    fn named(widths: &[usize]) -> Vec<Entry> {
        widths
            .iter()
            .enumerate()
            .map(|(i, &w)| {
                let c = (b'a' + (i % 26) as u8) as char;
                Entry::new(c.to_string().repeat(w), EntryStat::default())
            })
            .collect()
    }

    const PLAIN: Decorations = Decorations {
        show_inode: false,
        show_blocks: false,
    };

    #[test]
    fn everything_fits_on_one_row() {
        let entries = named(&[3, 5, 2, 8, 1]);
        let view: Vec<&Entry> = entries.iter().collect();
        let grid = layout(&view, 80, PLAIN);

        assert_eq!(grid.column_count(), 5);
        assert_eq!(grid.row_count(), 1);
        assert_eq!(grid.line_width(PLAIN), 3 + 5 + 2 + 8 + 1 + 8);
    }

    #[test]
    fn shrinks_until_strictly_narrower() {
        let entries = named(&[3, 5, 2, 8, 1]);
        let view: Vec<&Entry> = entries.iter().collect();
        let grid = layout(&view, 20, PLAIN);

        // 5 columns need 27, 3 columns (rows of 2) need 5+8+1+4 = 18
        assert_eq!(grid.column_count(), 3);
        assert_eq!(grid.row_count(), 2);
        let names: Vec<usize> = grid.columns().iter().map(|c| c.name).collect();
        assert_eq!(names, vec![5, 8, 1]);
        assert!(grid.line_width(PLAIN) < 20);
    }

    #[test]
    fn exact_width_does_not_fit() {
        let entries = named(&[4, 4]);
        let view: Vec<&Entry> = entries.iter().collect();
        assert_eq!(layout(&view, 10, PLAIN).column_count(), 1);
        assert_eq!(layout(&view, 11, PLAIN).column_count(), 2);
    }

    #[test]
    fn single_column_uses_global_max() {
        let entries = named(&[3, 30, 7]);
        let view: Vec<&Entry> = entries.iter().collect();
        let grid = layout(&view, 10, PLAIN);
        assert_eq!(grid.column_count(), 1);
        assert_eq!(grid.row_count(), 3);
        assert_eq!(grid.columns()[0].name, 30);
    }

    #[test]
    fn zero_width_is_one_unbounded_row() {
        let entries = named(&[40, 50, 60]);
        let view: Vec<&Entry> = entries.iter().collect();
        let grid = layout(&view, 0, PLAIN);
        assert_eq!(grid.column_count(), 3);
        assert_eq!(grid.row_count(), 1);
        assert!(grid.is_unbounded());
    }

    #[test]
    fn no_entries() {
        let grid = layout(&[], 80, PLAIN);
        assert_eq!(grid.column_count(), 0);
        assert_eq!(grid.row_count(), 0);
        assert!(grid.columns().is_empty());

        let unbounded = layout(&[], 0, PLAIN);
        assert_eq!(unbounded.column_count(), 0);
        assert_eq!(unbounded.row_count(), 0);
    }

    #[test]
    fn column_count_is_capped() {
        let entries = named(&[1; 45]);
        let view: Vec<&Entry> = entries.iter().collect();
        let grid = layout(&view, 500, PLAIN);
        // 20 columns need 3 rows, and 3 rows only need 15 columns
        assert_eq!(grid.row_count(), 3);
        assert_eq!(grid.column_count(), 15);
    }

    #[test]
    fn prefixes_widen_columns() {
        let mut entries = named(&[2, 2]);
        entries[0] = Entry::new(
            "aa",
            EntryStat {
                inode: 123456,
                blocks: 8,
                ..EntryStat::default()
            },
        );
        let view: Vec<&Entry> = entries.iter().collect();
        let deco = Decorations {
            show_inode: true,
            show_blocks: true,
        };

        // columns: (6+1 + 1+1 + 2) + gap + (1+1 + 1+1 + 2) = 11 + 2 + 6
        let wide = layout(&view, 20, deco);
        assert_eq!(wide.column_count(), 2);
        assert_eq!(wide.line_width(deco), 19);

        assert_eq!(layout(&view, 19, deco).column_count(), 1);
    }

    #[test]
    fn one_per_line_limit() {
        let entries = named(&[1, 1, 1]);
        let view: Vec<&Entry> = entries.iter().collect();
        let grid = layout_with_limit(&view, 0, PLAIN, 1);
        assert_eq!(grid.column_count(), 1);
        assert_eq!(grid.row_count(), 3);
        assert!(!grid.is_unbounded());
    }
}
