//! Ordering of listed entries.
//!
//! Entries are sorted once, ascending. Reverse order is a view over the sorted
//! slice so that both render modes and the layout engine walk positions the same way.

use crate::core::entry::Entry;

/// Sorts entries in place by their displayed name, comparing bytes.
pub fn sort_entries(entries: &mut [Entry]) {
    entries.sort_unstable_by(|a, b| a.name().as_bytes().cmp(b.name().as_bytes()));
}

/// The entries in the order they are printed: front-to-back, or back-to-front with `reverse`.
pub fn display_order(entries: &[Entry], reverse: bool) -> Vec<&Entry> {
    if reverse {
        entries.iter().rev().collect()
    } else {
        entries.iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::entry::EntryStat;

    fn entries(names: &[&str]) -> Vec<Entry> {
        names
            .iter()
            .map(|n| Entry::new(*n, EntryStat::default()))
            .collect()
    }

    fn names<'a>(entries: impl IntoIterator<Item = &'a Entry>) -> Vec<&'a str> {
        entries.into_iter().map(|e| e.name()).collect()
    }

    #[test]
    fn sorts_by_name() {
        let mut list = entries(&["b", "a", "c"]);
        sort_entries(&mut list);
        assert_eq!(names(&list), vec!["a", "b", "c"]);
    }

    #[test]
    fn reverse_is_a_view() {
        let mut list = entries(&["b", "a", "c"]);
        sort_entries(&mut list);
        assert_eq!(names(display_order(&list, true)), vec!["c", "b", "a"]);
        assert_eq!(names(&list), vec!["a", "b", "c"]);
    }

    #[test]
    fn byte_order_not_case_folded() {
        let mut list = entries(&["beta", "Zed", "alpha", "_x", "Alpha"]);
        sort_entries(&mut list);
        assert_eq!(names(&list), vec!["Alpha", "Zed", "_x", "alpha", "beta"]);
    }
}
