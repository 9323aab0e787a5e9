//! The merged listing options.
//!
//! [ListOptions] is built once from the loaded [Config], the parsed command-line [Flags]
//! and the detected terminal width, then passed read-only to every listing phase.

use crate::config::Config;
use crate::core::{Decorations, NameStyle};
use crate::utils::cli::Flags;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListOptions {
    show_all: bool,
    almost_all: bool,
    name_style: NameStyle,
    long: bool,
    show_owner: bool,
    show_group: bool,
    numeric_ids: bool,
    inode: bool,
    blocks: bool,
    reverse: bool,
    one_per_line: bool,
    human_readable: bool,
    width: usize,
    recent_days: i64,
}

impl ListOptions {
    /// Merges config, flags and the terminal width.
    ///
    /// The width is the first of: the `-w` flag, `display.width`, the terminal size,
    /// `display.fallback_width`.
    pub fn new(config: &Config, flags: &Flags, terminal_width: Option<usize>) -> Self {
        let general = config.general();
        let display = config.display();
        let width = flags
            .width
            .or(display.width())
            .or(terminal_width)
            .unwrap_or(display.fallback_width());

        ListOptions {
            show_all: flags.all || general.show_all(),
            almost_all: flags.almost_all,
            name_style: NameStyle {
                classify: flags.classify || general.classify(),
                indicator: flags.indicator,
                quote: flags.quote || general.quote(),
            },
            long: flags.long || flags.no_owner || flags.numeric || flags.no_group_long,
            show_owner: !flags.no_owner,
            show_group: !flags.no_group && !flags.no_group_long,
            numeric_ids: flags.numeric || general.numeric_ids(),
            inode: flags.inode,
            blocks: flags.blocks,
            reverse: flags.reverse,
            one_per_line: flags.one_per_line,
            human_readable: flags.human_readable || general.human_readable(),
            width,
            recent_days: display.recent_days(),
        }
    }

    /// `true` when dotfiles other than the implied `.` and `..` are listed.
    #[inline]
    pub fn show_hidden(&self) -> bool {
        self.show_all || self.almost_all
    }

    /// `true` when the implied `.` and `..` entries are listed.
    /// `-A` wins over `-a`.
    #[inline]
    pub fn show_implied(&self) -> bool {
        self.show_all && !self.almost_all
    }

    #[inline]
    pub fn name_style(&self) -> NameStyle {
        self.name_style
    }

    #[inline]
    pub fn long_format(&self) -> bool {
        self.long
    }

    #[inline]
    pub fn show_owner(&self) -> bool {
        self.show_owner
    }

    #[inline]
    pub fn show_group(&self) -> bool {
        self.show_group
    }

    #[inline]
    pub fn numeric_ids(&self) -> bool {
        self.numeric_ids
    }

    #[inline]
    pub fn show_inode(&self) -> bool {
        self.inode
    }

    #[inline]
    pub fn show_blocks(&self) -> bool {
        self.blocks
    }

    #[inline]
    pub fn reverse(&self) -> bool {
        self.reverse
    }

    #[inline]
    pub fn one_per_line(&self) -> bool {
        self.one_per_line
    }

    #[inline]
    pub fn human_readable(&self) -> bool {
        self.human_readable
    }

    /// Line width for the grid; 0 means one unbounded row.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn recent_days(&self) -> i64 {
        self.recent_days
    }

    pub fn decorations(&self) -> Decorations {
        Decorations {
            show_inode: self.inode,
            show_blocks: self.blocks,
        }
    }
}

impl Default for ListOptions {
    fn default() -> Self {
        ListOptions::new(&Config::default(), &Flags::default(), None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::load::RawConfig;
    use std::error;

    fn with_flags(flags: Flags) -> ListOptions {
        ListOptions::new(&Config::default(), &flags, Some(100))
    }

    #[test]
    fn long_format_triggers() {
        assert!(!with_flags(Flags::default()).long_format());
        for flags in [
            Flags { long: true, ..Flags::default() },
            Flags { no_owner: true, ..Flags::default() },
            Flags { numeric: true, ..Flags::default() },
            Flags { no_group_long: true, ..Flags::default() },
        ] {
            assert!(with_flags(flags).long_format());
        }
    }

    #[test]
    fn owner_and_group_columns() {
        let g = with_flags(Flags { no_owner: true, ..Flags::default() });
        assert!(!g.show_owner());
        assert!(g.show_group());

        let o = with_flags(Flags { no_group_long: true, ..Flags::default() });
        assert!(o.show_owner());
        assert!(!o.show_group());

        let big_g = with_flags(Flags { long: true, no_group: true, ..Flags::default() });
        assert!(!big_g.show_group());
    }

    #[test]
    fn almost_all_overrides_all_for_implied_entries() {
        let both = with_flags(Flags { all: true, almost_all: true, ..Flags::default() });
        assert!(both.show_hidden());
        assert!(!both.show_implied());

        let all = with_flags(Flags { all: true, ..Flags::default() });
        assert!(all.show_implied());

        let none = with_flags(Flags::default());
        assert!(!none.show_hidden());
        assert!(!none.show_implied());
    }

    #[test]
    fn width_precedence() -> Result<(), Box<dyn error::Error>> {
        let raw: RawConfig = toml::from_str("[display]\nwidth = 60\nfallback_width = 72")?;
        let config = Config::from(raw);

        let flag = Flags { width: Some(0), ..Flags::default() };
        assert_eq!(ListOptions::new(&config, &flag, Some(120)).width(), 0);
        assert_eq!(ListOptions::new(&config, &Flags::default(), Some(120)).width(), 60);

        let plain = Config::default();
        assert_eq!(ListOptions::new(&plain, &Flags::default(), Some(120)).width(), 120);
        assert_eq!(ListOptions::new(&plain, &Flags::default(), None).width(), 80);
        Ok(())
    }

    #[test]
    fn config_switches_on_flags() -> Result<(), Box<dyn error::Error>> {
        let raw: RawConfig = toml::from_str("[general]\nquote = true\nnumeric_ids = true")?;
        let opts = ListOptions::new(&Config::from(raw), &Flags::default(), None);
        assert!(opts.name_style().quote);
        assert!(opts.numeric_ids());
        assert!(!opts.long_format());
        Ok(())
    }
}
