//! Command-line argument parsing and help for lsgrid.
//!
//! Short options follow getopt conventions: they may be clustered (`-la`),
//! `-w` takes its value attached (`-w80`) or as the next argument,
//! options may follow directory arguments, and `--` ends option parsing.
//!
//! A handful of long options (`--help`, `--version`, `--init`, `--config-help`)
//! print something and exit.

use crate::config::Config;
use crate::error::ListError;

use std::path::Path;

/// Flags as given on the command line, before they are merged with the config.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Flags {
    /// `-a`
    pub all: bool,
    /// `-A`
    pub almost_all: bool,
    /// `-F`
    pub classify: bool,
    /// `-g`
    pub no_owner: bool,
    /// `-G`
    pub no_group: bool,
    /// `-i`
    pub inode: bool,
    /// `-l`
    pub long: bool,
    /// `-n`
    pub numeric: bool,
    /// `-o`
    pub no_group_long: bool,
    /// `-p`
    pub indicator: bool,
    /// `-Q`
    pub quote: bool,
    /// `-r`
    pub reverse: bool,
    /// `-s`
    pub blocks: bool,
    /// `-1`
    pub one_per_line: bool,
    /// `-h`
    pub human_readable: bool,
    /// `-w WIDTH`
    pub width: Option<usize>,
}

#[derive(Debug, PartialEq, Eq)]
pub enum CliAction {
    List { flags: Flags, paths: Vec<String> },
    Exit,
}

/// Parses the arguments following the program name.
pub fn handle_args<I>(args: I) -> Result<CliAction, ListError>
where
    I: IntoIterator<Item = String>,
{
    let mut flags = Flags::default();
    let mut paths = Vec::new();
    let mut options_done = false;
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        if options_done || arg == "-" || !arg.starts_with('-') {
            paths.push(arg);
            continue;
        }
        if arg == "--" {
            options_done = true;
            continue;
        }
        if let Some(long) = arg.strip_prefix("--") {
            match long {
                "help" => print_help(),
                "version" => print_version(),
                "config-help" => print_config_help(),
                "init" => init_config(&Config::default_path())?,
                _ => return Err(ListError::UnknownLongOption(arg)),
            }
            return Ok(CliAction::Exit);
        }

        let cluster = &arg[1..];
        for (idx, c) in cluster.char_indices() {
            match c {
                'a' => flags.all = true,
                'A' => flags.almost_all = true,
                'F' => flags.classify = true,
                'g' => flags.no_owner = true,
                'G' => flags.no_group = true,
                'i' => flags.inode = true,
                'l' => flags.long = true,
                'n' => flags.numeric = true,
                'o' => flags.no_group_long = true,
                'p' => flags.indicator = true,
                'Q' => flags.quote = true,
                'r' => flags.reverse = true,
                's' => flags.blocks = true,
                '1' => flags.one_per_line = true,
                'h' => flags.human_readable = true,
                'w' => {
                    let attached = &cluster[idx + c.len_utf8()..];
                    let value = if attached.is_empty() {
                        args.next().ok_or(ListError::MissingArgument('w'))?
                    } else {
                        attached.to_string()
                    };
                    flags.width = Some(parse_width(&value)?);
                    break;
                }
                other => return Err(ListError::UnknownOption(other)),
            }
        }
    }

    Ok(CliAction::List { flags, paths })
}

/// Writes the default config file to `path`, refusing to overwrite an existing one.
pub fn init_config(path: &Path) -> Result<(), ListError> {
    Config::generate_default(path).map_err(|source| ListError::ConfigInit {
        path: path.to_path_buf(),
        source,
    })
}

/// Parses a `-w` value. Only ASCII digits are accepted; an empty value means 0
/// and values past `usize::MAX` saturate.
pub fn parse_width(value: &str) -> Result<usize, ListError> {
    if !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ListError::InvalidWidth(value.to_string()));
    }
    if value.is_empty() {
        return Ok(0);
    }
    Ok(value.parse::<usize>().unwrap_or(usize::MAX))
}

fn print_version() {
    println!("lsgrid {}", env!("CARGO_PKG_VERSION"));
}

fn print_help() {
    println!(
        r#"lsgrid - list directory contents in columns

USAGE:
  lsg [OPTION]... [DIRECTORY]...

DIRECTORY:
  Directories to list (defaults to the current directory)

OPTIONS:
  -a                      do not hide entries starting with .
  -A                      do not list implied . and ..
  -F                      append indicator (one of */=@|) to entries
  -g                      like -l, but do not list owner
  -G                      inhibit display of group information
  -h                      print sizes in human readable form
  -i                      print index number of each file
  -l                      use a long listing format
  -n                      like -l, but list numeric UIDs and GIDs
  -o                      like -l, but do not list group information
  -p                      append indicator (one of /=@|) to entries
  -Q                      enclose entry names in double quotes
  -r                      reverse order while sorting
  -s                      print size of each file, in blocks
  -w WIDTH                assume screen width instead of current value (0: one line)
  -1                      list one file per line
      --init              Generate a default configuration file
      --config-help       Display all the configuration options
      --help              Print help information
      --version           Display the current installed version

ENVIRONMENT:
  LSGRID_CONFIG           Override the default config path
"#
    );
}

fn print_config_help() {
    println!(
        r##"
lsgrid - Configuration Guide (lsgrid.toml)

[general]
  show_all                   List dotfiles and the implied . and .. (like -a)
  classify                   Append */=@|/ type indicators (like -F)
  quote                      Enclose names in double quotes (like -Q)
  numeric_ids                Numeric uid/gid in long listings (like -n, without forcing -l)
  human_readable             Human readable sizes (like -h)

[display]
  width                      Fixed line width; 0 prints a single line (like -w)
  fallback_width             Width used when no terminal is attached [default: 80]
  recent_days                Newer files show the time of day [default: 180]

Command-line flags can switch settings on, never off.
"##
    );
}
