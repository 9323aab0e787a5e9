//! Error kinds for lsgrid.
//!
//! - Option errors ([ListError::UnknownOption], [ListError::UnknownLongOption],
//!   [ListError::MissingArgument], [ListError::InvalidWidth]) end the run with status 1.
//! - [ListError::Access] is raised when a directory argument cannot be opened.
//!   It stops the whole run, including any directory arguments not yet listed.
//! - [ListError::Stat] is absorbed per entry: the entry is skipped and a diagnostic printed.
//! - [ListError::ConfigInit] is raised when `--init` cannot write the config file.
//! - [ListError::Io] wraps failures writing the listing itself.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Option letters accepted on the command line, as shown in diagnostics.
pub const OPTION_LETTERS: &str = "aAFgGilnopQrsw";

#[derive(Debug, Error)]
pub enum ListError {
    #[error("{}", unknown_option(.0))]
    UnknownOption(char),

    #[error("ls: unrecognized option '{0}'\nTry the following options 'aAFgGilnopQrsw'.")]
    UnknownLongOption(String),

    #[error("ls: option requires an argument -- {0}")]
    MissingArgument(char),

    #[error("ls: invalid line width: '{0}'")]
    InvalidWidth(String),

    #[error("ls: cannot access '{}'", .path.display())]
    Access {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("ls: cannot stat '{}': {source}", .path.display())]
    Stat {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("lsgrid: cannot write config '{}': {source}", .path.display())]
    ConfigInit {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Io(#[from] io::Error),
}

impl ListError {
    /// Process exit status for this error.
    ///
    /// An unopenable directory ends the run with status 0, the way the classic tool does.
    pub fn exit_code(&self) -> u8 {
        match self {
            ListError::Access { .. } | ListError::Stat { .. } => 0,
            _ => 1,
        }
    }

    /// Option errors are reported on standard output, everything else on standard error.
    pub fn is_option_error(&self) -> bool {
        matches!(
            self,
            ListError::UnknownOption(_)
                | ListError::UnknownLongOption(_)
                | ListError::MissingArgument(_)
                | ListError::InvalidWidth(_)
        )
    }
}

fn unknown_option(c: &char) -> String {
    let c = *c;
    if c.is_ascii_graphic() || c == ' ' {
        format!("ls: Unknown option -- {c}\nTry the following options '{}'.", OPTION_LETTERS)
    } else {
        format!("ls: Unknown option\nTry the following options '{}'.", OPTION_LETTERS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn option_errors_exit_with_one() {
        assert_eq!(ListError::UnknownOption('z').exit_code(), 1);
        assert_eq!(ListError::MissingArgument('w').exit_code(), 1);
        assert_eq!(ListError::InvalidWidth("8x".into()).exit_code(), 1);
        assert!(ListError::InvalidWidth("8x".into()).is_option_error());
    }

    #[test]
    fn access_error_keeps_zero_status() {
        let err = ListError::Access {
            path: PathBuf::from("/nope"),
            source: io::Error::from(io::ErrorKind::NotFound),
        };
        assert_eq!(err.exit_code(), 0);
        assert!(!err.is_option_error());
        assert_eq!(err.to_string(), "ls: cannot access '/nope'");
    }

    #[test]
    fn config_init_failure_exits_with_one() {
        let err = ListError::ConfigInit {
            path: PathBuf::from("/etc/lsgrid.toml"),
            source: io::Error::from(io::ErrorKind::AlreadyExists),
        };
        assert_eq!(err.exit_code(), 1);
        assert!(!err.is_option_error());
        assert!(err.to_string().starts_with("lsgrid: cannot write config '/etc/lsgrid.toml': "));
    }

    #[test]
    fn unknown_option_messages() {
        assert_eq!(
            ListError::UnknownOption('z').to_string(),
            "ls: Unknown option -- z\nTry the following options 'aAFgGilnopQrsw'."
        );
        assert_eq!(
            ListError::UnknownOption('\u{7}').to_string(),
            "ls: Unknown option\nTry the following options 'aAFgGilnopQrsw'."
        );
        assert_eq!(
            ListError::InvalidWidth("abc".into()).to_string(),
            "ls: invalid line width: 'abc'"
        );
    }
}
