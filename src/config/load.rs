//! The main config loading module for lsgrid.
//!
//! Handles loading and deserializing settings from `lsgrid.toml`.
//!
//! Provides the main [Config] struct and the internal [RawConfig] used for parsing.
//! A missing file is not an error: the internal defaults apply.

use crate::config::{Display, General};
use crate::utils::get_home;

use serde::Deserialize;
use std::{fs, io, path::Path, path::PathBuf};

/// Raw configuration as read from the toml file.
/// It is converted into the main [Config] struct, which sanitizes the values.
#[derive(Deserialize, Debug, Default)]
#[serde(default)]
pub struct RawConfig {
    general: General,
    display: Display,
}

/// Main configuration struct for lsgrid.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Config {
    general: General,
    display: Display,
}

impl From<RawConfig> for Config {
    fn from(raw: RawConfig) -> Self {
        Self {
            general: raw.general,
            display: raw.display.sanitized(),
        }
    }
}

impl Config {
    /// Load configuration from the default path.
    /// If the file does not exist or fails to parse, returns the default configuration.
    pub fn load() -> Self {
        Self::load_from(&Self::default_path())
    }

    /// Load configuration from `path`, warning on stderr when it exists but cannot be used.
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        match fs::read_to_string(path) {
            Ok(content) => match toml::from_str::<RawConfig>(&content) {
                Ok(raw) => raw.into(),
                Err(e) => {
                    eprintln!("[lsgrid] Warning: error parsing {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                eprintln!("[lsgrid] Warning: cannot read {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    // Getters

    #[inline]
    pub fn general(&self) -> &General {
        &self.general
    }

    #[inline]
    pub fn display(&self) -> &Display {
        &self.display
    }

    /// Determine the default configuration file path.
    /// Checks the LSGRID_CONFIG environment variable first,
    /// then XDG_CONFIG_HOME,
    /// then defaults to ~/.config/lsgrid/lsgrid.toml.
    pub fn default_path() -> PathBuf {
        if let Ok(path) = std::env::var("LSGRID_CONFIG") {
            return PathBuf::from(path);
        }

        if let Ok(xdg_config) = std::env::var("XDG_CONFIG_HOME") {
            return PathBuf::from(xdg_config).join("lsgrid/lsgrid.toml");
        }

        if let Some(home) = get_home() {
            return home.join(".config/lsgrid/lsgrid.toml");
        }
        PathBuf::from("lsgrid.toml")
    }

    /// Generate a default configuration file at the specified path.
    /// If the file already exists, returns an error.
    pub fn generate_default(path: &Path) -> io::Result<()> {
        if path.exists() {
            return Err(io::Error::new(
                io::ErrorKind::AlreadyExists,
                format!("Config file already exists at {:?}", path),
            ));
        }
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, DEFAULT_TOML)?;
        println!("Default config generated at {:?}", path);
        Ok(())
    }
}

pub(crate) const DEFAULT_TOML: &str = r##"# lsgrid.toml - default configuration for lsgrid
# Commented values are the internal defaults.
# Command-line flags can switch these on, never off.

[general]
# show_all = false        # like -a
# classify = false        # like -F
# quote = false           # like -Q
# numeric_ids = false     # numeric ids in long listings, like -n without forcing -l
# human_readable = false  # like -h

[display]
# width = 100             # fixed line width, like -w (0 puts everything on one line)
# fallback_width = 80     # used when no terminal size is available
# recent_days = 180       # newer files show the time of day instead of the year
"##;
