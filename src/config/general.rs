//! The general configuration settings for lsgrid.
//!
//! Defines the [General] struct deserialized from the `[general]` table of lsgrid.toml.
//! Every field mirrors a command-line flag; the flag can only switch a setting on.

use serde::Deserialize;

#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct General {
    show_all: bool,
    classify: bool,
    quote: bool,
    numeric_ids: bool,
    human_readable: bool,
}

impl General {
    #[inline]
    pub fn show_all(&self) -> bool {
        self.show_all
    }

    #[inline]
    pub fn classify(&self) -> bool {
        self.classify
    }

    #[inline]
    pub fn quote(&self) -> bool {
        self.quote
    }

    #[inline]
    pub fn numeric_ids(&self) -> bool {
        self.numeric_ids
    }

    #[inline]
    pub fn human_readable(&self) -> bool {
        self.human_readable
    }
}
