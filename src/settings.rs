//! # Configuration
//!
//! Host-facing settings, managed by [`confique`] with layered loading:
//!
//! 1. **Environment variables**: `FILEX_USER_MODE`, `FILEX_SEARCH_DEBOUNCE_MS`.
//! 2. **Settings file**: a TOML file supplied by the host, if any.
//! 3. **Compiled defaults**: built-in fallbacks via `#[config(default = ...)]`.
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `properties` | `[]` | Front-matter keys shown as extra columns and offered as sort keys |
//! | `user_mode` | `read` | `read` or `edit`; whether property cells accept edits |
//! | `search_debounce_ms` | `300` | Delay before a keystroke triggers a search query |

use std::path::Path;

use confique::Config;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Whether the panel lets the user edit front-matter property cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserMode {
    Read,
    Edit,
}

/// Settings for the file panel, stored in TOML.
#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Settings {
    /// Front-matter keys rendered as extra columns (e.g. "priority", "due").
    #[config(default = [])]
    pub properties: Vec<String>,

    /// Gate for in-place property editing.
    #[config(env = "FILEX_USER_MODE", default = "read")]
    pub user_mode: UserMode,

    /// Search input debounce delay, in milliseconds.
    #[config(env = "FILEX_SEARCH_DEBOUNCE_MS", default = 300)]
    pub search_debounce_ms: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            properties: Vec::new(),
            user_mode: UserMode::Read,
            search_debounce_ms: 300,
        }
    }
}

impl Settings {
    /// Load with environment overrides layered over a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        Ok(Self::builder().env().file(path).load()?)
    }

    /// Load from environment and compiled defaults only.
    pub fn load_without_file() -> Result<Self> {
        Ok(Self::builder().env().load()?)
    }

    pub fn is_edit_mode(&self) -> bool {
        self.user_mode == UserMode::Edit
    }
}
