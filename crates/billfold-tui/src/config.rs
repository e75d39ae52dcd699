// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! TUI-specific configuration types

use billfold_domain::IconStyle;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors while loading the configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}: {source}")]
    ParseToml {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}

/// TUI-specific configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub struct TuiConfig {
    /// Theme override file (TOML with a flat color table)
    pub theme: Option<PathBuf>,
    /// High contrast mode toggle
    pub high_contrast: Option<bool>,
    /// Mouse interaction preferences
    pub mouse_interaction: Option<bool>,
    /// Category icon glyph set (unicode/ascii)
    pub icon_style: Option<IconStyle>,
    /// Bills file replacing the built-in samples
    pub bills: Option<PathBuf>,
    /// Keyboard shortcut mappings
    pub keymap: Option<TuiKeymapConfig>,
}

impl TuiConfig {
    /// Load configuration from an explicit TOML file.
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path_ref = path.as_ref();
        let raw = std::fs::read_to_string(path_ref).map_err(|source| ConfigError::Io {
            path: path_ref.display().to_string(),
            source,
        })?;
        toml::from_str(&raw).map_err(|source| ConfigError::ParseToml {
            path: path_ref.display().to_string(),
            source,
        })
    }

    /// Load the config at `path` when given, otherwise the standard location.
    ///
    /// An explicitly requested file must exist; a missing file at the
    /// standard location just yields the defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(p) => Self::load_from_path(p),
            None => match default_config_path() {
                Some(p) if p.exists() => Self::load_from_path(p),
                _ => Ok(Self::default()),
            },
        }
    }

    /// Resolved icon style, defaulting to unicode glyphs.
    pub fn icon_style(&self) -> IconStyle {
        self.icon_style.unwrap_or_default()
    }
}

/// `~/.config/billfold/config.toml` on Linux, the platform equivalent elsewhere.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("billfold").join("config.toml"))
}

/// Keyboard keymap configuration
///
/// Each entry is a chord string such as `"Ctrl+Right"` or `"["`; setting one
/// replaces the default bindings for that operation.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub struct TuiKeymapConfig {
    /// Category bar operations
    pub next_category: Option<String>,
    pub prev_category: Option<String>,
    pub first_category: Option<String>,
    pub last_category: Option<String>,
    pub scroll_bar_left: Option<String>,
    pub scroll_bar_right: Option<String>,

    /// Bill list operations
    pub next_bill: Option<String>,
    pub prev_bill: Option<String>,
    pub first_bill: Option<String>,
    pub last_bill: Option<String>,

    /// Application actions
    pub toggle_focus: Option<String>,
    pub toggle_high_contrast: Option<String>,
    pub quit: Option<String>,
}
