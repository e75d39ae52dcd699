// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Semantic color roles for the bill manager screen.
//!
//! Views never pick raw colors; they ask the theme for a role. The palette
//! is resolved once at startup (built-in, high-contrast, or overridden from
//! a TOML file) and the high-contrast toggle swaps it at runtime.

use crate::config::TuiConfig;
use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Padding},
};
use serde::Deserialize;
use std::{fs, path::Path};
use thiserror::Error;

/// Errors while loading or parsing custom theme definitions.
#[derive(Debug, Error)]
pub enum ThemeLoadError {
    #[error("failed to read theme file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse theme file {path}: {source}")]
    ParseToml {
        path: String,
        #[source]
        source: toml::de::Error,
    },
    #[error("invalid color for field '{field}': {details}")]
    InvalidColor { field: String, details: String },
}

#[derive(Debug, Clone)]
pub struct Theme {
    pub bg: Color,
    pub surface: Color,
    pub text: Color,
    pub muted: Color,
    pub primary: Color,
    pub accent: Color,
    pub success: Color,
    pub warning: Color,
    pub error: Color,
    pub border: Color,
    pub border_focused: Color,
}

impl Default for Theme {
    /// Catppuccin-derived dark palette.
    fn default() -> Self {
        Self {
            bg: Color::Rgb(20, 20, 30),
            surface: Color::Rgb(30, 30, 45),
            text: Color::Rgb(205, 214, 244),
            muted: Color::Rgb(127, 132, 156),
            primary: Color::Rgb(137, 180, 250),
            accent: Color::Rgb(150, 190, 150),
            success: Color::Rgb(150, 190, 150),
            warning: Color::Rgb(250, 179, 135),
            error: Color::Rgb(225, 105, 110),
            border: Color::Rgb(69, 71, 90),
            border_focused: Color::Rgb(137, 180, 250),
        }
    }
}

impl Theme {
    /// High-contrast palette, reachable from config, CLI, and the runtime
    /// toggle.
    pub fn high_contrast() -> Self {
        Self {
            bg: Color::Rgb(3, 7, 18),
            surface: Color::Rgb(15, 23, 42),
            text: Color::Rgb(226, 232, 240),
            muted: Color::Rgb(148, 163, 184),
            primary: Color::Rgb(59, 130, 246),
            accent: Color::Rgb(34, 197, 94),
            success: Color::Rgb(34, 197, 94),
            warning: Color::Rgb(249, 115, 22),
            error: Color::Rgb(239, 68, 68),
            border: Color::Rgb(30, 41, 59),
            border_focused: Color::Rgb(59, 130, 246),
        }
    }

    /// Resolve the startup theme: base palette per the high-contrast flag,
    /// then any override file on top.
    pub fn from_tui_config(config: &TuiConfig) -> Result<Self, ThemeLoadError> {
        let base = if config.high_contrast.unwrap_or(false) {
            Theme::high_contrast()
        } else {
            Theme::default()
        };
        match config.theme.as_ref() {
            Some(path) => base.merge_overrides_from_file(path),
            None => Ok(base),
        }
    }

    /// Apply overrides from a TOML file (a flat table of role keys) on top
    /// of this palette.
    pub fn merge_overrides_from_file<P: AsRef<Path>>(
        self,
        path: P,
    ) -> Result<Self, ThemeLoadError> {
        let path_ref = path.as_ref();
        let raw = fs::read_to_string(path_ref).map_err(|source| ThemeLoadError::Io {
            path: path_ref.display().to_string(),
            source,
        })?;
        let overrides: ThemeOverrides =
            toml::from_str(&raw).map_err(|source| ThemeLoadError::ParseToml {
                path: path_ref.display().to_string(),
                source,
            })?;
        self.apply_overrides(overrides)
    }

    fn apply_overrides(mut self, overrides: ThemeOverrides) -> Result<Self, ThemeLoadError> {
        for (role, value) in overrides.into_entries() {
            let Some(value) = value else { continue };
            let color = parse_color(value, role)?;
            if let Some(slot) = self.slot_mut(role) {
                *slot = color;
            }
        }
        Ok(self)
    }

    fn slot_mut(&mut self, role: &str) -> Option<&mut Color> {
        match role {
            "bg" => Some(&mut self.bg),
            "surface" => Some(&mut self.surface),
            "text" => Some(&mut self.text),
            "muted" => Some(&mut self.muted),
            "primary" => Some(&mut self.primary),
            "accent" => Some(&mut self.accent),
            "success" => Some(&mut self.success),
            "warning" => Some(&mut self.warning),
            "error" => Some(&mut self.error),
            "border" => Some(&mut self.border),
            "border-focused" => Some(&mut self.border_focused),
            _ => None,
        }
    }

    /// Look a role up by its config name.
    pub fn get_color(&self, role: &str) -> Option<Color> {
        match role.to_lowercase().as_str() {
            "bg" => Some(self.bg),
            "surface" => Some(self.surface),
            "text" => Some(self.text),
            "muted" => Some(self.muted),
            "primary" => Some(self.primary),
            "accent" => Some(self.accent),
            "success" => Some(self.success),
            "warning" => Some(self.warning),
            "error" => Some(self.error),
            "border" => Some(self.border),
            "border-focused" => Some(self.border_focused),
            _ => None,
        }
    }

    /// Bordered card with the title embedded in the top border.
    pub fn card_block(&self, title: &str) -> Block<'_> {
        let title_line = Line::from(vec![
            Span::styled("┤", Style::default().fg(self.border)),
            Span::styled(
                format!(" {} ", title),
                Style::default().fg(self.text).add_modifier(Modifier::BOLD),
            ),
            Span::styled("├", Style::default().fg(self.border)),
        ]);
        Block::default()
            .title(title_line)
            .title_alignment(Alignment::Left)
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(self.border))
            .padding(Padding::new(1, 1, 0, 0))
            .style(Style::default().bg(self.bg))
    }

    /// Inverted style for the active chip.
    pub fn focused_style(&self) -> Style {
        Style::default().fg(self.bg).bg(self.primary).add_modifier(Modifier::BOLD)
    }

    pub fn primary_style(&self) -> Style {
        Style::default().fg(self.primary).add_modifier(Modifier::BOLD)
    }

    pub fn muted_style(&self) -> Style {
        Style::default().fg(self.muted)
    }

    pub fn warning_style(&self) -> Style {
        Style::default().fg(self.warning)
    }
}

/// Flat override table. Unknown role names fail deserialization, so typos in
/// a theme file are reported instead of silently ignored.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
struct ThemeOverrides {
    bg: Option<ColorValue>,
    surface: Option<ColorValue>,
    text: Option<ColorValue>,
    muted: Option<ColorValue>,
    primary: Option<ColorValue>,
    accent: Option<ColorValue>,
    success: Option<ColorValue>,
    warning: Option<ColorValue>,
    error: Option<ColorValue>,
    border: Option<ColorValue>,
    border_focused: Option<ColorValue>,
}

impl ThemeOverrides {
    fn into_entries(self) -> [(&'static str, Option<ColorValue>); 11] {
        [
            ("bg", self.bg),
            ("surface", self.surface),
            ("text", self.text),
            ("muted", self.muted),
            ("primary", self.primary),
            ("accent", self.accent),
            ("success", self.success),
            ("warning", self.warning),
            ("error", self.error),
            ("border", self.border),
            ("border-focused", self.border_focused),
        ]
    }
}

/// A color in any of the accepted spellings: `"#rrggbb"`, `{ r, g, b }`,
/// or `[r, g, b]`.
#[derive(Debug, Deserialize, Clone)]
#[serde(untagged)]
enum ColorValue {
    Hex(String),
    Rgb { r: u8, g: u8, b: u8 },
    Array(Vec<u8>),
}

fn parse_color(value: ColorValue, field: &str) -> Result<Color, ThemeLoadError> {
    match value {
        ColorValue::Hex(text) => parse_hex(&text, field),
        ColorValue::Rgb { r, g, b } => Ok(Color::Rgb(r, g, b)),
        ColorValue::Array(values) => match values[..] {
            [r, g, b] => Ok(Color::Rgb(r, g, b)),
            _ => Err(ThemeLoadError::InvalidColor {
                field: field.to_string(),
                details: format!("expected [r,g,b], got length {}", values.len()),
            }),
        },
    }
}

fn parse_hex(hex: &str, field: &str) -> Result<Color, ThemeLoadError> {
    let digits = hex.trim_start_matches('#');
    if digits.len() != 6 {
        return Err(ThemeLoadError::InvalidColor {
            field: field.to_string(),
            details: format!("hex color must be 6 characters, got {}", digits.len()),
        });
    }
    let component = |offset: usize, name: &str| {
        u8::from_str_radix(&digits[offset..offset + 2], 16).map_err(|e| {
            ThemeLoadError::InvalidColor {
                field: field.to_string(),
                details: format!("invalid {} component: {}", name, e),
            }
        })
    };
    Ok(Color::Rgb(
        component(0, "red")?,
        component(2, "green")?,
        component(4, "blue")?,
    ))
}
