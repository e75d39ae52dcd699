// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Terminal user interface for Billfold
//!
//! This crate provides a Ratatui-based bill manager screen: a horizontally
//! scrollable category filter bar above a filtered bill list, driven by a
//! view-model message loop with keyboard and mouse input.

pub mod app_loop;
pub mod config;
pub mod keymap;
pub mod terminal;
pub mod theme;
pub mod view;
pub mod view_model;

pub use app_loop::run_app;
pub use config::{ConfigError, TuiConfig, TuiKeymapConfig, default_config_path};
pub use keymap::{KeyBinding, KeyMatcher, Keymap, KeyboardOperation, parse_chord};
pub use theme::{Theme, ThemeLoadError};
pub use view::{HitTestRegistry, HitZone};
pub use view_model::{
    AppModel, AutoScroll, BillListModel, CategoryBarModel, ChipSpan, FocusArea, MouseAction, Msg,
};
