// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

use billfold_domain::{Catalog, IconStyle, sample_bills};
use billfold_tui::keymap::Keymap;
use billfold_tui::theme::Theme;
use billfold_tui::view::HitTestRegistry;
use billfold_tui::view_model::{AppModel, MouseAction, Msg};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{Terminal, backend::TestBackend, buffer::Buffer, style::Style};

/// Model over the built-in sample bills and default bindings.
#[allow(dead_code)]
pub fn app_model() -> AppModel {
    AppModel::new(
        Catalog::with_defaults(),
        sample_bills(),
        Theme::default(),
        Keymap::default(),
        IconStyle::Unicode,
        false,
    )
}

/// Render and return the raw buffer for style-aware assertions.
#[allow(dead_code)]
pub fn render_buffer(model: &mut AppModel, width: u16, height: u16) -> Buffer {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    let mut hits = HitTestRegistry::new();
    terminal
        .draw(|frame| billfold_tui::view::render(frame, model, &mut hits))
        .unwrap();
    terminal.backend().buffer().clone()
}

/// Render and return the hit-test registry built for that frame.
#[allow(dead_code)]
pub fn render_hits(model: &mut AppModel, width: u16, height: u16) -> HitTestRegistry<MouseAction> {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    let mut hits = HitTestRegistry::new();
    terminal
        .draw(|frame| billfold_tui::view::render(frame, model, &mut hits))
        .unwrap();
    hits
}

#[allow(dead_code)]
/// Find the top-left coordinate of the first occurrence of `needle` in the buffer.
pub fn find_text(buffer: &Buffer, needle: &str) -> Option<(u16, u16)> {
    (0..buffer.area().height).find_map(|y| {
        let line: String = (0..buffer.area().width)
            .map(|x| {
                buffer
                    .cell((x, y))
                    .and_then(|cell| cell.symbol().chars().next())
                    .unwrap_or(' ')
            })
            .collect();
        // One char per cell, so a char count is the column even when border
        // or icon glyphs earlier in the row take several bytes.
        line.find(needle)
            .map(|byte| (line[..byte].chars().count() as u16, y))
    })
}

#[allow(dead_code)]
/// Convenience to fetch the style of a cell (used for color assertions).
pub fn style_at(buffer: &Buffer, x: u16, y: u16) -> Style {
    buffer.cell((x, y)).unwrap().style()
}

/// Convenience factory for key events used in keyboard-driven state transitions.
#[allow(dead_code)]
pub fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

#[allow(dead_code)]
pub fn key_with(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
    KeyEvent::new(code, modifiers)
}

/// Apply a sequence of key events through the public message handler.
#[allow(dead_code)]
pub fn apply_keys(model: &mut AppModel, keys: &[KeyEvent]) {
    for key in keys {
        model.update(Msg::Key(*key));
    }
}

/// Standard viewport sizes to exercise layout differences.
#[allow(dead_code)]
pub const STANDARD_VIEWPORTS: &[(u16, u16)] = &[(80, 24), (96, 30), (132, 40)];
