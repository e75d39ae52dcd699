// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Status bar rendering
//!
//! A single bottom line with key hints on the left and the active filter on
//! the right. A transient status message temporarily replaces the hints.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};
use unicode_width::UnicodeWidthStr;

use crate::keymap::KeyboardOperation;
use crate::view_model::AppModel;

pub fn render_status_bar(frame: &mut Frame<'_>, area: Rect, model: &AppModel) {
    if area.height == 0 {
        return;
    }
    let theme = &model.theme;
    let mut spans: Vec<Span> = Vec::new();
    let mut consumed = 0usize;

    if let Some(message) = model.status_message() {
        push_span(
            &mut spans,
            &mut consumed,
            &format!(" {}", message),
            theme.warning_style().add_modifier(Modifier::BOLD),
        );
    } else {
        let focus = first_binding(model, KeyboardOperation::ToggleFocus);
        let contrast = first_binding(model, KeyboardOperation::ToggleHighContrast);
        let quit = first_binding(model, KeyboardOperation::Quit);
        let hints = format!(
            " ←/→ category  ↑/↓ bill  [/] scroll  {} focus  {} contrast  {} quit",
            focus, contrast, quit
        );
        push_span(&mut spans, &mut consumed, &hints, theme.muted_style());
    }

    let active_name = model
        .category_bar
        .catalog()
        .name_of(model.active())
        .unwrap_or_else(|| model.active().as_str())
        .to_string();
    let filter = format!("Filter: {} ", active_name);
    let filter_width = UnicodeWidthStr::width(filter.as_str());
    let line_width = area.width as usize;
    if consumed + filter_width < line_width {
        let gap = line_width - consumed - filter_width;
        push_span(&mut spans, &mut consumed, &" ".repeat(gap), Style::default());
    }
    push_span(&mut spans, &mut consumed, &filter, theme.primary_style());

    let bar = Paragraph::new(Line::from(spans)).style(Style::default().bg(theme.surface));
    frame.render_widget(bar, area);
}

fn first_binding(model: &AppModel, operation: KeyboardOperation) -> String {
    model
        .keymap
        .bindings_display(operation)
        .into_iter()
        .next()
        .unwrap_or_default()
}

fn push_span(spans: &mut Vec<Span>, consumed: &mut usize, text: &str, style: Style) {
    *consumed += UnicodeWidthStr::width(text);
    spans.push(Span::styled(text.to_string(), style));
}
