// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! View layer: pure rendering from the view-model to Ratatui widgets.
//!
//! Render functions read model state and draw widgets; the only writes back
//! into the model are layout facts the next update needs (viewport widths,
//! chip spans, screen areas). All input handling lives in `view_model`.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    style::Style,
    widgets::Paragraph,
};

pub mod bill_list;
pub mod category_bar;
pub mod header;
pub mod status_bar;

pub use hit_test::{HitTestRegistry, HitZone};

use crate::view_model::{AppModel, FocusArea, MouseAction};

/// Draws the whole screen and rebuilds the hit-test registry for this frame.
pub fn render(
    frame: &mut Frame<'_>,
    model: &mut AppModel,
    hit_registry: &mut HitTestRegistry<MouseAction>,
) {
    let size = frame.area();
    hit_registry.clear();

    let bg = Paragraph::new("").style(Style::default().bg(model.theme.bg));
    frame.render_widget(bg, size);

    // Collapse the header and status line on very short terminals so the
    // category bar and at least one bill row stay visible.
    let (header_height, status_height) = if size.height >= 9 {
        (2, 1)
    } else if size.height >= 6 {
        (1, 1)
    } else {
        (0, 0)
    };

    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(header_height),
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(status_height),
        ])
        .split(size);

    model.bar_area = main_layout[1];
    model.list_area = main_layout[2];

    header::render_header(frame, main_layout[0], &model.theme);

    category_bar::render_category_bar(
        frame,
        main_layout[1],
        &mut model.category_bar,
        model.icon_style,
        model.focus == FocusArea::Bar,
        &model.theme,
        hit_registry,
    );

    bill_list::render_bill_list(
        frame,
        main_layout[2],
        &mut model.bill_list,
        model.category_bar.catalog(),
        model.category_bar.active(),
        model.focus == FocusArea::List,
        &model.theme,
        hit_registry,
    );

    status_bar::render_status_bar(frame, main_layout[3], model);
}
