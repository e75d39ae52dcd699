// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Bill list rendering
//!
//! One row per filtered bill: name on the left, category and due date
//! dimmed in the middle, the amount right aligned. The block title carries
//! the filter header and the item count.

use ratatui::{prelude::*, widgets::*};
use unicode_width::UnicodeWidthStr;

use crate::theme::Theme;
use crate::view::hit_test::HitTestRegistry;
use crate::view_model::{BillListModel, MouseAction};
use billfold_domain::{format_amount, Catalog, CategoryId};

pub fn render_bill_list(
    frame: &mut Frame<'_>,
    area: Rect,
    list: &mut BillListModel,
    catalog: &Catalog,
    active: &CategoryId,
    focused: bool,
    theme: &Theme,
    hit_registry: &mut HitTestRegistry<MouseAction>,
) {
    let title = format!(
        "{} · {}",
        list.header_text(catalog, active),
        list.count_text(active)
    );
    let mut block = theme.card_block(&title);
    if focused {
        block = block.border_style(Style::default().fg(theme.border_focused));
    }
    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.width == 0 || inner.height == 0 {
        return;
    }

    hit_registry.register(area, MouseAction::FocusList);

    let visible: Vec<_> = list.visible(active).into_iter().cloned().collect();
    if visible.is_empty() {
        render_empty_state(frame, inner, theme);
        return;
    }

    list.ensure_selected_visible(inner.height);
    let offset = list.scroll_offset() as usize;
    let selected = list.selected();

    let mut lines: Vec<Line> = Vec::new();
    for (row, bill) in visible.iter().enumerate().skip(offset).take(inner.height as usize) {
        let is_selected = row == selected;
        let row_bg = if is_selected {
            Style::default().bg(theme.surface)
        } else {
            Style::default()
        };
        let name_style = if is_selected {
            row_bg.fg(theme.primary).add_modifier(Modifier::BOLD)
        } else {
            row_bg.fg(theme.text)
        };
        let meta_style = row_bg.fg(theme.muted);
        let amount_style = if is_selected {
            row_bg.fg(theme.success).add_modifier(Modifier::BOLD)
        } else {
            row_bg.fg(theme.success)
        };

        let name = format!(" {}", bill.name);
        let amount = format!("{} ", format_amount(bill.amount));
        let mut meta = catalog
            .name_of(&bill.category)
            .unwrap_or_else(|| bill.category.as_str())
            .to_string();
        if let Some(due) = bill.due {
            meta.push_str(&format!(" · due {}", due.format("%b %-d")));
        }

        let width = inner.width as usize;
        let name_width = UnicodeWidthStr::width(name.as_str());
        let amount_width = UnicodeWidthStr::width(amount.as_str());
        let meta_width = UnicodeWidthStr::width(meta.as_str());

        // Meta is the first thing to go on narrow terminals
        let mut spans = vec![Span::styled(name.clone(), name_style)];
        let mut used = name_width;
        if name_width + 2 + meta_width + amount_width + 1 <= width {
            spans.push(Span::styled("  ", row_bg));
            spans.push(Span::styled(meta, meta_style));
            used += 2 + meta_width;
        }
        let gap = width.saturating_sub(used + amount_width);
        if gap > 0 {
            spans.push(Span::styled(" ".repeat(gap), row_bg));
        }
        spans.push(Span::styled(amount, amount_style));
        lines.push(Line::from(spans));

        let zone = Rect::new(inner.x, inner.y + (row - offset) as u16, inner.width, 1);
        hit_registry.register(zone, MouseAction::SelectBill(row));
    }

    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_empty_state(frame: &mut Frame<'_>, inner: Rect, theme: &Theme) {
    let mut lines = Vec::new();
    if inner.height > 2 {
        lines.push(Line::raw(""));
    }
    lines.push(Line::from(Span::styled(
        "No bills found",
        Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(Span::styled(
        "Try selecting a different category or add a new bill",
        Style::default().fg(theme.muted),
    )));
    let paragraph = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(paragraph, inner);
}
