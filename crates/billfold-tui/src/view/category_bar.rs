// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Category bar rendering
//!
//! Draws the horizontal chip strip inside a bordered block, clipped to the
//! model's scroll offset, and feeds the resulting geometry (viewport width,
//! content width, per-chip spans) back into the model. Overflow indicators
//! appear in the block padding columns when chips extend past an edge.

use ratatui::{prelude::*, widgets::*};
use unicode_width::UnicodeWidthStr;

use crate::theme::Theme;
use crate::view::hit_test::HitTestRegistry;
use crate::view_model::{CategoryBarModel, ChipSpan, MouseAction};
use billfold_domain::IconStyle;

pub fn render_category_bar(
    frame: &mut Frame<'_>,
    area: Rect,
    bar: &mut CategoryBarModel,
    icon_style: IconStyle,
    focused: bool,
    theme: &Theme,
    hit_registry: &mut HitTestRegistry<MouseAction>,
) {
    let mut block = theme.card_block("Categories");
    if focused {
        block = block.border_style(Style::default().fg(theme.border_focused));
    }
    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.width == 0 || inner.height == 0 {
        return;
    }

    // Coarse zone first so individual chips win the hit test
    hit_registry.register(area, MouseAction::FocusBar);

    // Lay the chips out in content space. Only the active chip carries its
    // icon; every other chip is just the padded name.
    let mut chip_spans: Vec<ChipSpan> = Vec::new();
    let mut line_spans: Vec<Span> = Vec::new();
    let mut x: u16 = 0;
    for (index, category) in bar.catalog().categories().iter().enumerate() {
        if index > 0 {
            line_spans.push(Span::raw(" "));
            x = x.saturating_add(1);
        }
        let is_active = category.id == *bar.active();
        let label = if is_active {
            format!(" {} {} ", category.icon_for(icon_style), category.name)
        } else {
            format!(" {} ", category.name)
        };
        let width = UnicodeWidthStr::width(label.as_str()) as u16;

        let style = if is_active {
            theme.focused_style()
        } else if index == bar.cursor() {
            Style::default().fg(theme.text).add_modifier(Modifier::UNDERLINED)
        } else {
            Style::default().fg(theme.text)
        };
        line_spans.push(Span::styled(label, style));
        chip_spans.push(ChipSpan { start: x, width });
        x = x.saturating_add(width);
    }
    let content_width = x;

    // Layout feedback; this re-clamps the scroll offset before we read it
    bar.set_viewport(inner.width);
    bar.set_content_width(content_width);
    bar.set_chip_spans(chip_spans.clone());
    let offset = bar.scroll_offset();

    let strip = Paragraph::new(Line::from(line_spans)).scroll((0, offset));
    frame.render_widget(strip, inner);

    // One hit zone per chip, clipped to the visible window
    for (index, span) in chip_spans.iter().enumerate() {
        let start = span.start.max(offset);
        let end = span.end().min(offset.saturating_add(inner.width));
        if start >= end {
            continue;
        }
        let zone = Rect::new(
            inner.x + (start - offset),
            inner.y,
            end - start,
            inner.height,
        );
        hit_registry.register(zone, MouseAction::SelectChip(index));
    }

    render_overflow_indicators(frame, inner, bar, theme);
}

/// `‹` and `›` in the padding columns flanking the chip strip
fn render_overflow_indicators(frame: &mut Frame<'_>, inner: Rect, bar: &CategoryBarModel, theme: &Theme) {
    let indicator_style = Style::default().fg(theme.accent).add_modifier(Modifier::BOLD);
    if bar.can_scroll_left() && inner.x > 0 {
        let left = Rect::new(inner.x - 1, inner.y, 1, 1);
        frame.render_widget(Paragraph::new("‹").style(indicator_style), left);
    }
    if bar.can_scroll_right() {
        let right = Rect::new(inner.x + inner.width, inner.y, 1, 1);
        if right.x < frame.area().width {
            frame.render_widget(Paragraph::new("›").style(indicator_style), right);
        }
    }
}
