// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Header View Component
//!
//! Renders the application title and subtitle above the category bar.

use ratatui::{prelude::*, widgets::*};

use crate::theme::Theme;

pub fn render_header(frame: &mut Frame<'_>, area: Rect, theme: &Theme) {
    if area.height == 0 {
        return;
    }

    let mut lines = vec![Line::from(Span::styled(
        "Bill Manager",
        Style::default().fg(theme.primary).add_modifier(Modifier::BOLD),
    ))];
    if area.height > 1 {
        lines.push(Line::from(Span::styled(
            "Manage your bills and subscriptions",
            Style::default().fg(theme.muted),
        )));
    }

    let header = Paragraph::new(lines).style(Style::default().bg(theme.bg));
    frame.render_widget(header, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn renders_title_and_subtitle() {
        let backend = TestBackend::new(50, 2);
        let mut terminal = Terminal::new(backend).unwrap();
        let theme = Theme::default();

        terminal
            .draw(|frame| {
                render_header(frame, Rect::new(0, 0, 50, 2), &theme);
            })
            .unwrap();

        let buffer = terminal.backend().buffer();
        let top: String = (0..12).map(|x| buffer.cell((x, 0)).unwrap().symbol()).collect();
        assert_eq!(top, "Bill Manager");
        let sub: String = (0..35).map(|x| buffer.cell((x, 1)).unwrap().symbol()).collect();
        assert_eq!(sub, "Manage your bills and subscriptions");
    }
}
