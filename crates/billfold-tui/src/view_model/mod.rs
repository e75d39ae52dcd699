// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! ViewModel layer for the TUI
//!
//! All presentation state and input handling lives here, kept free of any
//! terminal drawing so it is testable with plain unit tests. The view layer
//! renders this state and feeds layout geometry back into it; the event
//! loop drives it exclusively through [`Msg`] values.

pub mod bill_list;
pub mod category_bar;

pub use bill_list::BillListModel;
pub use category_bar::{
    AutoScroll, CategoryBarModel, ChipSpan, AUTO_SCROLL_ADVANCE_COLS, AUTO_SCROLL_COLS_PER_TICK,
    AUTO_SCROLL_HOLDOFF, EDGE_PROXIMITY_COLS, MANUAL_SCROLL_COLS,
};

use crate::keymap::{Keymap, KeyboardOperation};
use crate::theme::Theme;
use billfold_domain::{Bill, Catalog, CategoryId, IconStyle};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};
use ratatui::layout::{Position, Rect};
use std::time::{Duration, Instant};
use tracing::debug;

const ESC_CONFIRMATION_MESSAGE: &str = "Press Esc again to quit";
const ESC_CONFIRMATION_TTL: Duration = Duration::from_secs(3);
const STATUS_MESSAGE_TTL: Duration = Duration::from_secs(5);

/// UI-level messages handled by the ViewModel
#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    /// Keyboard input (press and repeat only; releases are dropped)
    Key(KeyEvent),
    /// Mouse click already resolved to an action by the hit-test registry
    MouseClick {
        action: MouseAction,
        column: u16,
        row: u16,
    },
    /// Wheel events carry the hover position so scrolling can be routed to
    /// the area under the pointer
    MouseScrollUp { column: u16, row: u16 },
    MouseScrollDown { column: u16, row: u16 },
    MouseScrollLeft { column: u16, row: u16 },
    MouseScrollRight { column: u16, row: u16 },
    /// Periodic timer tick for animations and message expiry
    Tick,
    /// Application lifecycle
    Quit,
}

/// Mouse action types for interactive areas
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseAction {
    SelectChip(usize),
    SelectBill(usize),
    FocusBar,
    FocusList,
}

/// Which area receives focus styling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusArea {
    #[default]
    Bar,
    List,
}

/// Application state for the bill manager screen
#[derive(Debug)]
pub struct AppModel {
    pub category_bar: CategoryBarModel,
    pub bill_list: BillListModel,
    pub theme: Theme,
    pub keymap: Keymap,
    pub icon_style: IconStyle,
    pub focus: FocusArea,
    pub needs_redraw: bool,
    /// Screen areas reported by the view, used to route wheel events
    pub bar_area: Rect,
    pub list_area: Rect,
    standard_theme: Theme,
    high_contrast: bool,
    exit_requested: bool,
    exit_confirmation_armed_at: Option<Instant>,
    status_message: Option<String>,
    status_message_set_at: Option<Instant>,
}

impl AppModel {
    pub fn new(
        catalog: Catalog,
        bills: Vec<Bill>,
        theme: Theme,
        keymap: Keymap,
        icon_style: IconStyle,
        high_contrast: bool,
    ) -> Self {
        let active_theme = if high_contrast {
            Theme::high_contrast()
        } else {
            theme.clone()
        };
        Self {
            category_bar: CategoryBarModel::new(catalog),
            bill_list: BillListModel::new(bills),
            theme: active_theme,
            keymap,
            icon_style,
            focus: FocusArea::default(),
            needs_redraw: true,
            bar_area: Rect::default(),
            list_area: Rect::default(),
            standard_theme: theme,
            high_contrast,
            exit_requested: false,
            exit_confirmation_armed_at: None,
            status_message: None,
            status_message_set_at: None,
        }
    }

    pub fn active(&self) -> &CategoryId {
        self.category_bar.active()
    }

    pub fn high_contrast(&self) -> bool {
        self.high_contrast
    }

    pub fn status_message(&self) -> Option<&str> {
        self.status_message.as_deref()
    }

    /// Show a transient status-bar message (expires on a later tick)
    pub fn set_status_message(&mut self, text: impl Into<String>) {
        self.status_message = Some(text.into());
        self.status_message_set_at = Some(Instant::now());
        self.needs_redraw = true;
    }

    /// Consume a pending exit request, used by the event loop to break out
    pub fn take_exit_request(&mut self) -> bool {
        if self.exit_requested {
            self.exit_requested = false;
            true
        } else {
            false
        }
    }

    pub fn update(&mut self, msg: Msg) {
        match msg {
            Msg::Key(key_event) => {
                // Ignore key release events to avoid double processing
                if matches!(key_event.kind, KeyEventKind::Press | KeyEventKind::Repeat)
                    && self.handle_key_event(key_event)
                {
                    self.needs_redraw = true;
                }
            }
            Msg::MouseClick { action, .. } => {
                if self.handle_mouse_click(action) {
                    self.needs_redraw = true;
                }
            }
            Msg::MouseScrollUp { column, row } => {
                if self.handle_vertical_wheel(column, row, -1) {
                    self.needs_redraw = true;
                }
            }
            Msg::MouseScrollDown { column, row } => {
                if self.handle_vertical_wheel(column, row, 1) {
                    self.needs_redraw = true;
                }
            }
            Msg::MouseScrollLeft { .. } => {
                if self.category_bar.scroll_by(-i32::from(MANUAL_SCROLL_COLS)) {
                    self.needs_redraw = true;
                }
            }
            Msg::MouseScrollRight { .. } => {
                if self.category_bar.scroll_by(i32::from(MANUAL_SCROLL_COLS)) {
                    self.needs_redraw = true;
                }
            }
            Msg::Tick => {
                if self.handle_tick_at(Instant::now()) {
                    self.needs_redraw = true;
                }
            }
            Msg::Quit => {
                self.exit_requested = true;
            }
        }
    }

    fn handle_key_event(&mut self, key: KeyEvent) -> bool {
        if key.code == KeyCode::Esc {
            return self.handle_esc();
        }
        // Any other key disarms a pending quit confirmation
        self.clear_exit_confirmation();

        if self.keymap.matches(KeyboardOperation::Quit, &key) {
            self.exit_requested = true;
            return true;
        }
        if self.keymap.matches(KeyboardOperation::ToggleHighContrast, &key) {
            self.toggle_high_contrast();
            return true;
        }
        if self.keymap.matches(KeyboardOperation::ToggleFocus, &key) {
            self.focus = match self.focus {
                FocusArea::Bar => FocusArea::List,
                FocusArea::List => FocusArea::Bar,
            };
            return true;
        }

        if self.keymap.matches(KeyboardOperation::NextCategory, &key) {
            let changed = self.category_bar.select_next();
            self.after_category_input(changed);
            return true;
        }
        if self.keymap.matches(KeyboardOperation::PrevCategory, &key) {
            let changed = self.category_bar.select_prev();
            self.after_category_input(changed);
            return true;
        }
        if self.keymap.matches(KeyboardOperation::FirstCategory, &key) {
            let changed = self.category_bar.select_first();
            self.after_category_input(changed);
            return true;
        }
        if self.keymap.matches(KeyboardOperation::LastCategory, &key) {
            let changed = self.category_bar.select_last();
            self.after_category_input(changed);
            return true;
        }
        if self.keymap.matches(KeyboardOperation::ScrollBarLeft, &key) {
            self.category_bar.scroll_by(-i32::from(MANUAL_SCROLL_COLS));
            return true;
        }
        if self.keymap.matches(KeyboardOperation::ScrollBarRight, &key) {
            self.category_bar.scroll_by(i32::from(MANUAL_SCROLL_COLS));
            return true;
        }

        // LastBill (Shift+G) must be tested before FirstBill (g); the
        // unshifted matcher also accepts the shifted character
        if self.keymap.matches(KeyboardOperation::LastBill, &key) {
            let active = self.category_bar.active().clone();
            self.bill_list.select_last(&active);
            return true;
        }
        if self.keymap.matches(KeyboardOperation::FirstBill, &key) {
            self.bill_list.select_first();
            return true;
        }
        if self.keymap.matches(KeyboardOperation::NextBill, &key) {
            let active = self.category_bar.active().clone();
            self.bill_list.select_next(&active);
            return true;
        }
        if self.keymap.matches(KeyboardOperation::PrevBill, &key) {
            self.bill_list.select_prev();
            return true;
        }

        false
    }

    fn handle_esc(&mut self) -> bool {
        if self.exit_confirmation_armed_at.is_some() {
            self.exit_confirmation_armed_at = None;
            self.exit_requested = true;
            if matches!(self.status_message.as_deref(), Some(ESC_CONFIRMATION_MESSAGE)) {
                self.status_message = None;
                self.status_message_set_at = None;
            }
            return true;
        }
        self.exit_confirmation_armed_at = Some(Instant::now());
        self.status_message = Some(ESC_CONFIRMATION_MESSAGE.to_string());
        self.status_message_set_at = Some(Instant::now());
        true
    }

    fn clear_exit_confirmation(&mut self) {
        if self.exit_confirmation_armed_at.take().is_some()
            && matches!(self.status_message.as_deref(), Some(ESC_CONFIRMATION_MESSAGE))
        {
            self.status_message = None;
            self.status_message_set_at = None;
        }
    }

    fn toggle_high_contrast(&mut self) {
        self.high_contrast = !self.high_contrast;
        self.theme = if self.high_contrast {
            Theme::high_contrast()
        } else {
            self.standard_theme.clone()
        };
    }

    fn handle_mouse_click(&mut self, action: MouseAction) -> bool {
        self.clear_exit_confirmation();
        match action {
            MouseAction::SelectChip(index) => {
                self.focus = FocusArea::Bar;
                let changed = self.category_bar.select(index);
                self.after_category_input(changed);
                true
            }
            MouseAction::SelectBill(index) => {
                self.focus = FocusArea::List;
                let active = self.category_bar.active().clone();
                self.bill_list.select_index(index, &active);
                true
            }
            MouseAction::FocusBar => {
                self.focus = FocusArea::Bar;
                true
            }
            MouseAction::FocusList => {
                self.focus = FocusArea::List;
                true
            }
        }
    }

    /// Vertical wheel scrolls the bar horizontally while hovering it
    /// (mice without tilt wheels), and moves the list selection elsewhere.
    fn handle_vertical_wheel(&mut self, column: u16, row: u16, direction: i32) -> bool {
        let position = Position::new(column, row);
        if self.bar_area.contains(position) {
            return self.category_bar.scroll_by(direction * i32::from(MANUAL_SCROLL_COLS));
        }
        if direction < 0 {
            self.bill_list.select_prev()
        } else {
            let active = self.category_bar.active().clone();
            self.bill_list.select_next(&active)
        }
    }

    fn after_category_input(&mut self, changed: bool) {
        if changed {
            self.bill_list.reset_selection();
            debug!(category = %self.category_bar.active(), "active category changed");
        }
    }

    fn handle_tick_at(&mut self, now: Instant) -> bool {
        let mut changed = false;
        if self.category_bar.on_tick(now) {
            changed = true;
        }
        if let Some(armed_at) = self.exit_confirmation_armed_at {
            if now.saturating_duration_since(armed_at) >= ESC_CONFIRMATION_TTL {
                self.exit_confirmation_armed_at = None;
                if matches!(self.status_message.as_deref(), Some(ESC_CONFIRMATION_MESSAGE)) {
                    self.status_message = None;
                    self.status_message_set_at = None;
                }
                changed = true;
            }
        }
        if let Some(set_at) = self.status_message_set_at {
            if now.saturating_duration_since(set_at) >= STATUS_MESSAGE_TTL {
                self.status_message = None;
                self.status_message_set_at = None;
                changed = true;
            }
        }
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use billfold_domain::sample_bills;
    use crossterm::event::KeyModifiers;

    fn model() -> AppModel {
        AppModel::new(
            Catalog::with_defaults(),
            sample_bills(),
            Theme::default(),
            Keymap::default(),
            IconStyle::Unicode,
            false,
        )
    }

    fn press(code: KeyCode) -> Msg {
        Msg::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn right_key_selects_next_category_and_resets_list() {
        let mut m = model();
        m.update(press(KeyCode::Down));
        assert_eq!(m.bill_list.selected(), 1);
        m.update(press(KeyCode::Right));
        assert_eq!(m.category_bar.cursor(), 1);
        assert_eq!(m.active().as_str(), "subscription");
        // Category change resets the list selection
        assert_eq!(m.bill_list.selected(), 0);
    }

    #[test]
    fn vim_keys_drive_both_axes() {
        let mut m = model();
        m.update(press(KeyCode::Char('l')));
        m.update(press(KeyCode::Char('l')));
        assert_eq!(m.category_bar.cursor(), 2);
        m.update(press(KeyCode::Char('h')));
        assert_eq!(m.category_bar.cursor(), 1);
        m.update(press(KeyCode::Char('j')));
        assert_eq!(m.bill_list.selected(), 0); // subscriptions has a single row
        m.update(press(KeyCode::Home));
        assert_eq!(m.category_bar.cursor(), 0);
        m.update(press(KeyCode::Char('j')));
        m.update(press(KeyCode::Char('j')));
        assert_eq!(m.bill_list.selected(), 2);
        m.update(press(KeyCode::Char('k')));
        assert_eq!(m.bill_list.selected(), 1);
    }

    #[test]
    fn shift_g_jumps_to_last_bill() {
        let mut m = model();
        m.update(Msg::Key(KeyEvent::new(
            KeyCode::Char('G'),
            KeyModifiers::SHIFT,
        )));
        assert_eq!(m.bill_list.selected(), 5);
        m.update(press(KeyCode::Char('g')));
        assert_eq!(m.bill_list.selected(), 0);
    }

    #[test]
    fn q_requests_exit() {
        let mut m = model();
        m.update(press(KeyCode::Char('q')));
        assert!(m.take_exit_request());
        assert!(!m.take_exit_request());
    }

    #[test]
    fn esc_needs_confirmation() {
        let mut m = model();
        m.update(press(KeyCode::Esc));
        assert!(!m.take_exit_request());
        assert_eq!(m.status_message(), Some("Press Esc again to quit"));
        m.update(press(KeyCode::Esc));
        assert!(m.take_exit_request());
        assert_eq!(m.status_message(), None);
    }

    #[test]
    fn other_keys_disarm_esc_confirmation() {
        let mut m = model();
        m.update(press(KeyCode::Esc));
        m.update(press(KeyCode::Right));
        assert_eq!(m.status_message(), None);
        m.update(press(KeyCode::Esc));
        assert!(!m.take_exit_request());
    }

    #[test]
    fn esc_confirmation_expires_on_tick() {
        let mut m = model();
        m.update(press(KeyCode::Esc));
        let changed = m.handle_tick_at(Instant::now() + Duration::from_secs(4));
        assert!(changed);
        assert_eq!(m.status_message(), None);
        m.update(press(KeyCode::Esc));
        assert!(!m.take_exit_request());
    }

    #[test]
    fn status_message_expires_on_tick() {
        let mut m = model();
        m.set_status_message("theme file not found");
        assert!(m.handle_tick_at(Instant::now() + Duration::from_secs(6)));
        assert_eq!(m.status_message(), None);
    }

    #[test]
    fn contrast_toggle_swaps_theme() {
        let mut m = model();
        let standard_bg = m.theme.bg;
        m.update(press(KeyCode::Char('c')));
        assert!(m.high_contrast());
        assert_ne!(m.theme.bg, standard_bg);
        m.update(press(KeyCode::Char('c')));
        assert!(!m.high_contrast());
        assert_eq!(m.theme.bg, standard_bg);
    }

    #[test]
    fn tab_toggles_focus() {
        let mut m = model();
        assert_eq!(m.focus, FocusArea::Bar);
        m.update(press(KeyCode::Tab));
        assert_eq!(m.focus, FocusArea::List);
        m.update(press(KeyCode::Tab));
        assert_eq!(m.focus, FocusArea::Bar);
    }

    #[test]
    fn chip_click_selects_category() {
        let mut m = model();
        m.focus = FocusArea::List;
        m.update(Msg::MouseClick {
            action: MouseAction::SelectChip(7),
            column: 10,
            row: 4,
        });
        assert_eq!(m.category_bar.cursor(), 7);
        assert_eq!(m.active().as_str(), "gym");
        assert_eq!(m.focus, FocusArea::Bar);
    }

    #[test]
    fn wheel_over_bar_scrolls_horizontally() {
        let mut m = model();
        m.bar_area = Rect::new(0, 3, 40, 3);
        m.category_bar.set_viewport(38);
        m.category_bar.set_content_width(120);
        m.update(Msg::MouseScrollDown { column: 5, row: 4 });
        assert_eq!(m.category_bar.scroll_offset(), MANUAL_SCROLL_COLS);
        m.update(Msg::MouseScrollUp { column: 5, row: 4 });
        assert_eq!(m.category_bar.scroll_offset(), 0);
    }

    #[test]
    fn wheel_over_list_moves_selection() {
        let mut m = model();
        m.bar_area = Rect::new(0, 3, 40, 3);
        m.list_area = Rect::new(0, 6, 40, 10);
        m.update(Msg::MouseScrollDown { column: 5, row: 8 });
        assert_eq!(m.bill_list.selected(), 1);
        m.update(Msg::MouseScrollUp { column: 5, row: 8 });
        assert_eq!(m.bill_list.selected(), 0);
    }

    #[test]
    fn horizontal_wheel_always_scrolls_bar() {
        let mut m = model();
        m.category_bar.set_viewport(38);
        m.category_bar.set_content_width(120);
        m.update(Msg::MouseScrollRight { column: 30, row: 12 });
        assert_eq!(m.category_bar.scroll_offset(), MANUAL_SCROLL_COLS);
    }

    #[test]
    fn key_release_events_are_ignored() {
        let mut m = model();
        let mut release = KeyEvent::new(KeyCode::Right, KeyModifiers::NONE);
        release.kind = KeyEventKind::Release;
        m.update(Msg::Key(release));
        assert_eq!(m.category_bar.cursor(), 0);
    }
}
