// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Category filter bar state
//!
//! A single horizontal strip of category chips. Exactly one category is
//! active at all times and the strip scrolls horizontally when it does not
//! fit the viewport. Scrolling near the right edge starts a short animated
//! auto-scroll; the in-flight animation doubles as a debounce flag so a
//! stream of wheel events cannot re-trigger it.

use billfold_domain::{Catalog, CategoryId};
use std::time::{Duration, Instant};

/// Columns from the right edge that count as "near the edge"
pub const EDGE_PROXIMITY_COLS: u16 = 12;
/// How far one auto-scroll advances
pub const AUTO_SCROLL_ADVANCE_COLS: u16 = 24;
/// Minimum time the debounce flag stays up once an auto-scroll starts
pub const AUTO_SCROLL_HOLDOFF: Duration = Duration::from_millis(300);
/// Animation speed, applied on every 16ms tick
pub const AUTO_SCROLL_COLS_PER_TICK: u16 = 3;
/// Step for manual scrolling (wheel notch or bracket key)
pub const MANUAL_SCROLL_COLS: u16 = 6;

/// An in-flight auto-scroll animation. While present, no new auto-scroll
/// can be triggered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AutoScroll {
    pub target: u16,
    pub started: Instant,
}

/// Horizontal position of one chip within the unscrolled strip
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ChipSpan {
    pub start: u16,
    pub width: u16,
}

impl ChipSpan {
    pub fn end(&self) -> u16 {
        self.start.saturating_add(self.width)
    }
}

#[derive(Debug, Clone)]
pub struct CategoryBarModel {
    catalog: Catalog,
    active: CategoryId,
    cursor: usize,
    scroll_offset: u16,
    viewport_width: u16,
    content_width: u16,
    /// Chip geometry reported by the view after layout
    chip_spans: Vec<ChipSpan>,
    auto_scroll: Option<AutoScroll>,
}

impl CategoryBarModel {
    pub fn new(catalog: Catalog) -> Self {
        let active = catalog
            .categories()
            .first()
            .map(|category| category.id.clone())
            .unwrap_or_else(CategoryId::all);
        Self {
            catalog,
            active,
            cursor: 0,
            scroll_offset: 0,
            viewport_width: 0,
            content_width: 0,
            chip_spans: Vec::new(),
            auto_scroll: None,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn active(&self) -> &CategoryId {
        &self.active
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn scroll_offset(&self) -> u16 {
        self.scroll_offset
    }

    pub fn viewport_width(&self) -> u16 {
        self.viewport_width
    }

    pub fn content_width(&self) -> u16 {
        self.content_width
    }

    pub fn auto_scroll(&self) -> Option<AutoScroll> {
        self.auto_scroll
    }

    pub fn max_scroll(&self) -> u16 {
        self.content_width.saturating_sub(self.viewport_width)
    }

    pub fn can_scroll_left(&self) -> bool {
        self.scroll_offset > 0
    }

    pub fn can_scroll_right(&self) -> bool {
        self.scroll_offset < self.max_scroll()
    }

    /// Select the chip at `index`. Returns `true` when the active category
    /// changed. Out-of-range indices are ignored.
    pub fn select(&mut self, index: usize) -> bool {
        let Some(category) = self.catalog.get(index) else {
            return false;
        };
        let id = category.id.clone();
        self.cursor = index;
        self.ensure_visible(index);
        if self.active != id {
            self.active = id;
            true
        } else {
            false
        }
    }

    pub fn select_next(&mut self) -> bool {
        if self.cursor + 1 >= self.catalog.len() {
            return false;
        }
        self.select(self.cursor + 1)
    }

    pub fn select_prev(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.select(self.cursor - 1)
    }

    pub fn select_first(&mut self) -> bool {
        self.select(0)
    }

    pub fn select_last(&mut self) -> bool {
        if self.catalog.is_empty() {
            return false;
        }
        self.select(self.catalog.len() - 1)
    }

    /// Manual horizontal scroll. Clamps to `[0, max_scroll]` and then runs
    /// the auto-scroll trigger check. Returns `true` when the offset moved
    /// or an animation started.
    pub fn scroll_by(&mut self, delta: i32) -> bool {
        let max = self.max_scroll();
        let before = self.scroll_offset;
        let next = (i64::from(self.scroll_offset) + i64::from(delta)).clamp(0, i64::from(max));
        self.scroll_offset = next as u16;
        let started = self.maybe_start_auto_scroll();
        self.scroll_offset != before || started
    }

    /// Trigger rule: only when no animation is in flight, the content
    /// overflows, and the offset sits inside the right-edge proximity zone
    /// with columns still left to reveal.
    fn maybe_start_auto_scroll(&mut self) -> bool {
        if self.auto_scroll.is_some() {
            return false;
        }
        let max = self.max_scroll();
        if max == 0 || self.scroll_offset >= max {
            return false;
        }
        if self.scroll_offset.saturating_add(EDGE_PROXIMITY_COLS) < max {
            return false;
        }
        let target = self.scroll_offset.saturating_add(AUTO_SCROLL_ADVANCE_COLS).min(max);
        self.auto_scroll = Some(AutoScroll {
            target,
            started: Instant::now(),
        });
        true
    }

    /// Scroll so the chip at `index` is fully visible, without animation.
    /// Cancels any in-flight auto-scroll.
    pub fn ensure_visible(&mut self, index: usize) {
        self.auto_scroll = None;
        let Some(span) = self.chip_spans.get(index).copied() else {
            return;
        };
        if self.viewport_width == 0 {
            return;
        }
        if span.start < self.scroll_offset {
            self.scroll_offset = span.start;
        } else if span.end() > self.scroll_offset.saturating_add(self.viewport_width) {
            self.scroll_offset = span.end().saturating_sub(self.viewport_width);
        }
        self.scroll_offset = self.scroll_offset.min(self.max_scroll());
    }

    /// Advance the auto-scroll animation. The debounce flag clears only
    /// once the target is reached and the holdoff has expired. Returns
    /// `true` when the offset moved.
    pub fn on_tick(&mut self, now: Instant) -> bool {
        let Some(anim) = self.auto_scroll else {
            return false;
        };
        let before = self.scroll_offset;
        if self.scroll_offset < anim.target {
            self.scroll_offset =
                self.scroll_offset.saturating_add(AUTO_SCROLL_COLS_PER_TICK).min(anim.target);
        } else if self.scroll_offset > anim.target {
            self.scroll_offset =
                self.scroll_offset.saturating_sub(AUTO_SCROLL_COLS_PER_TICK).max(anim.target);
        }
        if self.scroll_offset == anim.target
            && now.saturating_duration_since(anim.started) >= AUTO_SCROLL_HOLDOFF
        {
            self.auto_scroll = None;
        }
        self.scroll_offset != before
    }

    pub fn set_viewport(&mut self, width: u16) {
        if self.viewport_width != width {
            self.viewport_width = width;
            self.clamp_to_layout();
        }
    }

    pub fn set_content_width(&mut self, width: u16) {
        if self.content_width != width {
            self.content_width = width;
            self.clamp_to_layout();
        }
    }

    pub fn set_chip_spans(&mut self, spans: Vec<ChipSpan>) {
        self.chip_spans = spans;
    }

    /// Re-clamp the offset and any animation target after a layout change
    /// (viewport resize or content reflow).
    fn clamp_to_layout(&mut self) {
        let max = self.max_scroll();
        if self.scroll_offset > max {
            self.scroll_offset = max;
        }
        if let Some(anim) = &mut self.auto_scroll {
            if anim.target > max {
                anim.target = max;
            }
        }
    }
}
