// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Bill list state
//!
//! Holds the full bill collection and a row selection over the view
//! filtered by the active category. The selection index always refers to a
//! row of the filtered view, not the backing vector.

use billfold_domain::{filter_bills, Bill, Catalog, CategoryId};

#[derive(Debug, Clone)]
pub struct BillListModel {
    bills: Vec<Bill>,
    selected: usize,
    scroll_offset: u16,
}

impl BillListModel {
    pub fn new(bills: Vec<Bill>) -> Self {
        Self {
            bills,
            selected: 0,
            scroll_offset: 0,
        }
    }

    pub fn bills(&self) -> &[Bill] {
        &self.bills
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn scroll_offset(&self) -> u16 {
        self.scroll_offset
    }

    /// The rows shown for the active category, in original order
    pub fn visible<'a>(&'a self, active: &CategoryId) -> Vec<&'a Bill> {
        filter_bills(&self.bills, active)
    }

    pub fn visible_len(&self, active: &CategoryId) -> usize {
        self.visible(active).len()
    }

    /// Block title, `"All Bills"` or `"<Category> Bills"`
    pub fn header_text(&self, catalog: &Catalog, active: &CategoryId) -> String {
        if active.is_all() {
            "All Bills".to_string()
        } else {
            match catalog.name_of(active) {
                Some(name) => format!("{} Bills", name),
                None => "Bills".to_string(),
            }
        }
    }

    /// `"N items"` with a singular form for one row
    pub fn count_text(&self, active: &CategoryId) -> String {
        let count = self.visible_len(active);
        if count == 1 {
            "1 item".to_string()
        } else {
            format!("{} items", count)
        }
    }

    pub fn select_index(&mut self, index: usize, active: &CategoryId) -> bool {
        let len = self.visible_len(active);
        if index >= len {
            return false;
        }
        let changed = self.selected != index;
        self.selected = index;
        changed
    }

    pub fn select_next(&mut self, active: &CategoryId) -> bool {
        let len = self.visible_len(active);
        if len == 0 || self.selected + 1 >= len {
            return false;
        }
        self.selected += 1;
        true
    }

    pub fn select_prev(&mut self) -> bool {
        if self.selected == 0 {
            return false;
        }
        self.selected -= 1;
        true
    }

    pub fn select_first(&mut self) -> bool {
        let changed = self.selected != 0;
        self.selected = 0;
        changed
    }

    pub fn select_last(&mut self, active: &CategoryId) -> bool {
        let len = self.visible_len(active);
        if len == 0 {
            return false;
        }
        let changed = self.selected != len - 1;
        self.selected = len - 1;
        changed
    }

    /// Back to the first row, used whenever the active category changes
    pub fn reset_selection(&mut self) {
        self.selected = 0;
        self.scroll_offset = 0;
    }

    /// Keep the selected row inside a viewport of `rows` lines. Called by
    /// the view with the actual list height after layout.
    pub fn ensure_selected_visible(&mut self, rows: u16) {
        if rows == 0 {
            return;
        }
        let selected = self.selected as u16;
        if selected < self.scroll_offset {
            self.scroll_offset = selected;
        } else if selected >= self.scroll_offset.saturating_add(rows) {
            self.scroll_offset = selected.saturating_sub(rows - 1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use billfold_domain::sample_bills;

    fn model() -> BillListModel {
        BillListModel::new(sample_bills())
    }

    #[test]
    fn all_category_shows_every_bill() {
        let list = model();
        assert_eq!(list.visible(&CategoryId::all()).len(), 6);
    }

    #[test]
    fn single_category_filters() {
        let list = model();
        let visible = list.visible(&CategoryId::from("gym"));
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].name, "Gym Membership");
    }

    #[test]
    fn header_and_count_texts() {
        let list = model();
        let catalog = Catalog::with_defaults();
        assert_eq!(list.header_text(&catalog, &CategoryId::all()), "All Bills");
        assert_eq!(
            list.header_text(&catalog, &CategoryId::from("gym")),
            "Gym Bills"
        );
        assert_eq!(list.count_text(&CategoryId::all()), "6 items");
        assert_eq!(list.count_text(&CategoryId::from("gym")), "1 item");
        assert_eq!(list.count_text(&CategoryId::from("no-such")), "0 items");
    }

    #[test]
    fn navigation_clamps_to_filtered_view() {
        let mut list = model();
        let all = CategoryId::all();
        assert!(!list.select_prev());
        assert!(list.select_next(&all));
        assert!(list.select_last(&all));
        assert_eq!(list.selected(), 5);
        assert!(!list.select_next(&all));

        // Within a one-row category nothing moves
        let gym = CategoryId::from("gym");
        list.reset_selection();
        assert!(!list.select_next(&gym));
        assert!(!list.select_last(&gym));
    }

    #[test]
    fn select_index_rejects_out_of_range() {
        let mut list = model();
        let gym = CategoryId::from("gym");
        assert!(!list.select_index(3, &gym));
        assert_eq!(list.selected(), 0);
    }

    #[test]
    fn reset_returns_to_first_row() {
        let mut list = model();
        let all = CategoryId::all();
        list.select_last(&all);
        list.reset_selection();
        assert_eq!(list.selected(), 0);
        assert_eq!(list.scroll_offset(), 0);
    }

    #[test]
    fn viewport_follows_selection() {
        let mut list = model();
        let all = CategoryId::all();
        list.select_last(&all);
        list.ensure_selected_visible(3);
        // Row 5 visible in a 3-row window starting at 3
        assert_eq!(list.scroll_offset(), 3);
        list.select_first();
        list.ensure_selected_visible(3);
        assert_eq!(list.scroll_offset(), 0);
    }
}
