// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Category catalog backing the filter bar
//!
//! Categories are identified by stable kebab-case ids. The catalog keeps
//! the display order of the filter bar, with the `all` pseudo-category
//! always first.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable category identifier (`"credit-card"`, `"food"`, ...)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryId(String);

impl CategoryId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The `all` pseudo-category that disables filtering
    pub fn all() -> Self {
        Self("all".to_string())
    }

    pub fn is_all(&self) -> bool {
        self.0 == "all"
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CategoryId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// Which glyph set the UI renders for category icons
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IconStyle {
    Unicode,
    Ascii,
}

impl Default for IconStyle {
    fn default() -> Self {
        IconStyle::Unicode
    }
}

/// A selectable bill category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    /// Single-column glyph shown on the active chip
    pub icon: String,
    /// Fallback for terminals that lack the glyph above
    pub ascii_icon: String,
}

impl Category {
    pub fn icon_for(&self, style: IconStyle) -> &str {
        match style {
            IconStyle::Unicode => &self.icon,
            IconStyle::Ascii => &self.ascii_icon,
        }
    }
}

fn category(id: &str, name: &str, icon: &str, ascii_icon: &str) -> Category {
    Category {
        id: CategoryId::from(id),
        name: name.to_string(),
        icon: icon.to_string(),
        ascii_icon: ascii_icon.to_string(),
    }
}

/// Built-in category set, in filter-bar display order.
///
/// Both glyph columns are one terminal cell wide so chip widths do not
/// depend on the configured icon style.
pub static DEFAULT_CATEGORIES: Lazy<Vec<Category>> = Lazy::new(|| {
    vec![
        category("all", "All", "▦", "#"),
        category("subscription", "Subscriptions", "↻", "@"),
        category("utilities", "Utilities", "⌁", "!"),
        category("internet", "Internet", "⇅", "~"),
        category("rent", "Rent", "⌂", "^"),
        category("credit-card", "Credit Card", "▤", "="),
        category("shopping", "Shopping", "✦", "$"),
        category("gym", "Gym", "∆", "&"),
        category("education", "Education", "✎", "?"),
        category("insurance", "Insurance", "☂", "%"),
        category("transport", "Transport", "✈", ">"),
        category("entertainment", "Entertainment", "♫", "*"),
        category("food", "Food & Dining", "♨", "u"),
        category("health", "Health", "✚", "+"),
        category("other", "Other", "⋯", "."),
    ]
});

/// Ordered category list shown in the filter bar.
///
/// Ids are expected to be unique, with `all` at index 0; the built-in set
/// satisfies this.
#[derive(Debug, Clone)]
pub struct Catalog {
    categories: Vec<Category>,
}

impl Catalog {
    pub fn with_defaults() -> Self {
        Self {
            categories: DEFAULT_CATEGORIES.clone(),
        }
    }

    pub fn new(categories: Vec<Category>) -> Self {
        Self { categories }
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Category> {
        self.categories.get(index)
    }

    pub fn position(&self, id: &CategoryId) -> Option<usize> {
        self.categories.iter().position(|c| &c.id == id)
    }

    pub fn contains(&self, id: &CategoryId) -> bool {
        self.position(id).is_some()
    }

    pub fn name_of(&self, id: &CategoryId) -> Option<&str> {
        self.categories.iter().find(|c| &c.id == id).map(|c| c.name.as_str())
    }
}
