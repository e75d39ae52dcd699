// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Domain types for Billfold
//!
//! Categories, bills, and the filtering and formatting rules shared by the
//! terminal UI and the CLI. These types are UI-agnostic.

pub mod bill;
pub mod category;

pub use bill::{
    filter_bills, format_amount, load_bills_from_path, sample_bills, Bill, BillsLoadError,
};
pub use category::{Catalog, Category, CategoryId, IconStyle, DEFAULT_CATEGORIES};
