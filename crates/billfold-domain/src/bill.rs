// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Bills, the category filter over them, and money formatting

use crate::category::CategoryId;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// A single bill or subscription charge
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bill {
    pub id: u64,
    pub name: String,
    pub amount: Decimal,
    pub category: CategoryId,
    #[serde(default)]
    pub due: Option<NaiveDate>,
}

/// Bills matching `active`, in their original order.
///
/// The `all` pseudo-category matches everything; an id outside the catalog
/// matches nothing.
pub fn filter_bills<'a>(bills: &'a [Bill], active: &CategoryId) -> Vec<&'a Bill> {
    if active.is_all() {
        bills.iter().collect()
    } else {
        bills.iter().filter(|bill| &bill.category == active).collect()
    }
}

/// `"$1,500.00"` style: two fraction digits, thousands separators, the sign
/// ahead of the dollar sign.
pub fn format_amount(amount: Decimal) -> String {
    let rounded = amount.round_dp(2).abs();
    let text = format!("{:.2}", rounded);
    let (int_part, frac_part) = text.split_once('.').unwrap_or((text.as_str(), "00"));

    let digits = int_part.len();
    let mut grouped = String::with_capacity(digits + digits / 3);
    for (pos, ch) in int_part.chars().enumerate() {
        if pos > 0 && (digits - pos) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if amount.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    format!("{}${}.{}", sign, grouped, frac_part)
}

/// The demo dataset shown when no bills file is configured.
pub fn sample_bills() -> Vec<Bill> {
    vec![
        Bill {
            id: 1,
            name: "Netflix Subscription".to_string(),
            amount: dec!(15.99),
            category: CategoryId::from("subscription"),
            due: NaiveDate::from_ymd_opt(2026, 9, 1),
        },
        Bill {
            id: 2,
            name: "Electric Bill".to_string(),
            amount: dec!(120.00),
            category: CategoryId::from("utilities"),
            due: NaiveDate::from_ymd_opt(2026, 9, 5),
        },
        Bill {
            id: 3,
            name: "Internet Service".to_string(),
            amount: dec!(79.99),
            category: CategoryId::from("internet"),
            due: NaiveDate::from_ymd_opt(2026, 9, 12),
        },
        Bill {
            id: 4,
            name: "Rent Payment".to_string(),
            amount: dec!(1500.00),
            category: CategoryId::from("rent"),
            due: NaiveDate::from_ymd_opt(2026, 9, 1),
        },
        Bill {
            id: 5,
            name: "Shopping".to_string(),
            amount: dec!(45.00),
            category: CategoryId::from("shopping"),
            due: None,
        },
        Bill {
            id: 6,
            name: "Gym Membership".to_string(),
            amount: dec!(35.00),
            category: CategoryId::from("gym"),
            due: NaiveDate::from_ymd_opt(2026, 9, 3),
        },
    ]
}

/// Errors while loading a bills file.
#[derive(Debug, Error)]
pub enum BillsLoadError {
    #[error("failed to read bills file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse bills file {path}: {source}")]
    ParseToml {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Deserialize)]
struct BillsFile {
    #[serde(default)]
    bills: Vec<Bill>,
}

/// Load bills from a TOML file holding a `[[bills]]` array of tables.
///
/// Due dates are quoted `"YYYY-MM-DD"` strings.
pub fn load_bills_from_path<P: AsRef<Path>>(path: P) -> Result<Vec<Bill>, BillsLoadError> {
    let path_ref = path.as_ref();
    let raw = fs::read_to_string(path_ref).map_err(|source| BillsLoadError::Io {
        path: path_ref.display().to_string(),
        source,
    })?;
    let parsed: BillsFile = toml::from_str(&raw).map_err(|source| BillsLoadError::ParseToml {
        path: path_ref.display().to_string(),
        source,
    })?;
    Ok(parsed.bills)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn filter_all_returns_everything_in_order() {
        let bills = sample_bills();
        let visible = filter_bills(&bills, &CategoryId::all());
        assert_eq!(visible.len(), bills.len());
        let ids: Vec<u64> = visible.iter().map(|b| b.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn filter_matches_single_category() {
        let bills = sample_bills();
        let visible = filter_bills(&bills, &CategoryId::from("subscription"));
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].name, "Netflix Subscription");
    }

    #[test]
    fn filter_unknown_category_is_empty() {
        let bills = sample_bills();
        assert!(filter_bills(&bills, &CategoryId::from("space-travel")).is_empty());
    }

    #[test]
    fn filter_preserves_order_across_matches() {
        let mut bills = sample_bills();
        bills.push(Bill {
            id: 7,
            name: "Water Bill".to_string(),
            amount: dec!(30.25),
            category: CategoryId::from("utilities"),
            due: None,
        });
        let ids: Vec<u64> = filter_bills(&bills, &CategoryId::from("utilities"))
            .iter()
            .map(|b| b.id)
            .collect();
        assert_eq!(ids, vec![2, 7]);
    }

    #[test]
    fn amounts_format_with_separators() {
        assert_eq!(format_amount(dec!(15.99)), "$15.99");
        assert_eq!(format_amount(dec!(120)), "$120.00");
        assert_eq!(format_amount(dec!(1500.00)), "$1,500.00");
        assert_eq!(format_amount(dec!(1234567.891)), "$1,234,567.89");
        assert_eq!(format_amount(dec!(0)), "$0.00");
    }

    #[test]
    fn negative_amounts_carry_the_sign_before_the_dollar() {
        assert_eq!(format_amount(dec!(-45.5)), "-$45.50");
        assert_eq!(format_amount(dec!(-0.001)), "$0.00");
    }

    #[test]
    fn bills_file_loads_and_defaults_missing_due() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
[[bills]]
id = 10
name = "Water Bill"
amount = 30.25
category = "utilities"
due = "2026-09-10"

[[bills]]
id = 11
name = "Car Insurance"
amount = 89.0
category = "insurance"
"#
        )
        .unwrap();

        let bills = load_bills_from_path(file.path()).unwrap();
        assert_eq!(bills.len(), 2);
        assert_eq!(bills[0].amount, dec!(30.25));
        assert_eq!(bills[0].due, NaiveDate::from_ymd_opt(2026, 9, 10));
        assert_eq!(bills[1].due, None);
        assert_eq!(bills[1].category, CategoryId::from("insurance"));
    }

    #[test]
    fn malformed_bills_file_reports_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "[[bills]]\nid = \"not a number\"").unwrap();
        let err = load_bills_from_path(file.path()).unwrap_err();
        assert!(matches!(err, BillsLoadError::ParseToml { .. }));
    }

    #[test]
    fn missing_bills_file_reports_io_error() {
        let err = load_bills_from_path("/definitely/not/here.toml").unwrap_err();
        assert!(matches!(err, BillsLoadError::Io { .. }));
    }
}
