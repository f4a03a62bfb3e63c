//! # Domain Types
//!
//! The values that flow into and out of the cart.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   add()   ┌─────────────────┐                     │
//! │  │    AddItem      │ ────────► │    LineItem     │                     │
//! │  │  ─────────────  │           │  ─────────────  │                     │
//! │  │  name           │           │  name (key)     │                     │
//! │  │  image          │           │  image          │                     │
//! │  │  cost           │           │  cost           │                     │
//! │  │  quantity (any) │           │  quantity ≥ 1   │                     │
//! │  └─────────────────┘           └─────────────────┘                     │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────┐                           │
//! │  │    Cost                                 │                           │
//! │  │  ─────────────────────────────────────  │                           │
//! │  │  Label("$15")      as the catalog says  │                           │
//! │  │  Amount(Money)     already in cents     │                           │
//! │  └─────────────────────────────────────────┘                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Name as Identity
//! Products have no separate ID; the display name is the cart key. The
//! catalog guarantees names are unique (see [`crate::catalog`]).

use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;

// =============================================================================
// Cost
// =============================================================================

/// A price as supplied by the catalog.
///
/// The cart carries it untouched; it is only read as money when a view asks
/// for a subtotal.
///
/// ## Serialization
/// Untagged: `"$15"` is a label, `1500` is an amount in cents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(untagged)]
#[ts(export)]
pub enum Cost {
    /// Pre-formatted display string, e.g. `"$15"`.
    Label(String),
    /// Numeric amount in cents.
    Amount(Money),
}

impl Cost {
    /// Reads the cost as money. Labels go through [`Money::parse`].
    pub fn to_money(&self) -> Option<Money> {
        match self {
            Cost::Label(label) => Money::parse(label),
            Cost::Amount(money) => Some(*money),
        }
    }
}

impl fmt::Display for Cost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cost::Label(label) => f.write_str(label),
            Cost::Amount(money) => write!(f, "{}", money),
        }
    }
}

impl From<&str> for Cost {
    fn from(label: &str) -> Self {
        Cost::Label(label.to_string())
    }
}

impl From<String> for Cost {
    fn from(label: String) -> Self {
        Cost::Label(label)
    }
}

impl From<Money> for Cost {
    fn from(money: Money) -> Self {
        Cost::Amount(money)
    }
}

// =============================================================================
// Add Request
// =============================================================================

/// An inbound add request: one product and how many of it to add.
///
/// `quantity` is whatever the caller sent; the cart normalizes it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AddItem {
    pub name: String,
    pub image: String,
    pub cost: Cost,
    pub quantity: i64,
}

impl AddItem {
    pub fn new(
        name: impl Into<String>,
        image: impl Into<String>,
        cost: impl Into<Cost>,
        quantity: i64,
    ) -> Self {
        AddItem {
            name: name.into(),
            image: image.into(),
            cost: cost.into(),
            quantity,
        }
    }
}

// =============================================================================
// Line Item
// =============================================================================

/// One distinct product held in the cart.
///
/// ## Invariants (upheld by `CartState`)
/// - `quantity >= 1`
/// - no other line in the same cart has this `name`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub struct LineItem {
    /// Product name, unique within the cart.
    pub name: String,

    /// Display reference (URL), never interpreted.
    pub image: String,

    /// Cost as first added.
    pub cost: Cost,

    /// Units of this product in the cart.
    pub quantity: i64,
}

impl LineItem {
    /// The cost of one unit, as money.
    pub fn unit_cost(&self) -> CoreResult<Money> {
        self.cost.to_money().ok_or_else(|| CoreError::InvalidCost {
            name: self.name.clone(),
            cost: self.cost.to_string(),
        })
    }

    /// Unit cost × quantity.
    pub fn line_total(&self) -> CoreResult<Money> {
        self.unit_cost()?
            .checked_mul_quantity(self.quantity)
            .ok_or_else(|| CoreError::AmountOverflow {
                name: self.name.clone(),
            })
    }
}

impl From<AddItem> for LineItem {
    fn from(item: AddItem) -> Self {
        LineItem {
            name: item.name,
            image: item.image,
            cost: item.cost,
            quantity: item.quantity,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn line(cost: impl Into<Cost>, quantity: i64) -> LineItem {
        LineItem::from(AddItem::new("Peace Lily", "lily.jpg", cost, quantity))
    }

    #[test]
    fn test_cost_deserializes_untagged() {
        let label: Cost = serde_json::from_str("\"$15\"").unwrap();
        assert_eq!(label, Cost::Label("$15".to_string()));

        let amount: Cost = serde_json::from_str("1800").unwrap();
        assert_eq!(amount, Cost::Amount(Money::from_cents(1800)));
    }

    #[test]
    fn test_cost_display_keeps_label_verbatim() {
        assert_eq!(Cost::from("$15").to_string(), "$15");
        assert_eq!(Cost::from(Money::from_cents(1250)).to_string(), "$12.50");
    }

    #[test]
    fn test_line_total() {
        assert_eq!(line("$18", 3).line_total().unwrap().cents(), 5400);
        assert_eq!(
            line(Money::from_cents(999), 2).line_total().unwrap().cents(),
            1998
        );
    }

    #[test]
    fn test_line_total_reports_bad_cost() {
        let err = line("on request", 1).line_total().unwrap_err();
        match err {
            CoreError::InvalidCost { name, cost } => {
                assert_eq!(name, "Peace Lily");
                assert_eq!(cost, "on request");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_line_total_overflow() {
        let err = line(Money::from_cents(i64::MAX), 2).line_total().unwrap_err();
        assert!(matches!(err, CoreError::AmountOverflow { .. }));
    }

    #[test]
    fn test_add_item_json_shape() {
        let item: AddItem = serde_json::from_str(
            r#"{"name":"Aloe Vera","image":"aloe.jpg","cost":"$14","quantity":2}"#,
        )
        .unwrap();
        assert_eq!(item, AddItem::new("Aloe Vera", "aloe.jpg", "$14", 2));
    }
}
