//! # Cart Actions
//!
//! The requests views submit to the cart. Each variant maps onto exactly one
//! `CartState` transition.
//!
//! ## Wire Shape
//! ```json
//! {"type": "add", "name": "Jasmine", "image": "...", "cost": "$18", "quantity": 2}
//! {"type": "remove", "name": "Jasmine"}
//! {"type": "update_quantity", "name": "Jasmine", "quantity": 4}
//! {"type": "clear"}
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::types::AddItem;

/// A single cart mutation request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "type", rename_all = "snake_case")]
#[ts(export)]
pub enum CartAction {
    /// Add units of a product, accumulating onto an existing line.
    Add(AddItem),
    /// Drop a line by name.
    Remove { name: String },
    /// Set a line's quantity outright; `<= 0` removes it.
    UpdateQuantity { name: String, quantity: i64 },
    /// Empty the cart.
    Clear,
}

impl CartAction {
    pub fn add(item: AddItem) -> Self {
        CartAction::Add(item)
    }

    pub fn remove(name: impl Into<String>) -> Self {
        CartAction::Remove { name: name.into() }
    }

    pub fn update_quantity(name: impl Into<String>, quantity: i64) -> Self {
        CartAction::UpdateQuantity {
            name: name.into(),
            quantity,
        }
    }

    pub fn clear() -> Self {
        CartAction::Clear
    }

    /// Short label for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            CartAction::Add(_) => "add",
            CartAction::Remove { .. } => "remove",
            CartAction::UpdateQuantity { .. } => "update_quantity",
            CartAction::Clear => "clear",
        }
    }

    /// The product name the action targets, if any.
    pub fn target(&self) -> Option<&str> {
        match self {
            CartAction::Add(item) => Some(&item.name),
            CartAction::Remove { name } | CartAction::UpdateQuantity { name, .. } => Some(name),
            CartAction::Clear => None,
        }
    }
}
