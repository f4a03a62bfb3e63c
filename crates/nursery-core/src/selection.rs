//! # Pending Selection
//!
//! Per-product state the catalog view keeps before anything reaches the cart:
//! the quantity picker next to each card and the "Added" highlight on its
//! button. None of this is cart state; the cart only ever sees the
//! [`AddItem`] produced by [`PendingSelection::take_add_request`].
//!
//! ```text
//!   [ − ]  2  [ + ]      decrement floors at 1, increment is unbounded
//!   [ Add to Cart ]  ──► AddItem { quantity: 2 }, button turns "Added"
//! ```

use std::collections::{HashMap, HashSet};

use crate::catalog::Product;
use crate::types::AddItem;
use crate::DEFAULT_PENDING_QUANTITY;

/// Quantity pickers and "added" flags, keyed by product name.
#[derive(Debug, Clone, Default)]
pub struct PendingSelection {
    quantities: HashMap<String, i64>,
    added: HashSet<String>,
}

impl PendingSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current picker value; products never touched show 1.
    pub fn quantity(&self, name: &str) -> i64 {
        self.quantities
            .get(name)
            .copied()
            .unwrap_or(DEFAULT_PENDING_QUANTITY)
    }

    pub fn increment(&mut self, name: &str) -> i64 {
        let next = self.quantity(name).saturating_add(1);
        self.quantities.insert(name.to_string(), next);
        next
    }

    pub fn decrement(&mut self, name: &str) -> i64 {
        let next = (self.quantity(name) - 1).max(1);
        self.quantities.insert(name.to_string(), next);
        next
    }

    /// Builds the add request from the picker and marks the product added.
    ///
    /// The picker keeps its value, so pressing the button again adds the
    /// same amount again.
    pub fn take_add_request(&mut self, product: &Product) -> AddItem {
        self.added.insert(product.name.clone());
        product.to_add_item(self.quantity(&product.name))
    }

    pub fn is_added(&self, name: &str) -> bool {
        self.added.contains(name)
    }
}
