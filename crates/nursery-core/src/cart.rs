//! # Cart State
//!
//! The authoritative model of what is in the cart.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart State Transitions                               │
//! │                                                                         │
//! │  Request                    Line present?        Result                 │
//! │  ───────                    ─────────────        ──────                 │
//! │                                                                         │
//! │  add(item, n > 0) ────────► yes ───────────────► quantity += n          │
//! │                        └──► no  ───────────────► push to end            │
//! │                                                                         │
//! │  add(item, n <= 0) ────────────────────────────► no-op                  │
//! │                                                                         │
//! │  remove(name) ────────────► yes ───────────────► line dropped           │
//! │                        └──► no  ───────────────► no-op                  │
//! │                                                                         │
//! │  update_quantity(name, n) ► yes, n > 0 ────────► quantity = n           │
//! │                        ├──► yes, n <= 0 ───────► line dropped           │
//! │                        └──► no  ───────────────► no-op                  │
//! │                                                                         │
//! │  clear() ──────────────────────────────────────► empty                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every transition is total. There is no input that fails, and no
//! reachable state with a duplicate name or a quantity below one.
//! Totals are recomputed from the lines on each call; nothing is cached.

use serde::Serialize;

use crate::action::CartAction;
use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::{AddItem, LineItem};

/// The cart: an ordered list of line items, in first-add order.
///
/// ## Invariants
/// - Lines are unique by `name` (adding the same product accumulates)
/// - Every line has `quantity >= 1` (anything lower removes the line)
/// - Positions never change on update; removal keeps relative order
///
/// Only `Serialize` is derived: a cart can be shown to anyone, but can only
/// be built through its transitions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CartState {
    items: Vec<LineItem>,
}

impl CartState {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        CartState { items: Vec::new() }
    }

    // =========================================================================
    // Transitions
    // =========================================================================

    /// Adds a product to the cart or increases its quantity if already present.
    ///
    /// ## Behavior
    /// - Product already in cart: quantity grows by `item.quantity`; the
    ///   stored image and cost stay as first added
    /// - Product not in cart: appended as a new line
    /// - `item.quantity <= 0`: nothing happens
    pub fn add(&mut self, item: AddItem) {
        if item.quantity <= 0 {
            return;
        }

        if let Some(line) = self.items.iter_mut().find(|l| l.name == item.name) {
            line.quantity = line.quantity.saturating_add(item.quantity);
            return;
        }

        self.items.push(LineItem::from(item));
    }

    /// Removes the line with this name. Absent names are ignored.
    pub fn remove(&mut self, name: &str) {
        self.items.retain(|l| l.name != name);
    }

    /// Sets the quantity of a line outright.
    ///
    /// ## Behavior
    /// - `quantity > 0`: the line's quantity becomes exactly `quantity`
    /// - `quantity <= 0`: the line is removed
    /// - No line with this name: nothing happens (no line is created)
    pub fn update_quantity(&mut self, name: &str, quantity: i64) {
        let Some(index) = self.items.iter().position(|l| l.name == name) else {
            return;
        };

        if quantity > 0 {
            self.items[index].quantity = quantity;
        } else {
            self.items.remove(index);
        }
    }

    /// Clears all items from the cart.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Applies one action in place.
    pub fn apply(&mut self, action: &CartAction) {
        match action {
            CartAction::Add(item) => self.add(item.clone()),
            CartAction::Remove { name } => self.remove(name),
            CartAction::UpdateQuantity { name, quantity } => self.update_quantity(name, *quantity),
            CartAction::Clear => self.clear(),
        }
    }

    /// Pure form of [`apply`](Self::apply): consumes the old state and
    /// returns the next one.
    ///
    /// ```rust
    /// use nursery_core::{AddItem, CartAction, CartState};
    ///
    /// let cart = [
    ///     CartAction::add(AddItem::new("Jasmine", "jasmine.jpg", "$18", 2)),
    ///     CartAction::update_quantity("Jasmine", 5),
    /// ]
    /// .into_iter()
    /// .fold(CartState::new(), CartState::reduce);
    ///
    /// assert_eq!(cart.total_quantity(), 5);
    /// ```
    #[must_use]
    pub fn reduce(mut self, action: CartAction) -> Self {
        match action {
            CartAction::Add(item) => self.add(item),
            other => self.apply(&other),
        }
        self
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Lines in first-add order.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Looks up a line by name.
    pub fn get(&self, name: &str) -> Option<&LineItem> {
        self.items.iter().find(|l| l.name == name)
    }

    /// Whether a line with this name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Returns the number of distinct lines in the cart.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Returns the total quantity of all items (the cart badge number).
    pub fn total_quantity(&self) -> i64 {
        self.items
            .iter()
            .fold(0i64, |total, l| total.saturating_add(l.quantity))
    }

    /// Checks if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of every line total.
    ///
    /// ## Errors
    /// - [`CoreError::InvalidCost`] naming the first line whose cost is not
    ///   an amount
    /// - [`CoreError::AmountOverflow`] if the sum doesn't fit
    pub fn subtotal(&self) -> CoreResult<Money> {
        self.items.iter().try_fold(Money::zero(), |total, line| {
            total
                .checked_add(line.line_total()?)
                .ok_or_else(|| CoreError::AmountOverflow {
                    name: line.name.clone(),
                })
        })
    }
}

impl FromIterator<CartAction> for CartState {
    fn from_iter<I: IntoIterator<Item = CartAction>>(iter: I) -> Self {
        iter.into_iter().fold(CartState::new(), CartState::reduce)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
