//! # Cart Store
//!
//! Holds the shop's one cart and serializes every operation on it.
//!
//! ## Thread Safety
//! The cart is wrapped in `Arc<Mutex<T>>` because:
//! 1. Several views may dispatch into the same cart
//! 2. `add` accumulates and `update_quantity` sets outright, so two requests
//!    must never interleave; each sees the state the previous one left
//! 3. Clones of the store share the same cart
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Store Operations                                │
//! │                                                                         │
//! │  View Action              Command                 Cart Change           │
//! │  ───────────              ───────                 ───────────           │
//! │                                                                         │
//! │  Add to Cart ────────────► add_to_cart() ───────► add(item)            │
//! │                                                                         │
//! │  + / − on cart page ─────► update_cart_item() ──► update_quantity()    │
//! │                                                                         │
//! │  Delete ─────────────────► remove_from_cart() ──► remove(name)         │
//! │                                                                         │
//! │  Checkout ───────────────► checkout() ──────────► snapshot, clear()    │
//! │                                                                         │
//! │  Cart badge / cart page ─► get_cart() ──────────► (read only)          │
//! │                                                                         │
//! │  NOTE: Reads and writes both take the lock; nothing is held across     │
//! │        an await point or I/O.                                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use chrono::{DateTime, Utc};
use nursery_core::{CartAction, CartState, LineItem};
use serde::Serialize;
use tracing::{debug, warn};

/// The cart as the shop holds it: contents plus when it was opened.
///
/// `opened_at` restarts whenever the cart is cleared, so it always marks the
/// start of the current shopping trip.
#[derive(Debug, Clone)]
pub struct Cart {
    state: CartState,
    opened_at: DateTime<Utc>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart {
            state: CartState::new(),
            opened_at: Utc::now(),
        }
    }

    pub fn state(&self) -> &CartState {
        &self.state
    }

    pub fn opened_at(&self) -> DateTime<Utc> {
        self.opened_at
    }

    /// Applies one action; `Clear` also restarts `opened_at`.
    pub fn apply(&mut self, action: &CartAction) {
        match action {
            CartAction::Clear => self.clear(),
            other => self.state.apply(other),
        }
    }

    /// Clears all items and restarts the trip.
    pub fn clear(&mut self) {
        self.state.clear();
        self.opened_at = Utc::now();
    }
}

impl Default for Cart {
    fn default() -> Self {
        Self::new()
    }
}

/// Cart totals summary for responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartTotals {
    /// Distinct lines.
    pub item_count: usize,
    /// Units across all lines (the badge number).
    pub total_quantity: i64,
    /// `None` when some line's cost is not a readable amount.
    pub subtotal_cents: Option<i64>,
}

impl From<&CartState> for CartTotals {
    fn from(cart: &CartState) -> Self {
        let subtotal_cents = match cart.subtotal() {
            Ok(subtotal) => Some(subtotal.cents()),
            Err(err) => {
                warn!(%err, "cart subtotal unavailable");
                None
            }
        };

        CartTotals {
            item_count: cart.item_count(),
            total_quantity: cart.total_quantity(),
            subtotal_cents,
        }
    }
}

/// Cart response including items and totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartResponse {
    pub items: Vec<LineItem>,
    pub totals: CartTotals,
    pub opened_at: DateTime<Utc>,
}

impl From<&Cart> for CartResponse {
    fn from(cart: &Cart) -> Self {
        CartResponse {
            items: cart.state.items().to_vec(),
            totals: CartTotals::from(&cart.state),
            opened_at: cart.opened_at,
        }
    }
}

/// Shared, serialized access to the shop's cart.
///
/// ## Why Not RwLock?
/// Most cart traffic is writes, and reads are a quick copy. A RwLock would
/// add complexity with minimal benefit.
#[derive(Debug, Clone, Default)]
pub struct CartStore {
    cart: Arc<Mutex<Cart>>,
}

impl CartStore {
    /// Creates a new empty cart store.
    pub fn new() -> Self {
        CartStore {
            cart: Arc::new(Mutex::new(Cart::new())),
        }
    }

    /// Poisoned locks are reclaimed: every cart operation leaves a valid
    /// state, even when a caller's closure panics afterwards.
    fn lock(&self) -> MutexGuard<'_, Cart> {
        self.cart.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Executes a function with read access to the cart.
    ///
    /// ## Usage
    /// ```rust
    /// use nursery_shop::state::CartStore;
    ///
    /// let store = CartStore::new();
    /// let badge = store.with_cart(|cart| cart.state().total_quantity());
    /// assert_eq!(badge, 0);
    /// ```
    pub fn with_cart<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Cart) -> R,
    {
        let cart = self.lock();
        f(&cart)
    }

    /// Executes a function with write access to the cart.
    pub fn with_cart_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Cart) -> R,
    {
        let mut cart = self.lock();
        f(&mut cart)
    }

    /// Applies one action and returns the resulting cart.
    pub fn dispatch(&self, action: &CartAction) -> CartResponse {
        debug!(action = action.kind(), target = ?action.target(), "cart dispatch");
        self.with_cart_mut(|cart| {
            cart.apply(action);
            CartResponse::from(&*cart)
        })
    }

    /// Snapshots the cart, clears it, and snapshots the emptied cart, all
    /// under one lock.
    ///
    /// Returns `(before, after)`. No other operation can land between the
    /// two snapshots, so `after` is always empty.
    pub fn take(&self) -> (CartResponse, CartResponse) {
        self.with_cart_mut(|cart| {
            let before = CartResponse::from(&*cart);
            cart.clear();
            (before, CartResponse::from(&*cart))
        })
    }

    pub fn snapshot(&self) -> CartResponse {
        self.with_cart(|cart| CartResponse::from(cart))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nursery_core::AddItem;

    fn add(name: &str, cost: &str, quantity: i64) -> CartAction {
        CartAction::add(AddItem::new(name, format!("{name}.jpg"), cost, quantity))
    }

    #[test]
    fn test_dispatch_returns_updated_cart() {
        let store = CartStore::new();
        store.dispatch(&add("Snake Plant", "$15", 2));
        let response = store.dispatch(&add("Lavender", "$20", 1));

        assert_eq!(response.items.len(), 2);
        assert_eq!(
            response.totals,
            CartTotals {
                item_count: 2,
                total_quantity: 3,
                subtotal_cents: Some(5000),
            }
        );
    }

    #[test]
    fn test_unreadable_cost_hides_subtotal_only() {
        let store = CartStore::new();
        let response = store.dispatch(&add("Mystery Fern", "ask us", 4));

        assert_eq!(response.totals.total_quantity, 4);
        assert_eq!(response.totals.subtotal_cents, None);
    }

    #[test]
    fn test_clear_restarts_opened_at() {
        let store = CartStore::new();
        let opened = store.with_cart(|c| c.opened_at());
        store.dispatch(&add("Jasmine", "$18", 1));

        let response = store.dispatch(&CartAction::clear());
        assert!(response.items.is_empty());
        assert!(response.opened_at >= opened);
    }

    #[test]
    fn test_take_snapshots_then_clears() {
        let store = CartStore::new();
        store.dispatch(&add("Aloe Vera", "$14", 3));

        let (receipt, emptied) = store.take();
        assert_eq!(receipt.totals.total_quantity, 3);
        assert_eq!(receipt.totals.subtotal_cents, Some(4200));
        assert!(emptied.items.is_empty());
        assert_eq!(emptied.totals.subtotal_cents, Some(0));
        assert_eq!(store.snapshot().totals.total_quantity, 0);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_take_returns_empty_cart_under_contention() {
        let store = CartStore::new();

        let writers: Vec<_> = (0..4)
            .map(|_| {
                let store = store.clone();
                tokio::spawn(async move {
                    for _ in 0..200 {
                        store.dispatch(&add("Jasmine", "$18", 1));
                    }
                })
            })
            .collect();

        let mut taken = 0;
        for _ in 0..50 {
            let (receipt, emptied) = store.take();
            assert!(emptied.items.is_empty());
            assert_eq!(emptied.totals.total_quantity, 0);
            taken += receipt.totals.total_quantity;
            tokio::task::yield_now().await;
        }

        for writer in writers {
            writer.await.unwrap();
        }
        taken += store.snapshot().totals.total_quantity;
        assert_eq!(taken, 800);
    }

    #[test]
    fn test_clones_share_one_cart() {
        let store = CartStore::new();
        let view = store.clone();
        store.dispatch(&add("Peace Lily", "$18", 2));
        assert_eq!(view.snapshot().totals.total_quantity, 2);
    }

    #[test]
    fn test_survives_panicking_caller() {
        let store = CartStore::new();
        store.dispatch(&add("Boston Fern", "$20", 1));

        let poisoner = store.clone();
        let result = std::thread::spawn(move || {
            poisoner.with_cart_mut(|_| panic!("view crashed mid-render"));
        })
        .join();
        assert!(result.is_err());

        let response = store.dispatch(&add("Boston Fern", "$20", 1));
        assert_eq!(response.totals.total_quantity, 2);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_adds_are_serialized() {
        let store = CartStore::new();

        let tasks: Vec<_> = (0..8)
            .map(|_| {
                let store = store.clone();
                tokio::spawn(async move {
                    for _ in 0..25 {
                        store.dispatch(&add("Rubber Plant", "$17", 1));
                    }
                })
            })
            .collect();

        for task in tasks {
            task.await.unwrap();
        }

        let response = store.snapshot();
        assert_eq!(response.items.len(), 1);
        assert_eq!(response.totals.total_quantity, 200);
        assert_eq!(response.totals.subtotal_cents, Some(200 * 1700));
    }
}
