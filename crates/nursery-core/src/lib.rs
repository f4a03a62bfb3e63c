//! # nursery-core: Pure Cart Logic for Paradise Nursery
//!
//! This crate is the **heart** of the shop. It owns the authoritative model of
//! "what is in the cart" and every transition on it, with zero I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Paradise Nursery Architecture                       │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 Views (catalog grid, cart page)                 │   │
//! │  │        PendingSelection ──► add ──► cart badge / cart list      │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ CartAction                             │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 nursery-shop (CartStore, commands)              │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ nursery-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   cart    │  │   money   │  │  catalog  │  │ selection │  │   │
//! │  │   │ CartState │  │   Money   │  │  Product  │  │  pending  │  │   │
//! │  │   │ LineItem  │  │   Cost    │  │ Category  │  │ quantities│  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO CLOCK • TOTAL TRANSITIONS                         │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`cart`] - `CartState` and its four transitions
//! - [`action`] - `CartAction`, the request contract views dispatch
//! - [`types`] - `LineItem`, `AddItem`, `Cost`
//! - [`money`] - Money type with integer arithmetic and cost parsing
//! - [`catalog`] - the product catalog that feeds `add`
//! - [`selection`] - per-product pending quantities owned by the catalog view
//! - [`validation`] - catalog name checks
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use nursery_core::{AddItem, CartState};
//!
//! let mut cart = CartState::new();
//! cart.add(AddItem::new("Snake Plant", "snake.jpg", "$15", 2));
//! cart.add(AddItem::new("Snake Plant", "snake.jpg", "$15", 3));
//!
//! assert_eq!(cart.item_count(), 1);
//! assert_eq!(cart.total_quantity(), 5);
//! assert_eq!(cart.subtotal().unwrap().cents(), 7500);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod action;
pub mod cart;
pub mod catalog;
pub mod error;
pub mod money;
pub mod selection;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use action::CartAction;
pub use cart::CartState;
pub use catalog::{Catalog, Category, Product};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use selection::PendingSelection;
pub use types::{AddItem, Cost, LineItem};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Quantity the catalog view pre-selects for every product.
pub const DEFAULT_PENDING_QUANTITY: i64 = 1;

/// Maximum length of a product name.
///
/// Names are cart keys and are shown on the cart badge tooltip, so they
/// stay short.
pub const MAX_PRODUCT_NAME_LEN: usize = 200;
