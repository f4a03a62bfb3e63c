//! # State Module
//!
//! Application state for the shop shell.
//!
//! ## Why Multiple State Types?
//! Instead of a single struct containing everything, each concern has its own
//! type and commands take only what they need:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌──────────────┐  ┌──────────────┐  ┌──────────────────┐              │
//! │  │ CatalogState │  │  CartStore   │  │   ShopConfig     │              │
//! │  │              │  │              │  │                  │              │
//! │  │  Catalog     │  │  Arc<Mutex<  │  │  store_name      │              │
//! │  │  (products)  │  │    Cart      │  │  currency        │              │
//! │  │              │  │  >>          │  │                  │              │
//! │  └──────────────┘  └──────────────┘  └──────────────────┘              │
//! │                                                                         │
//! │  THREAD SAFETY:                                                        │
//! │  • CatalogState: Read-only after initialization                        │
//! │  • CartStore: Protected by Arc<Mutex<T>> for exclusive access          │
//! │  • ShopConfig: Read-only after initialization                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod cart;
mod catalog;
mod config;

pub use cart::{Cart, CartResponse, CartStore, CartTotals};
pub use catalog::CatalogState;
pub use config::ShopConfig;
