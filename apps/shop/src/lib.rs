//! # Paradise Nursery Shop
//!
//! The shell around `nursery-core`: it owns the one shared cart, the
//! catalog and the configuration, and exposes them as commands.
//!
//! ## Module Organization
//! ```text
//! nursery_shop/
//! ├── lib.rs          ◄─── You are here (Shop, logging setup)
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── cart.rs     ◄─── CartStore (Arc<Mutex<Cart>>)
//! │   ├── catalog.rs  ◄─── CatalogState
//! │   └── config.rs   ◄─── ShopConfig
//! ├── commands/
//! │   ├── mod.rs      ◄─── Command exports
//! │   ├── cart.rs     ◄─── Cart manipulation, checkout
//! │   ├── catalog.rs  ◄─── Catalog grid
//! │   └── config.rs   ◄─── Configuration retrieval
//! ├── driver.rs       ◄─── JSON-lines request loop
//! └── error.rs        ◄─── API error type for commands
//! ```

pub mod commands;
pub mod driver;
pub mod error;
pub mod state;

use tracing_subscriber::EnvFilter;

use state::{CartStore, CatalogState, ShopConfig};

/// Everything a running shop holds.
#[derive(Debug, Clone, Default)]
pub struct Shop {
    pub(crate) catalog: CatalogState,
    pub(crate) cart: CartStore,
    pub(crate) config: ShopConfig,
}

impl Shop {
    /// A shop with the built-in catalog and an empty cart.
    pub fn new(config: ShopConfig) -> Self {
        Shop {
            catalog: CatalogState::default(),
            cart: CartStore::new(),
            config,
        }
    }

    pub fn with_catalog(catalog: CatalogState, config: ShopConfig) -> Self {
        Shop {
            catalog,
            cart: CartStore::new(),
            config,
        }
    }

    pub fn catalog(&self) -> &CatalogState {
        &self.catalog
    }

    /// The shared cart; clones of it see the same contents.
    pub fn cart(&self) -> &CartStore {
        &self.cart
    }

    pub fn config(&self) -> &ShopConfig {
        &self.config
    }
}

/// Initializes the tracing subscriber for structured logging.
///
/// Logs go to stderr; stdout carries replies.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=nursery_shop=trace` - Show trace for the shop only
/// - Default: INFO, DEBUG for nursery crates
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,nursery_shop=debug,nursery_core=debug"));

    // A second call (tests, embedding) keeps the first subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use nursery_core::{Catalog, Category, Product};

    #[test]
    fn test_shop_shares_cart_across_clones() {
        let shop = Shop::new(ShopConfig::default());
        let view = shop.clone();

        commands::cart::add_to_cart(shop.catalog(), shop.cart(), "Aloe Vera", Some(2)).unwrap();
        assert_eq!(view.cart().snapshot().totals.total_quantity, 2);
    }

    #[test]
    fn test_custom_catalog() {
        let catalog = Catalog::new(vec![Category::new(
            "Succulents",
            vec![Product::new("Jade", "jade.jpg", "Lucky.", "$9")],
        )])
        .unwrap();
        let shop = Shop::with_catalog(CatalogState::new(catalog), ShopConfig::default());

        assert!(commands::cart::add_to_cart(shop.catalog(), shop.cart(), "Jade", None).is_ok());
        assert!(commands::cart::add_to_cart(shop.catalog(), shop.cart(), "Lavender", None).is_err());
    }

    #[test]
    fn test_init_tracing_twice() {
        init_tracing();
        init_tracing();
    }
}
