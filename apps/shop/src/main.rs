//! # Paradise Nursery Shop Entry Point
//!
//! Serves shop commands over stdin/stdout, one JSON object per line.
//!
//! ## Startup Sequence
//! 1. Initialize tracing (logging, to stderr)
//! 2. Load configuration from the environment
//! 3. Build the shop (built-in catalog, empty cart)
//! 4. Serve requests until stdin closes

use std::io;
use std::process::ExitCode;

use nursery_shop::driver;
use nursery_shop::state::ShopConfig;
use nursery_shop::{init_tracing, Shop};
use tracing::{error, info};

fn main() -> ExitCode {
    init_tracing();

    let config = ShopConfig::from_env();
    info!(store = %config.store_name, "Starting shop");

    let shop = Shop::new(config);
    info!(products = shop.catalog().catalog().len(), "Catalog loaded");

    match driver::run(&shop, io::stdin().lock(), io::stdout().lock()) {
        Ok(()) => {
            info!("Input closed, shutting down");
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!(%err, "I/O failure");
            ExitCode::FAILURE
        }
    }
}
