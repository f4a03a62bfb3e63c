//! # Config Commands
//!
//! Commands for retrieving shop configuration.

use tracing::debug;

use crate::state::ShopConfig;

/// Gets the current shop configuration.
///
/// ## When Used
/// - Startup (navbar heading and tagline)
/// - Currency formatting in the views
pub fn get_config(config: &ShopConfig) -> ShopConfig {
    debug!("get_config command");
    config.clone()
}
