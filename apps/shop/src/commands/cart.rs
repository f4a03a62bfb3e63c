//! # Cart Commands
//!
//! Commands for cart manipulation.
//!
//! ## Cart Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Lifecycle                                       │
//! │                                                                         │
//! │  ┌──────────┐     ┌──────────┐     ┌──────────┐                        │
//! │  │  Empty   │────►│ In Cart  │────►│ Checkout │                        │
//! │  │  Cart    │     │          │     │          │                        │
//! │  └──────────┘     └──────────┘     └────┬─────┘                        │
//! │       ▲                │                │                               │
//! │       │           add_to_cart           │                               │
//! │       │           update_cart_item      │                               │
//! │       │           remove_from_cart      │                               │
//! │       │                │                │                               │
//! │       │                ▼                ▼                               │
//! │       └──────────── clear_cart ◄──── (receipt returned)                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Only `add_to_cart` can fail, and only because the product name is not in
//! the catalog. Every other command always returns the updated cart.

use nursery_core::{AddItem, CartAction};
use serde::Serialize;
use tracing::{debug, info};

use crate::error::ApiError;
use crate::state::{CartResponse, CartStore, CatalogState};

/// Result of a checkout: what was bought, and the fresh empty cart.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutResponse {
    pub receipt: CartResponse,
    pub cart: CartResponse,
}

/// Gets the current cart contents.
///
/// ## User Workflow
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  Cart Page                                                              │
/// │                                                                         │
/// │  ┌────────────────────────────────────────────────────────────────┐    │
/// │  │  Snake Plant          $15      [ − ] 2 [ + ]     $30.00  [🗑]  │    │
/// │  │  Lavender             $20      [ − ] 1 [ + ]     $20.00  [🗑]  │    │
/// │  ├────────────────────────────────────────────────────────────────┤    │
/// │  │  Total: $50.00                                  3 plants       │    │
/// │  └────────────────────────────────────────────────────────────────┘    │
/// │                                                                         │
/// │  get_cart → { items: [...], totals: {...}, openedAt }                   │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn get_cart(cart: &CartStore) -> CartResponse {
    debug!("get_cart command");
    cart.snapshot()
}

/// Adds a catalog product to the cart.
///
/// ## Behavior
/// - If product already in cart: quantity increases
/// - If product not in cart: added with the catalog's image and cost
/// - `quantity` defaults to 1; zero or negative adds nothing
///
/// ## Arguments
/// * `product_name` - Catalog name of the plant
/// * `quantity` - Units to add (default: 1)
pub fn add_to_cart(
    catalog: &CatalogState,
    cart: &CartStore,
    product_name: &str,
    quantity: Option<i64>,
) -> Result<CartResponse, ApiError> {
    let quantity = quantity.unwrap_or(1);
    debug!(product = %product_name, quantity = %quantity, "add_to_cart command");

    let product = catalog.get(product_name)?;
    Ok(cart.dispatch(&CartAction::add(product.to_add_item(quantity))))
}

/// Adds a caller-built line item, bypassing the catalog lookup.
///
/// For views that bring their own product data.
pub fn add_line_item(cart: &CartStore, item: AddItem) -> CartResponse {
    debug!(product = %item.name, quantity = %item.quantity, "add_line_item command");
    cart.dispatch(&CartAction::add(item))
}

/// Sets the quantity of a line in the cart.
///
/// ## Behavior
/// - Quantity 0 or below: removes the line
/// - Product not in cart: cart unchanged
pub fn update_cart_item(cart: &CartStore, product_name: &str, quantity: i64) -> CartResponse {
    debug!(product = %product_name, quantity = %quantity, "update_cart_item command");
    cart.dispatch(&CartAction::update_quantity(product_name, quantity))
}

/// Removes a line from the cart. Unknown names leave the cart unchanged.
pub fn remove_from_cart(cart: &CartStore, product_name: &str) -> CartResponse {
    debug!(product = %product_name, "remove_from_cart command");
    cart.dispatch(&CartAction::remove(product_name))
}

/// Clears all items from the cart.
pub fn clear_cart(cart: &CartStore) -> CartResponse {
    debug!("clear_cart command");
    cart.dispatch(&CartAction::clear())
}

/// Completes the trip: returns the cart as it was and empties it.
pub fn checkout(cart: &CartStore) -> CheckoutResponse {
    let (receipt, emptied) = cart.take();
    info!(
        lines = receipt.totals.item_count,
        quantity = receipt.totals.total_quantity,
        subtotal_cents = ?receipt.totals.subtotal_cents,
        "checkout completed"
    );

    CheckoutResponse {
        receipt,
        cart: emptied,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    fn setup() -> (CatalogState, CartStore) {
        (CatalogState::default(), CartStore::new())
    }

    #[test]
    fn test_add_to_cart_uses_catalog_data() {
        let (catalog, cart) = setup();
        let response = add_to_cart(&catalog, &cart, "Peace Lily", Some(2)).unwrap();

        let line = &response.items[0];
        assert_eq!(line.name, "Peace Lily");
        assert_eq!(line.cost.to_string(), "$18");
        assert!(line.image.contains("peace-lilies"));
        assert_eq!(response.totals.subtotal_cents, Some(3600));
    }

    #[test]
    fn test_add_to_cart_defaults_to_one() {
        let (catalog, cart) = setup();
        add_to_cart(&catalog, &cart, "Jasmine", None).unwrap();
        let response = add_to_cart(&catalog, &cart, "Jasmine", None).unwrap();
        assert_eq!(response.totals.total_quantity, 2);
    }

    #[test]
    fn test_add_unknown_product() {
        let (catalog, cart) = setup();
        let err = add_to_cart(&catalog, &cart, "Cactus", Some(1)).unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
        assert!(get_cart(&cart).items.is_empty());
    }

    #[test]
    fn test_cart_page_flow() {
        let (catalog, cart) = setup();
        add_to_cart(&catalog, &cart, "Snake Plant", Some(2)).unwrap();
        add_to_cart(&catalog, &cart, "Lavender", Some(1)).unwrap();
        add_to_cart(&catalog, &cart, "Aloe Vera", Some(1)).unwrap();

        let response = update_cart_item(&cart, "Snake Plant", 3);
        assert_eq!(response.totals.total_quantity, 5);

        let response = update_cart_item(&cart, "Lavender", 0);
        let names: Vec<&str> = response.items.iter().map(|l| l.name.as_str()).collect();
        assert_eq!(names, ["Snake Plant", "Aloe Vera"]);

        let response = remove_from_cart(&cart, "Lavender");
        assert_eq!(response.totals.item_count, 2);

        let response = update_cart_item(&cart, "Spider Plant", 4);
        assert_eq!(response.totals.item_count, 2);
        assert_eq!(response.totals.subtotal_cents, Some(3 * 1500 + 1400));
    }

    #[test]
    fn test_add_line_item_first_seen_cost_wins() {
        let (catalog, cart) = setup();
        add_to_cart(&catalog, &cart, "Boston Fern", Some(1)).unwrap();
        let response = add_line_item(&cart, AddItem::new("Boston Fern", "other.jpg", "$1", 1));

        assert_eq!(response.items[0].cost.to_string(), "$20");
        assert_eq!(response.totals.subtotal_cents, Some(4000));
    }

    #[test]
    fn test_checkout_returns_receipt_and_empties_cart() {
        let (catalog, cart) = setup();
        add_to_cart(&catalog, &cart, "Rubber Plant", Some(2)).unwrap();

        let response = checkout(&cart);
        assert_eq!(response.receipt.totals.total_quantity, 2);
        assert_eq!(response.receipt.totals.subtotal_cents, Some(3400));
        assert!(response.cart.items.is_empty());
        assert_eq!(get_cart(&cart).totals.total_quantity, 0);
    }

    #[test]
    fn test_clear_cart() {
        let (catalog, cart) = setup();
        add_to_cart(&catalog, &cart, "Spider Plant", Some(5)).unwrap();
        let response = clear_cart(&cart);
        assert_eq!(response.totals.item_count, 0);
        assert_eq!(response.totals.subtotal_cents, Some(0));
    }
}
