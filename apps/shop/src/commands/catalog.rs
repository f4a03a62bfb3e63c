//! # Catalog Commands
//!
//! Commands the catalog grid uses to render itself.

use nursery_core::Category;
use serde::Serialize;
use tracing::debug;

use crate::state::{CatalogState, ShopConfig};

/// One product card, with its price formatted for display.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductCard {
    pub name: String,
    pub image: String,
    pub description: String,
    /// Shop-formatted price, or the catalog label if it isn't an amount.
    pub price: String,
}

/// A heading and its cards.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryCards {
    pub name: String,
    pub products: Vec<ProductCard>,
}

/// The whole catalog grid.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogResponse {
    pub categories: Vec<CategoryCards>,
    pub product_count: usize,
}

fn cards(category: &Category, config: &ShopConfig) -> CategoryCards {
    CategoryCards {
        name: category.name.clone(),
        products: category
            .plants
            .iter()
            .map(|p| ProductCard {
                name: p.name.clone(),
                image: p.image.clone(),
                description: p.description.clone(),
                price: p
                    .cost
                    .to_money()
                    .map(|m| config.format_currency(m.cents()))
                    .unwrap_or_else(|| p.cost.to_string()),
            })
            .collect(),
    }
}

/// Gets the catalog grid.
pub fn get_catalog(catalog: &CatalogState, config: &ShopConfig) -> CatalogResponse {
    debug!("get_catalog command");
    let catalog = catalog.catalog();

    CatalogResponse {
        categories: catalog
            .categories()
            .iter()
            .map(|c| cards(c, config))
            .collect(),
        product_count: catalog.len(),
    }
}
