//! # Catalog
//!
//! The products a shopper can put in the cart, grouped by category.
//!
//! The catalog is read-only: views list it, and turn a product plus a
//! quantity into an [`AddItem`] for the cart. Because product names are the
//! cart's keys, a catalog refuses to hold two products with the same name.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::ValidationError;
use crate::types::{AddItem, Cost};
use crate::validation::{validate_product_name, validate_unique_names};

// =============================================================================
// Product
// =============================================================================

/// A plant for sale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Product {
    /// Display name; also the cart key.
    pub name: String,

    /// Image URL.
    pub image: String,

    /// Short blurb shown under the name.
    pub description: String,

    /// Price label as shown on the card.
    pub cost: Cost,
}

impl Product {
    pub fn new(
        name: impl Into<String>,
        image: impl Into<String>,
        description: impl Into<String>,
        cost: impl Into<Cost>,
    ) -> Self {
        Product {
            name: name.into(),
            image: image.into(),
            description: description.into(),
            cost: cost.into(),
        }
    }

    /// Builds the cart request for `quantity` units of this product.
    ///
    /// The description stays behind; the cart has no use for it.
    pub fn to_add_item(&self, quantity: i64) -> AddItem {
        AddItem {
            name: self.name.clone(),
            image: self.image.clone(),
            cost: self.cost.clone(),
            quantity,
        }
    }
}

// =============================================================================
// Category
// =============================================================================

/// A heading in the catalog grid and the plants under it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Category {
    pub name: String,
    pub plants: Vec<Product>,
}

impl Category {
    pub fn new(name: impl Into<String>, plants: Vec<Product>) -> Self {
        Category {
            name: name.into(),
            plants,
        }
    }
}

// =============================================================================
// Catalog
// =============================================================================

/// A validated set of categories.
///
/// ## Invariants
/// - Every product name is non-empty and at most 200 characters
/// - No two products share a name, across all categories
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Catalog {
    categories: Vec<Category>,
}

impl Catalog {
    /// Validates and wraps the given categories.
    pub fn new(categories: Vec<Category>) -> Result<Self, ValidationError> {
        for product in categories.iter().flat_map(|c| &c.plants) {
            validate_product_name(&product.name)?;
        }
        validate_unique_names(
            categories
                .iter()
                .flat_map(|c| &c.plants)
                .map(|p| p.name.as_str()),
        )?;

        Ok(Catalog { categories })
    }

    /// The built-in Paradise Nursery catalog.
    pub fn paradise_nursery() -> Self {
        // Names below are distinct and short, so validation cannot fail.
        Catalog {
            categories: seed_categories(),
        }
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// All products in catalog order.
    pub fn products(&self) -> impl Iterator<Item = &Product> {
        self.categories.iter().flat_map(|c| c.plants.iter())
    }

    /// Looks up a product by exact name.
    pub fn find(&self, name: &str) -> Option<&Product> {
        self.products().find(|p| p.name == name)
    }

    pub fn len(&self) -> usize {
        self.categories.iter().map(|c| c.plants.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn seed_categories() -> Vec<Category> {
    vec![
        Category::new(
            "Air Purifying Plants",
            vec![
                Product::new(
                    "Snake Plant",
                    "https://cdn.pixabay.com/photo/2021/01/22/06/04/snake-plant-5939187_1280.jpg",
                    "Produces oxygen at night, improving air quality.",
                    "$15",
                ),
                Product::new(
                    "Spider Plant",
                    "https://cdn.pixabay.com/photo/2018/07/11/06/47/chlorophytum-3530413_1280.jpg",
                    "Filters formaldehyde and xylene from the air.",
                    "$12",
                ),
                Product::new(
                    "Peace Lily",
                    "https://cdn.pixabay.com/photo/2019/06/12/14/14/peace-lilies-4269365_1280.jpg",
                    "Removes mold spores and purifies the air.",
                    "$18",
                ),
                Product::new(
                    "Boston Fern",
                    "https://cdn.pixabay.com/photo/2020/04/30/19/52/boston-fern-5114414_1280.jpg",
                    "Adds humidity to the air and removes toxins.",
                    "$20",
                ),
                Product::new(
                    "Rubber Plant",
                    "https://cdn.pixabay.com/photo/2020/02/15/11/49/flower-4850729_1280.jpg",
                    "Easy to care for and effective at removing toxins.",
                    "$17",
                ),
                Product::new(
                    "Aloe Vera",
                    "https://cdn.pixabay.com/photo/2018/04/02/07/42/leaf-3283175_1280.jpg",
                    "Purifies the air and has healing properties for skin.",
                    "$14",
                ),
            ],
        ),
        Category::new(
            "Aromatic Fragrant Plants",
            vec![
                Product::new(
                    "Lavender",
                    "https://images.unsplash.com/photo-1611909023032-2d6b3134ecba?q=80&w=1074",
                    "Calming scent, used in aromatherapy.",
                    "$20",
                ),
                Product::new(
                    "Jasmine",
                    "https://images.unsplash.com/photo-1592729645009-b96d1e63d14b?q=80&w=1170",
                    "Sweet fragrance, promotes relaxation.",
                    "$18",
                ),
            ],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;

    #[test]
    fn test_seed_catalog_is_valid() {
        let seeded = Catalog::paradise_nursery();
        let revalidated = Catalog::new(seeded.categories().to_vec()).unwrap();
        assert_eq!(seeded, revalidated);
        assert_eq!(seeded.len(), 8);
        assert_eq!(seeded.categories().len(), 2);
    }

    #[test]
    fn test_every_seed_cost_parses() {
        for product in Catalog::paradise_nursery().products() {
            assert!(product.cost.to_money().is_some(), "{}", product.name);
        }
    }

    #[test]
    fn test_find() {
        let catalog = Catalog::paradise_nursery();
        let lavender = catalog.find("Lavender").unwrap();
        assert_eq!(lavender.cost.to_money(), Some(Money::from_cents(2000)));
        assert!(catalog.find("lavender").is_none());
        assert!(catalog.find("Cactus").is_none());
    }

    #[test]
    fn test_products_in_catalog_order() {
        let catalog = Catalog::paradise_nursery();
        let names: Vec<&str> = catalog.products().map(|p| p.name.as_str()).collect();
        assert_eq!(names.first(), Some(&"Snake Plant"));
        assert_eq!(names.last(), Some(&"Jasmine"));
    }

    #[test]
    fn test_duplicate_across_categories_rejected() {
        let fern = Product::new("Boston Fern", "fern.jpg", "Leafy.", "$20");
        let err = Catalog::new(vec![
            Category::new("Indoor", vec![fern.clone()]),
            Category::new("Outdoor", vec![fern]),
        ])
        .unwrap_err();
        assert!(matches!(err, ValidationError::Duplicate { value, .. } if value == "Boston Fern"));
    }

    #[test]
    fn test_blank_name_rejected() {
        let err = Catalog::new(vec![Category::new(
            "Indoor",
            vec![Product::new(" ", "x.jpg", "", "$1")],
        )])
        .unwrap_err();
        assert!(matches!(err, ValidationError::Required { .. }));
    }

    #[test]
    fn test_to_add_item() {
        let catalog = Catalog::paradise_nursery();
        let item = catalog.find("Jasmine").unwrap().to_add_item(3);
        assert_eq!(item.name, "Jasmine");
        assert_eq!(item.cost.to_string(), "$18");
        assert_eq!(item.quantity, 3);
    }
}
