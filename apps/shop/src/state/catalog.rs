//! # Catalog State
//!
//! The read-only product catalog the views browse.

use nursery_core::{Catalog, CoreError, CoreResult, Product};

/// Shop-held catalog.
#[derive(Debug, Clone)]
pub struct CatalogState {
    catalog: Catalog,
}

impl CatalogState {
    pub fn new(catalog: Catalog) -> Self {
        CatalogState { catalog }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Looks up a product by name.
    pub fn get(&self, name: &str) -> CoreResult<&Product> {
        self.catalog
            .find(name)
            .ok_or_else(|| CoreError::ProductNotFound(name.to_string()))
    }
}

impl Default for CatalogState {
    fn default() -> Self {
        CatalogState::new(Catalog::paradise_nursery())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get() {
        let state = CatalogState::default();
        assert_eq!(state.get("Spider Plant").unwrap().cost.to_string(), "$12");
        assert!(matches!(
            state.get("Venus Flytrap"),
            Err(CoreError::ProductNotFound(name)) if name == "Venus Flytrap"
        ));
    }
}
