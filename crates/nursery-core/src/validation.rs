//! # Validation Module
//!
//! Checks applied when a catalog is assembled.
//!
//! ## Where Validation Happens
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Catalog::new(categories)                                              │
//! │  ├── validate_product_name  (each product)                             │
//! │  └── validate_unique_names  (whole catalog, names are cart keys)       │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  CartState::add / remove / update_quantity / clear                     │
//! │  └── NO validation: every input is normalized, never rejected          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use nursery_core::validation::{validate_product_name, validate_unique_names};
//!
//! validate_product_name("Snake Plant").unwrap();
//! assert!(validate_unique_names(["Jasmine", "Lavender", "Jasmine"]).is_err());
//! ```

use std::collections::HashSet;

use crate::error::ValidationError;
use crate::MAX_PRODUCT_NAME_LEN;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Validates a product name.
///
/// ## Rules
/// - Must not be empty (after trimming)
/// - Must be at most 200 characters
pub fn validate_product_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.chars().count() > MAX_PRODUCT_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: MAX_PRODUCT_NAME_LEN,
        });
    }

    Ok(())
}

/// Ensures no name appears twice. Reports the first repeat.
pub fn validate_unique_names<'a, I>(names: I) -> ValidationResult<()>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut seen = HashSet::new();
    for name in names {
        if !seen.insert(name) {
            return Err(ValidationError::Duplicate {
                field: "name".to_string(),
                value: name.to_string(),
            });
        }
    }
    Ok(())
}
