//! # Error Types
//!
//! Domain-specific error types for nursery-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  nursery-core errors (this file)                                       │
//! │  ├── CoreError        - Pricing and lookup failures                    │
//! │  └── ValidationError  - Catalog input validation failures              │
//! │                                                                         │
//! │  nursery-shop errors (app)                                             │
//! │  └── ApiError         - What the views see (serialized)                │
//! │                                                                         │
//! │  Flow: CoreError → ApiError → View                                     │
//! │        ValidationError → Catalog::new caller                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Cart transitions never produce any of these: `add`, `remove`,
//! `update_quantity` and `clear` are defined for every input. Errors only
//! appear around the cart, when a cost has to be read as money or when a
//! catalog is assembled.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A line's cost could not be read as an amount of money.
    ///
    /// ## When This Occurs
    /// - The catalog supplied a label like `"call for price"`
    /// - The label has more than two fractional digits (`"$1.999"`)
    #[error("Cost {cost:?} of {name} is not a valid amount")]
    InvalidCost { name: String, cost: String },

    /// Multiplying a unit cost by its quantity, or summing lines, overflowed.
    #[error("Amount for {name} is too large")]
    AmountOverflow { name: String },

    /// Product cannot be found in the catalog.
    #[error("Product not found: {0}")]
    ProductNotFound(String),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors raised while building a catalog.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Duplicate value (e.g., two products with the same name).
    #[error("{field} '{value}' already exists")]
    Duplicate { field: String, value: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;
