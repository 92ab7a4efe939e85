//! # Validation Module
//!
//! Input validation utilities for takeaway-core.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Host application                                              │
//! │  ├── Basic format checks (empty input, length)                          │
//! │  └── Immediate customer feedback                                        │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                   │
//! │  ├── Quantity and dish-name rules before the basket mutates             │
//! │  └── Menu document rules after deserialization                          │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Menu provider                                                 │
//! │  └── has_dish() is the final authority on what can be ordered           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::{ValidationError, ValidationResult};
use crate::money::Money;
use crate::MAX_DISH_NAME_LEN;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a dish name.
///
/// ## Rules
/// - Must not be empty (after trimming)
/// - Must be at most 100 characters
///
/// Whether the name denotes a real dish is the menu provider's call, not
/// this function's.
///
/// ## Example
/// ```rust
/// use takeaway_core::validation::validate_dish_name;
///
/// assert!(validate_dish_name("chicken korma").is_ok());
/// assert!(validate_dish_name("").is_err());
/// ```
pub fn validate_dish_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "dish name".to_string(),
        });
    }

    if name.len() > MAX_DISH_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: "dish name".to_string(),
            max: MAX_DISH_NAME_LEN,
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates an order quantity.
///
/// ## Rules
/// - Must be positive (>= 1)
///
/// ## User Workflow
/// ```text
/// take_order("korma", Some(0))
///      │
///      ▼
/// validate_quantity(0) ← THIS FUNCTION
///      │
///      └── qty <= 0? → Error: "quantity must be positive"
/// ```
pub fn validate_quantity(qty: i64) -> ValidationResult<()> {
    if qty <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    Ok(())
}

/// Validates a unit price.
///
/// ## Rules
/// - Must be non-negative (zero is allowed: free poppadoms exist)
///
/// ## Example
/// ```rust
/// use takeaway_core::money::Money;
/// use takeaway_core::validation::validate_price;
///
/// assert!(validate_price(Money::from_pence(350)).is_ok());
/// assert!(validate_price(Money::zero()).is_ok());
/// assert!(validate_price(Money::from_pence(-100)).is_err());
/// ```
pub fn validate_price(price: Money) -> ValidationResult<()> {
    if price.is_negative() {
        return Err(ValidationError::MustBeNonNegative {
            field: "price".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
