//! # Error Types
//!
//! Domain-specific error types for takeaway-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  takeaway-core errors (this file)                                       │
//! │  ├── OrderError       - Business-rule violations                       │
//! │  │     ├── UnknownDish    - dish not on the menu                       │
//! │  │     └── TotalMismatch  - checkout total disagreement                │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  Flow: ValidationError → OrderError → host application → customer      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error values (dish name, both totals)
//! 3. Errors are enum variants, never String
//! 4. Both kinds are ordinary expected business outcomes, not system
//!    failures - callers match on them and let the customer retry

use thiserror::Error;

use crate::money::Money;

// =============================================================================
// Order Error
// =============================================================================

/// Ordering business-rule errors.
///
/// Raised synchronously to the immediate caller. Neither variant leaves the
/// basket modified, so the customer can always inspect and retry.
#[derive(Debug, Error)]
pub enum OrderError {
    /// The requested dish is not recognized by the menu provider.
    ///
    /// ## When This Occurs
    /// - Dish name misspelled by the customer
    /// - Dish removed from the menu between viewing and ordering
    #[error("Unknown dish: {0}")]
    UnknownDish(String),

    /// The customer's expected total does not equal the computed basket
    /// total, so the order is blocked before any notification goes out.
    ///
    /// ## User Workflow
    /// ```text
    /// checkout(£5.00)
    ///      │
    ///      ▼
    /// basket total = £15.00 → mismatch
    ///      │
    ///      ▼
    /// TotalMismatch { expected: £5.00, actual: £15.00 }
    ///      │
    ///      ▼
    /// Customer corrects the figure and retries; basket unchanged
    /// ```
    ///
    /// The display text is the fixed customer-facing message; the two
    /// totals ride along for hosts that want to show the difference.
    #[error("Halting Order: Unexpected Total")]
    TotalMismatch {
        /// What the customer said the total should be.
        expected: Money,
        /// What the basket actually sums to.
        actual: Money,
    },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when input doesn't meet requirements.
/// Used for early validation before business logic runs.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Value must not be negative.
    #[error("{field} must not be negative")]
    MustBeNonNegative { field: String },

    /// Invalid format (e.g., malformed menu document).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Convenience type alias for Results with OrderError.
pub type OrderResult<T> = Result<T, OrderError>;

/// Convenience type alias for Results with ValidationError.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Unit Tests
// =============================================================================
