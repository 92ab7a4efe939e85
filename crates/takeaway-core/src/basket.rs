//! # Basket
//!
//! The running basket for one customer session.
//!
//! ## Basket Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Basket Operations                                    │
//! │                                                                         │
//! │  Customer Action          Service Call            Basket Change         │
//! │  ───────────────          ────────────            ─────────────         │
//! │                                                                         │
//! │  Order a dish ───────────► take_order() ────────► lines.push(line)     │
//! │                                                                         │
//! │  Review the basket ──────► print_basket() ──────► (read only)          │
//! │                                                                         │
//! │  Confirm the total ──────► checkout() ──────────► (read only)          │
//! │                                                                         │
//! │  NOTE: append is the ONLY mutation. The basket is the raw order        │
//! │        history: ordering the same dish twice produces two separate     │
//! │        lines, in the order they were placed.                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::money::Money;

/// One placed order line.
///
/// ## Design Notes
/// - `unit_price`: Frozen copy of the menu price at the time of ordering.
///   The line stays consistent even if the menu provider reprices the dish
///   mid-session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderLine {
    /// Dish name as the menu provider knows it.
    pub dish: String,

    /// Unit price at time of ordering (frozen).
    pub unit_price: Money,

    /// Number of units ordered. Always >= 1.
    pub quantity: i64,

    /// When this line was placed.
    pub placed_at: DateTime<Utc>,
}

impl OrderLine {
    /// Creates a new order line, freezing the unit price now.
    pub fn new(dish: impl Into<String>, unit_price: Money, quantity: i64) -> Self {
        OrderLine {
            dish: dish.into(),
            unit_price,
            quantity,
            placed_at: Utc::now(),
        }
    }

    /// Calculates the line total (unit price × quantity).
    pub fn line_total(&self) -> Money {
        self.unit_price.multiply_quantity(self.quantity)
    }
}

/// Renders the line the way the basket summary shows it:
/// `korai x 1 (£3.50)`.
impl fmt::Display for OrderLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} x {} ({})", self.dish, self.quantity, self.line_total())
    }
}

/// The customer's basket: an append-only sequence of order lines.
///
/// ## Invariants
/// - Lines keep insertion order (the order the customer placed them)
/// - No deduplication: repeated dishes are separate lines
/// - Every line's quantity is >= 1 and its price came off the menu;
///   both are enforced by the service before a line gets in here
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Basket {
    lines: Vec<OrderLine>,
}

impl Basket {
    /// Creates a new empty basket.
    pub fn new() -> Self {
        Basket { lines: Vec::new() }
    }

    /// Appends a line to the basket.
    pub fn place(&mut self, line: OrderLine) {
        self.lines.push(line);
    }

    /// The placed lines, oldest first.
    pub fn lines(&self) -> &[OrderLine] {
        &self.lines
    }

    /// Checks if the basket is empty.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Returns the number of lines in the basket.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Returns the total quantity of units across all lines.
    pub fn total_quantity(&self) -> i64 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    /// Calculates the grand total: the exact sum of all line totals.
    ///
    /// Accumulation happens in integer pence, so the result is exact;
    /// rounding concerns exist only at display time.
    pub fn total(&self) -> Money {
        Money::from_pence(self.lines.iter().map(|l| l.line_total().pence()).sum())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
