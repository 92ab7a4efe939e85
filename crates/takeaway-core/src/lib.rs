//! # takeaway-core: Pure Ordering Logic for Takeaway
//!
//! This crate is the **heart** of Takeaway. It models one customer's
//! food-ordering session as pure logic with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Takeaway Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  Host application (CLI, bot, web…)              │   │
//! │  │     view menu ──► place orders ──► review ──► confirm total    │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ takeaway-core (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   money   │  │  basket   │  │ takeaway  │  │ validation│  │   │
//! │  │   │   Money   │  │ OrderLine │  │  service  │  │   rules   │  │   │
//! │  │   │  (pence)  │  │  Basket   │  │ checkout  │  │   checks  │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └───────────┬─────────────────────────────────┬───────────────────┘   │
//! │              │ trait MenuProvider              │ trait Notifier        │
//! │  ┌───────────▼───────────┐         ┌───────────▼───────────┐           │
//! │  │   dish data source    │         │   messaging channel   │           │
//! │  │  (host supplied)      │         │  (host supplied)      │           │
//! │  └───────────────────────┘         └───────────────────────┘           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`takeaway`] - The ordering service (menu, take_order, print_basket, checkout)
//! - [`basket`] - Order lines and the per-session basket
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`menu`] - Menu provider contract and an in-memory menu
//! - [`notify`] - Notification contract for order confirmations
//! - [`error`] - Domain error types
//! - [`validation`] - Input validation rules
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every operation is synchronous and deterministic
//! 2. **No I/O**: Database, network, file system access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are in pence (i64) so checkout's
//!    exact-equality comparison can never suffer float drift
//! 4. **Injected Collaborators**: Menu source and messaging channel arrive
//!    as traits through the constructor, never hardcoded
//!
//! ## Example Usage
//!
//! ```rust
//! use takeaway_core::{LogNotifier, Menu, Money, Takeaway};
//!
//! let menu = Menu::from_entries([
//!     ("korma", Money::from_pence(300)),
//!     ("vindaloo", Money::from_pence(400)),
//!     ("korai", Money::from_pence(350)),
//! ]);
//!
//! let mut takeaway = Takeaway::new(menu, LogNotifier);
//! takeaway.take_order("korai", None)?;        // quantity defaults to 1
//! takeaway.take_order("vindaloo", Some(2))?;
//!
//! assert_eq!(
//!     takeaway.print_basket(),
//!     "korai x 1 (£3.50), vindaloo x 2 (£8.00)\nThe total is £11.50"
//! );
//!
//! takeaway.checkout(Money::from_pounds_pence(11, 50))?;
//! # Ok::<(), takeaway_core::OrderError>(())
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod basket;
pub mod error;
pub mod menu;
pub mod money;
pub mod notify;
pub mod takeaway;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use takeaway_core::Money` instead of
// `use takeaway_core::money::Money`

pub use basket::{Basket, OrderLine};
pub use error::{OrderError, OrderResult, ValidationError, ValidationResult};
pub use menu::{Menu, MenuProvider};
pub use money::Money;
pub use notify::{LogNotifier, Notifier};
pub use takeaway::Takeaway;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Currency symbol used everywhere money is rendered.
///
/// ## Why a constant?
/// The system runs in a single fixed currency; localization is explicitly
/// out of scope. Centralizing the symbol keeps the summary, the errors and
/// any host display consistent.
pub const CURRENCY_SYMBOL: &str = "£";

/// Quantity used when a caller orders a dish without stating one.
pub const DEFAULT_QUANTITY: i64 = 1;

/// Minutes between a confirmed checkout and the promised delivery time
/// quoted in the confirmation message.
pub const DELIVERY_LEAD_MINUTES: i64 = 60;

/// Upper bound on dish-name length accepted at the ordering boundary.
///
/// ## Business Reason
/// Catches hosts wiring entire order descriptions into the name field;
/// no real menu needs more.
pub const MAX_DISH_NAME_LEN: usize = 100;
