//! # Menu Module
//!
//! The menu contract consumed by the ordering service, plus a concrete
//! in-memory implementation.
//!
//! ## The Seam
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Menu Provider Seam                               │
//! │                                                                         │
//! │   Takeaway service ───────► trait MenuProvider                          │
//! │                                  │ list()      dish name → unit price   │
//! │                                  │ has_dish()  validity check           │
//! │                                  │                                      │
//! │                    ┌─────────────┼──────────────┐                       │
//! │                    ▼             ▼              ▼                       │
//! │                  Menu       test stubs     host-provided source         │
//! │              (this file)   (unit tests)    (DB, API, spreadsheet…)      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Where the dish data ultimately comes from is a host concern; this crate
//! only needs the two operations above.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{ValidationError, ValidationResult};
use crate::money::Money;
use crate::validation::{validate_dish_name, validate_price};

// =============================================================================
// Menu Provider Contract
// =============================================================================

/// Source of dish data for the ordering service.
///
/// Injected at construction time so hosts and tests can substitute their
/// own implementations.
pub trait MenuProvider {
    /// Returns the full dish-name → unit-price mapping as a read-only
    /// snapshot.
    fn list(&self) -> BTreeMap<String, Money>;

    /// Checks whether `name` denotes a dish this menu recognizes.
    fn has_dish(&self, name: &str) -> bool;
}

/// A borrowed provider is a provider, so one menu can serve many
/// concurrent customer sessions without being cloned into each.
impl<M: MenuProvider + ?Sized> MenuProvider for &M {
    fn list(&self) -> BTreeMap<String, Money> {
        (**self).list()
    }

    fn has_dish(&self, name: &str) -> bool {
        (**self).has_dish(name)
    }
}

// =============================================================================
// Concrete Menu
// =============================================================================

/// An in-memory menu.
///
/// Serializes as a plain `{ "dish": pence }` object, so a host can keep its
/// menu in a JSON document:
///
/// ```rust
/// use takeaway_core::menu::{Menu, MenuProvider};
///
/// let menu = Menu::from_json(r#"{ "korma": 300, "vindaloo": 400 }"#).unwrap();
/// assert!(menu.has_dish("korma"));
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Menu {
    entries: BTreeMap<String, Money>,
}

impl Menu {
    /// Creates an empty menu.
    pub fn new() -> Self {
        Menu {
            entries: BTreeMap::new(),
        }
    }

    /// Builds a menu from `(name, price)` pairs.
    ///
    /// ## Example
    /// ```rust
    /// use takeaway_core::menu::Menu;
    /// use takeaway_core::money::Money;
    ///
    /// let menu = Menu::from_entries([
    ///     ("korma", Money::from_pence(300)),
    ///     ("korai", Money::from_pence(350)),
    /// ]);
    /// assert_eq!(menu.len(), 2);
    /// ```
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, Money)>,
        S: Into<String>,
    {
        Menu {
            entries: entries
                .into_iter()
                .map(|(name, price)| (name.into(), price))
                .collect(),
        }
    }

    /// Parses a menu from a JSON object of `{ "dish name": pence }`.
    ///
    /// The document is validated after parsing: dish names must be
    /// non-empty and prices non-negative.
    pub fn from_json(json: &str) -> ValidationResult<Self> {
        let menu: Menu = serde_json::from_str(json).map_err(|e| ValidationError::InvalidFormat {
            field: "menu".to_string(),
            reason: e.to_string(),
        })?;
        menu.validate()?;
        Ok(menu)
    }

    /// Validates every entry against the menu rules.
    pub fn validate(&self) -> ValidationResult<()> {
        for (name, price) in &self.entries {
            validate_dish_name(name)?;
            validate_price(*price)?;
        }
        Ok(())
    }

    /// Number of dishes on the menu.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Checks if the menu has no dishes.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl MenuProvider for Menu {
    fn list(&self) -> BTreeMap<String, Money> {
        self.entries.clone()
    }

    fn has_dish(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
