//! # Ordering Service
//!
//! The `Takeaway` service ties the menu, the basket and the messaging
//! channel into one customer session.
//!
//! ## Session Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Takeaway Session Lifecycle                           │
//! │                                                                         │
//! │  ┌──────────┐     ┌──────────┐     ┌──────────┐     ┌──────────┐       │
//! │  │  Empty   │────►│ Ordering │────►│  Review  │────►│ Confirmed│       │
//! │  │  Basket  │     │          │     │          │     │   Order  │       │
//! │  └──────────┘     └──────────┘     └──────────┘     └──────────┘       │
//! │                        │                 │                │             │
//! │                   take_order        print_basket     checkout(total)   │
//! │                   (appends)         (read only)      (exact match →    │
//! │                                                       notification)    │
//! │                                                                         │
//! │  A blocked checkout leaves the basket intact; the customer corrects    │
//! │  the total and retries. Nothing here ever clears the basket.           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Concurrency
//! One customer session per instance: all operations are synchronous and
//! the basket is not shared, so there is no locking. A host serving many
//! customers creates one `Takeaway` per session.

use std::collections::BTreeMap;

use chrono::{Duration, Utc};
use tracing::{debug, info, warn};

use crate::basket::{Basket, OrderLine};
use crate::error::{OrderError, OrderResult};
use crate::menu::MenuProvider;
use crate::money::Money;
use crate::notify::Notifier;
use crate::validation::validate_quantity;
use crate::{DEFAULT_QUANTITY, DELIVERY_LEAD_MINUTES};

/// The ordering service for one customer session.
///
/// Both collaborators are injected at construction time and consumed
/// through their traits, so hosts and tests can substitute their own
/// menu sources and messaging channels.
#[derive(Debug)]
pub struct Takeaway<M, N> {
    menu: M,
    notifier: N,
    basket: Basket,
}

impl<M: MenuProvider, N: Notifier> Takeaway<M, N> {
    /// Creates a service with an empty basket.
    pub fn new(menu: M, notifier: N) -> Self {
        Takeaway {
            menu,
            notifier,
            basket: Basket::new(),
        }
    }

    /// Returns the menu listing, exactly as the provider reports it.
    pub fn menu(&self) -> BTreeMap<String, Money> {
        debug!("menu requested");
        self.menu.list()
    }

    /// Read access to the basket for hosts rendering their own views.
    pub fn basket(&self) -> &Basket {
        &self.basket
    }

    /// Places an order for `quantity` units of `dish`.
    ///
    /// ## Behavior
    /// - `quantity: None` defaults to 1, so callers may state just the dish
    /// - The dish must be recognized by the menu provider, otherwise
    ///   [`OrderError::UnknownDish`] and the basket stays untouched
    /// - The unit price is frozen into the new line at this moment
    /// - Repeated dishes append separate lines; the basket records order
    ///   history, not a consolidated per-dish view
    ///
    /// ## Example
    /// ```rust
    /// use takeaway_core::{LogNotifier, Menu, Money, Takeaway};
    ///
    /// let menu = Menu::from_entries([("korma", Money::from_pence(300))]);
    /// let mut takeaway = Takeaway::new(menu, LogNotifier);
    ///
    /// takeaway.take_order("korma", None)?;      // quantity defaults to 1
    /// takeaway.take_order("korma", Some(2))?;   // a second, separate line
    /// assert_eq!(takeaway.basket().line_count(), 2);
    /// # Ok::<(), takeaway_core::OrderError>(())
    /// ```
    pub fn take_order(&mut self, dish: &str, quantity: Option<i64>) -> OrderResult<()> {
        let quantity = quantity.unwrap_or(DEFAULT_QUANTITY);
        debug!(dish = %dish, quantity = %quantity, "take_order");

        validate_quantity(quantity)?;

        if !self.menu.has_dish(dish) {
            return Err(OrderError::UnknownDish(dish.to_string()));
        }

        // A provider that recognizes the dish but prices nothing under
        // that name counts as unknown too; no failure path inserts a line.
        let unit_price = self
            .menu
            .list()
            .get(dish)
            .copied()
            .ok_or_else(|| OrderError::UnknownDish(dish.to_string()))?;

        self.basket.place(OrderLine::new(dish, unit_price, quantity));
        Ok(())
    }

    /// Renders the basket summary.
    ///
    /// One fragment per line in insertion order, joined with `", "`, then a
    /// line break and the grand total:
    ///
    /// ```text
    /// korai x 1 (£3.50), korma x 1 (£3.00), vindaloo x 2 (£8.00)
    /// The total is £14.50
    /// ```
    ///
    /// An empty basket renders an empty line list straight into
    /// `"\nThe total is £0.00"`.
    pub fn print_basket(&self) -> String {
        debug!(lines = self.basket.line_count(), "print_basket");

        let lines: Vec<String> = self.basket.lines().iter().map(|l| l.to_string()).collect();
        format!("{}\nThe total is {}", lines.join(", "), self.basket.total())
    }

    /// Confirms the order if `expected_total` matches the basket total
    /// exactly.
    ///
    /// ## Behavior
    /// - Comparison is against the exact fixed-point sum, never a
    ///   display-rounded value
    /// - On a match: one confirmation message goes out through the
    ///   notifier and the call returns `Ok(())`
    /// - On a mismatch: [`OrderError::TotalMismatch`], no message, basket
    ///   intact for inspection and retry
    pub fn checkout(&self, expected_total: Money) -> OrderResult<()> {
        let actual = self.basket.total();
        debug!(expected = %expected_total, actual = %actual, "checkout");

        if expected_total != actual {
            warn!(
                expected = %expected_total,
                actual = %actual,
                "checkout blocked: totals disagree"
            );
            return Err(OrderError::TotalMismatch {
                expected: expected_total,
                actual,
            });
        }

        let eta = Utc::now() + Duration::minutes(DELIVERY_LEAD_MINUTES);
        let body = format!(
            "Thank you! Your order was placed and will be delivered before {}",
            eta.format("%H:%M")
        );
        self.notifier.create_message(&body);

        info!(total = %actual, lines = self.basket.line_count(), "order confirmed");
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;
    use crate::menu::Menu;
    use std::cell::RefCell;

    /// Records every message instead of sending it anywhere.
    #[derive(Debug, Default)]
    struct RecordingNotifier {
        sent: RefCell<Vec<String>>,
    }

    impl Notifier for RecordingNotifier {
        fn create_message(&self, body: &str) {
            self.sent.borrow_mut().push(body.to_string());
        }
    }

    /// A provider that recognizes every dish but prices none of them.
    struct YesManMenu;

    impl MenuProvider for YesManMenu {
        fn list(&self) -> BTreeMap<String, Money> {
            BTreeMap::new()
        }

        fn has_dish(&self, _name: &str) -> bool {
            true
        }
    }

    fn curry_menu() -> Menu {
        Menu::from_entries([
            ("korma", Money::from_pence(300)),
            ("vindaloo", Money::from_pence(400)),
            ("korai", Money::from_pence(350)),
        ])
    }

    #[test]
    fn test_menu_passes_through_provider_listing() {
        let takeaway = Takeaway::new(curry_menu(), RecordingNotifier::default());
        let listing = takeaway.menu();

        assert_eq!(listing.len(), 3);
        assert_eq!(listing["korma"], Money::from_pence(300));
        assert_eq!(listing["korai"], Money::from_pence(350));
    }

    #[test]
    fn test_take_order_defaults_quantity_to_one() {
        let mut takeaway = Takeaway::new(curry_menu(), RecordingNotifier::default());

        takeaway.take_order("korma", None).unwrap();

        assert_eq!(takeaway.basket().line_count(), 1);
        assert_eq!(takeaway.basket().lines()[0].quantity, 1);
    }

    #[test]
    fn test_take_order_unknown_dish_leaves_basket_untouched() {
        let mut takeaway = Takeaway::new(curry_menu(), RecordingNotifier::default());

        let err = takeaway.take_order("pizza", None).unwrap_err();

        assert!(matches!(err, OrderError::UnknownDish(ref dish) if dish == "pizza"));
        assert!(takeaway.basket().is_empty());
    }

    #[test]
    fn test_take_order_rejects_non_positive_quantity() {
        let mut takeaway = Takeaway::new(curry_menu(), RecordingNotifier::default());

        let err = takeaway.take_order("korma", Some(0)).unwrap_err();

        assert!(matches!(
            err,
            OrderError::Validation(ValidationError::MustBePositive { .. })
        ));
        assert!(takeaway.basket().is_empty());
    }

    #[test]
    fn test_take_order_unpriced_dish_counts_as_unknown() {
        let mut takeaway = Takeaway::new(YesManMenu, RecordingNotifier::default());

        let err = takeaway.take_order("korma", None).unwrap_err();

        assert!(matches!(err, OrderError::UnknownDish(_)));
        assert!(takeaway.basket().is_empty());
    }

    #[test]
    fn test_print_basket_matches_expected_summary() {
        let mut takeaway = Takeaway::new(curry_menu(), RecordingNotifier::default());

        takeaway.take_order("korai", Some(1)).unwrap();
        takeaway.take_order("korma", Some(1)).unwrap();
        takeaway.take_order("vindaloo", Some(2)).unwrap();

        assert_eq!(
            takeaway.print_basket(),
            "korai x 1 (£3.50), korma x 1 (£3.00), vindaloo x 2 (£8.00)\nThe total is £14.50"
        );
    }

    #[test]
    fn test_print_basket_empty() {
        let takeaway = Takeaway::new(curry_menu(), RecordingNotifier::default());
        assert_eq!(takeaway.print_basket(), "\nThe total is £0.00");
    }

    #[test]
    fn test_print_basket_keeps_insertion_order_not_name_order() {
        let mut takeaway = Takeaway::new(curry_menu(), RecordingNotifier::default());

        takeaway.take_order("vindaloo", Some(1)).unwrap();
        takeaway.take_order("korai", Some(1)).unwrap();

        assert_eq!(
            takeaway.print_basket(),
            "vindaloo x 1 (£4.00), korai x 1 (£3.50)\nThe total is £7.50"
        );
    }

    #[test]
    fn test_checkout_succeeds_on_exact_total_and_notifies_once() {
        let notifier = RecordingNotifier::default();
        let mut takeaway = Takeaway::new(curry_menu(), &notifier);

        takeaway.take_order("vindaloo", Some(2)).unwrap();
        takeaway.take_order("korma", None).unwrap();
        takeaway.take_order("vindaloo", Some(1)).unwrap();

        // 4*2 + 3 + 4 = 15
        takeaway.checkout(Money::from_pounds_pence(15, 0)).unwrap();

        let sent = notifier.sent.borrow();
        assert_eq!(sent.len(), 1);
        assert!(
            sent[0].starts_with("Thank you! Your order was placed and will be delivered before ")
        );
    }

    #[test]
    fn test_checkout_blocks_on_wrong_total_without_notifying() {
        let notifier = RecordingNotifier::default();
        let mut takeaway = Takeaway::new(curry_menu(), &notifier);

        takeaway.take_order("vindaloo", Some(2)).unwrap();
        takeaway.take_order("korma", None).unwrap();
        takeaway.take_order("vindaloo", Some(1)).unwrap();

        let err = takeaway.checkout(Money::from_pounds_pence(5, 0)).unwrap_err();

        assert_eq!(err.to_string(), "Halting Order: Unexpected Total");
        assert!(matches!(
            err,
            OrderError::TotalMismatch { expected, actual }
                if expected == Money::from_pence(500) && actual == Money::from_pence(1500)
        ));
        assert!(notifier.sent.borrow().is_empty());
    }

    #[test]
    fn test_blocked_checkout_is_retryable() {
        let notifier = RecordingNotifier::default();
        let mut takeaway = Takeaway::new(curry_menu(), &notifier);

        takeaway.take_order("korai", Some(3)).unwrap();

        assert!(takeaway.checkout(Money::from_pence(1000)).is_err());
        assert_eq!(takeaway.basket().line_count(), 1);

        // Basket survived the failure, so the corrected figure goes through.
        takeaway.checkout(Money::from_pence(1050)).unwrap();
        assert_eq!(notifier.sent.borrow().len(), 1);
    }

    #[test]
    fn test_one_menu_serves_independent_sessions() {
        let menu = curry_menu();
        let notifier = RecordingNotifier::default();

        let mut first = Takeaway::new(&menu, &notifier);
        let mut second = Takeaway::new(&menu, &notifier);

        first.take_order("korma", None).unwrap();
        second.take_order("vindaloo", Some(2)).unwrap();

        // Baskets are per-session; the shared menu is read-only.
        assert_eq!(first.basket().total(), Money::from_pence(300));
        assert_eq!(second.basket().total(), Money::from_pence(800));
    }

    #[test]
    fn test_checkout_compares_exact_sum_not_displayed_value() {
        let notifier = RecordingNotifier::default();
        let mut takeaway = Takeaway::new(curry_menu(), &notifier);

        takeaway.take_order("korai", None).unwrap(); // £3.50

        // Off by a single penny: blocked.
        assert!(takeaway.checkout(Money::from_pence(349)).is_err());
        assert!(takeaway.checkout(Money::from_pence(350)).is_ok());
    }
}
