//! # Notification Seam
//!
//! The messaging contract invoked on a successful checkout.
//!
//! The core treats the channel as fire-and-forget: it never inspects a
//! return value, and a misbehaving channel is the host's problem, not a
//! checkout failure.

use tracing::info;

/// A one-way messaging channel (SMS gateway, chat bot, e-mail, ...).
///
/// Injected into the ordering service at construction time; unit tests
/// substitute a recording double.
pub trait Notifier {
    /// Sends `body` to the customer. Errors and delivery status are
    /// swallowed by the implementation.
    fn create_message(&self, body: &str);
}

/// A borrowed notifier is a notifier, so hosts can keep ownership of the
/// channel and lend it to a session.
impl<N: Notifier + ?Sized> Notifier for &N {
    fn create_message(&self, body: &str) {
        (**self).create_message(body)
    }
}

/// A `Notifier` that emits the message into the tracing pipeline.
///
/// The no-infrastructure default: development hosts get order
/// confirmations in their logs without wiring up a real channel.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn create_message(&self, body: &str) {
        info!(message = %body, "order confirmation sent");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Smoke test: the log-backed notifier must accept any body without
    // panicking, subscriber installed or not.
    #[test]
    fn test_log_notifier_accepts_messages() {
        let notifier = LogNotifier;
        notifier.create_message("Thank you! Your order was placed");
        notifier.create_message("");
    }
}
