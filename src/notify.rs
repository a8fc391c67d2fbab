//! User-visible notifications (the storefront's toasts).

use tokio::sync::mpsc;
use tracing::warn;

/// Sink for messages meant for the user rather than the log.
pub trait Notifier: Send + Sync {
    fn error(&self, message: &str);
}

/// Writes notifications to the log. Used when no UI is attached.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn error(&self, message: &str) {
        warn!(target: "cart_store::notify", %message, "User notification");
    }
}

/// Forwards notifications to a channel drained by the UI layer.
#[derive(Debug, Clone)]
pub struct ChannelNotifier {
    sender: mpsc::UnboundedSender<String>,
}

impl ChannelNotifier {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<String>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (Self { sender }, receiver)
    }
}

impl Notifier for ChannelNotifier {
    fn error(&self, message: &str) {
        if self.sender.send(message.to_string()).is_err() {
            warn!(%message, "Notification dropped, no listener");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_notifier_delivers_in_order() {
        let (notifier, mut receiver) = ChannelNotifier::new();
        notifier.error("first");
        notifier.error("second");

        assert_eq!(receiver.try_recv().unwrap(), "first");
        assert_eq!(receiver.try_recv().unwrap(), "second");
        assert!(receiver.try_recv().is_err());
    }

    #[test]
    fn test_channel_notifier_survives_closed_listener() {
        let (notifier, receiver) = ChannelNotifier::new();
        drop(receiver);
        notifier.error("nobody listens");
    }
}
