//! Transient notification sinks

use crate::traits::Notifier;
use chrono::{DateTime, Utc};
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;

/// A notification waiting to be displayed
#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub message: String,
    pub issued_at: DateTime<Utc>,
}

/// Emits each notification as a `warn` event
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn show_transient_error(&self, message: &str) {
        tracing::warn!(toast = message, "transient error");
    }
}

/// Hands notifications to a UI task through an unbounded channel
#[derive(Debug, Clone)]
pub struct ChannelNotifier {
    sender: mpsc::UnboundedSender<Toast>,
}

impl ChannelNotifier {
    /// Create a notifier together with the receiving end the UI drains
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<Toast>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (Self { sender }, receiver)
    }
}

impl Notifier for ChannelNotifier {
    fn show_transient_error(&self, message: &str) {
        let toast = Toast {
            message: message.to_string(),
            issued_at: Utc::now(),
        };
        // Nobody listening means nobody to show it to.
        if self.sender.send(toast).is_err() {
            tracing::debug!(toast = message, "toast dropped, receiver closed");
        }
    }
}

/// Keeps every message it is given; clones share the same log
#[derive(Debug, Clone, Default)]
pub struct RecordingNotifier {
    messages: Arc<Mutex<Vec<String>>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> Vec<String> {
        self.messages
            .lock()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }

    pub fn count(&self) -> usize {
        self.messages.lock().map(|guard| guard.len()).unwrap_or_default()
    }
}

impl Notifier for RecordingNotifier {
    fn show_transient_error(&self, message: &str) {
        if let Ok(mut guard) = self.messages.lock() {
            guard.push(message.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_notifier_shares_log_between_clones() {
        let notifier = RecordingNotifier::new();
        let clone = notifier.clone();

        clone.show_transient_error("Server unavailable");
        assert_eq!(notifier.count(), 1);
        assert_eq!(notifier.messages(), vec!["Server unavailable".to_string()]);
    }

    #[test]
    fn test_channel_notifier_delivers_toasts() {
        let (notifier, mut receiver) = ChannelNotifier::channel();
        notifier.show_transient_error("Try again later");

        let toast = receiver.try_recv().unwrap();
        assert_eq!(toast.message, "Try again later");
        assert!(receiver.try_recv().is_err());
    }

    #[test]
    fn test_channel_notifier_tolerates_closed_receiver() {
        let (notifier, receiver) = ChannelNotifier::channel();
        drop(receiver);
        notifier.show_transient_error("nobody listens");
    }
}
