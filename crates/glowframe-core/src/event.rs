use std::sync::mpsc::{self, Receiver, Sender};

use crate::{HitRegion, Side};

/// A press on a glow strip that asks the host to start resizing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResizeIntent {
    pub side: Side,
    pub region: HitRegion,
}

/// Fan-out of resize intents to any number of listeners.
///
/// Listeners hold the receiving half of a channel. Intents are sent
/// synchronously from the strip's message handler; listeners that have
/// dropped their receiver are forgotten on the next send.
#[derive(Debug, Default)]
pub struct IntentSubscribers {
    senders: Vec<Sender<ResizeIntent>>,
}

impl IntentSubscribers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a new listener and returns its receiver.
    pub fn subscribe(&mut self) -> Receiver<ResizeIntent> {
        let (tx, rx) = mpsc::channel();
        self.senders.push(tx);
        rx
    }

    /// Sends `intent` to every live listener. Returns how many received it.
    pub fn emit(&mut self, intent: ResizeIntent) -> usize {
        self.senders.retain(|tx| tx.send(intent).is_ok());
        self.senders.len()
    }

    pub fn len(&self) -> usize {
        self.senders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.senders.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const INTENT: ResizeIntent = ResizeIntent {
        side: Side::Left,
        region: HitRegion::TopLeft,
    };

    #[test]
    fn every_subscriber_receives_the_intent() {
        // Arrange
        let mut subs = IntentSubscribers::new();
        let a = subs.subscribe();
        let b = subs.subscribe();

        // Act
        let delivered = subs.emit(INTENT);

        // Assert
        assert_eq!(delivered, 2);
        assert_eq!(a.try_recv(), Ok(INTENT));
        assert_eq!(b.try_recv(), Ok(INTENT));
    }

    #[test]
    fn dropped_receivers_are_pruned() {
        // Arrange
        let mut subs = IntentSubscribers::new();
        let kept = subs.subscribe();
        drop(subs.subscribe());

        // Act
        let delivered = subs.emit(INTENT);

        // Assert
        assert_eq!(delivered, 1);
        assert_eq!(subs.len(), 1);
        assert_eq!(kept.try_recv(), Ok(INTENT));
    }

    #[test]
    fn emit_without_subscribers_is_harmless() {
        // Arrange
        let mut subs = IntentSubscribers::new();

        // Act / Assert
        assert_eq!(subs.emit(INTENT), 0);
        assert!(subs.is_empty());
    }
}
