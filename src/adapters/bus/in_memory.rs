//! In-memory message bus for testing.
//!
//! Records every publish for assertions and can simulate transport failures.
//!
//! # Security Note
//!
//! This adapter is for **testing only** and should not be used in production.
//! It uses `.expect()` on lock operations which will panic if locks are poisoned.
//! Production code should use the Redis message bus adapter.

use async_trait::async_trait;
use std::sync::RwLock;

use crate::domain::foundation::PublishError;
use crate::ports::MessagePublisher;

/// A message captured by [`InMemoryMessageBus`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishedMessage {
    pub channel: String,
    pub payload: Vec<u8>,
}

/// In-memory message bus for testing.
///
/// Features:
/// - Captures channel and payload of each publish, in order
/// - Optional failure injection after a number of successful publishes
///
/// # Panics
///
/// Methods may panic if internal locks are poisoned. This is acceptable
/// for test code but this adapter should NOT be used in production.
///
/// # Example
///
/// ```ignore
/// let bus = Arc::new(InMemoryMessageBus::new());
/// let mut emitter = Emitter::new(bus.clone());
///
/// emitter.to("room1").emit("msg", vec![json!("hi")]).await?;
///
/// assert_eq!(bus.channels(), vec!["socket.io#/#room1#"]);
/// ```
pub struct InMemoryMessageBus {
    published: RwLock<Vec<PublishedMessage>>,
    fail_after: RwLock<Option<usize>>,
}

impl InMemoryMessageBus {
    /// Creates a new empty bus.
    pub fn new() -> Self {
        Self {
            published: RwLock::new(Vec::new()),
            fail_after: RwLock::new(None),
        }
    }

    /// Makes every publish fail once `successes` messages have been accepted.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    pub fn fail_after(&self, successes: usize) {
        *self
            .fail_after
            .write()
            .expect("InMemoryMessageBus: fail_after write lock poisoned") = Some(successes);
    }

    // === Test Helpers ===

    /// Returns all published messages (for test assertions).
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    pub fn published(&self) -> Vec<PublishedMessage> {
        self.published
            .read()
            .expect("InMemoryMessageBus: published lock poisoned")
            .clone()
    }

    /// Returns the channels published to, in order.
    pub fn channels(&self) -> Vec<String> {
        self.published().into_iter().map(|m| m.channel).collect()
    }

    /// Returns messages published on a specific channel.
    pub fn messages_on(&self, channel: &str) -> Vec<PublishedMessage> {
        self.published()
            .into_iter()
            .filter(|m| m.channel == channel)
            .collect()
    }

    /// Returns count of published messages.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    pub fn message_count(&self) -> usize {
        self.published
            .read()
            .expect("InMemoryMessageBus: published lock poisoned")
            .len()
    }

    /// Clears all published messages (for test isolation).
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    pub fn clear(&self) {
        self.published
            .write()
            .expect("InMemoryMessageBus: published write lock poisoned")
            .clear();
    }
}

impl Default for InMemoryMessageBus {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MessagePublisher for InMemoryMessageBus {
    async fn publish(&self, channel: &str, payload: Vec<u8>) -> Result<(), PublishError> {
        let mut published = self
            .published
            .write()
            .expect("InMemoryMessageBus: published write lock poisoned");

        let limit = *self
            .fail_after
            .read()
            .expect("InMemoryMessageBus: fail_after lock poisoned");
        if limit.is_some_and(|limit| published.len() >= limit) {
            return Err(PublishError::Unavailable(format!(
                "simulated failure publishing to {}",
                channel
            )));
        }

        published.push(PublishedMessage {
            channel: channel.to_string(),
            payload,
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn records_published_messages_in_order() {
        let bus = InMemoryMessageBus::new();
        bus.publish("a", vec![1]).await.unwrap();
        bus.publish("b", vec![2]).await.unwrap();

        assert_eq!(bus.message_count(), 2);
        assert_eq!(bus.channels(), vec!["a", "b"]);
        assert_eq!(bus.messages_on("b")[0].payload, vec![2]);
    }

    #[tokio::test]
    async fn clear_removes_messages() {
        let bus = InMemoryMessageBus::new();
        bus.publish("a", vec![1]).await.unwrap();
        bus.clear();
        assert_eq!(bus.message_count(), 0);
    }

    #[tokio::test]
    async fn fails_once_limit_reached() {
        let bus = InMemoryMessageBus::new();
        bus.fail_after(1);

        assert!(bus.publish("a", vec![1]).await.is_ok());
        let err = bus.publish("b", vec![2]).await.unwrap_err();

        assert!(matches!(err, PublishError::Unavailable(_)));
        assert_eq!(bus.channels(), vec!["a"]);
    }
}
