//! MessagePublisher port - Interface for publishing raw messages on a pub/sub bus.
//!
//! The emitter builds channel names and payload bytes; this port only moves
//! them onto the bus (Redis, in-memory, etc.).

use async_trait::async_trait;

use crate::domain::foundation::PublishError;

/// Port for publishing an opaque payload on a named channel.
///
/// Implementations give no delivery guarantee: a successful publish means
/// the bus accepted the message, not that any subscriber received it.
/// Nothing is retried.
///
/// # Example
///
/// ```ignore
/// publisher.publish("socket.io#/#", payload).await?;
/// ```
#[async_trait]
pub trait MessagePublisher: Send + Sync {
    /// Publish `payload` on `channel`.
    async fn publish(&self, channel: &str, payload: Vec<u8>) -> Result<(), PublishError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    struct NoopPublisher;

    #[async_trait]
    impl MessagePublisher for NoopPublisher {
        async fn publish(&self, _channel: &str, _payload: Vec<u8>) -> Result<(), PublishError> {
            Ok(())
        }
    }

    // Compile-time check that trait is object-safe
    #[allow(dead_code)]
    fn assert_object_safe(_: &dyn MessagePublisher) {}

    #[tokio::test]
    async fn publisher_is_usable_as_trait_object() {
        let publisher: Arc<dyn MessagePublisher> = Arc::new(NoopPublisher);
        assert!(publisher.publish("socket.io#/#", vec![0x90]).await.is_ok());
    }
}
