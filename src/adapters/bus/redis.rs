//! Redis-backed message bus for production deployments.
//!
//! Publishes with `PUBLISH channel payload`. Every Socket.IO server running
//! the Redis adapter is subscribed to the matching channels.

use async_trait::async_trait;
use redis::aio::MultiplexedConnection;
use redis::AsyncCommands;

use crate::config::RedisConfig;
use crate::domain::foundation::PublishError;
use crate::ports::MessagePublisher;

/// Redis pub/sub publisher.
///
/// The multiplexed connection is cheap to clone, so one bus can be shared
/// by any number of emitters.
#[derive(Clone)]
pub struct RedisMessageBus {
    conn: MultiplexedConnection,
}

impl RedisMessageBus {
    /// Wraps an existing connection.
    pub fn new(conn: MultiplexedConnection) -> Self {
        Self { conn }
    }

    /// Opens a multiplexed connection using `config`.
    ///
    /// Fails with `PublishError::Unavailable` if the URL is invalid, the
    /// server cannot be reached, or the connect timeout elapses.
    pub async fn connect(config: &RedisConfig) -> Result<Self, PublishError> {
        let client = redis::Client::open(config.url.as_str()).map_err(map_redis_error)?;

        let conn = tokio::time::timeout(config.timeout(), client.get_multiplexed_async_connection())
            .await
            .map_err(|_| {
                PublishError::Unavailable(format!(
                    "connect timed out after {}s",
                    config.timeout_secs
                ))
            })?
            .map_err(map_redis_error)?;

        tracing::debug!("Connected to Redis message bus");
        Ok(Self::new(conn))
    }
}

#[async_trait]
impl MessagePublisher for RedisMessageBus {
    async fn publish(&self, channel: &str, payload: Vec<u8>) -> Result<(), PublishError> {
        let mut conn = self.conn.clone();

        conn.publish::<_, _, ()>(channel, payload)
            .await
            .map_err(map_redis_error)
    }
}

fn map_redis_error(e: redis::RedisError) -> PublishError {
    if e.is_io_error() || e.is_connection_dropped() || e.is_connection_refusal() || e.is_timeout() {
        PublishError::Unavailable(e.to_string())
    } else {
        PublishError::Rejected(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn connect_rejects_malformed_url() {
        let config = RedisConfig {
            url: "not a url".to_string(),
            ..Default::default()
        };

        assert!(RedisMessageBus::connect(&config).await.is_err());
    }
}
