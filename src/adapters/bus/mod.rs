//! Message bus adapters.
//!
//! Implementations of the MessagePublisher port for different backends.
//!
//! ## Available Adapters
//!
//! - `InMemoryMessageBus` - Captures publishes, for testing
//! - `RedisMessageBus` - Redis PUBLISH, for production
//!
//! ## Usage
//!
//! ```ignore
//! use socketio_emitter::adapters::bus::{InMemoryMessageBus, RedisMessageBus};
//!
//! // For testing
//! let bus = Arc::new(InMemoryMessageBus::new());
//!
//! // For production
//! let bus = Arc::new(RedisMessageBus::connect(&config.redis).await?);
//! ```

mod in_memory;
mod redis;

pub use in_memory::{InMemoryMessageBus, PublishedMessage};
pub use redis::RedisMessageBus;
