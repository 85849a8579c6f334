//! Adapters - Implementations of port interfaces.
//!
//! Following hexagonal architecture, adapters connect the emitter to
//! external systems.
//!
//! ## Bus Adapters
//!
//! - `InMemoryMessageBus` - Test double recording every publish
//! - `RedisMessageBus` - Redis pub/sub publisher

pub mod bus;

pub use bus::{InMemoryMessageBus, PublishedMessage, RedisMessageBus};
