//! Socket.IO Emitter - publish events into a Socket.IO cluster from outside it.
//!
//! This crate builds packets in the format understood by the Socket.IO Redis
//! adapter and publishes them on the shared pub/sub bus. Every server
//! subscribed to the bus delivers the event to its matching clients.
//!
//! ```ignore
//! let config = AppConfig::load()?;
//! let bus = Arc::new(RedisMessageBus::connect(&config.redis).await?);
//! let mut emitter = Emitter::from_config(&config.emitter, bus);
//!
//! emitter.of("/chat").to("room1").emit("msg", vec![json!("hello")]).await?;
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;

pub use application::Emitter;
pub use domain::emitter::{Flag, FrameType};
pub use domain::foundation::{EmitterError, ErrorCode, PublishError};
