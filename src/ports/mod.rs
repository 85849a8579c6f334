//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the emitter and the outside world. Adapters implement these ports.
//!
//! ## Bus Ports
//!
//! - `MessagePublisher` - Publish an opaque payload on a named channel

mod message_publisher;

pub use crate::domain::foundation::PublishError;
pub use message_publisher::MessagePublisher;
