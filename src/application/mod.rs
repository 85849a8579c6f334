//! Application layer - the emitter service.
//!
//! This layer drives the domain encoders and hands the results to the
//! `MessagePublisher` port.

pub mod emitter;

pub use emitter::Emitter;
