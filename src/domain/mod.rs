//! Domain layer containing the emitter's wire-format logic.
//!
//! # Module Organization
//!
//! - `foundation` - Shared primitives (error types)
//! - `emitter` - Rooms, flags, frame types, packets, channel names and cluster requests

pub mod emitter;
pub mod foundation;
