//! Foundation module - Shared domain primitives.
//!
//! Contains the error types used across the crate.

mod errors;

pub use errors::{EmitterError, ErrorCode, PublishError};
