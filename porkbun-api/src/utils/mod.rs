//! Utility modules.

/// Log sanitization for response bodies.
pub mod log_sanitizer;

/// Lenient deserializers for fields the API encodes inconsistently.
pub mod serde_helpers;
