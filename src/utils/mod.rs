//! Utility modules.

/// Log truncation helpers for large panel responses.
pub mod log_sanitizer;
