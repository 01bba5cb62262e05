//! Error classification constants for logging.
//!
//! These constants provide consistent error classification across all crates.

/// I/O error (unreadable source file, unwritable output).
pub const ERROR_IO: &str = "io";
/// Text decoding error (source fell back to permissive decoding).
pub const ERROR_DECODE: &str = "decode";
/// Empty corpus after merging all sources.
pub const ERROR_EMPTY: &str = "empty";
