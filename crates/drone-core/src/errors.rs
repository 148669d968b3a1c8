//! Cross-cutting error types for lairdrone.
//!
//! Parser-specific errors live in `drone-parser`; configuration errors in
//! `drone-config`. This module only covers failures of the shared helpers.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// The value is not a dotted-quad IPv4 address.
    #[error("Invalid IPv4 address: {0}")]
    InvalidAddress(String),

    /// The value could not be decomposed into a host and port.
    #[error("Invalid URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },
}
