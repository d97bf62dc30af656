//! Validation utilities for key-exchange operations

use super::{Error, Result};

/// Validate a wire structure that has no single expected length
pub fn encoding(
    condition: bool,
    context: &'static str,
    expected: usize,
    actual: usize,
) -> Result<()> {
    if !condition {
        return Err(Error::MalformedEncoding {
            context,
            expected,
            actual,
        });
    }
    Ok(())
}

/// Validate a decoded public point
pub fn point(condition: bool, context: &'static str, reason: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::InvalidPoint { context, reason });
    }
    Ok(())
}

/// Validate that a key handle is present
pub fn key_present(condition: bool, context: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::MissingKey { context });
    }
    Ok(())
}

// Re-export primitive validations for convenience
pub use tls_ecdhe_api::error::validate::{capacity, length, min_length};
