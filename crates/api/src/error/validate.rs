//! Validation helpers shared by every crate in the workspace
//!
//! Each helper turns a failed condition into the matching [`Error`] variant
//! so call sites read as a list of preconditions.

use super::types::{Error, Result};

/// Validate an exact length
pub fn length(context: &'static str, actual: usize, expected: usize) -> Result<()> {
    if actual != expected {
        return Err(Error::MalformedEncoding {
            context,
            expected,
            actual,
        });
    }
    Ok(())
}

/// Validate that at least `expected` bytes are available
pub fn min_length(context: &'static str, actual: usize, expected: usize) -> Result<()> {
    if actual < expected {
        return Err(Error::MalformedEncoding {
            context,
            expected,
            actual,
        });
    }
    Ok(())
}

/// Validate that an output buffer has room for `needed` bytes
pub fn capacity(context: &'static str, available: usize, needed: usize) -> Result<()> {
    if available < needed {
        return Err(Error::AllocationFailure {
            context,
            needed,
            available,
        });
    }
    Ok(())
}
