//! Public API traits and types for the tls-ecdhe crates
//!
//! This crate provides the shared surface of the workspace: the error type
//! every operation returns, the [`EccProvider`] capability the key-exchange
//! core calls into, and the descriptive types ([`NamedCurve`],
//! [`SharedSecret`]) that flow between them.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used items at the crate level for convenience
pub use error::{AlertDescription, Error, Result};
pub use types::*;

pub use traits::{EccProvider, KeyHandle};
