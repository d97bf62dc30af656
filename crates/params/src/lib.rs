//! Constant values for TLS ECDHE key exchange
//!
//! Wire identifiers and sizes, kept apart from any code so the registry and
//! the provider agree on them by construction.

#![no_std]

pub mod traditional;
