//! Elliptic-curve provider backed by the RustCrypto curve crates
//!
//! [`RustCryptoProvider`] implements the [`EccProvider`] capability for
//! secp256r1 (`p256`), secp384r1 (`p384`) and, with the `x25519` feature,
//! x25519 (`x25519-dalek`). All point validation happens on import, before a
//! key handle exists.
//!
//! [`EccProvider`]: tls_ecdhe_api::EccProvider

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod rustcrypto;

pub use rustcrypto::{RustCryptoKey, RustCryptoProvider};
