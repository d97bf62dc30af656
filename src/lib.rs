//! # tls-ecdhe
//!
//! ECDHE key-exchange parameters for TLS: named-curve negotiation,
//! ephemeral key lifecycle, the ECPoint / ServerECDHParams wire codec and
//! raw shared-secret derivation, over a pluggable elliptic-curve provider.
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! tls-ecdhe = "0.3"
//! ```
//!
//! ## Features
//!
//! - `std` (default): `std::error::Error` impls; otherwise `no_std` + `alloc`
//! - `rustcrypto` (default): the [`RustCryptoProvider`](provider::RustCryptoProvider)
//!   backend and the [`DefaultParams`] alias
//! - `x25519` (default): registers x25519 and enables it in the provider
//! - `serde`: `Serialize` for the registry's descriptive types
//! - `full`: All features enabled
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - [`tls-ecdhe-api`]: Error type, provider trait, shared types
//! - [`tls-ecdhe-common`]: Byte cursors
//! - [`tls-ecdhe-params`]: Wire identifiers and sizes
//! - [`tls-ecdhe-kex`]: Registry, negotiation, key lifecycle, codec, derivation
//! - [`tls-ecdhe-provider`]: RustCrypto-backed provider

#![cfg_attr(not(feature = "std"), no_std)]

// Core re-exports (always available)
pub use tls_ecdhe_api as api;
pub use tls_ecdhe_common as common;
pub use tls_ecdhe_internal as internal;
pub use tls_ecdhe_kex as kex;
pub use tls_ecdhe_params as params;

// Feature-gated re-exports
#[cfg(feature = "rustcrypto")]
pub use tls_ecdhe_provider as provider;

/// Key-exchange params on the default provider
#[cfg(feature = "rustcrypto")]
pub type DefaultParams = kex::KeyExchangeParams<provider::RustCryptoProvider>;

/// Common imports for tls-ecdhe users
pub mod prelude {
    // Re-export error types
    pub use crate::api::{AlertDescription, Error, Result};

    // Re-export core traits
    pub use crate::api::{EccProvider, KeyHandle};

    // Re-export shared types
    pub use crate::api::{CurveFamily, NamedCurve, SharedSecret};
    pub use crate::common::{ByteReader, ByteWriter};

    // Re-export the key-exchange surface
    pub use crate::kex::{
        compute_shared_secret_as_client, compute_shared_secret_as_server, derive,
        find_by_iana_id, negotiate, negotiate_from_wire, parse_params, parse_point, read_params,
        read_point, supported_curves, write_params, write_params_point, write_point,
        KeyExchangeParams, RawServerParams, WirePoint, MODERN_EC_SUPPORTED,
    };

    #[cfg(feature = "rustcrypto")]
    pub use crate::provider::RustCryptoProvider;

    #[cfg(feature = "rustcrypto")]
    pub use crate::DefaultParams;
}
