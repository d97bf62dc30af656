//! ECDHE key exchange for TLS
//!
//! This crate is the key-exchange core that sits between a TLS handshake
//! and an elliptic-curve engine. It negotiates a named curve, owns the
//! ephemeral key pair for it, moves public points on and off the wire and
//! derives the raw shared secret. All curve arithmetic is delegated to an
//! [`EccProvider`](tls_ecdhe_api::EccProvider).

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod ecdhe;
pub mod error;

// Re-exports
pub use ecdhe::{
    compute_shared_secret_as_client, compute_shared_secret_as_server, derive, negotiate,
    negotiate_from_wire, parse_params, parse_point, read_params, read_point, write_params,
    write_params_point, write_point, KeyExchangeParams, ParamsState, RawServerParams, WirePoint,
};
pub use ecdhe::registry::{find_by_iana_id, supported_curves, MODERN_EC_SUPPORTED};
