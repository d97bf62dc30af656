// File: crates/kex/src/ecdhe/mod.rs
//! ECDHE key exchange over TLS named curves
//!
//! Control flow for one handshake: [`negotiate`] picks a curve,
//! [`KeyExchangeParams::generate_ephemeral`] makes the local key pair, the
//! codec moves public points on and off the wire, and [`derive`] produces
//! the raw shared secret.

pub mod codec;
pub mod derive;
pub mod flow;
pub mod negotiate;
pub mod params;
pub mod registry;

pub use codec::{
    parse_params, parse_point, read_params, read_point, write_params, write_params_point,
    write_point, RawServerParams, WirePoint,
};
pub use derive::derive;
pub use flow::{compute_shared_secret_as_client, compute_shared_secret_as_server};
pub use negotiate::{negotiate, negotiate_from_wire};
pub use params::{KeyExchangeParams, ParamsState};
