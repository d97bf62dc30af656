// File: crates/kex/src/ecdhe/registry.rs
//! Process-wide table of supported named curves
//!
//! The table is in server preference order and never changes after
//! compilation. Entries are `static` items: code holding a
//! `&'static NamedCurve` is holding a pointer into this table, and two
//! curves are equal only if they are the same entry.

use tls_ecdhe_api::{CurveDescriptor, CurveFamily, NamedCurve};
use tls_ecdhe_params::traditional::ecdhe::{
    ECDHE_P256_PUBLIC_KEY_SIZE, ECDHE_P256_SHARED_SECRET_SIZE, ECDHE_P384_PUBLIC_KEY_SIZE,
    ECDHE_P384_SHARED_SECRET_SIZE, TLS_EC_CURVE_SECP_256_R1, TLS_EC_CURVE_SECP_384_R1,
};
#[cfg(feature = "x25519")]
use tls_ecdhe_params::traditional::ecdhe::{
    ECDHE_X25519_PUBLIC_KEY_SIZE, ECDHE_X25519_SHARED_SECRET_SIZE, TLS_EC_CURVE_ECDH_X25519,
};

/// Whether the Montgomery curve is compiled in
pub const MODERN_EC_SUPPORTED: bool = cfg!(feature = "x25519");

pub static SECP256R1: NamedCurve = NamedCurve::new(
    "secp256r1",
    TLS_EC_CURVE_SECP_256_R1,
    256,
    ECDHE_P256_PUBLIC_KEY_SIZE,
    ECDHE_P256_SHARED_SECRET_SIZE,
    CurveFamily::ShortWeierstrass,
    CurveDescriptor::Secp256r1,
);

pub static SECP384R1: NamedCurve = NamedCurve::new(
    "secp384r1",
    TLS_EC_CURVE_SECP_384_R1,
    384,
    ECDHE_P384_PUBLIC_KEY_SIZE,
    ECDHE_P384_SHARED_SECRET_SIZE,
    CurveFamily::ShortWeierstrass,
    CurveDescriptor::Secp384r1,
);

#[cfg(feature = "x25519")]
pub static X25519: NamedCurve = NamedCurve::new(
    "x25519",
    TLS_EC_CURVE_ECDH_X25519,
    255,
    ECDHE_X25519_PUBLIC_KEY_SIZE,
    ECDHE_X25519_SHARED_SECRET_SIZE,
    CurveFamily::Montgomery,
    CurveDescriptor::X25519,
);

#[cfg(feature = "x25519")]
static SUPPORTED_CURVES: [&NamedCurve; 3] = [&SECP256R1, &SECP384R1, &X25519];

#[cfg(not(feature = "x25519"))]
static SUPPORTED_CURVES: [&NamedCurve; 2] = [&SECP256R1, &SECP384R1];

/// The registry, most preferred first
pub fn supported_curves() -> &'static [&'static NamedCurve] {
    &SUPPORTED_CURVES
}

/// Number of registry entries
pub fn supported_curves_len() -> usize {
    SUPPORTED_CURVES.len()
}

/// Look a curve up by its IANA "Supported Groups" id
pub fn find_by_iana_id(iana_id: u16) -> Option<&'static NamedCurve> {
    SUPPORTED_CURVES
        .iter()
        .copied()
        .find(|curve| curve.iana_id() == iana_id)
}
