//! x25519 through `x25519-dalek`
//!
//! Every 32-byte string is a syntactically valid u-coordinate, so import
//! validation here means rejecting the points of small order, which would
//! force the shared secret into a handful of known values.

use rand::{CryptoRng, RngCore};
use subtle::Choice;
use tls_ecdhe_api::{Error, Result, SharedSecret};
use tls_ecdhe_internal::constant_time::{ct_eq_choice, ct_is_zero};
use tls_ecdhe_params::traditional::ecdhe::ECDHE_X25519_PUBLIC_KEY_SIZE;
use zeroize::Zeroize;

pub(crate) use x25519_dalek::{PublicKey, StaticSecret};

const CONTEXT: &str = "x25519";

/// u-coordinates of small order (and their non-canonical aliases), with the
/// unused top bit cleared
const SMALL_ORDER_POINTS: [[u8; 32]; 7] = [
    // 0 (order 4)
    [0x00; 32],
    // 1 (order 1)
    [
        0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00,
    ],
    // order 8
    [
        0xe0, 0xeb, 0x7a, 0x7c, 0x3b, 0x41, 0xb8, 0xae, 0x16, 0x56, 0xe3, 0xfa, 0xf1, 0x9f, 0xc4,
        0x6a, 0xda, 0x09, 0x8d, 0xeb, 0x9c, 0x32, 0xb1, 0xfd, 0x86, 0x62, 0x05, 0x16, 0x5f, 0x49,
        0xb8, 0x00,
    ],
    // order 8
    [
        0x5f, 0x9c, 0x95, 0xbc, 0xa3, 0x50, 0x8c, 0x24, 0xb1, 0xd0, 0xb1, 0x55, 0x9c, 0x83, 0xef,
        0x5b, 0x04, 0x44, 0x5c, 0xc4, 0x58, 0x1c, 0x8e, 0x86, 0xd8, 0x22, 0x4e, 0xdd, 0xd0, 0x9f,
        0x11, 0x57,
    ],
    // p - 1 (order 2)
    [
        0xec, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
        0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
        0xff, 0x7f,
    ],
    // p (non-canonical 0)
    [
        0xed, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
        0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
        0xff, 0x7f,
    ],
    // p + 1 (non-canonical 1)
    [
        0xee, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
        0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
        0xff, 0x7f,
    ],
];

/// Whether `u` is one of the small-order u-coordinates
///
/// Compares against every table entry without early exit.
pub(crate) fn has_small_order(u: &[u8; 32]) -> Choice {
    let mut masked = *u;
    masked[31] &= 0x7f;
    SMALL_ORDER_POINTS
        .iter()
        .fold(Choice::from(0), |acc, point| acc | ct_eq_choice(masked, point))
}

pub(crate) fn generate<R: CryptoRng + RngCore>(rng: &mut R) -> Result<StaticSecret> {
    let mut scalar = [0u8; 32];
    let filled = rng.try_fill_bytes(&mut scalar);
    // Clamping happens inside StaticSecret
    let secret = filled.map(|()| StaticSecret::from(scalar));
    scalar.zeroize();
    secret.map_err(|_| Error::ProviderKeyGenFailure {
        context: CONTEXT,
        reason: "entropy source failed",
    })
}

pub(crate) fn import(encoded: &[u8]) -> Result<PublicKey> {
    let u: [u8; ECDHE_X25519_PUBLIC_KEY_SIZE] =
        encoded.try_into().map_err(|_| Error::InvalidPoint {
            context: CONTEXT,
            reason: "wrong encoded point length",
        })?;
    if bool::from(has_small_order(&u)) {
        return Err(Error::InvalidPoint {
            context: CONTEXT,
            reason: "point has small order",
        });
    }
    Ok(PublicKey::from(u))
}

pub(crate) fn export(public: &PublicKey) -> alloc::vec::Vec<u8> {
    public.as_bytes().to_vec()
}

/// Raw X25519; an all-zero output is refused (RFC 7748 section 6.1)
pub(crate) fn diffie_hellman(secret: &StaticSecret, public: &PublicKey) -> Result<SharedSecret> {
    let shared = secret.diffie_hellman(public);
    if bool::from(ct_is_zero(shared.as_bytes())) {
        return Err(Error::InvalidPoint {
            context: CONTEXT,
            reason: "shared secret is all zeros",
        });
    }
    Ok(SharedSecret::from_slice(shared.as_bytes()))
}
