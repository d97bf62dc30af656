// File: crates/kex/src/ecdhe/derive.rs
//! Raw ECDH shared-secret derivation
//!
//! The result is the untouched ECDH output: the x-coordinate for the
//! Weierstrass curves and the X25519 output for the Montgomery curve. Any
//! key schedule is applied by the caller.

use tls_ecdhe_api::{EccProvider, KeyHandle, SharedSecret};
use tls_ecdhe_internal::constant_time::ct_is_zero;
use tracing::{debug, trace};

use super::params::KeyExchangeParams;
use crate::error::{validate, Error, Result};

/// Combine a local private key with a peer public key
///
/// Preconditions are checked before the provider is called, in order: the
/// two sides must be on the same registry curve, then both must hold a key
/// and the private side must hold its private half.
pub fn derive<P: EccProvider>(
    private: &KeyExchangeParams<P>,
    public: &KeyExchangeParams<P>,
) -> Result<SharedSecret> {
    const CONTEXT: &str = "derive";

    if let (Some(ours), Some(theirs)) = (private.curve(), public.curve()) {
        if ours != theirs {
            debug!(ours = ours.name(), theirs = theirs.name(), "curve mismatch");
            return Err(Error::CurveMismatch {
                context: CONTEXT,
                private_curve: ours.iana_id(),
                public_curve: theirs.iana_id(),
            });
        }
    }

    let (curve, private_key) = private
        .curve_and_key()
        .ok_or(Error::MissingKey { context: CONTEXT })?;
    let public_key = public.key().ok_or(Error::MissingKey { context: CONTEXT })?;
    validate::key_present(private_key.has_private_key(), CONTEXT)?;

    let secret = P::diffie_hellman(curve, private_key, public_key)?;
    validate::length(CONTEXT, secret.len(), curve.shared_secret_len())?;
    // Non-contributory output: the peer point forced a known result
    validate::point(
        !bool::from(ct_is_zero(secret.as_bytes())),
        CONTEXT,
        "shared secret is all zeros",
    )?;

    trace!(curve = curve.name(), len = secret.len(), "derived shared secret");
    Ok(secret)
}
