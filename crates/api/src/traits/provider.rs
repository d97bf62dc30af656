// File: crates/api/src/traits/provider.rs

//! Trait definition for the elliptic-curve provider capability
//!
//! The key-exchange core never performs curve arithmetic itself. Key
//! generation, point validation, duplication, scalar multiplication and
//! erasure of key material all go through an [`EccProvider`], so the core is
//! independent of whichever engine performs the math.

use crate::types::{CurveDescriptor, NamedCurve, SharedSecret};
use crate::Result;
use alloc::vec::Vec;
use rand::{CryptoRng, RngCore};

/// An opaque provider key object bound to exactly one curve.
pub trait KeyHandle {
    /// The curve this handle was generated or imported for
    fn descriptor(&self) -> CurveDescriptor;

    /// Whether the handle holds a private scalar (as opposed to a public key only)
    fn has_private_key(&self) -> bool;
}

/// Elliptic-curve engine used by the key-exchange core.
///
/// # Security Requirements
///
/// - `import_public_key` must reject any encoding that is not a valid,
///   non-identity point of the requested curve before returning a handle.
///   This is the invalid-curve defence; callers never re-check.
/// - `diffie_hellman` must not branch on private scalar bits.
/// - Key handles must zeroize private material when dropped, and `erase`
///   must leave nothing behind.
pub trait EccProvider {
    /// Provider key object.
    type KeyHandle: KeyHandle;

    /// Returns the provider name, for diagnostics.
    fn name() -> &'static str;

    /// Whether this provider can do arithmetic on `curve`.
    fn supports(curve: &NamedCurve) -> bool;

    /// Generate a fresh key pair for `curve`.
    ///
    /// Must use the provided CSPRNG for all randomness.
    fn generate_keypair<R: CryptoRng + RngCore>(
        curve: &NamedCurve,
        rng: &mut R,
    ) -> Result<Self::KeyHandle>;

    /// Build a public-key handle from its canonical encoding, validating it.
    fn import_public_key(curve: &NamedCurve, encoded: &[u8]) -> Result<Self::KeyHandle>;

    /// Produce an independent copy of `key`, private half included.
    fn duplicate(key: &Self::KeyHandle) -> Result<Self::KeyHandle>;

    /// Export the public half of `key` in the curve's canonical encoding.
    fn export_public_key(curve: &NamedCurve, key: &Self::KeyHandle) -> Result<Vec<u8>>;

    /// Raw ECDH: `private`'s scalar times `public`'s point.
    ///
    /// Returns exactly `curve.shared_secret_len()` bytes.
    fn diffie_hellman(
        curve: &NamedCurve,
        private: &Self::KeyHandle,
        public: &Self::KeyHandle,
    ) -> Result<SharedSecret>;

    /// Destroy `key`, overwriting any private scalar before the memory is freed.
    fn erase(key: Self::KeyHandle);
}
