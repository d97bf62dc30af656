//! secp256r1 and secp384r1 through the `p256`/`p384` crates
//!
//! Both curves use the same SEC1 uncompressed encoding and the same shape of
//! API, so the operations are stamped out once per curve.

macro_rules! nist_curve {
    ($module:ident, $krate:ident, $scalar_size:expr, $point_size:expr, $name:expr) => {
        pub(crate) mod $module {
            use alloc::vec::Vec;
            use rand::{CryptoRng, RngCore};
            use tls_ecdhe_api::{Error, Result, SharedSecret};
            use tls_ecdhe_params::traditional::ecdhe::TLS_EC_POINT_FORMAT_UNCOMPRESSED;
            use zeroize::Zeroizing;
            use $krate::elliptic_curve::sec1::ToEncodedPoint;

            pub(crate) use $krate::{PublicKey, SecretKey};

            const CONTEXT: &str = $name;

            /// Draw a scalar in `[1, n-1]` by rejection sampling
            pub(crate) fn generate<R: CryptoRng + RngCore>(rng: &mut R) -> Result<SecretKey> {
                let mut bytes = Zeroizing::new([0u8; $scalar_size]);
                for _ in 0..super::MAX_KEYGEN_ATTEMPTS {
                    rng.try_fill_bytes(&mut bytes[..])
                        .map_err(|_| Error::ProviderKeyGenFailure {
                            context: CONTEXT,
                            reason: "entropy source failed",
                        })?;
                    // Zero and values >= n are rejected here
                    if let Ok(secret) = SecretKey::from_slice(&bytes[..]) {
                        return Ok(secret);
                    }
                }
                Err(Error::ProviderKeyGenFailure {
                    context: CONTEXT,
                    reason: "no valid scalar drawn",
                })
            }

            /// Validate and import an uncompressed SEC1 point
            pub(crate) fn import(encoded: &[u8]) -> Result<PublicKey> {
                if encoded.len() != $point_size {
                    return Err(Error::InvalidPoint {
                        context: CONTEXT,
                        reason: "wrong encoded point length",
                    });
                }
                if encoded[0] != TLS_EC_POINT_FORMAT_UNCOMPRESSED {
                    return Err(Error::InvalidPoint {
                        context: CONTEXT,
                        reason: "point is not in uncompressed form",
                    });
                }
                // Checks the curve equation; the identity has no uncompressed
                // encoding so it cannot come back from here
                PublicKey::from_sec1_bytes(encoded).map_err(|_| Error::InvalidPoint {
                    context: CONTEXT,
                    reason: "point is not on the curve",
                })
            }

            pub(crate) fn export(public: &PublicKey) -> Vec<u8> {
                public.to_encoded_point(false).as_bytes().to_vec()
            }

            /// Raw ECDH: the x-coordinate of `secret * public`
            pub(crate) fn diffie_hellman(secret: &SecretKey, public: &PublicKey) -> SharedSecret {
                let shared = $krate::elliptic_curve::ecdh::diffie_hellman(
                    secret.to_nonzero_scalar(),
                    public.as_affine(),
                );
                SharedSecret::from_slice(shared.raw_secret_bytes())
            }
        }
    };
}

nist_curve!(
    secp256r1,
    p256,
    tls_ecdhe_params::traditional::ecdhe::ECDHE_P256_FIELD_ELEMENT_SIZE,
    tls_ecdhe_params::traditional::ecdhe::ECDHE_P256_PUBLIC_KEY_SIZE,
    "secp256r1"
);
nist_curve!(
    secp384r1,
    p384,
    tls_ecdhe_params::traditional::ecdhe::ECDHE_P384_FIELD_ELEMENT_SIZE,
    tls_ecdhe_params::traditional::ecdhe::ECDHE_P384_PUBLIC_KEY_SIZE,
    "secp384r1"
);

/// Bound on rejection sampling; hitting it means the RNG is broken
pub(crate) const MAX_KEYGEN_ATTEMPTS: usize = 16;
