// File: crates/provider/src/rustcrypto/mod.rs
//! [`EccProvider`] implementation over `p256`, `p384` and `x25519-dalek`
//!
//! # Security Features
//!
//! - Public keys are validated on import: SEC1 points must be uncompressed
//!   and on the curve, x25519 u-coordinates must not have small order
//! - Secret scalars live only inside the RustCrypto key types, which zeroize
//!   themselves on drop
//! - Raw DH output is copied once into a [`SharedSecret`], which also
//!   zeroizes on drop

mod nist;

#[cfg(feature = "x25519")]
mod montgomery;

use alloc::vec::Vec;
use core::fmt;
use rand::{CryptoRng, RngCore};
use tls_ecdhe_api::{
    CurveDescriptor, EccProvider, Error, KeyHandle, NamedCurve, Result, SharedSecret,
};
use tls_ecdhe_params::traditional::ecdhe::{
    TLS_EC_CURVE_ECDH_X25519, TLS_EC_CURVE_SECP_256_R1, TLS_EC_CURVE_SECP_384_R1,
};

use nist::{secp256r1, secp384r1};

/// Provider backed by the RustCrypto elliptic-curve crates
#[derive(Debug, Clone, Copy, Default)]
pub struct RustCryptoProvider;

/// Key handle of [`RustCryptoProvider`]
///
/// Always carries the public point; carries the private scalar only for
/// locally generated keys.
#[derive(Clone)]
pub enum RustCryptoKey {
    Secp256r1 {
        secret: Option<secp256r1::SecretKey>,
        public: secp256r1::PublicKey,
    },
    Secp384r1 {
        secret: Option<secp384r1::SecretKey>,
        public: secp384r1::PublicKey,
    },
    #[cfg(feature = "x25519")]
    X25519 {
        secret: Option<montgomery::StaticSecret>,
        public: montgomery::PublicKey,
    },
}

impl RustCryptoKey {
    /// Drop the private scalar, if any, leaving a public-only handle
    ///
    /// The scalar types zeroize themselves when dropped.
    pub fn wipe_private_key(&mut self) {
        match self {
            Self::Secp256r1 { secret, .. } => *secret = None,
            Self::Secp384r1 { secret, .. } => *secret = None,
            #[cfg(feature = "x25519")]
            Self::X25519 { secret, .. } => *secret = None,
        }
    }
}

impl KeyHandle for RustCryptoKey {
    fn descriptor(&self) -> CurveDescriptor {
        match self {
            Self::Secp256r1 { .. } => CurveDescriptor::Secp256r1,
            Self::Secp384r1 { .. } => CurveDescriptor::Secp384r1,
            #[cfg(feature = "x25519")]
            Self::X25519 { .. } => CurveDescriptor::X25519,
        }
    }

    fn has_private_key(&self) -> bool {
        match self {
            Self::Secp256r1 { secret, .. } => secret.is_some(),
            Self::Secp384r1 { secret, .. } => secret.is_some(),
            #[cfg(feature = "x25519")]
            Self::X25519 { secret, .. } => secret.is_some(),
        }
    }
}

impl fmt::Debug for RustCryptoKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "RustCryptoKey({:?}, private: {})",
            self.descriptor(),
            if self.has_private_key() {
                "[REDACTED]"
            } else {
                "none"
            }
        )
    }
}

fn iana_id_of(descriptor: CurveDescriptor) -> u16 {
    match descriptor {
        CurveDescriptor::Secp256r1 => TLS_EC_CURVE_SECP_256_R1,
        CurveDescriptor::Secp384r1 => TLS_EC_CURVE_SECP_384_R1,
        CurveDescriptor::X25519 => TLS_EC_CURVE_ECDH_X25519,
    }
}

/// Check that a handle belongs to the curve it is being used with
fn ensure_curve(context: &'static str, curve: &NamedCurve, key: &RustCryptoKey) -> Result<()> {
    if key.descriptor() != curve.descriptor() {
        return Err(Error::CurveMismatch {
            context,
            private_curve: curve.iana_id(),
            public_curve: iana_id_of(key.descriptor()),
        });
    }
    Ok(())
}

#[cfg(not(feature = "x25519"))]
fn montgomery_unavailable(context: &'static str) -> Error {
    Error::UnsupportedCurve {
        context,
        iana_id: TLS_EC_CURVE_ECDH_X25519,
    }
}

impl EccProvider for RustCryptoProvider {
    type KeyHandle = RustCryptoKey;

    fn name() -> &'static str {
        "RustCrypto"
    }

    fn supports(curve: &NamedCurve) -> bool {
        match curve.descriptor() {
            CurveDescriptor::Secp256r1 | CurveDescriptor::Secp384r1 => true,
            CurveDescriptor::X25519 => cfg!(feature = "x25519"),
        }
    }

    fn generate_keypair<R: CryptoRng + RngCore>(
        curve: &NamedCurve,
        rng: &mut R,
    ) -> Result<Self::KeyHandle> {
        match curve.descriptor() {
            CurveDescriptor::Secp256r1 => {
                let secret = secp256r1::generate(rng)?;
                let public = secret.public_key();
                Ok(RustCryptoKey::Secp256r1 {
                    secret: Some(secret),
                    public,
                })
            }
            CurveDescriptor::Secp384r1 => {
                let secret = secp384r1::generate(rng)?;
                let public = secret.public_key();
                Ok(RustCryptoKey::Secp384r1 {
                    secret: Some(secret),
                    public,
                })
            }
            #[cfg(feature = "x25519")]
            CurveDescriptor::X25519 => {
                let secret = montgomery::generate(rng)?;
                let public = montgomery::PublicKey::from(&secret);
                Ok(RustCryptoKey::X25519 {
                    secret: Some(secret),
                    public,
                })
            }
            #[cfg(not(feature = "x25519"))]
            CurveDescriptor::X25519 => Err(montgomery_unavailable("generate_keypair")),
        }
    }

    fn import_public_key(curve: &NamedCurve, encoded: &[u8]) -> Result<Self::KeyHandle> {
        match curve.descriptor() {
            CurveDescriptor::Secp256r1 => Ok(RustCryptoKey::Secp256r1 {
                secret: None,
                public: secp256r1::import(encoded)?,
            }),
            CurveDescriptor::Secp384r1 => Ok(RustCryptoKey::Secp384r1 {
                secret: None,
                public: secp384r1::import(encoded)?,
            }),
            #[cfg(feature = "x25519")]
            CurveDescriptor::X25519 => Ok(RustCryptoKey::X25519 {
                secret: None,
                public: montgomery::import(encoded)?,
            }),
            #[cfg(not(feature = "x25519"))]
            CurveDescriptor::X25519 => Err(montgomery_unavailable("import_public_key")),
        }
    }

    fn duplicate(key: &Self::KeyHandle) -> Result<Self::KeyHandle> {
        Ok(key.clone())
    }

    fn export_public_key(curve: &NamedCurve, key: &Self::KeyHandle) -> Result<Vec<u8>> {
        ensure_curve("export_public_key", curve, key)?;
        Ok(match key {
            RustCryptoKey::Secp256r1 { public, .. } => secp256r1::export(public),
            RustCryptoKey::Secp384r1 { public, .. } => secp384r1::export(public),
            #[cfg(feature = "x25519")]
            RustCryptoKey::X25519 { public, .. } => montgomery::export(public),
        })
    }

    fn diffie_hellman(
        curve: &NamedCurve,
        private: &Self::KeyHandle,
        public: &Self::KeyHandle,
    ) -> Result<SharedSecret> {
        const CONTEXT: &str = "diffie_hellman";
        ensure_curve(CONTEXT, curve, private)?;
        ensure_curve(CONTEXT, curve, public)?;

        let missing = Error::MissingKey { context: CONTEXT };
        match (private, public) {
            (
                RustCryptoKey::Secp256r1 { secret, .. },
                RustCryptoKey::Secp256r1 { public, .. },
            ) => Ok(secp256r1::diffie_hellman(
                secret.as_ref().ok_or(missing)?,
                public,
            )),
            (
                RustCryptoKey::Secp384r1 { secret, .. },
                RustCryptoKey::Secp384r1 { public, .. },
            ) => Ok(secp384r1::diffie_hellman(
                secret.as_ref().ok_or(missing)?,
                public,
            )),
            #[cfg(feature = "x25519")]
            (RustCryptoKey::X25519 { secret, .. }, RustCryptoKey::X25519 { public, .. }) => {
                montgomery::diffie_hellman(secret.as_ref().ok_or(missing)?, public)
            }
            // ensure_curve already pinned both handles to the same curve
            _ => Err(Error::CurveMismatch {
                context: CONTEXT,
                private_curve: iana_id_of(private.descriptor()),
                public_curve: iana_id_of(public.descriptor()),
            }),
        }
    }

    fn erase(mut key: Self::KeyHandle) {
        key.wipe_private_key();
    }
}
