// File: crates/kex/src/ecdhe/params.rs
//! Key-exchange parameter container and key-pair lifecycle
//!
//! A [`KeyExchangeParams`] is one side of an ECDHE exchange: the negotiated
//! curve and, once generated or parsed, the provider key handle for it. The
//! state is an enum so a key can never exist without the curve it was made
//! for.
//!
//! # Security Features
//!
//! - Key material is only reachable through the provider handle
//! - Dropping the container runs [`KeyExchangeParams::release`], which hands
//!   the handle to the provider's secure erase
//! - A present key is never overwritten in place

use core::fmt;
use rand::{CryptoRng, RngCore};
use tls_ecdhe_api::{EccProvider, KeyHandle, NamedCurve};
use tracing::{debug, trace};

use crate::error::{Error, Result};

/// State of a [`KeyExchangeParams`]
pub enum ParamsState<P: EccProvider> {
    /// Nothing negotiated yet
    Empty,
    /// A curve is chosen; no key yet
    Negotiated(&'static NamedCurve),
    /// A key handle generated or parsed for exactly `curve`
    Keyed {
        curve: &'static NamedCurve,
        key: P::KeyHandle,
    },
}

/// One side of an ECDHE key exchange
///
/// Exclusively owned by a single handshake. Moving it to another thread is
/// allowed whenever the provider's key handle is `Send`.
pub struct KeyExchangeParams<P: EccProvider> {
    state: ParamsState<P>,
}

impl<P: EccProvider> KeyExchangeParams<P> {
    /// Create params with no curve and no key
    pub fn new() -> Self {
        Self {
            state: ParamsState::Empty,
        }
    }

    /// Prepare params for `curve` without generating a key
    ///
    /// This is the peer-side starting point: the curve is known from
    /// negotiation and the key arrives later off the wire.
    pub fn for_curve(curve: &'static NamedCurve) -> Self {
        Self {
            state: ParamsState::Negotiated(curve),
        }
    }

    /// Wrap a provider handle that was generated or imported for `curve`
    pub(crate) fn keyed(curve: &'static NamedCurve, key: P::KeyHandle) -> Self {
        Self {
            state: ParamsState::Keyed { curve, key },
        }
    }

    /// Generate a fresh ephemeral key pair on `curve`
    pub fn generate_ephemeral<R: CryptoRng + RngCore>(
        curve: &'static NamedCurve,
        rng: &mut R,
    ) -> Result<Self> {
        let key = generate_key::<P, R>(curve, rng)?;
        Ok(Self::keyed(curve, key))
    }

    /// Generate the ephemeral key pair for an already negotiated curve
    ///
    /// Fails with `MissingKey` when no curve has been negotiated and with
    /// `ProviderKeyGenFailure` when a key is already present.
    pub fn generate_ephemeral_for_negotiated<R: CryptoRng + RngCore>(
        &mut self,
        rng: &mut R,
    ) -> Result<()> {
        const CONTEXT: &str = "KeyExchangeParams::generate_ephemeral_for_negotiated";
        let curve = match &self.state {
            ParamsState::Empty => return Err(Error::MissingKey { context: CONTEXT }),
            ParamsState::Keyed { .. } => {
                return Err(Error::ProviderKeyGenFailure {
                    context: CONTEXT,
                    reason: "key already present",
                })
            }
            ParamsState::Negotiated(curve) => *curve,
        };
        let key = generate_key::<P, R>(curve, rng)?;
        self.state = ParamsState::Keyed { curve, key };
        Ok(())
    }

    /// Independent params on the same curve with a provider-level copy of
    /// the key material
    pub fn copy(&self) -> Result<Self> {
        const CONTEXT: &str = "KeyExchangeParams::copy";
        match &self.state {
            ParamsState::Keyed { curve, key } => {
                let duplicate = P::duplicate(key).map_err(|_| Error::CopyFailure {
                    context: CONTEXT,
                    reason: "provider could not duplicate the key",
                })?;
                trace!(curve = curve.name(), "copied key-exchange params");
                Ok(Self::keyed(*curve, duplicate))
            }
            _ => Err(Error::CopyFailure {
                context: CONTEXT,
                reason: "no key to copy",
            }),
        }
    }

    /// Destroy the key handle through the provider's secure erase
    ///
    /// The negotiated curve is kept. Calling this on params without a key
    /// does nothing.
    pub fn release(&mut self) {
        let state = core::mem::replace(&mut self.state, ParamsState::Empty);
        self.state = match state {
            ParamsState::Keyed { curve, key } => {
                P::erase(key);
                debug!(curve = curve.name(), "released ephemeral key");
                ParamsState::Negotiated(curve)
            }
            other => other,
        };
    }

    /// Current lifecycle state
    pub fn state(&self) -> &ParamsState<P> {
        &self.state
    }

    /// The negotiated curve, if any
    pub fn curve(&self) -> Option<&'static NamedCurve> {
        match &self.state {
            ParamsState::Empty => None,
            ParamsState::Negotiated(curve) | ParamsState::Keyed { curve, .. } => Some(*curve),
        }
    }

    /// The provider key handle, if any
    pub fn key(&self) -> Option<&P::KeyHandle> {
        match &self.state {
            ParamsState::Keyed { key, .. } => Some(key),
            _ => None,
        }
    }

    /// Curve and key together, when both are present
    pub fn curve_and_key(&self) -> Option<(&'static NamedCurve, &P::KeyHandle)> {
        match &self.state {
            ParamsState::Keyed { curve, key } => Some((*curve, key)),
            _ => None,
        }
    }

    pub fn has_key(&self) -> bool {
        matches!(self.state, ParamsState::Keyed { .. })
    }

    pub fn is_empty(&self) -> bool {
        matches!(self.state, ParamsState::Empty)
    }
}

fn generate_key<P: EccProvider, R: CryptoRng + RngCore>(
    curve: &'static NamedCurve,
    rng: &mut R,
) -> Result<P::KeyHandle> {
    const CONTEXT: &str = "KeyExchangeParams::generate_ephemeral";
    if !P::supports(curve) {
        debug!(curve = curve.name(), provider = P::name(), "curve not supported by provider");
        return Err(Error::ProviderKeyGenFailure {
            context: CONTEXT,
            reason: "curve not supported by provider",
        });
    }

    let key = P::generate_keypair(curve, rng).map_err(|e| {
        debug!(curve = curve.name(), error = %e, "ephemeral key generation failed");
        match e {
            Error::ProviderKeyGenFailure { reason, .. } => Error::ProviderKeyGenFailure {
                context: CONTEXT,
                reason,
            },
            _ => Error::ProviderKeyGenFailure {
                context: CONTEXT,
                reason: "provider rejected key generation",
            },
        }
    })?;
    if !key.has_private_key() {
        P::erase(key);
        return Err(Error::ProviderKeyGenFailure {
            context: CONTEXT,
            reason: "provider returned a public-only key",
        });
    }

    debug!(curve = curve.name(), iana_id = curve.iana_id(), "generated ephemeral key");
    Ok(key)
}

impl<P: EccProvider> Default for KeyExchangeParams<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: EccProvider> Drop for KeyExchangeParams<P> {
    fn drop(&mut self) {
        self.release();
    }
}

impl<P: EccProvider> fmt::Debug for KeyExchangeParams<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.state {
            ParamsState::Empty => f.write_str("KeyExchangeParams(Empty)"),
            ParamsState::Negotiated(curve) => {
                write!(f, "KeyExchangeParams(Negotiated({}))", curve.name())
            }
            ParamsState::Keyed { curve, key } => write!(
                f,
                "KeyExchangeParams(Keyed({}, private: {}))",
                curve.name(),
                key.has_private_key()
            ),
        }
    }
}
