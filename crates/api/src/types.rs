//! Core types shared by the registry, the provider and the key-exchange core
//!
//! [`NamedCurve`] entries are only ever created as `static` registry items
//! and compared by address; [`SharedSecret`] is the one piece of secret
//! material that leaves the key-exchange core.

use alloc::vec::Vec;
use core::fmt;
use tls_ecdhe_internal::constant_time::ct_eq;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Arithmetic family of a named curve, which fixes its point encoding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum CurveFamily {
    /// `y^2 = x^3 + ax + b`; uncompressed `0x04 || X || Y` encoding
    ShortWeierstrass,
    /// Montgomery ladder curve; raw little-endian u-coordinate
    Montgomery,
}

/// Engine-side identity of a curve
///
/// The key-exchange core carries this around without looking at it; only
/// an [`EccProvider`](crate::EccProvider) matches on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum CurveDescriptor {
    Secp256r1,
    Secp384r1,
    X25519,
}

/// A named curve as advertised in the TLS "Supported Groups" registry
///
/// Equality is identity: two references are the same curve only if they
/// point at the same registry entry. The type is neither `Clone` nor `Copy`
/// so a by-value duplicate of an entry cannot exist.
#[derive(Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct NamedCurve {
    name: &'static str,
    iana_id: u16,
    field_bits: u16,
    point_len: usize,
    shared_secret_len: usize,
    family: CurveFamily,
    #[cfg_attr(feature = "serde", serde(skip))]
    descriptor: CurveDescriptor,
}

impl NamedCurve {
    /// Build a registry entry. Only meant for `static` items.
    pub const fn new(
        name: &'static str,
        iana_id: u16,
        field_bits: u16,
        point_len: usize,
        shared_secret_len: usize,
        family: CurveFamily,
        descriptor: CurveDescriptor,
    ) -> Self {
        Self {
            name,
            iana_id,
            field_bits,
            point_len,
            shared_secret_len,
            family,
            descriptor,
        }
    }

    /// Human-readable name, e.g. `secp256r1`
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// 16-bit IANA "Supported Groups" identifier
    pub fn iana_id(&self) -> u16 {
        self.iana_id
    }

    /// Size of the underlying field in bits
    pub fn field_bits(&self) -> u16 {
        self.field_bits
    }

    /// Length of the encoded public point on the wire, without the length prefix
    pub fn point_len(&self) -> usize {
        self.point_len
    }

    /// Length of the raw ECDH output
    pub fn shared_secret_len(&self) -> usize {
        self.shared_secret_len
    }

    pub fn family(&self) -> CurveFamily {
        self.family
    }

    pub fn descriptor(&self) -> CurveDescriptor {
        self.descriptor
    }
}

impl PartialEq for NamedCurve {
    fn eq(&self, other: &Self) -> bool {
        core::ptr::eq(self, other)
    }
}

impl Eq for NamedCurve {}

/// Raw ECDH output, zeroized when dropped
///
/// Holds the x-coordinate of the shared point for Weierstrass curves and the
/// raw X25519 output for the Montgomery curve. No KDF has been applied.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SharedSecret {
    data: Vec<u8>,
}

impl SharedSecret {
    /// Take ownership of freshly computed secret bytes
    pub fn new(data: Vec<u8>) -> Self {
        Self { data }
    }

    /// Create by copying from a slice
    pub fn from_slice(slice: &[u8]) -> Self {
        Self {
            data: slice.to_vec(),
        }
    }

    /// Get the length of the contained data
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check if the container is empty
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }
}

impl AsRef<[u8]> for SharedSecret {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

impl PartialEq for SharedSecret {
    fn eq(&self, other: &Self) -> bool {
        ct_eq(&self.data, &other.data)
    }
}

impl Eq for SharedSecret {}

impl fmt::Debug for SharedSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SharedSecret({})[REDACTED]", self.data.len())
    }
}
