// File: crates/kex/src/ecdhe/codec.rs
//! ECPoint and ServerECDHParams wire codec
//!
//! ```text
//! struct {
//!     ECCurveType curve_type;      // named_curve (3)
//!     NamedCurve  namedcurve;      // uint16
//! } ECParameters;
//!
//! struct {
//!     opaque point <1..2^8-1>;
//! } ECPoint;
//!
//! struct {
//!     ECParameters curve_params;
//!     ECPoint      public;
//! } ServerECDHParams;
//! ```
//!
//! Decoding is split in two. `read_*` only checks framing and hands back
//! views into the input; `parse_*` gives the bytes to the provider, whose
//! import validates the point before any handle exists.

use alloc::vec::Vec;
use tls_ecdhe_api::{EccProvider, KeyHandle, NamedCurve};
use tls_ecdhe_common::{ByteReader, ByteWriter};
use tls_ecdhe_params::traditional::ecdhe::{
    ECDHE_POINT_LENGTH_PREFIX_SIZE, ECDHE_SERVER_PARAMS_HEADER_SIZE, TLS_EC_CURVE_TYPE_NAMED,
};
use tracing::{debug, trace};

use super::params::KeyExchangeParams;
use super::registry::find_by_iana_id;
use crate::error::{validate, Error, Result, ResultExt};

/// An encoded public point
///
/// Borrowed from the input buffer while parsing, owned when produced by
/// the provider for serialization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WirePoint<'a> {
    Borrowed(&'a [u8]),
    Owned(Vec<u8>),
}

impl<'a> WirePoint<'a> {
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            WirePoint::Borrowed(bytes) => bytes,
            WirePoint::Owned(bytes) => bytes,
        }
    }

    pub fn len(&self) -> usize {
        self.as_bytes().len()
    }

    pub fn is_empty(&self) -> bool {
        self.as_bytes().is_empty()
    }
}

impl AsRef<[u8]> for WirePoint<'_> {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

/// ServerECDHParams as read off the wire, not yet validated by the provider
#[derive(Debug, Clone)]
pub struct RawServerParams<'a> {
    /// Registry entry named by the server
    pub curve: &'static NamedCurve,
    /// The server's encoded public point
    pub point: WirePoint<'a>,
    /// Exactly the bytes of the structure, for signature verification
    pub data_to_verify: &'a [u8],
}

/// Export the public key of `params` in its curve's canonical encoding
pub fn write_point<P: EccProvider>(params: &KeyExchangeParams<P>) -> Result<WirePoint<'static>> {
    const CONTEXT: &str = "write_point";
    let (curve, key) = params
        .curve_and_key()
        .ok_or(Error::MissingKey { context: CONTEXT })?;

    let encoded = P::export_public_key(curve, key)?;
    validate::length(CONTEXT, encoded.len(), curve.point_len())?;
    Ok(WirePoint::Owned(encoded))
}

/// Write the public key of `params` as an `ECPoint`
///
/// Nothing is written unless the whole vector fits.
pub fn write_params_point<P: EccProvider>(
    params: &KeyExchangeParams<P>,
    writer: &mut ByteWriter<'_>,
) -> Result<()> {
    let point = write_point(params)?;
    validate::capacity(
        "write_params_point",
        writer.remaining(),
        ECDHE_POINT_LENGTH_PREFIX_SIZE + point.len(),
    )?;
    put_point(writer, &point)
}

/// Write a full `ServerECDHParams` structure and return the bytes written
///
/// The returned span is what the server signs.
pub fn write_params<'w, P: EccProvider>(
    params: &KeyExchangeParams<P>,
    writer: &'w mut ByteWriter<'_>,
) -> Result<&'w [u8]> {
    let curve = params.curve().ok_or(Error::MissingKey {
        context: "write_params",
    })?;
    let point = write_point(params)?;
    validate::capacity(
        "write_params",
        writer.remaining(),
        ECDHE_SERVER_PARAMS_HEADER_SIZE + point.len(),
    )?;

    let start = writer.position();
    writer.write_u8(TLS_EC_CURVE_TYPE_NAMED)?;
    writer.write_u16(curve.iana_id())?;
    put_point(writer, &point)?;

    trace!(curve = curve.name(), len = writer.position() - start, "wrote ServerECDHParams");
    Ok(writer.written_since(start))
}

fn put_point(writer: &mut ByteWriter<'_>, point: &WirePoint<'_>) -> Result<()> {
    let len = u8::try_from(point.len()).map_err(|_| Error::MalformedEncoding {
        context: "ECPoint",
        expected: u8::MAX as usize,
        actual: point.len(),
    })?;
    writer.write_u8(len)?;
    writer.write_bytes(point.as_bytes())
}

/// Read an `ECPoint` whose body must be exactly `expected_len` bytes
///
/// The bytes are not interpreted. On failure the reader does not move.
pub fn read_point<'a>(reader: &mut ByteReader<'a>, expected_len: usize) -> Result<WirePoint<'a>> {
    let mut probe = reader.clone();
    let point = take_point(&mut probe, expected_len)?;
    *reader = probe;
    Ok(point)
}

fn take_point<'a>(reader: &mut ByteReader<'a>, expected_len: usize) -> Result<WirePoint<'a>> {
    const CONTEXT: &str = "read_point";
    let len = reader.read_u8().with_context(CONTEXT)? as usize;
    if len != expected_len {
        debug!(expected = expected_len, actual = len, "ECPoint length mismatch");
        return Err(Error::MalformedEncoding {
            context: CONTEXT,
            expected: expected_len,
            actual: len,
        });
    }
    let bytes = reader.read_bytes(len).with_context(CONTEXT)?;
    Ok(WirePoint::Borrowed(bytes))
}

/// Import a wire point on `curve` through the provider
///
/// The provider rejects off-curve, identity and small-order points here;
/// nothing further down re-checks them.
pub fn parse_point<P: EccProvider>(
    point: &WirePoint<'_>,
    curve: &'static NamedCurve,
) -> Result<KeyExchangeParams<P>> {
    const CONTEXT: &str = "parse_point";
    validate::length(CONTEXT, point.len(), curve.point_len())?;

    let key = P::import_public_key(curve, point.as_bytes()).map_err(|e| {
        debug!(curve = curve.name(), error = %e, "peer point rejected");
        e
    })?;
    if key.descriptor() != curve.descriptor() {
        P::erase(key);
        return Err(Error::InvalidPoint {
            context: CONTEXT,
            reason: "provider imported the point on another curve",
        });
    }

    trace!(curve = curve.name(), "parsed peer point");
    Ok(KeyExchangeParams::keyed(curve, key))
}

/// Read a `ServerECDHParams` structure
///
/// Checks the curve type, resolves the curve id against the registry and
/// frames the point with that curve's length. On failure the reader does
/// not move.
pub fn read_params<'a>(reader: &mut ByteReader<'a>) -> Result<RawServerParams<'a>> {
    const CONTEXT: &str = "read_params";
    let mut probe = reader.clone();
    let start = probe.position();

    let curve_type = probe.read_u8().with_context(CONTEXT)?;
    if curve_type != TLS_EC_CURVE_TYPE_NAMED {
        debug!(curve_type, "unsupported ECParameters curve type");
        return Err(Error::InvalidCurveType {
            context: CONTEXT,
            curve_type,
        });
    }

    let iana_id = probe.read_u16().with_context(CONTEXT)?;
    let curve = find_by_iana_id(iana_id).ok_or_else(|| {
        debug!(iana_id, "server picked a curve outside the registry");
        Error::UnsupportedCurve {
            context: CONTEXT,
            iana_id,
        }
    })?;

    let point = take_point(&mut probe, curve.point_len())?;
    let data_to_verify = probe.consumed_since(start);
    *reader = probe;

    trace!(curve = curve.name(), len = data_to_verify.len(), "read ServerECDHParams");
    Ok(RawServerParams {
        curve,
        point,
        data_to_verify,
    })
}

/// Turn raw server parameters into keyed params on the named curve
pub fn parse_params<P: EccProvider>(raw: &RawServerParams<'_>) -> Result<KeyExchangeParams<P>> {
    parse_point(&raw.point, raw.curve)
}
