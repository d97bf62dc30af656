// File: crates/kex/src/ecdhe/negotiate.rs
//! Named-curve selection
//!
//! The server's preference wins: the registry is scanned in order and the
//! first entry the peer offered anywhere in its list is chosen.

use tls_ecdhe_api::NamedCurve;
use tls_ecdhe_common::ByteReader;
use tls_ecdhe_internal::endian::u16_from_be_bytes;
use tracing::debug;

use super::registry::supported_curves;
use crate::error::{validate, Error, Result, ResultExt};

/// Pick the most preferred registry curve that appears in `peer_ids`
pub fn negotiate(peer_ids: &[u16]) -> Result<&'static NamedCurve> {
    select("negotiate", peer_ids.len(), |id| peer_ids.contains(&id))
}

/// Read a `NamedCurveList` (u16 byte length, then u16 ids) and negotiate
/// over it
///
/// On failure the reader does not move.
pub fn negotiate_from_wire(reader: &mut ByteReader<'_>) -> Result<&'static NamedCurve> {
    const CONTEXT: &str = "negotiate_from_wire";
    let mut probe = reader.clone();

    let len = probe.read_u16().with_context(CONTEXT)? as usize;
    validate::encoding(len >= 2, CONTEXT, 2, len)?;
    validate::encoding(len % 2 == 0, CONTEXT, len + 1, len)?;
    let list = probe.read_bytes(len).with_context(CONTEXT)?;
    *reader = probe;

    select(CONTEXT, len / 2, |id| {
        list.chunks_exact(2)
            .filter_map(|chunk| <&[u8; 2]>::try_from(chunk).ok())
            .any(|pair| u16_from_be_bytes(pair) == id)
    })
}

fn select<F>(context: &'static str, offered: usize, offers: F) -> Result<&'static NamedCurve>
where
    F: Fn(u16) -> bool,
{
    match supported_curves()
        .iter()
        .copied()
        .find(|curve| offers(curve.iana_id()))
    {
        Some(curve) => {
            debug!(curve = curve.name(), iana_id = curve.iana_id(), offered, "negotiated curve");
            Ok(curve)
        }
        None => {
            debug!(offered, "no curve in common with peer");
            Err(Error::NoCommonCurve { context, offered })
        }
    }
}
