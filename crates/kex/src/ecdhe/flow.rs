// File: crates/kex/src/ecdhe/flow.rs
//! Client and server halves of the ClientKeyExchange step
//!
//! Each function owns every temporary params value it creates; they are
//! released on every return path when they go out of scope.

use rand::{CryptoRng, RngCore};
use tls_ecdhe_api::{EccProvider, NamedCurve, SharedSecret};
use tls_ecdhe_common::{ByteReader, ByteWriter};
use tracing::debug;

use super::codec::{parse_point, read_point, write_params_point};
use super::derive::derive;
use super::params::KeyExchangeParams;
use crate::error::{Error, Result};

/// Client side: generate an ephemeral key on the server's curve, derive the
/// shared secret and write the client `ECPoint`
///
/// The point is written last, so `writer` is untouched on every error.
pub fn compute_shared_secret_as_client<P, R>(
    server_params: &KeyExchangeParams<P>,
    writer: &mut ByteWriter<'_>,
    rng: &mut R,
) -> Result<SharedSecret>
where
    P: EccProvider,
    R: CryptoRng + RngCore,
{
    let curve = keyed_curve(server_params, "compute_shared_secret_as_client")?;

    let client_params = KeyExchangeParams::<P>::generate_ephemeral(curve, rng)?;
    let secret = derive(&client_params, server_params)?;
    write_params_point(&client_params, writer)?;

    debug!(curve = curve.name(), "client key exchange complete");
    Ok(secret)
}

/// Server side: read the client's `ECPoint` on the negotiated curve and
/// derive the shared secret with the server's ephemeral key
pub fn compute_shared_secret_as_server<P: EccProvider>(
    server_params: &KeyExchangeParams<P>,
    reader: &mut ByteReader<'_>,
) -> Result<SharedSecret> {
    let curve = keyed_curve(server_params, "compute_shared_secret_as_server")?;

    let client_point = read_point(reader, curve.point_len())?;
    let client_params = parse_point::<P>(&client_point, curve)?;
    let secret = derive(server_params, &client_params)?;

    debug!(curve = curve.name(), "server key exchange complete");
    Ok(secret)
}

fn keyed_curve<P: EccProvider>(
    params: &KeyExchangeParams<P>,
    context: &'static str,
) -> Result<&'static NamedCurve> {
    params
        .curve_and_key()
        .map(|(curve, _)| curve)
        .ok_or(Error::MissingKey { context })
}
