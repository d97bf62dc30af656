// File: tests/tests/ecdhe/exchange_tests.rs
use rand::rngs::OsRng;
use rand_chacha::rand_core::SeedableRng;
use rand_chacha::ChaCha20Rng;
use tls_ecdhe::prelude::*;
use tls_ecdhe_tests::init_tracing;

/// Server and client run a full exchange over the wire on `curve`
fn exchange(curve: &'static NamedCurve) -> Result<(SharedSecret, SharedSecret)> {
    let server = DefaultParams::generate_ephemeral(curve, &mut OsRng)?;

    let mut ske = [0u8; 128];
    let mut ske_writer = ByteWriter::new(&mut ske);
    let signed = write_params(&server, &mut ske_writer)?.to_vec();

    let mut ske_reader = ByteReader::new(&signed);
    let raw = read_params(&mut ske_reader)?;
    assert_eq!(raw.data_to_verify, signed.as_slice());
    let server_public = parse_params::<RustCryptoProvider>(&raw)?;

    let mut cke = [0u8; 128];
    let mut cke_writer = ByteWriter::new(&mut cke);
    let client_secret = compute_shared_secret_as_client(&server_public, &mut cke_writer, &mut OsRng)?;
    let cke_len = cke_writer.position();

    let mut cke_reader = ByteReader::new(&cke[..cke_len]);
    let server_secret = compute_shared_secret_as_server(&server, &mut cke_reader)?;

    Ok((client_secret, server_secret))
}

#[test]
fn test_exchange_every_registry_curve() -> Result<()> {
    init_tracing();
    for &curve in supported_curves() {
        let (client, server) = exchange(curve)?;
        assert_eq!(client, server, "secrets differ on {}", curve.name());
        assert_eq!(client.len(), curve.shared_secret_len());
    }
    Ok(())
}

#[test]
fn test_wire_round_trip_matches_in_memory() -> Result<()> {
    for &curve in supported_curves() {
        let alice = DefaultParams::generate_ephemeral(curve, &mut OsRng)?;
        let bob = DefaultParams::generate_ephemeral(curve, &mut OsRng)?;

        let mut buf = [0u8; 128];
        let mut writer = ByteWriter::new(&mut buf);
        write_params_point(&bob, &mut writer)?;
        let len = writer.position();

        let mut reader = ByteReader::new(&buf[..len]);
        let point = read_point(&mut reader, curve.point_len())?;
        let bob_public = parse_point::<RustCryptoProvider>(&point, curve)?;

        let over_wire = derive(&alice, &bob_public)?;
        let in_memory = derive(&alice, &bob)?;
        assert_eq!(over_wire, in_memory, "{}", curve.name());
    }
    Ok(())
}

#[test]
fn test_symmetry() -> Result<()> {
    for &curve in supported_curves() {
        for _ in 0..10 {
            let a = DefaultParams::generate_ephemeral(curve, &mut OsRng)?;
            let b = DefaultParams::generate_ephemeral(curve, &mut OsRng)?;
            assert_eq!(derive(&a, &b)?, derive(&b, &a)?);
        }
    }
    Ok(())
}

#[test]
fn test_distinct_peers_distinct_secrets() -> Result<()> {
    let server = DefaultParams::generate_ephemeral(supported_curves()[0], &mut OsRng)?;
    let mut secrets = Vec::new();
    for _ in 0..20 {
        let client = DefaultParams::generate_ephemeral(supported_curves()[0], &mut OsRng)?;
        secrets.push(derive(&server, &client)?);
    }
    for i in 0..secrets.len() {
        for j in i + 1..secrets.len() {
            assert_ne!(secrets[i], secrets[j], "secrets {} and {} are identical", i, j);
        }
    }
    Ok(())
}

#[test]
fn test_seeded_exchange_is_reproducible() -> Result<()> {
    let run = |curve: &'static NamedCurve| -> Result<Vec<u8>> {
        let mut rng = ChaCha20Rng::seed_from_u64(0x5eed);
        let a = DefaultParams::generate_ephemeral(curve, &mut rng)?;
        let b = DefaultParams::generate_ephemeral(curve, &mut rng)?;
        Ok(derive(&a, &b)?.as_bytes().to_vec())
    };
    for &curve in supported_curves() {
        assert_eq!(run(curve)?, run(curve)?);
    }
    Ok(())
}

#[test]
fn test_negotiation_picks_server_preference() -> Result<()> {
    let curve = negotiate(&[29, 24])?;
    assert_eq!(curve.name(), "secp384r1");
    assert!(core::ptr::eq(curve, find_by_iana_id(24).unwrap()));

    // The same choice arrives from the wire form of the list
    let list = hex::decode("0004001d0018").unwrap();
    let mut reader = ByteReader::new(&list);
    assert!(core::ptr::eq(negotiate_from_wire(&mut reader)?, curve));
    Ok(())
}

#[test]
fn test_negotiate_then_generate() -> Result<()> {
    let curve = negotiate(&[23])?;
    let mut params = DefaultParams::for_curve(curve);
    params.generate_ephemeral_for_negotiated(&mut OsRng)?;

    let mut buf = [0u8; 70];
    let mut writer = ByteWriter::new(&mut buf);
    write_params_point(&params, &mut writer)?;
    assert_eq!(writer.position(), 66);
    assert_eq!(writer.written()[1], 0x04);
    Ok(())
}

#[test]
fn test_x25519_rfc7748_public_key_parses() -> Result<()> {
    let Some(x25519) = find_by_iana_id(29) else {
        assert!(!MODERN_EC_SUPPORTED);
        return Ok(());
    };
    // RFC 7748 section 6.1, Alice's public key
    let alice_public =
        hex::decode("8520f0098930a754748b7ddcb43ef75a0dbf3a0d26381af4eba4a98eaa9b4e6a").unwrap();
    let mut wire = vec![32u8];
    wire.extend_from_slice(&alice_public);

    let mut reader = ByteReader::new(&wire);
    let point = read_point(&mut reader, x25519.point_len())?;
    let parsed = parse_point::<RustCryptoProvider>(&point, x25519)?;
    assert!(parsed.has_key());
    Ok(())
}
