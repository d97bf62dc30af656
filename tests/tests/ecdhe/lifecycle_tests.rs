// File: tests/tests/ecdhe/lifecycle_tests.rs
use rand::rngs::OsRng;
use tls_ecdhe::prelude::*;
use tls_ecdhe_tests::CountingProvider;

type CountingParams = KeyExchangeParams<CountingProvider>;

#[test]
fn test_release_twice_erases_once() -> Result<()> {
    let curve = supported_curves()[0];
    let mut params = CountingParams::generate_ephemeral(curve, &mut OsRng)?;
    CountingProvider::reset();

    params.release();
    params.release();
    assert!(!params.has_key());
    assert_eq!(CountingProvider::calls().erasures, 1);

    drop(params);
    assert_eq!(CountingProvider::calls().erasures, 1);
    Ok(())
}

#[test]
fn test_release_on_never_populated_params() {
    CountingProvider::reset();
    let mut params = CountingParams::new();
    params.release();
    params.release();
    assert!(params.is_empty());
    drop(params);
    assert_eq!(CountingProvider::calls().erasures, 0);
}

#[test]
fn test_drop_erases_key() -> Result<()> {
    CountingProvider::reset();
    {
        let _params = CountingParams::generate_ephemeral(supported_curves()[1], &mut OsRng)?;
    }
    assert_eq!(CountingProvider::calls().erasures, 1);
    Ok(())
}

#[test]
fn test_copy_then_release_both() -> Result<()> {
    let original = CountingParams::generate_ephemeral(supported_curves()[0], &mut OsRng)?;
    CountingProvider::reset();

    let copy = original.copy()?;
    assert_eq!(CountingProvider::calls().duplicates, 1);
    assert_eq!(copy.curve(), original.curve());

    drop(copy);
    drop(original);
    assert_eq!(CountingProvider::calls().erasures, 2);
    Ok(())
}

#[test]
fn test_client_flow_releases_its_ephemeral_key() -> Result<()> {
    let curve = supported_curves()[0];
    let server = CountingParams::generate_ephemeral(curve, &mut OsRng)?;
    CountingProvider::reset();

    let mut buf = [0u8; 128];
    let mut writer = ByteWriter::new(&mut buf);
    let _secret = compute_shared_secret_as_client(&server, &mut writer, &mut OsRng)?;

    let calls = CountingProvider::calls();
    assert_eq!(calls.generations, 1);
    assert_eq!(calls.diffie_hellman, 1);
    assert_eq!(calls.erasures, 1);
    assert!(server.has_key());
    Ok(())
}

#[test]
fn test_client_flow_releases_on_failure() {
    let server = CountingParams::generate_ephemeral(supported_curves()[0], &mut OsRng).unwrap();
    CountingProvider::reset();

    let mut buf = [0u8; 4];
    let mut writer = ByteWriter::new(&mut buf);
    let err = compute_shared_secret_as_client(&server, &mut writer, &mut OsRng).unwrap_err();

    assert!(matches!(err, Error::AllocationFailure { .. }));
    assert_eq!(writer.position(), 0);
    let calls = CountingProvider::calls();
    assert_eq!(calls.generations, 1);
    assert_eq!(calls.diffie_hellman, 1);
    assert_eq!(calls.erasures, 1);
}

#[test]
fn test_client_flow_without_server_key_touches_nothing() {
    CountingProvider::reset();
    let server = CountingParams::for_curve(supported_curves()[0]);

    let mut buf = [0u8; 128];
    let mut writer = ByteWriter::new(&mut buf);
    let err = compute_shared_secret_as_client(&server, &mut writer, &mut OsRng).unwrap_err();

    assert!(matches!(err, Error::MissingKey { .. }));
    assert_eq!(writer.position(), 0);
    assert_eq!(CountingProvider::calls(), tls_ecdhe_tests::ProviderCalls::default());
}

#[test]
fn test_server_flow_without_key_imports_nothing() {
    let client = CountingParams::generate_ephemeral(supported_curves()[0], &mut OsRng).unwrap();
    let mut buf = [0u8; 128];
    let mut writer = ByteWriter::new(&mut buf);
    write_params_point(&client, &mut writer).unwrap();
    let len = writer.position();
    CountingProvider::reset();

    let mut reader = ByteReader::new(&buf[..len]);
    let server = CountingParams::for_curve(supported_curves()[0]);
    let err = compute_shared_secret_as_server(&server, &mut reader).unwrap_err();

    assert!(matches!(err, Error::MissingKey { .. }));
    assert_eq!(reader.position(), 0);
    assert_eq!(CountingProvider::calls().imports, 0);
}

#[test]
fn test_server_flow_releases_parsed_client_key() -> Result<()> {
    let curve = supported_curves()[0];
    let server = CountingParams::generate_ephemeral(curve, &mut OsRng)?;
    let client = CountingParams::generate_ephemeral(curve, &mut OsRng)?;

    let mut buf = [0u8; 128];
    let mut writer = ByteWriter::new(&mut buf);
    write_params_point(&client, &mut writer)?;
    let len = writer.position();
    CountingProvider::reset();

    let mut reader = ByteReader::new(&buf[..len]);
    let secret = compute_shared_secret_as_server(&server, &mut reader)?;
    assert_eq!(secret, derive(&client, &server)?);

    let calls = CountingProvider::calls();
    assert_eq!(calls.imports, 1);
    // Parsed public-only params still go through erase when dropped
    assert_eq!(calls.erasures, 1);
    Ok(())
}

#[test]
fn test_params_move_across_threads() -> Result<()> {
    let params = DefaultParams::generate_ephemeral(supported_curves()[0], &mut OsRng)?;
    let handle = std::thread::spawn(move || params.has_key());
    assert!(handle.join().unwrap());
    Ok(())
}

#[test]
fn test_debug_output_has_no_key_material() -> Result<()> {
    let params = DefaultParams::generate_ephemeral(supported_curves()[0], &mut OsRng)?;
    let rendered = format!("{:?}", params);
    assert!(rendered.starts_with("KeyExchangeParams(Keyed("));

    let secret = derive(&params, &params)?;
    assert_eq!(format!("{:?}", secret), format!("SharedSecret({})[REDACTED]", secret.len()));
    Ok(())
}
