// File: tests/tests/ecdhe/property_tests.rs
use proptest::prelude::*;
use rand_chacha::rand_core::SeedableRng;
use rand_chacha::ChaCha20Rng;
use tls_ecdhe::prelude::*;

fn any_curve() -> impl Strategy<Value = &'static NamedCurve> {
    (0..supported_curves().len()).prop_map(|i| supported_curves()[i])
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn prop_wire_exchange_agrees(curve in any_curve(), server_seed in any::<u64>(), client_seed in any::<u64>()) {
        let mut server_rng = ChaCha20Rng::seed_from_u64(server_seed);
        let mut client_rng = ChaCha20Rng::seed_from_u64(client_seed);
        let server = DefaultParams::generate_ephemeral(curve, &mut server_rng).unwrap();

        let mut ske = [0u8; 128];
        let mut ske_writer = ByteWriter::new(&mut ske);
        let signed = write_params(&server, &mut ske_writer).unwrap().to_vec();
        prop_assert_eq!(signed.len(), 4 + curve.point_len());

        let mut ske_reader = ByteReader::new(&signed);
        let raw = read_params(&mut ske_reader).unwrap();
        prop_assert!(ske_reader.is_empty());
        let server_public = parse_params::<RustCryptoProvider>(&raw).unwrap();

        let mut cke = [0u8; 128];
        let mut cke_writer = ByteWriter::new(&mut cke);
        let client_secret =
            compute_shared_secret_as_client(&server_public, &mut cke_writer, &mut client_rng).unwrap();
        let cke_len = cke_writer.position();
        prop_assert_eq!(cke_len, 1 + curve.point_len());

        let mut cke_reader = ByteReader::new(&cke[..cke_len]);
        let server_secret = compute_shared_secret_as_server(&server, &mut cke_reader).unwrap();

        prop_assert_eq!(client_secret.len(), curve.shared_secret_len());
        prop_assert_eq!(client_secret, server_secret);
    }

    #[test]
    fn prop_arbitrary_server_params_never_half_consume(data in proptest::collection::vec(any::<u8>(), 0..110)) {
        let mut reader = ByteReader::new(&data);
        match read_params(&mut reader) {
            Ok(raw) => {
                prop_assert_eq!(reader.position(), raw.data_to_verify.len());
                prop_assert_eq!(raw.data_to_verify, &data[..reader.position()]);
                if let Err(err) = parse_params::<RustCryptoProvider>(&raw) {
                    prop_assert_eq!(err.alert(), AlertDescription::IllegalParameter);
                }
            }
            Err(_) => {
                prop_assert_eq!(reader.position(), 0);
            }
        }
    }
}
