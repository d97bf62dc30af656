//! Test helpers for the tls-ecdhe integration tests
//!
//! [`CountingProvider`] wraps the RustCrypto provider and records which
//! operations reached it, so tests can show that rejected inputs never got
//! as far as the curve arithmetic.

use std::cell::Cell;

use rand::{CryptoRng, RngCore};
use tls_ecdhe_api::{EccProvider, NamedCurve, Result, SharedSecret};
use tls_ecdhe_provider::{RustCryptoKey, RustCryptoProvider};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Per-thread tally of provider operations
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ProviderCalls {
    pub generations: usize,
    pub imports: usize,
    pub duplicates: usize,
    pub exports: usize,
    pub diffie_hellman: usize,
    pub erasures: usize,
}

thread_local! {
    // Test threads are independent, so each test sees its own tally
    static CALLS: Cell<ProviderCalls> = Cell::new(ProviderCalls::default());
}

fn record(update: impl FnOnce(&mut ProviderCalls)) {
    CALLS.with(|calls| {
        let mut current = calls.get();
        update(&mut current);
        calls.set(current);
    });
}

/// [`RustCryptoProvider`] with call counting
pub struct CountingProvider;

impl CountingProvider {
    /// Snapshot of this thread's tally
    pub fn calls() -> ProviderCalls {
        CALLS.with(|calls| calls.get())
    }

    pub fn reset() {
        CALLS.with(|calls| calls.set(ProviderCalls::default()));
    }
}

impl EccProvider for CountingProvider {
    type KeyHandle = RustCryptoKey;

    fn name() -> &'static str {
        "Counting"
    }

    fn supports(curve: &NamedCurve) -> bool {
        RustCryptoProvider::supports(curve)
    }

    fn generate_keypair<R: CryptoRng + RngCore>(
        curve: &NamedCurve,
        rng: &mut R,
    ) -> Result<Self::KeyHandle> {
        record(|c| c.generations += 1);
        RustCryptoProvider::generate_keypair(curve, rng)
    }

    fn import_public_key(curve: &NamedCurve, encoded: &[u8]) -> Result<Self::KeyHandle> {
        record(|c| c.imports += 1);
        RustCryptoProvider::import_public_key(curve, encoded)
    }

    fn duplicate(key: &Self::KeyHandle) -> Result<Self::KeyHandle> {
        record(|c| c.duplicates += 1);
        RustCryptoProvider::duplicate(key)
    }

    fn export_public_key(curve: &NamedCurve, key: &Self::KeyHandle) -> Result<Vec<u8>> {
        record(|c| c.exports += 1);
        RustCryptoProvider::export_public_key(curve, key)
    }

    fn diffie_hellman(
        curve: &NamedCurve,
        private: &Self::KeyHandle,
        public: &Self::KeyHandle,
    ) -> Result<SharedSecret> {
        record(|c| c.diffie_hellman += 1);
        RustCryptoProvider::diffie_hellman(curve, private, public)
    }

    fn erase(key: Self::KeyHandle) {
        record(|c| c.erasures += 1);
        RustCryptoProvider::erase(key)
    }
}

/// Install a log subscriber for the current test binary
///
/// Honors `RUST_LOG`; defaults to `tls_ecdhe_kex=trace`. Safe to call from
/// every test.
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("tls_ecdhe_kex=trace"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_test_writer().with_target(true))
        .with(filter)
        .try_init()
        .ok();
}
