//! Capability traits the key-exchange core is written against

pub mod provider;

pub use provider::{EccProvider, KeyHandle};
