//! Common implementations and shared functionality for the tls-ecdhe crates
//!
//! The handshake layer hands the key-exchange core a [`ByteReader`] over a
//! received message and a [`ByteWriter`] over the message being built. Both
//! are bounds-checked and never advance past a failed operation.

#![cfg_attr(not(feature = "std"), no_std)]

pub mod cursor;

pub use cursor::{ByteReader, ByteWriter};
