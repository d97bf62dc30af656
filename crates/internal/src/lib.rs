//! Internal utilities for the tls-ecdhe crates
//!
//! Nothing in here is part of the public surface; the helpers are shared
//! between the provider and the key-exchange crates.

#![cfg_attr(not(feature = "std"), no_std)]

pub mod constant_time;
pub mod endian;
