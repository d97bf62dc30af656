//! Constants for traditional (elliptic-curve) key exchange

pub mod ecdhe;
