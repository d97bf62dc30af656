//! Endianness utility functions
//!
//! TLS vectors carry their lengths and identifiers in network byte order.

/// Read a big-endian u16
pub fn u16_from_be_bytes(bytes: &[u8; 2]) -> u16 {
    u16::from_be_bytes(*bytes)
}

/// Convert a u16 from native byte order to big-endian bytes
pub fn u16_to_be_bytes(value: u16) -> [u8; 2] {
    value.to_be_bytes()
}
