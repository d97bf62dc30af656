//! TLS alert descriptions a failed key exchange maps to (RFC 8446 section 6)
//!
//! Only the generic codes appear here: the key-exchange layer never tells
//! the peer more than "decode problem", "bad parameter", "no agreement" or
//! "local failure".

/// TLS alert description codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum AlertDescription {
    HandshakeFailure = 40,
    IllegalParameter = 47,
    DecodeError = 50,
    InternalError = 80,
}

impl AlertDescription {
    /// Convert to raw u8 byte.
    pub fn to_u8(self) -> u8 {
        self as u8
    }
}
