//! Constants for Elliptic Curve Diffie-Hellman Ephemeral in TLS
//!
//! Group identifiers are from the IANA TLS "Supported Groups" registry
//! (RFC 8422, RFC 7748).

/// IANA group id of secp256r1
pub const TLS_EC_CURVE_SECP_256_R1: u16 = 23;

/// IANA group id of secp384r1
pub const TLS_EC_CURVE_SECP_384_R1: u16 = 24;

/// IANA group id of x25519
pub const TLS_EC_CURVE_ECDH_X25519: u16 = 29;

/// ECParameters.curve_type value for a named curve (RFC 8422 section 5.4)
pub const TLS_EC_CURVE_TYPE_NAMED: u8 = 3;

/// Leading byte of an uncompressed SEC1 point
pub const TLS_EC_POINT_FORMAT_UNCOMPRESSED: u8 = 0x04;

/// Size of a P-256 field element in bytes
pub const ECDHE_P256_FIELD_ELEMENT_SIZE: usize = 32;

/// Size of a P-384 field element in bytes
pub const ECDHE_P384_FIELD_ELEMENT_SIZE: usize = 48;

/// Size of public key for ECDHE using P-256 in bytes (uncompressed format)
pub const ECDHE_P256_PUBLIC_KEY_SIZE: usize = 1 + 2 * ECDHE_P256_FIELD_ELEMENT_SIZE;

/// Size of public key for ECDHE using P-384 in bytes (uncompressed format)
pub const ECDHE_P384_PUBLIC_KEY_SIZE: usize = 1 + 2 * ECDHE_P384_FIELD_ELEMENT_SIZE;

/// Size of public key for X25519 in bytes (raw u-coordinate)
pub const ECDHE_X25519_PUBLIC_KEY_SIZE: usize = 32;

/// Size of shared secret for ECDHE using P-256 in bytes
pub const ECDHE_P256_SHARED_SECRET_SIZE: usize = ECDHE_P256_FIELD_ELEMENT_SIZE;

/// Size of shared secret for ECDHE using P-384 in bytes
pub const ECDHE_P384_SHARED_SECRET_SIZE: usize = ECDHE_P384_FIELD_ELEMENT_SIZE;

/// Size of shared secret for X25519 in bytes
pub const ECDHE_X25519_SHARED_SECRET_SIZE: usize = 32;

/// Length prefix of the ECPoint vector
pub const ECDHE_POINT_LENGTH_PREFIX_SIZE: usize = 1;

/// curve_type (1) + namedcurve (2) + point length prefix (1)
pub const ECDHE_SERVER_PARAMS_HEADER_SIZE: usize = 4;
