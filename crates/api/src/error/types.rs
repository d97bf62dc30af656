//! Error type definitions for ECDHE key-exchange operations

use super::alert::AlertDescription;

/// Primary error type for ECDHE key-exchange operations
///
/// Every variant names the operation that failed in `context`. The extra
/// fields are for local diagnostics only; what reaches the peer is the
/// generic alert from [`Error::alert`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The provider could not produce a key pair (e.g. entropy failure)
    ProviderKeyGenFailure {
        context: &'static str,
        reason: &'static str,
    },

    /// The provider could not duplicate a key handle
    CopyFailure {
        context: &'static str,
        reason: &'static str,
    },

    /// Length mismatch or truncated input
    MalformedEncoding {
        context: &'static str,
        expected: usize,
        actual: usize,
    },

    /// The encoded point failed on-curve, identity or order validation
    InvalidPoint {
        context: &'static str,
        reason: &'static str,
    },

    /// Two params objects refer to different registry curves
    CurveMismatch {
        context: &'static str,
        private_curve: u16,
        public_curve: u16,
    },

    /// A required key handle (or its private half) is absent
    MissingKey {
        context: &'static str,
    },

    /// None of the peer's curve identifiers is supported
    NoCommonCurve {
        context: &'static str,
        offered: usize,
    },

    /// The peer named a curve that is not in the registry
    UnsupportedCurve {
        context: &'static str,
        iana_id: u16,
    },

    /// ECParameters carried a curve type other than `named_curve`
    InvalidCurveType {
        context: &'static str,
        curve_type: u8,
    },

    /// Output buffer too small for the bytes being written
    AllocationFailure {
        context: &'static str,
        needed: usize,
        available: usize,
    },
}

/// Result type for ECDHE key-exchange operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Replace the operation context of an existing error
    pub fn with_context(self, context: &'static str) -> Self {
        match self {
            Self::ProviderKeyGenFailure { reason, .. } => {
                Self::ProviderKeyGenFailure { context, reason }
            }
            Self::CopyFailure { reason, .. } => Self::CopyFailure { context, reason },
            Self::MalformedEncoding {
                expected, actual, ..
            } => Self::MalformedEncoding {
                context,
                expected,
                actual,
            },
            Self::InvalidPoint { reason, .. } => Self::InvalidPoint { context, reason },
            Self::CurveMismatch {
                private_curve,
                public_curve,
                ..
            } => Self::CurveMismatch {
                context,
                private_curve,
                public_curve,
            },
            Self::MissingKey { .. } => Self::MissingKey { context },
            Self::NoCommonCurve { offered, .. } => Self::NoCommonCurve { context, offered },
            Self::UnsupportedCurve { iana_id, .. } => Self::UnsupportedCurve { context, iana_id },
            Self::InvalidCurveType { curve_type, .. } => {
                Self::InvalidCurveType { context, curve_type }
            }
            Self::AllocationFailure {
                needed, available, ..
            } => Self::AllocationFailure {
                context,
                needed,
                available,
            },
        }
    }

    /// The operation context recorded on this error
    pub fn context(&self) -> &'static str {
        match self {
            Self::ProviderKeyGenFailure { context, .. }
            | Self::CopyFailure { context, .. }
            | Self::MalformedEncoding { context, .. }
            | Self::InvalidPoint { context, .. }
            | Self::CurveMismatch { context, .. }
            | Self::MissingKey { context }
            | Self::NoCommonCurve { context, .. }
            | Self::UnsupportedCurve { context, .. }
            | Self::InvalidCurveType { context, .. }
            | Self::AllocationFailure { context, .. } => context,
        }
    }

    /// The alert a handshake layer sends when this error aborts a handshake
    ///
    /// Peer decode problems and peer parameter problems get their own
    /// alerts; negotiation failures map to `handshake_failure` and
    /// everything local to `internal_error`.
    pub fn alert(&self) -> AlertDescription {
        match self {
            Self::MalformedEncoding { .. } => AlertDescription::DecodeError,
            Self::InvalidPoint { .. } | Self::InvalidCurveType { .. } => {
                AlertDescription::IllegalParameter
            }
            Self::NoCommonCurve { .. } | Self::UnsupportedCurve { .. } => {
                AlertDescription::HandshakeFailure
            }
            Self::ProviderKeyGenFailure { .. }
            | Self::CopyFailure { .. }
            | Self::CurveMismatch { .. }
            | Self::MissingKey { .. }
            | Self::AllocationFailure { .. } => AlertDescription::InternalError,
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::ProviderKeyGenFailure { context, reason } => {
                write!(f, "{}: key generation failed: {}", context, reason)
            }
            Self::CopyFailure { context, reason } => {
                write!(f, "{}: key copy failed: {}", context, reason)
            }
            Self::MalformedEncoding {
                context,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "{}: malformed encoding (expected {}, got {})",
                    context, expected, actual
                )
            }
            Self::InvalidPoint { context, reason } => {
                write!(f, "{}: invalid point: {}", context, reason)
            }
            Self::CurveMismatch {
                context,
                private_curve,
                public_curve,
            } => {
                write!(
                    f,
                    "{}: curve mismatch (private {}, public {})",
                    context, private_curve, public_curve
                )
            }
            Self::MissingKey { context } => write!(f, "{}: missing key", context),
            Self::NoCommonCurve { context, offered } => {
                write!(
                    f,
                    "{}: no common curve among {} offered",
                    context, offered
                )
            }
            Self::UnsupportedCurve { context, iana_id } => {
                write!(f, "{}: unsupported curve {}", context, iana_id)
            }
            Self::InvalidCurveType {
                context,
                curve_type,
            } => {
                write!(f, "{}: invalid curve type {}", context, curve_type)
            }
            Self::AllocationFailure {
                context,
                needed,
                available,
            } => {
                write!(
                    f,
                    "{}: buffer too small (needed {}, available {})",
                    context, needed, available
                )
            }
        }
    }
}
