//! Error handling for key-exchange operations
//!
//! The key-exchange core reports failures with the workspace-wide
//! [`Error`] type; this module adds the domain-specific validators.

pub use tls_ecdhe_api::error::{AlertDescription, Error, Result, ResultExt};

// Include validation submodule
pub mod validate;
