//! Integration tests for the ECDHE key exchange

mod ecdhe;
