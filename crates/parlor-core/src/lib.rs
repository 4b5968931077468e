//! Parlor Core — shared domain abstractions.
//!
//! This crate defines the error taxonomy and the host-credential signer that
//! the other crates depend on. It contains no infrastructure code.

pub mod error;
pub mod token;
