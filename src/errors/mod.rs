//! Error types raised by the contract checker.
//!
//! This module defines the single diagnostic type surfaced to callers of a
//! checked callable. It includes:
//!
//! - The `Violation` structure carrying the rendered one-line message
//! - The `ViolationKind` taxonomy used to tell failures apart
//! - Re-raising support that drops the checker's internal frame trail
//! - `DeclarationError` for malformed textual declarations
//! - `ParseModeError` for an unrecognised checking mode

pub mod errors;

#[cfg(test)]
mod tests;
