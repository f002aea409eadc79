//! Parameter contracts.
//!
//! - `Signature`, the parameter list and declarations of a callable
//! - `Contract`, derived from a signature, which pairs each supplied
//!   argument with the declaration governing it

pub mod binder;
pub mod signature;
