//! Deferred type-reference resolution.
//!
//! Declarations sometimes need to name a type that does not exist yet, such
//! as two classes referring to each other. This module provides:
//!
//! - `Scope`, an explicit registry of named types that placeholders resolve against
//! - `Forward`, a placeholder that looks its name up on every use
//!
//! Resolution is never cached, so a placeholder always observes the binding
//! current at the time of the operation.

pub mod forward;
pub mod scope;
