//! Type declarations attached to parameters and return values.
//!
//! This module defines the closed vocabulary of declarations and a small
//! textual syntax for writing them:
//!
//! - `Declaration`, the recursive declaration variants, and `Predicate`
//! - A regex driven lexer and token definitions for the textual form
//! - A recursive descent parser resolving names against a `Scope`

pub mod declaration;
pub mod lexer;
pub mod parser;
pub mod tokens;
