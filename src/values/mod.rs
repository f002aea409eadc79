//! Runtime value model.
//!
//! Checked callables exchange dynamically typed values. This module defines:
//!
//! - `Value`, the closed set of runtime values, and its textual renderings
//! - `Type`, nominal runtime types with single inheritance rooted at `object`
//! - The builtin type table and construction of instances from arguments

pub mod types;
pub mod value;
