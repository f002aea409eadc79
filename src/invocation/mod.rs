//! Checked invocation of callables.
//!
//! This module covers everything between a caller and a wrapped callable:
//!
//! - `Arguments`, `Returned` and the `Callable` trait, the seam every
//!   checked function goes through
//! - `Sequence`, lazily produced results, and its element checking adapter
//! - `Guard` and `Checked`, the wrapper that checks arguments before the
//!   call and results after it

pub mod callable;
pub mod sequence;
pub mod wrapper;
