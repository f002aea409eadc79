//! Declaration interpreter and violation reporting.
//!
//! - `check`, which decides whether a value satisfies a declaration and
//!   builds the violation when it does not
//! - `accepts`, the same decision without diagnostics, used for elements
//!   and union members
//! - `Report` and `Site`, which render violation messages for one position
//!   of one callable

pub mod checker;
pub mod reporter;
