#![allow(clippy::module_inception)]

pub mod checker;
pub mod config;
pub mod contract;
pub mod declarations;
pub mod errors;
pub mod invocation;
pub mod macros;
pub mod resolver;
pub mod values;

extern crate regex;

pub use crate::{
    config::{mode, Mode},
    contract::signature::Signature,
    declarations::declaration::{Declaration, Predicate},
    errors::errors::{Violation, ViolationKind},
    invocation::{
        callable::{Arguments, Callable, Function, Returned},
        sequence::Sequence,
        wrapper::{checked, checked_with, Checked},
    },
    resolver::{forward::Forward, scope::Scope},
    values::{types::Type, value::Value},
};
