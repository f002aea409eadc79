use std::fmt::Debug;

use crate::{
    errors::errors::Violation,
    invocation::callable::Arguments,
    values::{types::Type, value::Value},
};

use super::scope::Scope;

/// A type named before it exists.
///
/// The placeholder captures the scope it was requested from. Every operation
/// looks the name up again, so the type bound at call time is the one used.
#[derive(Clone)]
pub struct Forward {
    name: String,
    scope: Scope,
}

impl Forward {
    pub fn new(name: impl Into<String>, scope: &Scope) -> Self {
        Forward {
            name: name.into(),
            scope: scope.clone(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn scope(&self) -> &Scope {
        &self.scope
    }

    pub fn resolve(&self) -> Result<Type, Violation> {
        self.scope.lookup(&self.name)
    }

    /// Constructs an instance of the resolved type.
    pub fn instantiate(&self, arguments: Arguments) -> Result<Value, Violation> {
        self.resolve()?.instantiate(arguments)
    }

    /// Whether `value` is an instance of the resolved type.
    pub fn is_instance(&self, value: &Value) -> Result<bool, Violation> {
        Ok(value.is_instance(&self.resolve()?))
    }

    /// Whether `candidate` is the resolved type or derives from it.
    pub fn is_subtype(&self, candidate: &Type) -> Result<bool, Violation> {
        Ok(candidate.is_subtype_of(&self.resolve()?))
    }
}

impl Debug for Forward {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Forward({:?} in {:?})", self.name, self.scope.name())
    }
}
