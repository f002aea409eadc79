use std::{
    collections::HashMap,
    sync::{Arc, PoisonError, RwLock},
};

use tracing::debug;

use crate::{
    errors::errors::{Violation, ViolationKind},
    values::types::Type,
};

use super::forward::Forward;

#[derive(Debug)]
struct ScopeInner {
    name: String,
    types: RwLock<HashMap<String, Type>>,
}

/// A named registry of types, shared by every placeholder created from it.
///
/// Cloning a scope yields a handle to the same registry.
#[derive(Debug, Clone)]
pub struct Scope(Arc<ScopeInner>);

impl Scope {
    pub fn new(name: impl Into<String>) -> Self {
        Scope(Arc::new(ScopeInner {
            name: name.into(),
            types: RwLock::new(HashMap::new()),
        }))
    }

    pub fn name(&self) -> &str {
        &self.0.name
    }

    /// Binds `ty` under its own name, replacing any earlier binding.
    pub fn define(&self, ty: &Type) -> Type {
        self.define_as(ty.name(), ty)
    }

    /// Binds `ty` under `name`, replacing any earlier binding.
    pub fn define_as(&self, name: &str, ty: &Type) -> Type {
        let mut types = self.0.types.write().unwrap_or_else(PoisonError::into_inner);
        let replaced = types.insert(name.to_string(), ty.clone()).is_some();
        debug!(scope = %self.name(), name, replaced, "bound type in scope");
        ty.clone()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0
            .types
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(name)
    }

    /// The type currently bound to `name`.
    pub fn lookup(&self, name: &str) -> Result<Type, Violation> {
        self.0
            .types
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(name)
            .cloned()
            .ok_or_else(|| {
                Violation::from_kind(ViolationKind::UnresolvedForwardReference {
                    name: name.to_string(),
                    scope: self.name().to_string(),
                })
            })
    }

    /// Creates a placeholder for `name` that resolves against this scope.
    pub fn forward(&self, name: impl Into<String>) -> Forward {
        Forward::new(name, self)
    }

    pub fn is_same(&self, other: &Scope) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}
