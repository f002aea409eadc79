use std::{borrow::Cow, fmt::Debug, sync::Arc};

use crate::{
    errors::errors::DeclarationError,
    resolver::{forward::Forward, scope::Scope},
    values::{types::Type, value::Value},
};

use super::parser::parse;

/// A single-argument check used as a pre- or post-condition.
#[derive(Clone)]
pub struct Predicate {
    label: String,
    test: Arc<dyn Fn(&Value) -> bool + Send + Sync>,
}

impl Predicate {
    pub fn new<F>(test: F) -> Self
    where
        F: Fn(&Value) -> bool + Send + Sync + 'static,
    {
        Predicate::labelled("<condition>", test)
    }

    /// A predicate with a name shown wherever declared types are listed.
    pub fn labelled<F>(label: impl Into<String>, test: F) -> Self
    where
        F: Fn(&Value) -> bool + Send + Sync + 'static,
    {
        Predicate {
            label: label.into(),
            test: Arc::new(test),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn test(&self, value: &Value) -> bool {
        (self.test)(value)
    }
}

impl Debug for Predicate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Predicate({})", self.label)
    }
}

/// What values are acceptable at a parameter or return position.
#[derive(Debug, Clone)]
pub enum Declaration {
    /// An instance of the type or of a subtype.
    Exact(Type),
    /// Accepted by any member; a `None` member admits the absence value.
    Union(Vec<Option<Declaration>>),
    /// Only the absence value.
    NoneOnly,
    /// Container type, matched exactly, mapped to the declaration every
    /// element has to satisfy.
    Collection(Vec<(Type, Declaration)>),
    Predicate(Predicate),
    Forward(Forward),
}

impl Declaration {
    pub fn exact(ty: &Type) -> Self {
        Declaration::Exact(ty.clone())
    }

    pub fn union<I>(members: I) -> Self
    where
        I: IntoIterator<Item = Option<Declaration>>,
    {
        Declaration::Union(members.into_iter().collect())
    }

    /// Shorthand for a union of `declaration` and the absence value.
    pub fn optional(declaration: impl Into<Declaration>) -> Self {
        Declaration::Union(vec![Some(declaration.into()), None])
    }

    pub fn none() -> Self {
        Declaration::NoneOnly
    }

    pub fn collection<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (Type, Declaration)>,
    {
        Declaration::Collection(entries.into_iter().collect())
    }

    pub fn collection_of(container: &Type, element: impl Into<Declaration>) -> Self {
        Declaration::Collection(vec![(container.clone(), element.into())])
    }

    pub fn predicate<F>(test: F) -> Self
    where
        F: Fn(&Value) -> bool + Send + Sync + 'static,
    {
        Declaration::Predicate(Predicate::new(test))
    }

    /// Parses the textual form, e.g. `(str, None)` or `{set: int}`.
    ///
    /// Builtin names become exact declarations; any other name becomes a
    /// forward reference into `scope`.
    pub fn parse(source: &str, scope: &Scope) -> Result<Declaration, DeclarationError> {
        parse(source, scope)
    }

    /// Removes the absence marker from a union.
    ///
    /// Returns the remaining declaration and whether the absence value is
    /// accepted. A single remaining member stands on its own; no remaining
    /// member leaves `NoneOnly`.
    pub fn strip_absence(&self) -> (Cow<'_, Declaration>, bool) {
        match self {
            Declaration::Union(members) if members.iter().any(Option::is_none) => {
                let mut remaining: Vec<Declaration> = members.iter().flatten().cloned().collect();
                let stripped = match remaining.len() {
                    0 => Declaration::NoneOnly,
                    1 => remaining.remove(0),
                    _ => Declaration::Union(remaining.into_iter().map(Some).collect()),
                };
                (Cow::Owned(stripped), true)
            }
            _ => (Cow::Borrowed(self), false),
        }
    }

    /// Type names as listed in diagnostics.
    pub fn describe(&self) -> Vec<String> {
        match self {
            Declaration::Exact(ty) => vec![ty.name().to_string()],
            Declaration::Forward(forward) => vec![forward.name().to_string()],
            Declaration::Union(members) => members
                .iter()
                .flat_map(|member| match member {
                    Some(declaration) => declaration.describe(),
                    None => vec![String::from("None")],
                })
                .collect(),
            Declaration::NoneOnly => vec![String::from("None")],
            Declaration::Collection(entries) => entries
                .iter()
                .map(|(container, element)| {
                    format!("{}[{}]", container.name(), element.describe().join(", "))
                })
                .collect(),
            Declaration::Predicate(predicate) => vec![predicate.label().to_string()],
        }
    }
}

impl From<Type> for Declaration {
    fn from(ty: Type) -> Self {
        Declaration::Exact(ty)
    }
}

impl From<&Type> for Declaration {
    fn from(ty: &Type) -> Self {
        Declaration::Exact(ty.clone())
    }
}

impl From<Forward> for Declaration {
    fn from(forward: Forward) -> Self {
        Declaration::Forward(forward)
    }
}

impl From<Predicate> for Declaration {
    fn from(predicate: Predicate) -> Self {
        Declaration::Predicate(predicate)
    }
}
