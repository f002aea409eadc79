use std::fmt::Debug;

use crate::{contract::signature::Signature, errors::errors::Violation, values::value::Value};

use super::sequence::Sequence;

/// Arguments of one call, positional then keyword.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Arguments {
    pub positional: Vec<Value>,
    pub keyword: Vec<(String, Value)>,
}

impl Arguments {
    pub fn new() -> Self {
        Arguments::default()
    }

    pub fn arg(mut self, value: impl Into<Value>) -> Self {
        self.positional.push(value.into());
        self
    }

    pub fn kwarg(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.keyword.push((name.into(), value.into()));
        self
    }

    pub fn positional(&self, index: usize) -> Option<&Value> {
        self.positional.get(index)
    }

    pub fn keyword(&self, name: &str) -> Option<&Value> {
        self.keyword
            .iter()
            .find(|(keyword, _)| keyword == name)
            .map(|(_, value)| value)
    }

    /// The argument for a parameter fillable by position or by keyword.
    pub fn lookup(&self, index: usize, name: &str) -> Option<&Value> {
        self.positional(index).or_else(|| self.keyword(name))
    }

    pub fn len(&self) -> usize {
        self.positional.len() + self.keyword.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// What a callable hands back: a single value, or a lazily produced
/// sequence of values.
pub enum Returned<E> {
    Value(Value),
    Lazy(Sequence<E>),
}

impl<E> Returned<E> {
    pub fn is_lazy(&self) -> bool {
        matches!(self, Returned::Lazy(_))
    }

    pub fn into_value(self) -> Option<Value> {
        match self {
            Returned::Value(value) => Some(value),
            Returned::Lazy(_) => None,
        }
    }

    pub fn into_sequence(self) -> Option<Sequence<E>> {
        match self {
            Returned::Lazy(sequence) => Some(sequence),
            Returned::Value(_) => None,
        }
    }
}

impl<E> From<Value> for Returned<E> {
    fn from(value: Value) -> Self {
        Returned::Value(value)
    }
}

impl<E> Debug for Returned<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Returned::Value(value) => f.debug_tuple("Value").field(value).finish(),
            Returned::Lazy(_) => write!(f, "Lazy(..)"),
        }
    }
}

/// Anything that can be called with `Arguments` and describes itself with a
/// `Signature`.
///
/// Errors of the callable pass through a checking wrapper untouched. The
/// wrapper adds its own violations through `From<Violation>`.
pub trait Callable {
    type Error;

    fn name(&self) -> &str;

    fn doc(&self) -> Option<&str> {
        None
    }

    fn signature(&self) -> &Signature;

    fn call(&self, arguments: Arguments) -> Result<Returned<Self::Error>, Self::Error>;
}

pub type Body<E> = Box<dyn Fn(Arguments) -> Result<Returned<E>, E>>;

/// A named closure with a signature.
pub struct Function<E = Violation> {
    name: String,
    doc: Option<String>,
    signature: Signature,
    body: Body<E>,
}

impl<E> Function<E> {
    pub fn new<F>(name: impl Into<String>, signature: Signature, body: F) -> Self
    where
        F: Fn(Arguments) -> Result<Returned<E>, E> + 'static,
    {
        Function {
            name: name.into(),
            doc: None,
            signature,
            body: Box::new(body),
        }
    }

    pub fn with_doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    /// Declarations attached through this are seen by the next checked call.
    pub fn signature_mut(&mut self) -> &mut Signature {
        &mut self.signature
    }
}

impl<E> Callable for Function<E> {
    type Error = E;

    fn name(&self) -> &str {
        &self.name
    }

    fn doc(&self) -> Option<&str> {
        self.doc.as_deref()
    }

    fn signature(&self) -> &Signature {
        &self.signature
    }

    fn call(&self, arguments: Arguments) -> Result<Returned<E>, E> {
        (self.body)(arguments)
    }
}

impl<E> Debug for Function<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Function")
            .field("name", &self.name)
            .field("signature", &self.signature)
            .finish_non_exhaustive()
    }
}
