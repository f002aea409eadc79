use std::collections::HashMap;

use crate::{declarations::declaration::Declaration, values::value::Value};

#[derive(Debug, Clone, PartialEq)]
pub enum ParameterKind {
    /// Required, fillable by position or keyword.
    Positional,
    /// Fillable by position or keyword, with a default.
    Defaulted(Value),
    /// Only fillable by keyword, optionally with a default.
    KeywordOnly(Option<Value>),
    /// Collects surplus positional arguments.
    ExtraPositional,
    /// Collects keyword arguments matching no named parameter.
    ExtraKeyword,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Parameter {
    pub name: String,
    pub kind: ParameterKind,
}

/// The parameter list of a callable plus its declarations.
///
/// Parameters are kept in declaration order. Declarations are keyed by
/// parameter name; a collector's declaration applies to each value it
/// collects. Defaults are never checked.
#[derive(Debug, Clone, Default)]
pub struct Signature {
    parameters: Vec<Parameter>,
    annotations: HashMap<String, Declaration>,
    returns: Option<Declaration>,
}

impl Signature {
    pub fn new() -> Self {
        Signature::default()
    }

    fn with(mut self, name: impl Into<String>, kind: ParameterKind) -> Self {
        self.parameters.push(Parameter {
            name: name.into(),
            kind,
        });
        self
    }

    pub fn positional(self, name: impl Into<String>) -> Self {
        self.with(name, ParameterKind::Positional)
    }

    pub fn defaulted(self, name: impl Into<String>, default: impl Into<Value>) -> Self {
        self.with(name, ParameterKind::Defaulted(default.into()))
    }

    pub fn keyword_only(self, name: impl Into<String>) -> Self {
        self.with(name, ParameterKind::KeywordOnly(None))
    }

    pub fn keyword_only_defaulted(self, name: impl Into<String>, default: impl Into<Value>) -> Self {
        self.with(name, ParameterKind::KeywordOnly(Some(default.into())))
    }

    pub fn extra_positional(self, name: impl Into<String>) -> Self {
        self.with(name, ParameterKind::ExtraPositional)
    }

    pub fn extra_keyword(self, name: impl Into<String>) -> Self {
        self.with(name, ParameterKind::ExtraKeyword)
    }

    /// Attaches a declaration to the parameter called `name`.
    pub fn annotate(mut self, name: impl Into<String>, declaration: impl Into<Declaration>) -> Self {
        self.annotations.insert(name.into(), declaration.into());
        self
    }

    /// Attaches the declaration for the returned value.
    pub fn returns(mut self, declaration: impl Into<Declaration>) -> Self {
        self.returns = Some(declaration.into());
        self
    }

    pub fn parameters(&self) -> &[Parameter] {
        &self.parameters
    }

    pub fn parameter(&self, name: &str) -> Option<&Parameter> {
        self.parameters.iter().find(|parameter| parameter.name == name)
    }

    pub fn annotations(&self) -> &HashMap<String, Declaration> {
        &self.annotations
    }

    pub fn annotation(&self, name: &str) -> Option<&Declaration> {
        self.annotations.get(name)
    }

    pub fn return_annotation(&self) -> Option<&Declaration> {
        self.returns.as_ref()
    }

    pub fn default_of(&self, name: &str) -> Option<&Value> {
        match &self.parameter(name)?.kind {
            ParameterKind::Defaulted(value) => Some(value),
            ParameterKind::KeywordOnly(value) => value.as_ref(),
            _ => None,
        }
    }
}
