use std::collections::HashMap;

use tracing::debug;

use crate::{
    checker::reporter::Site,
    declarations::declaration::Declaration,
    invocation::callable::Arguments,
    values::value::Value,
};

use super::signature::{ParameterKind, Signature};

/// One supplied argument paired with the declaration that governs it.
#[derive(Debug)]
pub struct Binding<'a> {
    pub site: Site,
    pub value: &'a Value,
    pub declaration: &'a Declaration,
}

/// The checking view of a signature.
///
/// Derived once per call so that declarations attached after wrapping are
/// still honoured.
#[derive(Debug, Clone)]
pub struct Contract {
    /// Parameters fillable by position, in order
    parameters: Vec<String>,
    keyword_only: Vec<String>,
    extra_positional: Option<String>,
    extra_keyword: Option<String>,
    declarations: HashMap<String, Declaration>,
    returns: Option<Declaration>,
}

impl Contract {
    pub fn derive(signature: &Signature) -> Self {
        let mut contract = Contract {
            parameters: vec![],
            keyword_only: vec![],
            extra_positional: None,
            extra_keyword: None,
            declarations: signature.annotations().clone(),
            returns: signature.return_annotation().cloned(),
        };

        for parameter in signature.parameters() {
            match parameter.kind {
                ParameterKind::Positional | ParameterKind::Defaulted(_) => {
                    contract.parameters.push(parameter.name.clone())
                }
                ParameterKind::KeywordOnly(_) => contract.keyword_only.push(parameter.name.clone()),
                ParameterKind::ExtraPositional => {
                    contract.extra_positional.get_or_insert_with(|| parameter.name.clone());
                }
                ParameterKind::ExtraKeyword => {
                    contract.extra_keyword.get_or_insert_with(|| parameter.name.clone());
                }
            }
        }

        debug!(
            parameters = contract.parameters.len(),
            keyword_only = contract.keyword_only.len(),
            declared = contract.declarations.len(),
            "derived contract"
        );
        contract
    }

    pub fn parameters(&self) -> &[String] {
        &self.parameters
    }

    pub fn keyword_only(&self) -> &[String] {
        &self.keyword_only
    }

    pub fn extra_positional(&self) -> Option<&str> {
        self.extra_positional.as_deref()
    }

    pub fn extra_keyword(&self) -> Option<&str> {
        self.extra_keyword.as_deref()
    }

    pub fn declaration(&self, name: &str) -> Option<&Declaration> {
        self.declarations.get(name)
    }

    pub fn returns(&self) -> Option<&Declaration> {
        self.returns.as_ref()
    }

    /// Pairs every supplied argument that has a declaration with it.
    ///
    /// Positional arguments come first, numbered from 1, then keyword
    /// arguments in the order supplied. Arguments without a declaration,
    /// and defaults that were not supplied, are skipped.
    pub fn bind<'a>(&'a self, arguments: &'a Arguments) -> impl Iterator<Item = Binding<'a>> + 'a {
        self.bind_positional(arguments).chain(self.bind_keywords(arguments))
    }

    fn bind_positional<'a>(&'a self, arguments: &'a Arguments) -> impl Iterator<Item = Binding<'a>> + 'a {
        arguments
            .positional
            .iter()
            .enumerate()
            .filter_map(move |(index, value)| {
                let name = self.parameters.get(index).or(self.extra_positional.as_ref())?;
                let declaration = self.declarations.get(name)?;
                Some(Binding {
                    site: Site::positional(index + 1, name.as_str()),
                    value,
                    declaration,
                })
            })
    }

    fn bind_keywords<'a>(&'a self, arguments: &'a Arguments) -> impl Iterator<Item = Binding<'a>> + 'a {
        arguments.keyword.iter().filter_map(move |(name, value)| {
            let declaration = if self.parameters.contains(name) || self.keyword_only.contains(name) {
                self.declarations.get(name)
            } else {
                self.extra_keyword
                    .as_ref()
                    .and_then(|collector| self.declarations.get(collector))
            }?;
            Some(Binding {
                site: Site::keyword(name.as_str()),
                value,
                declaration,
            })
        })
    }
}
