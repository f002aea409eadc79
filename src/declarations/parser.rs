//! Recursive descent parser for textual declarations.
//!
//! Grammar:
//!
//! ```text
//! decl       := "None" | NAME | union | collection
//! union      := "(" member ("," member)* ","? ")"
//! member     := "None" | decl
//! collection := "{" NAME ":" decl ("," NAME ":" decl)* ","? "}"
//! ```

use crate::{errors::errors::DeclarationError, resolver::scope::Scope, values::types::Type};

use super::{
    declaration::Declaration,
    lexer::tokenize,
    tokens::{Token, TokenKind},
};

/// Parsing state over one tokenized declaration.
pub struct Parser<'a> {
    /// Always terminated by an EOF token
    tokens: Vec<Token>,
    pos: usize,
    /// Scope non-builtin names are resolved against
    scope: &'a Scope,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: Vec<Token>, scope: &'a Scope) -> Self {
        Parser {
            tokens,
            pos: 0,
            scope,
        }
    }

    /// Returns the current token without advancing.
    ///
    /// Past the end this keeps returning the final EOF token.
    pub fn current_token(&self) -> &Token {
        let index = self.pos.min(self.tokens.len().saturating_sub(1));
        &self.tokens[index]
    }

    pub fn current_token_kind(&self) -> TokenKind {
        if self.tokens.is_empty() {
            TokenKind::EOF
        } else {
            self.current_token().kind
        }
    }

    /// Advances to the next token and returns the previous one.
    pub fn advance(&mut self) -> Token {
        let token = self.current_token().clone();
        self.pos += 1;
        token
    }

    /// Consumes a token of `expected_kind` or reports what was found instead.
    pub fn expect(&mut self, expected_kind: TokenKind, expected: &str) -> Result<Token, DeclarationError> {
        if self.current_token_kind() != expected_kind {
            Err(self.unexpected(expected))
        } else {
            Ok(self.advance())
        }
    }

    fn unexpected(&self, expected: &str) -> DeclarationError {
        let token = self.current_token();
        DeclarationError::UnexpectedToken {
            token: token.value.clone(),
            offset: token.offset,
            expected: expected.to_string(),
        }
    }

    /// Builtin names are exact; everything else is looked up lazily.
    fn resolve_name(&self, name: &str) -> Declaration {
        match Type::lookup_builtin(name) {
            Some(ty) => Declaration::Exact(ty),
            None => Declaration::Forward(self.scope.forward(name)),
        }
    }

    /// Container keys are compared by identity, so they resolve right away.
    fn resolve_container(&self, name: &str) -> Result<Type, DeclarationError> {
        match Type::lookup_builtin(name) {
            Some(ty) => Ok(ty),
            None => self
                .scope
                .lookup(name)
                .map_err(|_| DeclarationError::UnknownContainer {
                    name: name.to_string(),
                }),
        }
    }
}

pub fn parse(source: &str, scope: &Scope) -> Result<Declaration, DeclarationError> {
    let tokens = tokenize(source)?;
    let mut parser = Parser::new(tokens, scope);

    let declaration = parse_declaration(&mut parser)?;
    parser.expect(TokenKind::EOF, "end of declaration")?;

    Ok(declaration)
}

fn parse_declaration(parser: &mut Parser) -> Result<Declaration, DeclarationError> {
    match parser.current_token_kind() {
        TokenKind::None => {
            parser.advance();
            Ok(Declaration::NoneOnly)
        }
        TokenKind::Identifier => {
            let name = parser.advance().value;
            Ok(parser.resolve_name(&name))
        }
        TokenKind::OpenParen => parse_union(parser),
        TokenKind::OpenCurly => parse_collection(parser),
        _ => Err(parser.unexpected("a declaration")),
    }
}

fn parse_union(parser: &mut Parser) -> Result<Declaration, DeclarationError> {
    parser.expect(TokenKind::OpenParen, "`(`")?;

    let mut members = vec![];
    while parser.current_token_kind() != TokenKind::CloseParen {
        if parser.current_token_kind() == TokenKind::None {
            parser.advance();
            members.push(None);
        } else {
            members.push(Some(parse_declaration(parser)?));
        }

        if parser.current_token_kind() == TokenKind::Comma {
            parser.advance();
        } else {
            break;
        }
    }

    parser.expect(TokenKind::CloseParen, "`,` or `)`")?;
    Ok(Declaration::Union(members))
}

fn parse_collection(parser: &mut Parser) -> Result<Declaration, DeclarationError> {
    parser.expect(TokenKind::OpenCurly, "`{`")?;

    let mut entries = vec![];
    while parser.current_token_kind() != TokenKind::CloseCurly {
        let name = parser.expect(TokenKind::Identifier, "a container type")?.value;
        let container = parser.resolve_container(&name)?;
        parser.expect(TokenKind::Colon, "`:`")?;
        entries.push((container, parse_declaration(parser)?));

        if parser.current_token_kind() == TokenKind::Comma {
            parser.advance();
        } else {
            break;
        }
    }

    parser.expect(TokenKind::CloseCurly, "`,` or `}`")?;
    Ok(Declaration::Collection(entries))
}
