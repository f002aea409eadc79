use lazy_static::lazy_static;
use regex::Regex;

use crate::{errors::errors::DeclarationError, MK_DEFAULT_HANDLER, MK_TOKEN};

use super::tokens::{Token, TokenKind, RESERVED_LOOKUP};

pub type RegexHandler = fn(&mut Lexer, &Regex);

pub struct RegexPattern {
    regex: Regex,
    handler: RegexHandler,
}

impl RegexPattern {
    fn new(pattern: &str, handler: RegexHandler) -> Self {
        RegexPattern {
            // Patterns are fixed at compile time.
            regex: Regex::new(pattern).expect("invalid token pattern"),
            handler,
        }
    }
}

lazy_static! {
    static ref PATTERNS: Vec<RegexPattern> = vec![
        RegexPattern::new("^[a-zA-Z_][a-zA-Z0-9_.]*", symbol_handler),
        RegexPattern::new("^\\s+", skip_handler),
        RegexPattern::new("^\\(", MK_DEFAULT_HANDLER!(TokenKind::OpenParen, "(")),
        RegexPattern::new("^\\)", MK_DEFAULT_HANDLER!(TokenKind::CloseParen, ")")),
        RegexPattern::new("^\\{", MK_DEFAULT_HANDLER!(TokenKind::OpenCurly, "{")),
        RegexPattern::new("^\\}", MK_DEFAULT_HANDLER!(TokenKind::CloseCurly, "}")),
        RegexPattern::new("^:", MK_DEFAULT_HANDLER!(TokenKind::Colon, ":")),
        RegexPattern::new("^,", MK_DEFAULT_HANDLER!(TokenKind::Comma, ",")),
    ];
}

pub struct Lexer {
    tokens: Vec<Token>,
    source: String,
    pos: usize,
}

impl Lexer {
    pub fn new(source: String) -> Lexer {
        Lexer {
            tokens: vec![],
            source,
            pos: 0,
        }
    }

    pub fn advance_n(&mut self, n: usize) {
        self.pos += n;
    }

    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    pub fn remainder(&self) -> &str {
        &self.source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }
}

fn skip_handler(lexer: &mut Lexer, regex: &Regex) {
    if let Some(matched) = regex.find(lexer.remainder()) {
        lexer.advance_n(matched.end());
    }
}

fn symbol_handler(lexer: &mut Lexer, regex: &Regex) {
    let Some(matched) = regex.find(lexer.remainder()) else {
        return;
    };
    let value = matched.as_str().to_string();
    let kind = RESERVED_LOOKUP
        .get(value.as_str())
        .copied()
        .unwrap_or(TokenKind::Identifier);

    let length = value.len();
    lexer.push(MK_TOKEN!(kind, value, lexer.pos));
    lexer.advance_n(length);
}

pub fn tokenize(source: &str) -> Result<Vec<Token>, DeclarationError> {
    let mut lex = Lexer::new(source.to_string());

    while !lex.at_eof() {
        let pattern = PATTERNS
            .iter()
            .find(|pattern| pattern.regex.is_match(lex.remainder()));

        match pattern {
            Some(pattern) => (pattern.handler)(&mut lex, &pattern.regex),
            None => {
                return Err(DeclarationError::UnrecognisedToken {
                    token: lex.remainder().chars().take(1).collect(),
                    offset: lex.pos,
                })
            }
        }
    }

    lex.push(MK_TOKEN!(TokenKind::EOF, String::from("EOF"), lex.pos));
    Ok(lex.tokens)
}
