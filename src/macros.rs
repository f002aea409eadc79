//! Utility macros for the crate.
//!
//! - `MK_TOKEN!` - Creates a declaration Token instance
//! - `MK_DEFAULT_HANDLER!` - Creates a lexer handler for single punctuation tokens
//! - `args!` - Builds call `Arguments` from positional and keyword values

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$value` - The token's string value
/// * `$offset` - Byte offset in the declaration source
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $value:expr, $offset:expr) => {
        Token {
            kind: $kind,
            value: $value,
            offset: $offset,
        }
    };
}

/// Creates a default lexer handler for simple single-token patterns.
///
/// # Example
///
/// ```ignore
/// RegexPattern::new("^,", MK_DEFAULT_HANDLER!(TokenKind::Comma, ","))
/// ```
#[macro_export]
macro_rules! MK_DEFAULT_HANDLER {
    ($kind:expr, $value:literal) => {
        |lexer: &mut Lexer, _regex: &Regex| {
            lexer.push($crate::MK_TOKEN!($kind, String::from($value), lexer.pos));
            lexer.advance_n($value.len());
        }
    };
}

/// Builds call arguments: positional values, then `name = value` pairs
/// after a semicolon.
///
/// # Example
///
/// ```ignore
/// let arguments = args![1, 2.0, "a"; x = "foo", y = "bar"];
/// ```
#[macro_export]
macro_rules! args {
    ($($value:expr),* $(,)? $(; $($name:ident = $keyword:expr),* $(,)?)?) => {{
        #[allow(unused_mut)]
        let mut arguments = $crate::invocation::callable::Arguments::new();
        $(
            arguments = arguments.arg($crate::values::value::Value::from($value));
        )*
        $($(
            arguments = arguments.kwarg(stringify!($name), $crate::values::value::Value::from($keyword));
        )*)?
        arguments
    }};
}
