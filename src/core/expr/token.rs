//! Token definitions for the expression engine.
//!
//! The `math:` payload is tokenized once, then parsed; tokens keep their
//! source lexeme so an unparseable run can be turned back into literal text.

use std::fmt;

/// The built-in function names the engine understands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FuncName {
    Sqrt,
    Pow,
    Frac,
}

impl FuncName {
    /// Look up a function name, `None` for anything else
    pub fn from_ident(name: &str) -> Option<Self> {
        match name {
            "sqrt" => Some(FuncName::Sqrt),
            "pow" => Some(FuncName::Pow),
            "frac" => Some(FuncName::Frac),
            _ => None,
        }
    }

    /// The name as it appears in source
    pub fn as_str(&self) -> &'static str {
        match self {
            FuncName::Sqrt => "sqrt",
            FuncName::Pow => "pow",
            FuncName::Frac => "frac",
        }
    }
}

/// A single token of a `math:` expression
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// An integer or decimal literal like `42` or `3.14`
    Number(String),

    /// An identifier like `x` or `vitesse`
    Ident(String),

    /// A known function name immediately followed by `(` in source.
    /// `sqrt x` or `pow + 1` lex as plain identifiers instead.
    Func(FuncName),

    Plus,
    Minus,
    Star,
    Slash,
    LParen,
    RParen,
    Comma,

    /// Any other character, preserved verbatim
    Other(char),
}

impl Token {
    /// Returns true for the `+` and `-` operator tokens
    pub fn is_additive(&self) -> bool {
        matches!(self, Token::Plus | Token::Minus)
    }

    /// Returns true for the `*` and `/` operator tokens
    pub fn is_multiplicative(&self) -> bool {
        matches!(self, Token::Star | Token::Slash)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Number(s) => write!(f, "{}", s),
            Token::Ident(s) => write!(f, "{}", s),
            Token::Func(name) => write!(f, "{}", name.as_str()),
            Token::Plus => write!(f, "+"),
            Token::Minus => write!(f, "-"),
            Token::Star => write!(f, "*"),
            Token::Slash => write!(f, "/"),
            Token::LParen => write!(f, "("),
            Token::RParen => write!(f, ")"),
            Token::Comma => write!(f, ","),
            Token::Other(c) => write!(f, "{}", c),
        }
    }
}

/// Reconstruct source text from a token run (whitespace is not preserved)
pub fn tokens_to_text(tokens: &[Token]) -> String {
    use std::fmt::Write;

    let mut text = String::new();
    for token in tokens {
        let _ = write!(text, "{}", token);
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_func_name_lookup() {
        assert_eq!(FuncName::from_ident("sqrt"), Some(FuncName::Sqrt));
        assert_eq!(FuncName::from_ident("pow"), Some(FuncName::Pow));
        assert_eq!(FuncName::from_ident("frac"), Some(FuncName::Frac));
        assert_eq!(FuncName::from_ident("cos"), None);
    }

    #[test]
    fn test_tokens_to_text() {
        let tokens = vec![
            Token::Func(FuncName::Pow),
            Token::LParen,
            Token::Ident("x".into()),
            Token::Comma,
            Token::Number("2".into()),
            Token::RParen,
        ];
        assert_eq!(tokens_to_text(&tokens), "pow(x,2)");
    }
}
