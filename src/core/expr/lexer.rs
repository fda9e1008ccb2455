//! Expression lexer
//!
//! Converts a `math:` payload into a stream of tokens. Whitespace separates
//! tokens and is otherwise dropped. A function name only becomes a `Func`
//! token when the opening parenthesis follows it immediately, matching the
//! `name(` shape the dispatcher recognizes.

use super::token::{FuncName, Token};

/// The expression lexer that converts source text to tokens
pub struct Lexer<'a> {
    chars: std::iter::Peekable<std::str::CharIndices<'a>>,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given input
    pub fn new(input: &'a str) -> Self {
        Lexer {
            chars: input.char_indices().peekable(),
        }
    }

    /// Peek at the next character without consuming it
    fn peek_char(&mut self) -> Option<char> {
        self.chars.peek().map(|(_, c)| *c)
    }

    /// Consume and return the next character
    fn next_char(&mut self) -> Option<char> {
        self.chars.next().map(|(_, c)| c)
    }

    /// Read a number literal: digits with at most one decimal point
    fn read_number(&mut self, first: char) -> String {
        let mut lexeme = String::new();
        lexeme.push(first);
        let mut seen_dot = false;
        while let Some(c) = self.peek_char() {
            if c.is_ascii_digit() {
                lexeme.push(c);
                self.next_char();
            } else if c == '.' && !seen_dot {
                seen_dot = true;
                lexeme.push(c);
                self.next_char();
            } else {
                break;
            }
        }
        lexeme
    }

    /// Read an identifier: `[a-zA-Z_]` followed by word characters
    fn read_ident(&mut self, first: char) -> String {
        let mut lexeme = String::new();
        lexeme.push(first);
        while let Some(c) = self.peek_char() {
            if c.is_alphanumeric() || c == '_' {
                lexeme.push(c);
                self.next_char();
            } else {
                break;
            }
        }
        lexeme
    }

    /// Read the next token
    fn next_token(&mut self) -> Option<Token> {
        // Skip whitespace between tokens
        while let Some(c) = self.peek_char() {
            if c.is_whitespace() {
                self.next_char();
            } else {
                break;
            }
        }

        let c = self.next_char()?;

        match c {
            '+' => Some(Token::Plus),
            '-' => Some(Token::Minus),
            '*' => Some(Token::Star),
            '/' => Some(Token::Slash),
            '(' => Some(Token::LParen),
            ')' => Some(Token::RParen),
            ',' => Some(Token::Comma),
            _ if c.is_ascii_digit() => Some(Token::Number(self.read_number(c))),
            _ if c.is_alphabetic() || c == '_' => {
                let name = self.read_ident(c);
                // `sqrt(` is a call, `sqrt ` or bare `sqrt` is an identifier
                match FuncName::from_ident(&name) {
                    Some(func) if self.peek_char() == Some('(') => Some(Token::Func(func)),
                    _ => Some(Token::Ident(name)),
                }
            }
            _ => Some(Token::Other(c)),
        }
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token()
    }
}

/// Convenience function to tokenize a string
pub fn tokenize(input: &str) -> Vec<Token> {
    Lexer::new(input).collect()
}
