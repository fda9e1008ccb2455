//! Recursive-descent parser for `math:` expressions
//!
//! Parses a token run into an expression tree. The splitting strategy is
//! deliberately the leftmost top-level operator, scanned at parenthesis
//! depth 0 with the leading position excluded: `a+b+c` parses as
//! `a + (b + c)` and `+`/`-` bind looser than `*`/`/`. This matches the
//! converter's documented behavior and is not textbook precedence climbing;
//! keep it that way for output compatibility.

use crate::utils::error::{ExprError, ExprResult};

use super::token::{tokens_to_text, FuncName, Token};

/// Maximum expression nesting depth before resolution gives up.
/// Bounds stack growth on pathologically nested input.
pub const MAX_DEPTH: usize = 64;

/// A binary infix operator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinOp {
    Add,
    Sub,
    Mul,
    Div,
}

impl BinOp {
    /// The glyph used in the rendered markup
    pub fn glyph(&self) -> &'static str {
        match self {
            BinOp::Add => "+",
            BinOp::Sub => "-",
            BinOp::Mul => "×",
            BinOp::Div => "÷",
        }
    }

    fn from_token(token: &Token) -> Option<Self> {
        match token {
            Token::Plus => Some(BinOp::Add),
            Token::Minus => Some(BinOp::Sub),
            Token::Star => Some(BinOp::Mul),
            Token::Slash => Some(BinOp::Div),
            _ => None,
        }
    }
}

/// An expression tree node
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// An empty operand (e.g. the right side of a trailing operator)
    Empty,
    /// An integer or decimal literal
    Number(String),
    /// An identifier, or any run of tokens that did not parse as anything
    /// else, kept as literal text
    Ident(String),
    /// An infix binary operation
    Binary {
        op: BinOp,
        lhs: Box<Expr>,
        rhs: Box<Expr>,
    },
    /// `sqrt(arg)`
    Sqrt(Box<Expr>),
    /// `pow(base, exp)`
    Pow { base: Box<Expr>, exp: Box<Expr> },
    /// `frac(num, den)`
    Frac { num: Box<Expr>, den: Box<Expr> },
}

/// Parse a token run into an expression tree
pub fn parse(tokens: &[Token]) -> ExprResult<Expr> {
    parse_run(tokens, 0)
}

fn parse_run(tokens: &[Token], depth: usize) -> ExprResult<Expr> {
    if depth > MAX_DEPTH {
        return Err(ExprError::DepthExceeded { max: MAX_DEPTH });
    }

    if tokens.is_empty() {
        return Ok(Expr::Empty);
    }

    // Loosest binding first: the leftmost top-level + or - splits the run.
    if let Some(i) = find_leftmost(tokens, Token::is_additive) {
        return parse_binary(tokens, i, depth);
    }

    // Then * and /.
    if let Some(i) = find_leftmost(tokens, Token::is_multiplicative) {
        return parse_binary(tokens, i, depth);
    }

    // Matching outer parentheses wrap a sub-expression.
    if tokens[0] == Token::LParen {
        if let Some(close) = matching_paren(tokens, 0) {
            if close == tokens.len() - 1 {
                return parse_run(&tokens[1..close], depth + 1);
            }
        }
    }

    // A whole-run function call: sqrt(...), pow(...), frac(...).
    if let Token::Func(func) = &tokens[0] {
        let close = matching_paren(tokens, 1).ok_or_else(|| ExprError::UnmatchedParen {
            context: tokens_to_text(tokens),
        })?;
        if close == tokens.len() - 1 {
            return parse_call(*func, &tokens[2..close], tokens, depth);
        }
    }

    match tokens {
        [Token::Number(s)] => return Ok(Expr::Number(s.clone())),
        [Token::Ident(s)] => return Ok(Expr::Ident(s.clone())),
        _ => {}
    }

    // Anything unrecognized degrades to literal identifier text.
    Ok(Expr::Ident(tokens_to_text(tokens)))
}

fn parse_binary(tokens: &[Token], at: usize, depth: usize) -> ExprResult<Expr> {
    let op = match BinOp::from_token(&tokens[at]) {
        Some(op) => op,
        None => {
            return Err(ExprError::BadFunctionCall {
                name: tokens[at].to_string(),
                message: "not an operator".to_string(),
            })
        }
    };
    let lhs = parse_run(&tokens[..at], depth + 1)?;
    let rhs = parse_run(&tokens[at + 1..], depth + 1)?;
    Ok(Expr::Binary {
        op,
        lhs: Box::new(lhs),
        rhs: Box::new(rhs),
    })
}

fn parse_call(
    func: FuncName,
    args: &[Token],
    whole: &[Token],
    depth: usize,
) -> ExprResult<Expr> {
    match func {
        FuncName::Sqrt => {
            let arg = parse_run(args, depth + 1)?;
            Ok(Expr::Sqrt(Box::new(arg)))
        }
        FuncName::Pow | FuncName::Frac => {
            let parts = split_args(args);
            if parts.len() != 2 {
                // Wrong arity degrades to literal text, not a hard failure.
                return Ok(Expr::Ident(tokens_to_text(whole)));
            }
            let first = Box::new(parse_run(parts[0], depth + 1)?);
            let second = Box::new(parse_run(parts[1], depth + 1)?);
            Ok(match func {
                FuncName::Pow => Expr::Pow {
                    base: first,
                    exp: second,
                },
                _ => Expr::Frac {
                    num: first,
                    den: second,
                },
            })
        }
    }
}

/// Find the leftmost token matching `pred` at parenthesis depth 0.
/// The leading position never matches: a sign there belongs to the operand.
fn find_leftmost(tokens: &[Token], pred: fn(&Token) -> bool) -> Option<usize> {
    let mut paren_depth = 0i32;
    for (i, token) in tokens.iter().enumerate() {
        match token {
            Token::LParen => paren_depth += 1,
            Token::RParen => paren_depth -= 1,
            t if paren_depth == 0 && i > 0 && pred(t) => return Some(i),
            _ => {}
        }
    }
    None
}

/// Find the index of the parenthesis matching the `(` at `open`
fn matching_paren(tokens: &[Token], open: usize) -> Option<usize> {
    if tokens.get(open) != Some(&Token::LParen) {
        return None;
    }
    let mut paren_depth = 0i32;
    for (i, token) in tokens.iter().enumerate().skip(open) {
        match token {
            Token::LParen => paren_depth += 1,
            Token::RParen => {
                paren_depth -= 1;
                if paren_depth == 0 {
                    return Some(i);
                }
            }
            _ => {}
        }
    }
    None
}

/// Split argument tokens on commas at parenthesis depth 0, so arguments may
/// themselves contain calls with commas
fn split_args(tokens: &[Token]) -> Vec<&[Token]> {
    let mut parts = Vec::new();
    let mut start = 0;
    let mut paren_depth = 0i32;
    for (i, token) in tokens.iter().enumerate() {
        match token {
            Token::LParen => paren_depth += 1,
            Token::RParen => paren_depth -= 1,
            Token::Comma if paren_depth == 0 => {
                parts.push(&tokens[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    parts.push(&tokens[start..]);
    parts
}
