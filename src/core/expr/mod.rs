//! Expression engine for the `math:` tag
//!
//! Resolves a nested-function/infix-operator expression string into a single
//! MathML fragment: the payload is tokenized once, parsed into an expression
//! tree, and serialized in one pass. Malformed arities degrade to literal
//! text inside the tree; unmatched parentheses and excessive nesting surface
//! as an [`ExprError`] that the dispatcher renders as a visible fragment.

pub mod lexer;
pub mod parser;
pub mod render;
pub mod token;

pub use parser::{BinOp, Expr, MAX_DEPTH};

use crate::utils::error::ExprResult;

/// Resolve a `math:` expression into a complete MathML fragment.
///
/// Text that is already a composed fragment is returned verbatim, which
/// makes resolution idempotent on its own output.
///
/// # Examples
///
/// ```
/// use mathnote::resolve_expression;
///
/// let fragment = resolve_expression("pow(x,2)").unwrap();
/// assert_eq!(
///     fragment,
///     "<math class=\"math-display\"><msup><mi>x</mi><mn>2</mn></msup></math>"
/// );
/// ```
pub fn resolve_expression(expr: &str) -> ExprResult<String> {
    let trimmed = expr.trim();

    // Recursion terminal: already-composed markup passes through unchanged.
    if trimmed.starts_with("<math") && trimmed.ends_with("</math>") {
        return Ok(trimmed.to_string());
    }

    let tokens = lexer::tokenize(trimmed);
    let tree = parser::parse(&tokens)?;
    Ok(render::render_display(&tree))
}
