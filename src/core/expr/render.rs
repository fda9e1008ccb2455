//! Expression tree to MathML serialization
//!
//! One pass over the tree; every node becomes exactly one MathML element.

use super::parser::{BinOp, Expr};

/// Render a node to its MathML element
pub fn render(expr: &Expr) -> String {
    match expr {
        Expr::Empty => "<mi></mi>".to_string(),
        Expr::Number(s) => format!("<mn>{}</mn>", s),
        Expr::Ident(s) => format!("<mi>{}</mi>", s),
        Expr::Binary { op, lhs, rhs } => format!(
            "<mrow>{}<mo>{}</mo>{}</mrow>",
            render(lhs),
            op.glyph(),
            render(rhs)
        ),
        Expr::Sqrt(arg) => format!("<msqrt>{}</msqrt>", render(arg)),
        Expr::Pow { base, exp } => format!("<msup>{}{}</msup>", render(base), render(exp)),
        Expr::Frac { num, den } => format!("<mfrac>{}{}</mfrac>", render(num), render(den)),
    }
}

/// Render a whole tree as a display-math fragment
pub fn render_display(expr: &Expr) -> String {
    format!("<math class=\"math-display\">{}</math>", render(expr))
}
