//! MathML fragment builders for the flat shorthand tags
//!
//! Pure string builders; operands are inserted verbatim. The caller is
//! expected to mark the result as pre-escaped in its rendering layer.

/// An inline fraction fragment
pub fn fraction(num: &str, den: &str) -> String {
    format!(
        "<math class=\"math-inline\"><mfrac><mn>{}</mn><mn>{}</mn></mfrac></math>",
        num, den
    )
}

/// An inline power fragment
pub fn power(base: &str, exp: &str) -> String {
    format!(
        "<math class=\"math-inline\"><msup><mn>{}</mn><mn>{}</mn></msup></math>",
        base, exp
    )
}

/// An inline root fragment; index "2" renders as a plain square root
pub fn root(radicand: &str, index: &str) -> String {
    if index == "2" {
        format!(
            "<math class=\"math-inline\"><msqrt><mn>{}</mn></msqrt></math>",
            radicand
        )
    } else {
        format!(
            "<math class=\"math-inline\"><mroot><mn>{}</mn><mn>{}</mn></mroot></math>",
            radicand, index
        )
    }
}

/// An inline variable fragment with optional subscript
pub fn variable(name: &str, subscript: Option<&str>) -> String {
    match subscript {
        Some(sub) => format!(
            "<math class=\"math-inline\"><msub><mi>{}</mi><mn>{}</mn></msub></math>",
            name, sub
        ),
        None => format!("<math class=\"math-inline\"><mi>{}</mi></math>", name),
    }
}

/// A visible error fragment for a `math:` payload that failed to resolve
pub fn error(payload: &str) -> String {
    format!(
        "<math class=\"math-error\"><merror><mtext>Erreur: {}</mtext></merror></math>",
        payload
    )
}
