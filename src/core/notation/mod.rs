//! Shorthand token scanner and dispatcher
//!
//! Finds bracketed shorthand tokens in free text and replaces each with its
//! MathML fragment. Conversion runs as a fixed sequence of passes, one per
//! tag, and is total: a payload that cannot be parsed leaves the token as
//! literal text (legacy tags) or becomes a visible error fragment (`math:`).

pub mod examples;
pub mod fragments;
pub mod unicode;

use lazy_static::lazy_static;
use regex::{Captures, Regex};

use crate::core::expr;

pub use examples::{generate_examples, ConversionExample, EXAMPLES};

lazy_static! {
    // One pattern per tag; a payload is the shortest run without `]`.
    static ref RE_MATH: Regex = Regex::new(r"\[math:([^\]]+)\]").unwrap();
    static ref RE_FRAC: Regex = Regex::new(r"\[frac:([^\]]+)\]").unwrap();
    static ref RE_POW: Regex = Regex::new(r"\[pow:([^\]]+)\]").unwrap();
    static ref RE_SQRT: Regex = Regex::new(r"\[sqrt:([^\]]+)\]").unwrap();
    static ref RE_ROOT: Regex = Regex::new(r"\[root:([^\]]+)\]").unwrap();
    static ref RE_VAR: Regex = Regex::new(r"\[var:([^\]]+)\]").unwrap();
}

/// Convert every shorthand token in `text` to a MathML fragment.
///
/// The pass order is fixed: `math:` first, then the legacy tags in the order
/// `frac:`, `pow:`, `sqrt:`, `root:`, `var:`. Earlier passes' output never
/// matches a later pattern, so the function is idempotent on its own output.
pub fn convert(text: &str) -> String {
    let text = RE_MATH.replace_all(text, |caps: &Captures| replace_math(&caps[1]));
    let text = RE_FRAC.replace_all(&text, |caps: &Captures| {
        replace_fraction(&caps[0], &caps[1])
    });
    let text = RE_POW.replace_all(&text, |caps: &Captures| replace_power(&caps[0], &caps[1]));
    let text = RE_SQRT.replace_all(&text, |caps: &Captures| replace_sqrt(&caps[1]));
    let text = RE_ROOT.replace_all(&text, |caps: &Captures| replace_root(&caps[0], &caps[1]));
    let text = RE_VAR.replace_all(&text, |caps: &Captures| replace_variable(&caps[1]));
    text.into_owned()
}

fn replace_math(payload: &str) -> String {
    match expr::resolve_expression(payload) {
        Ok(fragment) => fragment,
        Err(_) => fragments::error(payload),
    }
}

fn replace_fraction(whole: &str, payload: &str) -> String {
    // Vulgar-fraction glyphs normalize to a num/den pair first.
    if let Some((num, den)) = unicode::lookup(payload.trim()) {
        return fragments::fraction(num, den);
    }
    match payload.split_once('/') {
        Some((num, den)) => fragments::fraction(num.trim(), den.trim()),
        None => whole.to_string(),
    }
}

fn replace_power(whole: &str, payload: &str) -> String {
    match payload.split_once('^') {
        Some((base, exp)) => fragments::power(base.trim(), exp.trim()),
        None => whole.to_string(),
    }
}

fn replace_sqrt(payload: &str) -> String {
    fragments::root(payload.trim(), "2")
}

fn replace_root(whole: &str, payload: &str) -> String {
    let values: Vec<&str> = payload.split(',').collect();
    match values.as_slice() {
        [radicand, index] => fragments::root(radicand.trim(), index.trim()),
        _ => whole.to_string(),
    }
}

fn replace_variable(payload: &str) -> String {
    match payload.split_once('_') {
        Some((name, sub)) => fragments::variable(name.trim(), Some(sub.trim())),
        None => fragments::variable(payload.trim(), None),
    }
}
