//! Mathnote - bracketed math shorthand to MathML converter
//!
//! Converts the bracketed shorthand used in quiz statements into MathML
//! fragments ready for direct embedding:
//!
//! - `[frac:3/4]`, `[pow:x^2]`, `[sqrt:16]`, `[root:8,3]`, `[var:x_1]` -
//!   flat tags with fixed payload shapes
//! - `[math:expr]` - a generalized expression with nested `sqrt(...)`,
//!   `pow(a,b)`, `frac(a,b)` calls and infix `+ - * /`
//!
//! Conversion never fails: malformed legacy payloads stay as literal text,
//! a malformed `math:` payload becomes a visible error fragment, and
//! re-converting already converted text changes nothing.
//!
//! The converter is a pure function of its input. Output is raw markup; the
//! caller is responsible for marking it safe in its rendering layer, and leaf
//! values are inserted verbatim without HTML escaping.
//!
//! # Examples
//!
//! ```
//! use mathnote::convert;
//!
//! let converted = convert("Calculer [frac:3/4] de 16");
//! assert_eq!(
//!     converted,
//!     "Calculer <math class=\"math-inline\"><mfrac><mn>3</mn><mn>4</mn></mfrac></math> de 16"
//! );
//! ```

pub mod core;
pub mod utils;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use crate::core::expr::{resolve_expression, BinOp, Expr, MAX_DEPTH};
pub use crate::core::notation::{convert, generate_examples, ConversionExample, EXAMPLES};
pub use crate::utils::error::{ExprError, ExprResult};
