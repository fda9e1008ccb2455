//! Worked conversion examples
//!
//! Small reference table used by the CLI and by documentation; each entry is
//! converted on demand so the outputs always match the current converter.

use serde::Serialize;

use super::convert;

/// Example shorthand inputs, keyed by construct name
pub const EXAMPLES: &[(&str, &str)] = &[
    ("fraction", "Calculer [frac:3/4] + [frac:1/2]"),
    ("puissance", "Résoudre [pow:x^2] = 16"),
    ("racine", "Simplifier [sqrt:16] + [root:8,3]"),
    (
        "variable",
        "Si [var:x_1] = 5 et [var:x_2] = 3, calculer [var:x_1] + [var:x_2]",
    ),
    ("expression", "Développer [math:pow(a+b,2)]"),
];

/// One worked example: a shorthand input and its converted output
#[derive(Debug, Clone, Serialize)]
pub struct ConversionExample {
    pub name: String,
    pub input: String,
    pub output: String,
}

/// Convert every entry of [`EXAMPLES`]
pub fn generate_examples() -> Vec<ConversionExample> {
    EXAMPLES
        .iter()
        .map(|(name, input)| ConversionExample {
            name: name.to_string(),
            input: input.to_string(),
            output: convert(input),
        })
        .collect()
}
