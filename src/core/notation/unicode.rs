//! Unicode vulgar-fraction normalization
//!
//! Maps single vulgar-fraction glyphs to their numerator/denominator pair so
//! `[frac:½]` and `[frac:1/2]` produce identical fragments. Unrecognized
//! glyphs fall through to the normal `/`-split logic.

/// Glyph to (numerator, denominator) lookup table
static VULGAR_FRACTIONS: phf::Map<&'static str, (&'static str, &'static str)> = phf::phf_map! {
    "½" => ("1", "2"),
    "⅓" => ("1", "3"),
    "⅔" => ("2", "3"),
    "¼" => ("1", "4"),
    "¾" => ("3", "4"),
    "⅕" => ("1", "5"),
    "⅖" => ("2", "5"),
    "⅗" => ("3", "5"),
    "⅘" => ("4", "5"),
    "⅙" => ("1", "6"),
    "⅚" => ("5", "6"),
    "⅐" => ("1", "7"),
    "⅛" => ("1", "8"),
    "⅜" => ("3", "8"),
    "⅝" => ("5", "8"),
    "⅞" => ("7", "8"),
    "⅑" => ("1", "9"),
    "⅒" => ("1", "10"),
};

/// Look up a vulgar-fraction glyph
pub fn lookup(glyph: &str) -> Option<(&'static str, &'static str)> {
    VULGAR_FRACTIONS.get(glyph).copied()
}
