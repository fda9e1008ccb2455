//! WASM bindings for mathnote
//!
//! JavaScript-accessible entry points for shorthand conversion, used by the
//! quiz web frontend.

#[cfg(feature = "wasm")]
use wasm_bindgen::prelude::*;

/// Initialize panic reporting in the browser console
#[cfg(feature = "wasm")]
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Convert every shorthand token in `text` to a MathML fragment
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = convert)]
pub fn convert_wasm(text: &str) -> String {
    crate::convert(text)
}

/// Resolve a bare `math:` expression; malformed input yields the same
/// visible error fragment the dispatcher would embed
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = resolveExpression)]
pub fn resolve_expression_wasm(expr: &str) -> String {
    match crate::resolve_expression(expr) {
        Ok(fragment) => fragment,
        Err(_) => crate::core::notation::fragments::error(expr),
    }
}
