//! WASM bindings for the templex pipeline.
//!
//! Exposes `parse()` to JavaScript via wasm-bindgen. Returns an array of
//! node trees (one per located template region) or throws when the
//! framework name is unknown.

use std::str::FromStr;
use wasm_bindgen::prelude::*;

use templex_parser::Framework;

/// Parse source text and return its template trees.
///
/// `framework` selects a locator strategy by name ("html", "angular",
/// "jsx", "lit", "svelte", "vue"); plain markup when omitted. Throws a JS
/// error for an unknown name.
#[wasm_bindgen]
pub fn parse(source: &str, framework: Option<String>) -> Result<JsValue, JsError> {
    let framework = match framework.as_deref() {
        Some(name) => Framework::from_str(name).map_err(|e| JsError::new(&e.to_string()))?,
        None => Framework::Html,
    };

    let trees = templex_parser::parse_with(source, framework.plugin());
    serde_wasm_bindgen::to_value(&trees).map_err(|e| JsError::new(&e.to_string()))
}

/// Get the parser version.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
