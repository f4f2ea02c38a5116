//! WASM bindings for the figmagen generator.
//!
//! Exposes `generate()` to a design-tool plugin host via wasm-bindgen.
//! Returns a JS object `{ code, css }` or throws on error.

use figmagen_scene::{DesignNode, GenerateConfig, Scene};
use wasm_bindgen::prelude::*;

/// Generate a React component and stylesheet from a design node.
///
/// `node` is the plain-object form of the selected node; `config` is
/// `{ styleMode?, unitType? }` and may be omitted. Throws a JS error if
/// either cannot be read.
#[wasm_bindgen]
pub fn generate(node: JsValue, config: JsValue) -> Result<JsValue, JsError> {
    let node: DesignNode =
        serde_wasm_bindgen::from_value(node).map_err(|e| JsError::new(&e.to_string()))?;
    let config = read_config(config)?;

    let output = figmagen_codegen::generate(&Scene::new(node), config);

    let js_obj = js_sys::Object::new();
    js_sys::Reflect::set(&js_obj, &"code".into(), &output.code.into())
        .map_err(|_| JsError::new("Failed to set code property"))?;
    js_sys::Reflect::set(&js_obj, &"css".into(), &output.css.into())
        .map_err(|_| JsError::new("Failed to set css property"))?;

    Ok(js_obj.into())
}

fn read_config(config: JsValue) -> Result<GenerateConfig, JsError> {
    if config.is_undefined() || config.is_null() {
        return Ok(GenerateConfig::default());
    }
    serde_wasm_bindgen::from_value(config).map_err(|e| JsError::new(&e.to_string()))
}

/// Get the generator version.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
