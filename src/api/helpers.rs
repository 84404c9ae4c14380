//! Shared helpers for WASM API operations
//!
//! Serialization across the JavaScript boundary and error conversion. Every
//! error is logged before it is handed back to JavaScript.

use std::fmt::Display;

use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen::prelude::*;

// ============================================================================
// Serialization/Deserialization Helpers
// ============================================================================

/// Deserialize a value from JavaScript with automatic error handling
pub fn deserialize<T: DeserializeOwned>(value: JsValue, error_context: &str) -> Result<T, JsValue> {
    serde_wasm_bindgen::from_value(value).map_err(|e| to_js_error(e, error_context))
}

/// Serialize a value to JavaScript with automatic error handling
pub fn serialize<T: Serialize>(value: &T, error_context: &str) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|e| to_js_error(e, error_context))
}

// ============================================================================
// Result Conversion Helpers
// ============================================================================

/// Log `err` with context and convert it to a JavaScript string error
pub fn to_js_error(err: impl Display, error_context: &str) -> JsValue {
    let msg = format!("{}: {}", error_context, err);
    log::error!("{}", msg);
    JsValue::from_str(&msg)
}
