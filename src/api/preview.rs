//! Preview post-processing exports

use wasm_bindgen::prelude::*;

use super::helpers::to_js_error;
use crate::renderers::preview::{annotate_markup, post_process};

/// Rewrite tone words under a rendered element in place
///
/// Returns the number of text nodes replaced.
#[wasm_bindgen(js_name = postProcess)]
pub fn post_process_js(root: &web_sys::Node) -> Result<usize, JsValue> {
    post_process(root)
}

/// Wrap tone words in a rendered markup string
#[wasm_bindgen(js_name = annotateMarkup)]
pub fn annotate_markup_js(markup: &str) -> Result<String, JsValue> {
    annotate_markup(markup).map_err(|e| to_js_error(e, "Failed to annotate markup"))
}
