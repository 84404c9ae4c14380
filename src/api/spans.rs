//! Tone lookup exports

use wasm_bindgen::prelude::*;

use super::helpers::serialize;
use crate::parse::{classify, tone_spans_encoded};
use crate::text::Encoding;

/// Tone spans of `text` as `[{start, end, tone}]`, UTF-16 offsets
#[wasm_bindgen(js_name = toneSpans)]
pub fn tone_spans_js(text: &str) -> Result<JsValue, JsValue> {
    let spans = tone_spans_encoded(text, Encoding::Utf16);
    serialize(&spans, "Failed to serialize tone spans")
}

/// Tone number (1-4) of the first marked vowel in `word`
#[wasm_bindgen(js_name = toneOf)]
pub fn tone_of(word: &str) -> Option<u8> {
    classify(word).map(|tone| tone.number())
}
