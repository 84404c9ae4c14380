//! Editor marker exports
//!
//! JavaScript owns the editor; it constructs one `ToneMarkers` per view and
//! forwards every update. Offsets in and out are UTF-16 code units.

use wasm_bindgen::prelude::*;

use super::helpers::{deserialize, serialize};
use super::types::{MarkerJs, ViewUpdateJs};
use crate::renderers::editor::{DocumentView, ToneMarkers};
use crate::text::{Encoding, TextRange};

#[wasm_bindgen(js_name = ToneMarkers)]
pub struct ToneMarkersHandle {
    view: DocumentView,
    markers: ToneMarkers,
}

#[wasm_bindgen(js_class = ToneMarkers)]
impl ToneMarkersHandle {
    /// Build markers for a new view
    #[wasm_bindgen(constructor)]
    pub fn new(text: String, visible_ranges: JsValue) -> Result<ToneMarkersHandle, JsValue> {
        let ranges: Vec<TextRange> = deserialize(visible_ranges, "Failed to deserialize visible ranges")?;
        let view = DocumentView::with_encoding(text, Encoding::Utf16).with_visible_ranges(ranges);
        let markers = ToneMarkers::new(&view);
        Ok(Self { view, markers })
    }

    /// Apply a host update; returns whether markers were rebuilt
    pub fn update(&mut self, update: JsValue) -> Result<bool, JsValue> {
        let update: ViewUpdateJs = deserialize(update, "Failed to deserialize view update")?;
        let flags = update.flags();
        if let Some(text) = update.text {
            self.view.set_text(text);
        }
        if let Some(ranges) = update.visible_ranges {
            self.view.set_visible_ranges(ranges);
        }
        Ok(self.markers.update(&self.view, flags))
    }

    /// Current markers as `[{from, to, class}]`
    pub fn decorations(&self) -> Result<JsValue, JsValue> {
        let markers: Vec<MarkerJs> = self.markers.decorations().iter().map(MarkerJs::from).collect();
        serialize(&markers, "Failed to serialize tone markers")
    }

    /// Number of markers currently held
    #[wasm_bindgen(getter)]
    pub fn size(&self) -> usize {
        self.markers.decorations().len()
    }
}
