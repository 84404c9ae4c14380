//! Pinyin Tone Highlighter WASM API
//!
//! This module provides the JavaScript-facing API. The host's plugin shim
//! loads the module and wires these exports into its extension points.
//!
//! # Module Structure
//!
//! - `helpers`: Serialization and error conversion shared by all exports
//! - `types`: Shapes exchanged with JavaScript
//! - `spans`: `toneSpans`, `toneOf`
//! - `markers`: `ToneMarkers` class for the live editor
//! - `preview`: `postProcess`, `annotateMarkup` for rendered documents

pub mod helpers;
pub mod types;
pub mod spans;
pub mod markers;
pub mod preview;

pub use spans::{tone_of, tone_spans_js};
pub use markers::ToneMarkersHandle;
pub use preview::{annotate_markup_js, post_process_js};
