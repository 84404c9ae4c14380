//! Pinyin Tone Highlighter WASM Module
//!
//! Colors pinyin syllables by tone in a host note editor. Text is scanned for
//! word tokens carrying a tone diacritic; each becomes a span tagged with its
//! tone, rendered as editor markers or as wrapped spans in the preview.

pub mod models;
pub mod parse;
pub mod text;
pub mod renderers;
pub mod plugin;
pub mod api;

// Re-export commonly used types
pub use models::{Surface, Tone};
pub use parse::{classify, tone_spans, ToneSpan};
pub use plugin::{PinyinHighlighter, PluginHost};

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    init_logging();
    log::info!("Pinyin tone highlighter WASM module initialized");
}

#[cfg(feature = "console_log")]
fn init_logging() {
    if console_log::init_with_level(log::Level::Debug).is_err() {
        log::warn!("logger already initialized");
    }
}

#[cfg(not(feature = "console_log"))]
fn init_logging() {}
