//! Data models for the pinyin tone highlighter
//!
//! This module contains the tone enumeration, the diacritic lookup table,
//! and the rendering surfaces tone labels are emitted for.

pub mod tone;

// Re-export commonly used types
pub use tone::{lookup, is_tone_char, tone_chars, Surface, Tone};
