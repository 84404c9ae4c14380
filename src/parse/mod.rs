//! Text scanning and tone classification
//!
//! This module turns raw text into ordered, non-overlapping tone spans:
//!
//! text → `matcher` (tokens) → `classifier` (tone) → `spans` (ToneSpan list)

pub mod matcher;
pub mod classifier;
pub mod spans;

pub use matcher::{Token, TokenMatcher};
pub use classifier::classify;
pub use spans::{segments, tone_spans, tone_spans_encoded, Segment, ToneSpan, ToneSpans};
