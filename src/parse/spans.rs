//! Tone span production
//!
//! Combines the token matcher with the classifier: every token that carries
//! a recognized diacritic becomes a `ToneSpan`, in discovery order.

use serde::{Deserialize, Serialize};

use super::classifier::classify;
use super::matcher::TokenMatcher;
use crate::models::Tone;
use crate::text::{Encoding, OffsetCursor};

/// A tone-bearing token, as byte offsets into the text that produced it
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct ToneSpan {
    pub start: usize,
    pub end: usize,
    pub tone: Tone,
}

impl ToneSpan {
    pub fn new(start: usize, end: usize, tone: Tone) -> Self {
        Self { start, end, tone }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Text covered by this span, if `text` is the buffer it came from
    pub fn slice<'a>(&self, text: &'a str) -> Option<&'a str> {
        text.get(self.start..self.end)
    }

    /// Same span relative to a larger buffer the scanned text starts at `base` in
    pub fn shifted(self, base: usize) -> Self {
        Self {
            start: self.start + base,
            end: self.end + base,
            tone: self.tone,
        }
    }
}

/// Lazy iterator of tone spans over one text
#[derive(Clone, Debug)]
pub struct ToneSpans<'a> {
    tokens: TokenMatcher<'a>,
}

impl<'a> ToneSpans<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            tokens: TokenMatcher::new(text),
        }
    }
}

impl<'a> Iterator for ToneSpans<'a> {
    type Item = ToneSpan;

    fn next(&mut self) -> Option<ToneSpan> {
        self.tokens
            .by_ref()
            .find_map(|token| classify(token.text).map(|tone| ToneSpan::new(token.start, token.end, tone)))
    }
}

/// All tone spans in `text`, ordered by start offset
pub fn tone_spans(text: &str) -> Vec<ToneSpan> {
    ToneSpans::new(text).collect()
}

/// Tone spans with offsets measured in `encoding` units
///
/// `Encoding::Utf8` gives the same result as `tone_spans`.
pub fn tone_spans_encoded(text: &str, encoding: Encoding) -> Vec<ToneSpan> {
    let mut offsets = OffsetCursor::new(text, encoding);
    ToneSpans::new(text)
        .map(|span| ToneSpan::new(offsets.units_at(span.start), offsets.units_at(span.end), span.tone))
        .collect()
}

/// Split `text` into alternating plain and tone-bearing pieces
///
/// Concatenating the pieces reproduces `text` exactly. Used by the preview
/// renderers to build wrapped markup.
pub fn segments(text: &str) -> Vec<Segment<'_>> {
    let mut out = Vec::new();
    let mut cursor = 0;
    for span in ToneSpans::new(text) {
        if span.start > cursor {
            out.push(Segment::Plain(&text[cursor..span.start]));
        }
        out.push(Segment::Toned(&text[span.start..span.end], span.tone));
        cursor = span.end;
    }
    if cursor < text.len() {
        out.push(Segment::Plain(&text[cursor..]));
    }
    out
}

/// Piece of a text leaf: verbatim text or a tone-bearing word
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Segment<'a> {
    Plain(&'a str),
    Toned(&'a str, Tone),
}

impl Segment<'_> {
    pub fn text(&self) -> &str {
        match self {
            Segment::Plain(text) | Segment::Toned(text, _) => text,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spans_skip_toneless_tokens() {
        let spans = tone_spans("mā mǎ mà ma");
        assert_eq!(
            spans,
            vec![
                ToneSpan::new(0, 3, Tone::First),
                ToneSpan::new(4, 7, Tone::Third),
                ToneSpan::new(8, 11, Tone::Fourth),
            ]
        );
    }

    #[test]
    fn test_span_slice_and_shift() {
        let text = "say nǐhǎo";
        let span = tone_spans(text)[0];
        assert_eq!(span.slice(text), Some("nǐhǎo"));
        assert_eq!(span.shifted(10), ToneSpan::new(14, 21, Tone::Third));
    }

    #[test]
    fn test_utf16_spans() {
        let spans = tone_spans_encoded("ǎ😀mà", Encoding::Utf16);
        assert_eq!(spans, vec![ToneSpan::new(0, 1, Tone::Third), ToneSpan::new(3, 5, Tone::Fourth)]);
        assert_eq!(tone_spans_encoded("mā mà", Encoding::Utf8), tone_spans("mā mà"));
    }

    #[test]
    fn test_segments_reconstruct_text() {
        let text = "Wǒ ài nǐ!";
        let segs = segments(text);
        let rebuilt: String = segs.iter().map(|s| s.text()).collect();
        assert_eq!(rebuilt, text);
        assert_eq!(
            segs,
            vec![
                Segment::Toned("Wǒ", Tone::Third),
                Segment::Plain(" "),
                Segment::Toned("ài", Tone::Fourth),
                Segment::Plain(" "),
                Segment::Toned("nǐ", Tone::Third),
                Segment::Plain("!"),
            ]
        );
    }

    #[test]
    fn test_segments_without_tones() {
        assert_eq!(segments("hello world"), vec![Segment::Plain("hello world")]);
        assert!(segments("").is_empty());
    }
}
