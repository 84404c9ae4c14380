//! Editable-view tone markers
//!
//! Keeps a decoration set in sync with the visible part of a live document.
//! Every refresh rebuilds the whole set from the currently visible ranges;
//! nothing is patched incrementally, so cost is bounded by what is on screen.

use std::borrow::Cow;

use serde::Serialize;

use super::errors::DecorationError;
use crate::models::{Surface, Tone};
use crate::parse::ToneSpans;
use crate::text::{Encoding, OffsetCursor, TextRange};

/// What the editing host exposes about a live view
pub trait EditorView {
    /// Currently visible ranges, in the view's offset units
    fn visible_ranges(&self) -> Vec<TextRange>;

    /// Document text covered by `range`, or `None` if the range is not
    /// addressable (out of bounds, splits a character)
    fn slice(&self, range: TextRange) -> Option<Cow<'_, str>>;

    /// Offset units used by `visible_ranges` and expected back in decorations
    fn encoding(&self) -> Encoding {
        Encoding::Utf8
    }
}

/// Change notification from the host
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ViewUpdate {
    pub doc_changed: bool,
    pub viewport_changed: bool,
}

impl ViewUpdate {
    pub fn doc_changed() -> Self {
        Self { doc_changed: true, viewport_changed: false }
    }

    pub fn viewport_changed() -> Self {
        Self { doc_changed: false, viewport_changed: true }
    }

    pub fn needs_rebuild(&self) -> bool {
        self.doc_changed || self.viewport_changed
    }
}

/// A tone marker over a document range, in view offset units
#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Decoration {
    pub from: usize,
    pub to: usize,
    pub tone: Tone,
}

impl Decoration {
    pub fn new(from: usize, to: usize, tone: Tone) -> Self {
        Self { from, to, tone }
    }

    /// Style hook for the editor surface, e.g. `pinyin-editor-tone2`
    pub fn class_name(&self) -> String {
        self.tone.class_name(Surface::Editor)
    }

    pub fn range(&self) -> TextRange {
        TextRange::new(self.from, self.to)
    }
}

/// Ordered, non-overlapping set of decorations
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DecorationSet {
    items: Vec<Decoration>,
}

impl DecorationSet {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Decoration> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[Decoration] {
        &self.items
    }
}

impl<'a> IntoIterator for &'a DecorationSet {
    type Item = &'a Decoration;
    type IntoIter = std::slice::Iter<'a, Decoration>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// Builds a `DecorationSet`, rejecting anything out of order
#[derive(Debug, Default)]
pub struct DecorationSetBuilder {
    items: Vec<Decoration>,
}

impl DecorationSetBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, decoration: Decoration) -> Result<(), DecorationError> {
        if decoration.range().is_empty() {
            return Err(DecorationError::Empty(decoration.from));
        }
        if let Some(last) = self.items.last() {
            if decoration.from < last.to {
                return Err(DecorationError::Unordered {
                    from: decoration.from,
                    to: decoration.to,
                    last_end: last.to,
                });
            }
        }
        self.items.push(decoration);
        Ok(())
    }

    pub fn finish(self) -> DecorationSet {
        DecorationSet { items: self.items }
    }
}

/// Compute tone decorations over every visible range of `view`
///
/// Ranges are visited in start order. A range that cannot be sliced, or a
/// decoration colliding with an earlier one (overlapping visible ranges),
/// is skipped with a warning.
pub fn build_decorations<V: EditorView + ?Sized>(view: &V) -> DecorationSet {
    let mut ranges = view.visible_ranges();
    ranges.sort_by_key(|r| (r.from, r.to));
    let encoding = view.encoding();

    let mut builder = DecorationSetBuilder::new();
    for range in &ranges {
        if range.is_empty() {
            continue;
        }
        let Some(text) = view.slice(*range) else {
            log::warn!("visible range {}..{} is not addressable, skipping", range.from, range.to);
            continue;
        };

        let mut offsets = OffsetCursor::new(&text, encoding);
        for span in ToneSpans::new(&text) {
            let from = range.from + offsets.units_at(span.start);
            let to = range.from + offsets.units_at(span.end);
            log::trace!("tone {} at {}..{}", span.tone.number(), from, to);
            if let Err(e) = builder.add(Decoration::new(from, to, span.tone)) {
                log::warn!("skipping tone marker: {}", e);
            }
        }
    }

    let set = builder.finish();
    log::debug!("built {} tone markers over {} visible ranges", set.len(), ranges.len());
    set
}

/// Tone markers owned by one editor view
///
/// Created when the view is set up, refreshed on every host update.
#[derive(Debug, Clone, Default)]
pub struct ToneMarkers {
    decorations: DecorationSet,
}

impl ToneMarkers {
    pub fn new<V: EditorView + ?Sized>(view: &V) -> Self {
        Self {
            decorations: build_decorations(view),
        }
    }

    /// Rebuild if the document or viewport changed; returns whether it did
    pub fn update<V: EditorView + ?Sized>(&mut self, view: &V, update: ViewUpdate) -> bool {
        if !update.needs_rebuild() {
            return false;
        }
        self.decorations = build_decorations(view);
        true
    }

    pub fn decorations(&self) -> &DecorationSet {
        &self.decorations
    }
}

/// Plain in-memory document with an explicit viewport
///
/// Offsets are in `encoding` units; defaults to UTF-8 bytes with the whole
/// text visible. A fully visible document stays fully visible across edits
/// until explicit ranges are set.
#[derive(Debug, Clone, Default)]
pub struct DocumentView {
    text: String,
    visible: Vec<TextRange>,
    whole_visible: bool,
    encoding: Encoding,
}

impl DocumentView {
    pub fn new(text: impl Into<String>) -> Self {
        Self::with_encoding(text, Encoding::Utf8)
    }

    /// Document measured in `encoding` units, fully visible
    pub fn with_encoding(text: impl Into<String>, encoding: Encoding) -> Self {
        let text = text.into();
        let visible = vec![TextRange::whole(encoding.measure(&text))];
        Self {
            text,
            visible,
            whole_visible: true,
            encoding,
        }
    }

    pub fn with_visible_ranges(mut self, ranges: Vec<TextRange>) -> Self {
        self.visible = ranges;
        self.whole_visible = false;
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replace the document text; returns the matching update
    pub fn set_text(&mut self, text: impl Into<String>) -> ViewUpdate {
        self.text = text.into();
        if self.whole_visible {
            self.visible = vec![TextRange::whole(self.len())];
        }
        ViewUpdate::doc_changed()
    }

    /// Scroll to new visible ranges; returns the matching update
    pub fn set_visible_ranges(&mut self, ranges: Vec<TextRange>) -> ViewUpdate {
        self.visible = ranges;
        self.whole_visible = false;
        ViewUpdate::viewport_changed()
    }

    /// Document length in `encoding` units
    pub fn len(&self) -> usize {
        self.encoding.measure(&self.text)
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl EditorView for DocumentView {
    fn visible_ranges(&self) -> Vec<TextRange> {
        self.visible.clone()
    }

    /// Ranges running past the end are cut at the end of the text
    fn slice(&self, range: TextRange) -> Option<Cow<'_, str>> {
        let end = range.to.min(self.len());
        let from = self.encoding.to_byte_offset(&self.text, range.from)?;
        let to = self.encoding.to_byte_offset(&self.text, end)?;
        self.text.get(from..to).map(Cow::Borrowed)
    }

    fn encoding(&self) -> Encoding {
        self.encoding
    }
}
