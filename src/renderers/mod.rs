//! Renderers for the two host surfaces
//!
//! - `editor`: decoration sets for the live editable view
//! - `preview`: span wrapping for the static rendered view

pub mod errors;
pub mod editor;
pub mod preview;

pub use errors::{DecorationError, MarkupError};
pub use editor::{build_decorations, Decoration, DecorationSet, DocumentView, EditorView, ToneMarkers, ViewUpdate};
pub use preview::{annotate_markup, annotate_tree, ContentNode};
