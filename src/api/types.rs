//! Shared types for the WASM API
//!
//! Shapes exchanged with JavaScript. All offsets are UTF-16 code units.

use serde::{Deserialize, Serialize};

use crate::renderers::editor::{Decoration, ViewUpdate};
use crate::text::TextRange;

/// Editor marker as the host's decoration layer consumes it
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct MarkerJs {
    pub from: usize,
    pub to: usize,
    pub class: String,
}

impl From<&Decoration> for MarkerJs {
    fn from(d: &Decoration) -> Self {
        Self {
            from: d.from,
            to: d.to,
            class: d.class_name(),
        }
    }
}

/// Host change notification; `text`/`visibleRanges` carry the new state
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct ViewUpdateJs {
    #[serde(default)]
    pub doc_changed: bool,
    #[serde(default)]
    pub viewport_changed: bool,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub visible_ranges: Option<Vec<TextRange>>,
}

impl ViewUpdateJs {
    pub fn flags(&self) -> ViewUpdate {
        ViewUpdate {
            doc_changed: self.doc_changed,
            viewport_changed: self.viewport_changed,
        }
    }
}
