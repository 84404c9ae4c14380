//! Host lifecycle
//!
//! The host calls `PinyinHighlighter::onload` once when the plugin is
//! activated; it registers one editor extension and one preview post
//! processor through the host's `PluginHost` implementation.

use crate::renderers::editor::{EditorView, ToneMarkers};
use crate::renderers::preview::{annotate_tree, ContentNode};

/// Extension points a host application offers
pub trait PluginHost {
    fn register_editor_extension(&mut self, extension: EditorExtension);
    fn register_post_processor(&mut self, processor: PreviewPostProcessor);
}

/// Factory for per-view tone markers
#[derive(Debug, Clone, Copy, Default)]
pub struct EditorExtension;

impl EditorExtension {
    /// Called by the host for every new editor view
    pub fn create<V: EditorView + ?Sized>(&self, view: &V) -> ToneMarkers {
        ToneMarkers::new(view)
    }
}

/// Preview pass run once per rendered document
#[derive(Debug, Clone, Copy, Default)]
pub struct PreviewPostProcessor;

impl PreviewPostProcessor {
    pub fn process(&self, root: &mut ContentNode) -> usize {
        annotate_tree(root)
    }
}

#[derive(Debug, Default)]
pub struct PinyinHighlighter;

impl PinyinHighlighter {
    pub fn new() -> Self {
        Self
    }

    pub fn onload<H: PluginHost + ?Sized>(&self, host: &mut H) {
        host.register_editor_extension(EditorExtension);
        host.register_post_processor(PreviewPostProcessor);
        log::info!("pinyin tone highlighter loaded");
    }
}
