//! Content tree for rendered documents
//!
//! A small owned DOM: elements, text leaves, and comments. The preview pass
//! rewrites text leaves in place and leaves every other node as it was.

use crate::models::{Surface, Tone};
use crate::parse::{segments, Segment};

/// Elements whose contents are never rewritten
const EXCLUDED_TAGS: [&str; 2] = ["script", "style"];

/// Tag of the inline containers the preview pass creates
pub const WRAPPER_TAG: &str = "span";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentNode {
    Element(Element),
    Text(String),
    Comment(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub tag: String,
    pub attributes: Vec<(String, String)>,
    pub children: Vec<ContentNode>,
    /// Written as `<tag/>` when it has no children
    pub self_closing: bool,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attributes: Vec::new(),
            children: Vec::new(),
            self_closing: false,
        }
    }

    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((name.into(), value.into()));
        self
    }

    pub fn with_child(mut self, child: ContentNode) -> Self {
        self.children.push(child);
        self
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Concatenated text of all descendant text leaves
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        collect_text(&self.children, &mut out);
        out
    }
}

fn collect_text(nodes: &[ContentNode], out: &mut String) {
    for node in nodes {
        match node {
            ContentNode::Text(text) => out.push_str(text),
            ContentNode::Element(el) => collect_text(&el.children, out),
            ContentNode::Comment(_) => {}
        }
    }
}

impl ContentNode {
    pub fn text(text: impl Into<String>) -> Self {
        ContentNode::Text(text.into())
    }

    pub fn as_element(&self) -> Option<&Element> {
        match self {
            ContentNode::Element(el) => Some(el),
            _ => None,
        }
    }
}

impl From<Element> for ContentNode {
    fn from(el: Element) -> Self {
        ContentNode::Element(el)
    }
}

/// Whether the preview pass must not descend into `tag`
pub fn is_excluded_tag(tag: &str) -> bool {
    EXCLUDED_TAGS.iter().any(|t| t.eq_ignore_ascii_case(tag))
}

/// Whether a class attribute value marks an already wrapped tone span
pub fn has_tone_class(class_attr: &str) -> bool {
    class_attr
        .split_whitespace()
        .any(|c| Tone::ALL.iter().any(|t| c == t.class_name(Surface::Preview)))
}

fn is_skipped(el: &Element) -> bool {
    is_excluded_tag(&el.tag) || el.attribute("class").map(has_tone_class).unwrap_or(false)
}

/// Wrapper fragment replacing a text leaf that contains tone spans
///
/// Returns `None` when `text` has no tone-bearing words; the leaf is then
/// left untouched.
pub fn wrap_text(text: &str) -> Option<Element> {
    let segs = segments(text);
    if !segs.iter().any(|s| matches!(s, Segment::Toned(..))) {
        return None;
    }

    let mut wrapper = Element::new(WRAPPER_TAG);
    for seg in segs {
        match seg {
            Segment::Plain(plain) => wrapper.children.push(ContentNode::text(plain)),
            Segment::Toned(word, tone) => wrapper.children.push(
                Element::new(WRAPPER_TAG)
                    .with_attribute("class", tone.class_name(Surface::Preview))
                    .with_child(ContentNode::text(word))
                    .into(),
            ),
        }
    }
    Some(wrapper)
}

/// Rewrite every tone-bearing text leaf under `node`
///
/// Depth-first. `<script>`/`<style>` subtrees and spans this pass already
/// produced are skipped, so a second run changes nothing. Returns the number
/// of leaves replaced.
pub fn annotate_tree(node: &mut ContentNode) -> usize {
    match node {
        ContentNode::Text(text) => match wrap_text(text) {
            Some(wrapper) => {
                *node = ContentNode::Element(wrapper);
                1
            }
            None => 0,
        },
        ContentNode::Element(el) if !is_skipped(el) => el.children.iter_mut().map(annotate_tree).sum(),
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tone_span(tone: &str, word: &str) -> ContentNode {
        Element::new("span")
            .with_attribute("class", format!("pinyin-preview-{}", tone))
            .with_child(ContentNode::text(word))
            .into()
    }

    #[test]
    fn test_wrap_preserves_spaces() {
        let wrapper = wrap_text("Wǒ ài nǐ").expect("tones present");
        assert_eq!(
            wrapper.children,
            vec![
                tone_span("tone3", "Wǒ"),
                ContentNode::text(" "),
                tone_span("tone4", "ài"),
                ContentNode::text(" "),
                tone_span("tone3", "nǐ"),
            ]
        );
        assert_eq!(wrapper.text_content(), "Wǒ ài nǐ");
        assert!(wrapper.attributes.is_empty());
    }

    #[test]
    fn test_toneless_leaf_untouched() {
        let mut node = ContentNode::text("hello world ma");
        assert_eq!(annotate_tree(&mut node), 0);
        assert_eq!(node, ContentNode::text("hello world ma"));
    }

    #[test]
    fn test_script_and_style_skipped() {
        let mut root: ContentNode = Element::new("div")
            .with_child(Element::new("SCRIPT").with_child(ContentNode::text("var mā = 1;")).into())
            .with_child(Element::new("style").with_child(ContentNode::text(".mà {}")).into())
            .with_child(Element::new("p").with_child(ContentNode::text("mā")).into())
            .into();
        let before = root.clone();
        assert_eq!(annotate_tree(&mut root), 1);

        let div = root.as_element().expect("root element");
        assert_eq!(div.children[0], before.as_element().expect("root").children[0]);
        assert_eq!(div.children[1], before.as_element().expect("root").children[1]);
        let p = div.children[2].as_element().expect("p");
        assert_eq!(p.children[0].as_element().map(|e| e.tag.as_str()), Some("span"));
    }

    #[test]
    fn test_second_pass_is_a_no_op() {
        let mut root: ContentNode = Element::new("p").with_child(ContentNode::text("nǐ hǎo, hello")).into();
        assert_eq!(annotate_tree(&mut root), 1);
        let once = root.clone();
        assert_eq!(annotate_tree(&mut root), 0);
        assert_eq!(root, once);
    }

    #[test]
    fn test_comments_untouched() {
        let mut root: ContentNode = Element::new("p").with_child(ContentNode::Comment(" mā ".into())).into();
        assert_eq!(annotate_tree(&mut root), 0);
    }

    #[test]
    fn test_has_tone_class() {
        assert!(has_tone_class("x pinyin-preview-tone2"));
        assert!(!has_tone_class("pinyin-preview-tone5"));
        assert!(!has_tone_class("pinyin-editor-tone1"));
    }
}
