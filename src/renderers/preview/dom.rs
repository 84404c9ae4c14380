//! Preview pass over a live browser DOM
//!
//! Same walk as `tree::annotate_tree`, but on `web_sys` nodes handed over by
//! the host's markdown renderer. Replacement fragments are built with
//! `createElement`/`createTextNode`, so document text is never re-parsed as
//! HTML.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Node};

use super::tree::{has_tone_class, is_excluded_tag, WRAPPER_TAG};
use crate::models::Surface;
use crate::parse::{segments, Segment};

/// Rewrite tone-bearing text nodes under `root`; returns how many were replaced
pub fn post_process(root: &Node) -> Result<usize, JsValue> {
    let document = match root.owner_document() {
        Some(doc) => doc,
        // `root` is itself a Document
        None => match root.dyn_ref::<Document>() {
            Some(doc) => doc.clone(),
            None => return Err(JsValue::from_str("node is not attached to a document")),
        },
    };
    let rewritten = walk(root, &document)?;
    log::debug!("preview pass rewrote {} DOM text nodes", rewritten);
    Ok(rewritten)
}

fn walk(node: &Node, document: &Document) -> Result<usize, JsValue> {
    match node.node_type() {
        Node::TEXT_NODE => rewrite_text_node(node, document),
        Node::ELEMENT_NODE | Node::DOCUMENT_NODE | Node::DOCUMENT_FRAGMENT_NODE => {
            if let Some(el) = node.dyn_ref::<Element>() {
                if is_excluded_tag(&el.tag_name()) || has_tone_class(&el.class_name()) {
                    return Ok(0);
                }
            }
            // Snapshot first: replacing a child mutates the live list
            let children = node.child_nodes();
            let snapshot: Vec<Node> = (0..children.length()).filter_map(|i| children.item(i)).collect();
            let mut rewritten = 0;
            for child in &snapshot {
                rewritten += walk(child, document)?;
            }
            Ok(rewritten)
        }
        _ => Ok(0),
    }
}

fn rewrite_text_node(node: &Node, document: &Document) -> Result<usize, JsValue> {
    let Some(parent) = node.parent_node() else {
        return Ok(0);
    };
    let text = node.node_value().unwrap_or_default();
    let segs = segments(&text);
    if !segs.iter().any(|s| matches!(s, Segment::Toned(..))) {
        return Ok(0);
    }

    let wrapper = document.create_element(WRAPPER_TAG)?;
    for seg in segs {
        match seg {
            Segment::Plain(plain) => {
                wrapper.append_child(&document.create_text_node(plain))?;
            }
            Segment::Toned(word, tone) => {
                let span = document.create_element(WRAPPER_TAG)?;
                span.set_class_name(&tone.class_name(Surface::Preview));
                span.append_child(&document.create_text_node(word))?;
                wrapper.append_child(&span)?;
            }
        }
    }
    parent.replace_child(&wrapper, node)?;
    Ok(1)
}
