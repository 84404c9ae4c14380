//! Markup codec for the preview tree
//!
//! Reads rendered XHTML-compatible markup into `ContentNode`s with quick-xml
//! and writes it back. Attribute order and whitespace survive the round trip;
//! character references are normalized by the writer.

use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use quick_xml::{Reader, Writer};

use super::tree::{annotate_tree, ContentNode, Element};
use crate::renderers::errors::MarkupError;

/// Parse a markup fragment (zero or more sibling nodes)
pub fn parse_fragment(markup: &str) -> Result<Vec<ContentNode>, MarkupError> {
    let mut reader = Reader::from_str(markup);
    reader.trim_text(false);

    let mut roots: Vec<ContentNode> = Vec::new();
    let mut stack: Vec<Element> = Vec::new();

    loop {
        match reader.read_event()? {
            Event::Start(e) => {
                stack.push(read_element(&e)?);
            }
            Event::Empty(e) => {
                let mut el = read_element(&e)?;
                el.self_closing = true;
                append(&mut stack, &mut roots, el.into());
            }
            Event::End(e) => {
                let name = String::from_utf8(e.name().as_ref().to_vec())?;
                match stack.pop() {
                    Some(el) if el.tag == name => append(&mut stack, &mut roots, el.into()),
                    _ => return Err(MarkupError::UnexpectedEnd(name)),
                }
            }
            Event::Text(e) => {
                let text = e.unescape()?.into_owned();
                append(&mut stack, &mut roots, ContentNode::Text(text));
            }
            Event::CData(e) => {
                let text = String::from_utf8(e.into_inner().into_owned())?;
                append(&mut stack, &mut roots, ContentNode::Text(text));
            }
            Event::Comment(e) => {
                let text = String::from_utf8(e.into_inner().into_owned())?;
                append(&mut stack, &mut roots, ContentNode::Comment(text));
            }
            Event::Decl(_) => return Err(MarkupError::Unsupported("xml declaration")),
            Event::DocType(_) => return Err(MarkupError::Unsupported("doctype")),
            Event::Eof => break,
            _ => return Err(MarkupError::Unsupported("processing instruction")),
        }
    }

    if let Some(open) = stack.pop() {
        return Err(MarkupError::Unclosed(open.tag));
    }
    Ok(roots)
}

fn read_element(start: &BytesStart) -> Result<Element, MarkupError> {
    let mut el = Element::new(String::from_utf8(start.name().as_ref().to_vec())?);
    for attr in start.attributes() {
        let attr = attr.map_err(quick_xml::Error::from)?;
        let key = String::from_utf8(attr.key.as_ref().to_vec())?;
        let value = attr.unescape_value()?.into_owned();
        el.attributes.push((key, value));
    }
    Ok(el)
}

fn append(stack: &mut [Element], roots: &mut Vec<ContentNode>, node: ContentNode) {
    match stack.last_mut() {
        Some(parent) => parent.children.push(node),
        None => roots.push(node),
    }
}

/// Serialize nodes back to markup
pub fn write_fragment(nodes: &[ContentNode]) -> Result<String, MarkupError> {
    let mut writer = Writer::new(Vec::new());
    for node in nodes {
        write_node(&mut writer, node)?;
    }
    Ok(String::from_utf8(writer.into_inner())?)
}

fn write_node(writer: &mut Writer<Vec<u8>>, node: &ContentNode) -> Result<(), MarkupError> {
    match node {
        ContentNode::Text(text) => {
            writer.write_event(Event::Text(BytesText::new(text)))?;
        }
        ContentNode::Comment(text) => {
            writer.write_event(Event::Comment(BytesText::from_escaped(text.as_str())))?;
        }
        ContentNode::Element(el) => {
            let mut start = BytesStart::new(el.tag.as_str());
            for (key, value) in &el.attributes {
                start.push_attribute((key.as_str(), value.as_str()));
            }
            if el.self_closing && el.children.is_empty() {
                writer.write_event(Event::Empty(start))?;
            } else {
                writer.write_event(Event::Start(start))?;
                for child in &el.children {
                    write_node(writer, child)?;
                }
                writer.write_event(Event::End(BytesEnd::new(el.tag.as_str())))?;
            }
        }
    }
    Ok(())
}

/// Wrap every tone-bearing word in rendered markup
///
/// Single pass over the parsed fragment; markup that already went through
/// this function comes back unchanged.
pub fn annotate_markup(markup: &str) -> Result<String, MarkupError> {
    let mut nodes = parse_fragment(markup)?;
    let rewritten: usize = nodes.iter_mut().map(annotate_tree).sum();
    log::debug!("preview pass rewrote {} text nodes", rewritten);
    if rewritten == 0 {
        return Ok(markup.to_string());
    }
    write_fragment(&nodes)
}
