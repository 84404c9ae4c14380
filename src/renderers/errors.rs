//! Error types for the renderers
//!
//! Tone detection itself cannot fail. These errors only come from inputs the
//! host hands over: decoration ranges out of order, or markup that cannot be
//! parsed.

use thiserror::Error;

/// Rejected addition to a decoration set
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecorationError {
    /// Decoration starts before the end of the previous one
    #[error("decoration {from}..{to} overlaps or precedes previous decoration ending at {last_end}")]
    Unordered { from: usize, to: usize, last_end: usize },

    /// Decoration covers no text
    #[error("empty decoration at {0}")]
    Empty(usize),
}

/// Failure to read or write preview markup
#[derive(Debug, Error)]
pub enum MarkupError {
    /// Markup is not well-formed
    #[error("invalid markup: {0}")]
    Xml(#[from] quick_xml::Error),

    /// Node kind the preview tree does not model (doctype, processing instruction, ...)
    #[error("unsupported markup node: {0}")]
    Unsupported(&'static str),

    /// End tag with no matching start tag
    #[error("unexpected end tag </{0}>")]
    UnexpectedEnd(String),

    /// Input ended with elements still open
    #[error("unclosed element <{0}>")]
    Unclosed(String),

    /// Serialized output was not UTF-8
    #[error("markup output is not UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}
