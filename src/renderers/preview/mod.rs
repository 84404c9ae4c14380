//! Static-view (preview) tone rendering
//!
//! Runs once per rendered document: every text leaf holding tone-bearing
//! words is replaced by a wrapper span whose tone words sit in
//! `pinyin-preview-toneN` spans. Two backends share the algorithm:
//!
//! - `tree`: owned `ContentNode` tree (and `markup` for strings)
//! - `dom`: live browser DOM through `web_sys`

pub mod tree;
pub mod markup;
pub mod dom;

pub use tree::{annotate_tree, wrap_text, ContentNode, Element};
pub use markup::{annotate_markup, parse_fragment, write_fragment};
pub use dom::post_process;
