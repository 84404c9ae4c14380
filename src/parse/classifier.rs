//! Token tone classification

use crate::models::{lookup, Tone};

/// Tone of the first recognized diacritic in `token`, scanning left to right
///
/// Multi-syllable tokens take the tone of their first marked syllable:
/// `nǐhǎo` is classified as third tone from `ǐ`.
pub fn classify(token: &str) -> Option<Tone> {
    token.chars().find_map(lookup)
}
