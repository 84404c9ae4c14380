//! Tone model and diacritic lookup table
//!
//! Maps the 24 precomposed pinyin vowels (a, e, i, o, u, ü with one of the
//! four tone marks) to a `Tone`. The table is built once and never mutated.

use std::collections::HashMap;

use lazy_static::lazy_static;
use wasm_bindgen::prelude::*;

/// Class label prefix for markers in the live editor
pub const EDITOR_CLASS_PREFIX: &str = "pinyin-editor-";

/// Class label prefix for wrapped spans in the rendered preview
pub const PREVIEW_CLASS_PREFIX: &str = "pinyin-preview-";

/// Mandarin tone carried by a diacritic
#[wasm_bindgen]
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, serde_repr::Serialize_repr, serde_repr::Deserialize_repr)]
pub enum Tone {
    /// Macron (ā)
    First = 1,
    /// Acute accent (á)
    Second = 2,
    /// Caron (ǎ)
    Third = 3,
    /// Grave accent (à)
    Fourth = 4,
}

/// Rendering surface a class label is emitted for
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Surface {
    Editor,
    Preview,
}

impl Surface {
    pub fn class_prefix(self) -> &'static str {
        match self {
            Surface::Editor => EDITOR_CLASS_PREFIX,
            Surface::Preview => PREVIEW_CLASS_PREFIX,
        }
    }
}

impl Tone {
    pub const ALL: [Tone; 4] = [Tone::First, Tone::Second, Tone::Third, Tone::Fourth];

    /// Tone number, 1 through 4
    pub fn number(self) -> u8 {
        self as u8
    }

    pub fn from_number(n: u8) -> Option<Tone> {
        match n {
            1 => Some(Tone::First),
            2 => Some(Tone::Second),
            3 => Some(Tone::Third),
            4 => Some(Tone::Fourth),
            _ => None,
        }
    }

    /// Short identifier used inside class labels ("tone1".."tone4")
    pub fn id(self) -> &'static str {
        match self {
            Tone::First => "tone1",
            Tone::Second => "tone2",
            Tone::Third => "tone3",
            Tone::Fourth => "tone4",
        }
    }

    /// Full class label, e.g. `pinyin-editor-tone3`
    pub fn class_name(self, surface: Surface) -> String {
        format!("{}{}", surface.class_prefix(), self.id())
    }
}

/// Diacritic characters per tone, in vowel order a e i o u ü
const TONE_ROWS: [(Tone, [char; 6]); 4] = [
    (Tone::First, ['ā', 'ē', 'ī', 'ō', 'ū', 'ǖ']),
    (Tone::Second, ['á', 'é', 'í', 'ó', 'ú', 'ǘ']),
    (Tone::Third, ['ǎ', 'ě', 'ǐ', 'ǒ', 'ǔ', 'ǚ']),
    (Tone::Fourth, ['à', 'è', 'ì', 'ò', 'ù', 'ǜ']),
];

lazy_static! {
    static ref TONE_TABLE: HashMap<char, Tone> = build_tone_table();
}

fn build_tone_table() -> HashMap<char, Tone> {
    let mut table = HashMap::with_capacity(24);
    for (tone, chars) in TONE_ROWS {
        for c in chars {
            table.insert(c, tone);
        }
    }
    table
}

/// Look up the tone of a single character
pub fn lookup(c: char) -> Option<Tone> {
    TONE_TABLE.get(&c).copied()
}

/// Whether `c` is one of the recognized tone diacritics
pub fn is_tone_char(c: char) -> bool {
    TONE_TABLE.contains_key(&c)
}

/// All recognized diacritics, grouped by tone
pub fn tone_chars() -> impl Iterator<Item = char> {
    TONE_ROWS.into_iter().flat_map(|(_, chars)| chars)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_has_24_entries() {
        assert_eq!(TONE_TABLE.len(), 24);
        assert_eq!(tone_chars().count(), 24);
    }

    #[test]
    fn test_lookup_each_tone() {
        assert_eq!(lookup('ā'), Some(Tone::First));
        assert_eq!(lookup('é'), Some(Tone::Second));
        assert_eq!(lookup('ǐ'), Some(Tone::Third));
        assert_eq!(lookup('ù'), Some(Tone::Fourth));
        assert_eq!(lookup('ǖ'), Some(Tone::First));
        assert_eq!(lookup('ǜ'), Some(Tone::Fourth));
    }

    #[test]
    fn test_lookup_undefined_chars() {
        assert_eq!(lookup('a'), None);
        assert_eq!(lookup('ü'), None);
        assert_eq!(lookup('Ā'), None);
        assert_eq!(lookup('ê'), None);
        assert_eq!(lookup(' '), None);
    }

    #[test]
    fn test_class_names() {
        assert_eq!(Tone::First.class_name(Surface::Editor), "pinyin-editor-tone1");
        assert_eq!(Tone::Fourth.class_name(Surface::Preview), "pinyin-preview-tone4");
    }

    #[test]
    fn test_number_round_trip() {
        for tone in Tone::ALL {
            assert_eq!(Tone::from_number(tone.number()), Some(tone));
        }
        assert_eq!(Tone::from_number(0), None);
        assert_eq!(Tone::from_number(5), None);
    }
}
