//! Word token matcher
//!
//! Yields maximal runs of word characters (ASCII letters, digits,
//! underscore, and the tone diacritics), left to right, never overlapping.

use lazy_static::lazy_static;
use regex::Regex;

/// ASCII word class plus the 24 tone diacritics
///
/// ASCII only on purpose: other accented letters (ê, ß, ...) end a token.
const TOKEN_PATTERN: &str = "[A-Za-z0-9_āēīōūǖáéíóúǘǎěǐǒǔǚàèìòùǜ]+";

lazy_static! {
    static ref TOKEN_REGEX: Regex = Regex::new(TOKEN_PATTERN).expect("token pattern is a valid literal");
}

/// A word-like token and its byte offsets in the scanned text
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Token<'a> {
    pub text: &'a str,
    pub start: usize,
    pub end: usize,
}

/// Lazy scanner over one text buffer
///
/// Cloning a matcher snapshots its position, so the same sequence can be
/// replayed.
#[derive(Clone, Debug)]
pub struct TokenMatcher<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> TokenMatcher<'a> {
    pub fn new(text: &'a str) -> Self {
        Self { text, pos: 0 }
    }

    /// Resume scanning at byte `offset`
    ///
    /// An offset past the end or inside a character yields no tokens.
    pub fn starting_at(text: &'a str, offset: usize) -> Self {
        let pos = if text.is_char_boundary(offset) {
            offset
        } else {
            text.len()
        };
        Self { text, pos }
    }
}

impl<'a> Iterator for TokenMatcher<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Token<'a>> {
        if self.pos >= self.text.len() {
            return None;
        }
        match TOKEN_REGEX.find_at(self.text, self.pos) {
            Some(m) => {
                self.pos = m.end();
                Some(Token {
                    text: m.as_str(),
                    start: m.start(),
                    end: m.end(),
                })
            }
            None => {
                self.pos = self.text.len();
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::tone_chars;

    fn words(text: &str) -> Vec<&str> {
        TokenMatcher::new(text).map(|t| t.text).collect()
    }

    #[test]
    fn test_pattern_covers_every_diacritic() {
        for c in tone_chars() {
            assert!(TOKEN_PATTERN.contains(c), "missing {}", c);
        }
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(TokenMatcher::new("").count(), 0);
    }

    #[test]
    fn test_splits_on_non_word() {
        assert_eq!(words("mā mǎ, mà-ma"), vec!["mā", "mǎ", "mà", "ma"]);
        assert_eq!(words("  \n\t"), Vec::<&str>::new());
    }

    #[test]
    fn test_word_class_is_ascii_plus_diacritics() {
        assert_eq!(words("snake_case42"), vec!["snake_case42"]);
        // ê and ü are not in the table, so they break tokens
        assert_eq!(words("fêng lüè"), vec!["f", "ng", "l", "è"]);
    }

    #[test]
    fn test_offsets_are_bytes() {
        let tokens: Vec<Token> = TokenMatcher::new("nǐ hǎo").collect();
        assert_eq!(tokens[0], Token { text: "nǐ", start: 0, end: 3 });
        assert_eq!(tokens[1], Token { text: "hǎo", start: 4, end: 8 });
    }

    #[test]
    fn test_restart_is_deterministic() {
        let text = "wǒ ài nǐ";
        let first: Vec<Token> = TokenMatcher::starting_at(text, 3).collect();
        let second: Vec<Token> = TokenMatcher::starting_at(text, 3).collect();
        assert_eq!(first, second);
        assert_eq!(first.iter().map(|t| t.text).collect::<Vec<_>>(), vec!["ài", "nǐ"]);
    }

    #[test]
    fn test_restart_inside_char_yields_nothing() {
        // byte 2 is inside 'ǒ'
        assert_eq!(TokenMatcher::starting_at("wǒ", 2).count(), 0);
        assert_eq!(TokenMatcher::starting_at("wǒ", 99).count(), 0);
    }
}
