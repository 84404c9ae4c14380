//! Offset translation between UTF-8 byte offsets and host offset units
//!
//! The span producer works in byte offsets of a Rust `&str`. JavaScript hosts
//! address text in UTF-16 code units, so every offset crossing the WASM
//! boundary goes through here.

/// Unit a view measures offsets in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Encoding {
    /// UTF-8 bytes (Rust `str` indexing)
    #[default]
    Utf8,
    /// UTF-16 code units (JavaScript string indexing)
    Utf16,
}

impl Encoding {
    /// Length of `text` in this encoding's units
    pub fn measure(self, text: &str) -> usize {
        match self {
            Encoding::Utf8 => text.len(),
            Encoding::Utf16 => text.chars().map(char::len_utf16).sum(),
        }
    }

    /// Convert an offset in this encoding's units to a byte offset in `text`
    ///
    /// Returns `None` when the offset is past the end or lands inside a
    /// character (mid-codepoint byte, or between a surrogate pair).
    pub fn to_byte_offset(self, text: &str, offset: usize) -> Option<usize> {
        match self {
            Encoding::Utf8 => text.is_char_boundary(offset).then_some(offset),
            Encoding::Utf16 => {
                let mut units = 0;
                for (byte, c) in text.char_indices() {
                    if units == offset {
                        return Some(byte);
                    }
                    if units > offset {
                        return None;
                    }
                    units += c.len_utf16();
                }
                (units == offset).then_some(text.len())
            }
        }
    }
}

/// Forward-only cursor converting byte offsets into encoding units
///
/// Callers must feed non-decreasing byte offsets (span producers emit them
/// in order), which keeps a full pass over a text linear in its length.
pub struct OffsetCursor<'a> {
    text: &'a str,
    encoding: Encoding,
    byte: usize,
    units: usize,
}

impl<'a> OffsetCursor<'a> {
    pub fn new(text: &'a str, encoding: Encoding) -> Self {
        Self {
            text,
            encoding,
            byte: 0,
            units: 0,
        }
    }

    /// Units preceding `byte`; `byte` must be a char boundary
    ///
    /// Going backwards restarts from the beginning of the text.
    pub fn units_at(&mut self, byte: usize) -> usize {
        if byte < self.byte {
            self.byte = 0;
            self.units = 0;
        }
        let step = self.text.get(self.byte..byte).unwrap_or("");
        self.units += self.encoding.measure(step);
        self.byte = byte;
        self.units
    }
}
