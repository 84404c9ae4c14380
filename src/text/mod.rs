//! Text positions and offset units
//!
//! Pure text helpers with no knowledge of tones.
//!
//! ## Modules
//!
//! - `range`: Half-open offset ranges (visible ranges, decorations)
//! - `offsets`: Byte ↔ UTF-16 offset translation for the JavaScript boundary

pub mod range;
pub mod offsets;

// Re-exports for convenience
pub use range::TextRange;
pub use offsets::{Encoding, OffsetCursor};
