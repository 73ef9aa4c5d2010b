pub mod glyph;
pub mod kind;

pub use glyph::{Glyph, GlyphStyle};
pub use kind::SymbolKind;
