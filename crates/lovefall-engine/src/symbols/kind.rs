use crate::core::rng::Rng;
use crate::renderer::color::VectorColor;

use super::glyph::{self, Glyph};

/// The fixed set of falling symbols.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SymbolKind {
    Star,
    Heart,
    Flower,
    Bird,
    Sparkle,
}

impl SymbolKind {
    pub const ALL: [SymbolKind; 5] = [
        SymbolKind::Star,
        SymbolKind::Heart,
        SymbolKind::Flower,
        SymbolKind::Bird,
        SymbolKind::Sparkle,
    ];

    /// Uniform draw over [`SymbolKind::ALL`].
    pub fn random(rng: &mut Rng) -> Self {
        Self::ALL[rng.next_int(Self::ALL.len() as u32) as usize]
    }

    /// Palette entry as 0-255 RGB.
    pub const fn rgb8(self) -> [u8; 3] {
        match self {
            SymbolKind::Star => [255, 255, 200],    // yellowish white
            SymbolKind::Heart => [255, 100, 150],   // pinkish red
            SymbolKind::Flower => [255, 0, 0],      // red
            SymbolKind::Bird => [200, 200, 200],    // light grey
            SymbolKind::Sparkle => [255, 255, 255], // pure white
        }
    }

    /// Palette color with `opacity` as alpha.
    pub fn color(self, opacity: f32) -> VectorColor {
        let [r, g, b] = self.rgb8();
        VectorColor::rgb8_alpha(r, g, b, opacity)
    }

    /// Outline of this symbol at `size`, centered on the local origin.
    pub fn glyph(self, size: f32, line_width: f32) -> Glyph {
        match self {
            SymbolKind::Star => glyph::star(size),
            SymbolKind::Heart => glyph::heart(size),
            SymbolKind::Flower => glyph::flower(size),
            SymbolKind::Bird => glyph::bird(size),
            SymbolKind::Sparkle => glyph::sparkle(size, line_width),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            SymbolKind::Star => "star",
            SymbolKind::Heart => "heart",
            SymbolKind::Flower => "flower",
            SymbolKind::Bird => "bird",
            SymbolKind::Sparkle => "sparkle",
        }
    }
}
