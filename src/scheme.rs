//! Built-in glyph and color schemes.
//!
//! Both tables are fixed constants of the deployed collection. A seed picks
//! one entry from each by Euclidean remainder:
//!
//! | `seed mod 83` | Glyph scheme |
//! |---------------|--------------|
//! | `[0, 20)`     | A `..+-/`    |
//! | `[20, 45)`    | B `.X/\.`    |
//! | `[45, 70)`    | C `..-\.`    |
//! | `[70, 80)`    | D `..\/\|`   |
//! | `[80, 83)`    | E `.O...`    |
//!
//! | `seed mod 30` | Color scheme            |
//! |---------------|-------------------------|
//! | `[0, 25)`     | white on black          |
//! | `[25, 30)`    | black on white          |

use std::fmt;

use serde::{Serialize, Serializer};

use crate::seed::Seed;

/// Number of glyphs in every glyph scheme.
pub const GLYPH_COUNT: usize = 5;

/// Modulus for glyph scheme selection.
pub const GLYPH_SCHEME_MODULUS: i64 = 83;

/// Modulus for color scheme selection.
pub const COLOR_SCHEME_MODULUS: i64 = 30;

/// Glyph scheme table as `(exclusive upper bound of seed mod 83, scheme)`.
const GLYPH_RANGES: [(i64, GlyphScheme); 5] = [
    (20, GlyphScheme::A),
    (45, GlyphScheme::B),
    (70, GlyphScheme::C),
    (80, GlyphScheme::D),
    (83, GlyphScheme::E),
];

/// One of the five fixed glyph alphabets.
///
/// Cell values `0..5` index into the alphabet; anything larger renders as
/// the filler `.`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GlyphScheme {
    /// `..+-/`
    A,
    /// `.X/\.`
    B,
    /// `..-\.`
    C,
    /// `..\/|`
    D,
    /// `.O...`, a single mark on background filler
    E,
}

impl GlyphScheme {
    /// All schemes in table order.
    pub const ALL: [GlyphScheme; 5] = [Self::A, Self::B, Self::C, Self::D, Self::E];

    /// The five glyphs, indexed by cell value.
    pub const fn glyphs(self) -> [char; GLYPH_COUNT] {
        match self {
            Self::A => ['.', '.', '+', '-', '/'],
            Self::B => ['.', 'X', '/', '\\', '.'],
            Self::C => ['.', '.', '-', '\\', '.'],
            Self::D => ['.', '.', '\\', '/', '|'],
            Self::E => ['.', 'O', '.', '.', '.'],
        }
    }

    /// Glyph for a cell value, or `None` when the value is outside the alphabet.
    pub fn glyph(self, value: usize) -> Option<char> {
        self.glyphs().get(value).copied()
    }

    /// Single-letter table label.
    pub fn label(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
            Self::E => "E",
        }
    }

    /// The glyphs as a 5-character string.
    pub fn as_string(self) -> String {
        self.glyphs().iter().collect()
    }
}

impl fmt::Display for GlyphScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_string())
    }
}

impl Serialize for GlyphScheme {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.as_string())
    }
}

/// A foreground/background pair from the fixed two-entry palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorScheme {
    /// `ffffff` glyphs on a `000000` background
    WhiteOnBlack,
    /// `000000` glyphs on a `ffffff` background
    BlackOnWhite,
}

impl ColorScheme {
    /// The packed 12-hex-character constant: 6 foreground then 6 background.
    pub const fn hex(self) -> &'static str {
        match self {
            Self::WhiteOnBlack => "ffffff000000",
            Self::BlackOnWhite => "000000ffffff",
        }
    }

    /// Foreground color as 6 hex digits, no `#`.
    pub fn foreground(self) -> &'static str {
        &self.hex()[..6]
    }

    /// Background color as 6 hex digits, no `#`.
    pub fn background(self) -> &'static str {
        &self.hex()[6..]
    }
}

impl fmt::Display for ColorScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.hex())
    }
}

impl Serialize for ColorScheme {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.hex())
    }
}

/// Pick the glyph scheme for a seed (`seed mod 83`).
pub fn select_glyph_scheme(seed: Seed) -> GlyphScheme {
    let index = seed.bucket(GLYPH_SCHEME_MODULUS);
    GLYPH_RANGES
        .iter()
        .find(|(upper, _)| index < *upper)
        .map(|(_, scheme)| *scheme)
        // bucket() is always < 83, the last upper bound
        .unwrap_or(GlyphScheme::E)
}

/// Pick the color scheme for a seed (`seed mod 30`).
pub fn select_color_scheme(seed: Seed) -> ColorScheme {
    if seed.bucket(COLOR_SCHEME_MODULUS) < 25 {
        ColorScheme::WhiteOnBlack
    } else {
        ColorScheme::BlackOnWhite
    }
}
