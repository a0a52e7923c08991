//! Fonts and text measurement.
//!
//! Widgets never shape text themselves. They ask a [`TextMetrics`]
//! implementation supplied by the host for the size of a string in a font.
//! [`AdvanceMetrics`] is a dependency-free approximation for hosts without
//! a shaping engine and for tests.

use unicode_segmentation::UnicodeSegmentation;

use crate::types::Size;

/// Generic or named font family.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum FontFamily {
    /// A specific font family by name.
    Name(String),
    /// Generic serif family.
    Serif,
    /// Generic sans-serif family.
    #[default]
    SansSerif,
    /// Generic monospace family.
    Monospace,
}

impl FontFamily {
    /// Create a named font family.
    pub fn name(name: impl Into<String>) -> Self {
        Self::Name(name.into())
    }
}

/// A font selection: family plus pixel size.
#[derive(Debug, Clone, PartialEq)]
pub struct Font {
    family: FontFamily,
    size: f32,
}

impl Font {
    /// Create a new font with the given family and size in pixels.
    pub fn new(family: FontFamily, size: f32) -> Self {
        Self { family, size }
    }

    /// The font family.
    pub fn family(&self) -> &FontFamily {
        &self.family
    }

    /// The font size in pixels.
    pub fn size(&self) -> f32 {
        self.size
    }

    /// Builder-style size override.
    pub fn with_size(mut self, size: f32) -> Self {
        self.size = size;
        self
    }
}

impl Default for Font {
    fn default() -> Self {
        Self::new(FontFamily::SansSerif, 17.0)
    }
}

/// Measures single-line text.
pub trait TextMetrics: Send + Sync {
    /// The bounding size of `text` laid out on one line in `font`.
    ///
    /// Empty text has zero width but still one line of height.
    fn measure(&self, text: &str, font: &Font) -> Size;
}

/// Approximate metrics: every grapheme cluster advances by a fixed fraction
/// of the font size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AdvanceMetrics {
    /// Horizontal advance per grapheme, in ems.
    pub advance_em: f32,
    /// Line height, in ems.
    pub line_height_em: f32,
}

impl AdvanceMetrics {
    /// Metrics with the given per-grapheme advance and line height in ems.
    pub const fn new(advance_em: f32, line_height_em: f32) -> Self {
        Self {
            advance_em,
            line_height_em,
        }
    }
}

impl Default for AdvanceMetrics {
    fn default() -> Self {
        Self::new(0.55, 1.2)
    }
}

impl TextMetrics for AdvanceMetrics {
    fn measure(&self, text: &str, font: &Font) -> Size {
        let graphemes = text.graphemes(true).count() as f32;
        Size::new(
            graphemes * self.advance_em * font.size(),
            self.line_height_em * font.size(),
        )
    }
}

static_assertions::assert_impl_all!(AdvanceMetrics: Send, Sync);
