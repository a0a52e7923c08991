//! Single-line text label.

use segue_render::{Font, Size, TextMetrics};

/// A single line of text shown inside a pane.
///
/// The label caches its measured size. Changing the text or font marks the
/// cache dirty; [`size_to_fit`](Label::size_to_fit) measures it again.
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    text: String,
    font: Font,
    measured: Option<Size>,
}

impl Label {
    /// Create an unmeasured label.
    pub fn new(text: impl Into<String>, font: Font) -> Self {
        Self {
            text: text.into(),
            font,
            measured: None,
        }
    }

    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replace the text. Returns `true` if the text changed.
    pub fn set_text(&mut self, text: impl Into<String>) -> bool {
        let text = text.into();
        if self.text == text {
            return false;
        }
        self.text = text;
        self.measured = None;
        true
    }

    #[inline]
    pub fn font(&self) -> &Font {
        &self.font
    }

    pub fn set_font(&mut self, font: Font) {
        if self.font != font {
            self.font = font;
            self.measured = None;
        }
    }

    /// Whether the cached size is out of date.
    #[inline]
    pub fn needs_measure(&self) -> bool {
        self.measured.is_none()
    }

    /// Measure the text and cache the result.
    pub fn size_to_fit(&mut self, metrics: &dyn TextMetrics) -> Size {
        let size = metrics.measure(&self.text, &self.font);
        self.measured = Some(size);
        size
    }

    /// The last measured size, or zero if never measured.
    #[inline]
    pub fn size(&self) -> Size {
        self.measured.unwrap_or(Size::ZERO)
    }
}
