//! What the host paints.

use segue_render::{Color, Rect, Size};

use super::pane::PaneKind;
use super::transition_button::ButtonState;
use crate::widget::animation::Interpolate;

/// The animated portion of the button's look.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Appearance {
    /// How far the pane stack is slid up.
    pub offset_y: f32,
    /// Button width.
    pub width: f32,
    pub background: Color,
    pub text_color: Color,
}

impl Interpolate for Appearance {
    fn interpolate(self, other: Self, t: f32) -> Self {
        Self {
            offset_y: self.offset_y.interpolate(other.offset_y, t),
            width: self.width.interpolate(other.width, t),
            background: self.background.interpolate(other.background, t),
            text_color: self.text_color.interpolate(other.text_color, t),
        }
    }
}

/// An outgoing presentation fading away over the current one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FadeFrame {
    /// The appearance being faded out.
    pub from: Appearance,
    /// Eased progress of the fade, 0.0 to 1.0.
    pub progress: f32,
}

impl FadeFrame {
    /// Opacity the outgoing appearance is drawn with.
    #[inline]
    pub fn opacity(&self) -> f32 {
        1.0 - self.progress
    }
}

/// A snapshot of everything needed to paint the button.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ButtonFrame {
    pub state: ButtonState,
    /// The pane the current state shows.
    pub visible_pane: PaneKind,
    /// Unscaled bounds.
    pub size: Size,
    /// Upward slide of the pane stack.
    pub content_offset_y: f32,
    pub background: Color,
    pub text_color: Color,
    /// Uniform scale around the center.
    pub scale: f32,
    pub corner_radius: f32,
    /// Present while a fade transition runs.
    pub fade: Option<FadeFrame>,
    /// Activity indicator rotation in radians.
    pub indicator_rotation: f32,
    /// Whether the button is enabled.
    pub enabled: bool,
    /// Whether the current state accepts pointer input.
    pub interaction_enabled: bool,
}

impl ButtonFrame {
    /// Local bounds of the button.
    #[inline]
    pub fn bounds(&self) -> Rect {
        Rect::from_size(self.size)
    }

    /// Opacity of the outgoing appearance; zero when no fade runs.
    #[inline]
    pub fn fade_opacity(&self) -> f32 {
        self.fade.map_or(0.0, |fade| fade.opacity())
    }
}
